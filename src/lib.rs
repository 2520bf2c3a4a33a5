//! An automated player for the connection game 'Network'
//!
//! Two players take turns placing (and, once their ten pieces are down,
//! relocating) pieces on an 8x8 board. The first player to connect their
//! two goal edges with a chain of at least six pieces wins.
//!
//! # Basic Usage
//!
//! ```
//! use network_ai::{Color, MachinePlayer, Move, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut player = MachinePlayer::new(Color::White, 1);
//! assert!(player.opponent_move("add 3 0".parse()?));
//!
//! let reply = player.choose_move()?;
//! assert!(reply != Move::Quit);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod piece;

pub mod board;

pub mod network;

pub mod evaluator;

pub mod movegen;

pub mod search;

pub mod player;

pub mod selfplay;


pub use crate::board::{AppliedMove, Board, Direction, Move, MoveKind};
pub use crate::error::EngineError;
pub use crate::evaluator::{evaluate, MY_WIN, OPP_WIN};
pub use crate::movegen::generate_moves;
pub use crate::network::{find_networks, has_network, Chain};
pub use crate::piece::{Color, Piece, PieceStore};
pub use crate::player::{MachinePlayer, Player, RandomPlayer};
pub use crate::search::{ScoredMove, SearchConfig, SearchEngine, SearchOutcome};

/// The width and height of the game board in cells
pub const BOARD_SIZE: usize = 8;

/// Index of the last row/column
pub const END_INDEX: usize = BOARD_SIZE - 1;

/// The number of pieces each player may place before they must start relocating
pub const PIECE_CAP: usize = 10;

/// The minimum number of pieces in a winning network
pub const MIN_NETWORK_LEN: usize = 6;

// a network needs a piece in each goal and at least one between them
const_assert!(MIN_NETWORK_LEN >= 3);
// both players' full allotments must fit outside the corners
const_assert!(2 * PIECE_CAP <= BOARD_SIZE * BOARD_SIZE - 4);
const_assert!(MIN_NETWORK_LEN <= PIECE_CAP);
