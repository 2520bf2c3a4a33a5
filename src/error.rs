//! Errors raised by the engine and its players

use crate::{board::Move, piece::Color};

/// Errors that can occur while parsing moves or choosing them
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Text that does not describe a move on the board
    #[error("could not parse '{0}' as a valid move")]
    MalformedMove(String),

    /// Search was asked for a move in a finished game
    #[error("game is already over, {winner} has completed a network")]
    GameOver { winner: Color },

    /// The side to move cannot place or relocate any piece
    #[error("{0} has no legal moves")]
    NoLegalMoves(Color),

    /// A player produced a move the referee board rejects
    #[error("{color} attempted the illegal move '{mv}'")]
    IllegalMove { color: Color, mv: Move },
}
