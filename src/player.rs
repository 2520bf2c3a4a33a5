//! Players that keep their own copy of the game and pick moves on it

use log::info;
use rand::{seq::SliceRandom, Rng};

use crate::{
    board::{Board, Move},
    error::EngineError,
    movegen::generate_moves,
    piece::Color,
    search::{SearchConfig, SearchEngine, SearchOutcome},
};

/// Something that can take part in a game of Network
///
/// Each player tracks the game on its own board: it records its own moves
/// when it chooses them and is told about the opponent's moves.
pub trait Player {
    /// The colour this player plays
    fn color(&self) -> Color;

    /// Picks a move for this player and records it on the internal board
    fn choose_move(&mut self) -> Result<Move, EngineError>;

    /// Records the opponent's move if it is legal.
    /// Returns false, leaving the board untouched, if it is not.
    fn opponent_move(&mut self, mv: Move) -> bool;

    /// Records a move as this player's own if it is legal, used to set up
    /// positions. Returns false, leaving the board untouched, if it is not.
    fn force_move(&mut self, mv: Move) -> bool;
}

fn record_move(board: &mut Board, mv: Move, color: Color) -> bool {
    if !board.is_legal_move(mv, color) {
        return false;
    }
    board.perform_valid_move(mv, color);
    true
}

/// A player choosing its moves by game tree search
#[derive(Clone, Debug)]
pub struct MachinePlayer {
    board: Board,
    color: Color,
    config: SearchConfig,
    parallel: bool,

    /// The number of nodes searched by this player so far (for diagnostics only)
    pub node_count: usize,
}

impl MachinePlayer {
    /// Creates a player for `color` searching `depth` plies
    pub fn new(color: Color, depth: usize) -> Self {
        Self::with_config(color, SearchConfig::new(depth))
    }

    pub fn with_config(color: Color, config: SearchConfig) -> Self {
        Self {
            board: Board::new(),
            color,
            config,
            parallel: false,
            node_count: 0,
        }
    }

    /// Spreads the search over all available threads
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Player for MachinePlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_move(&mut self) -> Result<Move, EngineError> {
        let depth = self.config.depth_for(&self.board, self.color);
        let mut engine = SearchEngine::new(self.color, depth);

        let outcome = if self.parallel {
            engine.search_parallel(&self.board)?
        } else {
            engine.search(&mut self.board)?
        };
        self.node_count += engine.node_count;

        match outcome {
            SearchOutcome::Best(best) => {
                info!(
                    "{} plays {} (score {}, depth {}, {} nodes)",
                    self.color, best.mv, best.score, depth, engine.node_count
                );
                self.board.perform_valid_move(best.mv, self.color);
                Ok(best.mv)
            }
            SearchOutcome::NoLegalMoves => Err(EngineError::NoLegalMoves(self.color)),
        }
    }

    fn opponent_move(&mut self, mv: Move) -> bool {
        record_move(&mut self.board, mv, self.color.flip())
    }

    fn force_move(&mut self, mv: Move) -> bool {
        record_move(&mut self.board, mv, self.color)
    }
}

/// A player picking uniformly among its legal moves
#[derive(Clone, Debug)]
pub struct RandomPlayer<R> {
    board: Board,
    color: Color,
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(color: Color, rng: R) -> Self {
        Self {
            board: Board::new(),
            color,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_move(&mut self) -> Result<Move, EngineError> {
        let moves = generate_moves(&self.board, self.color);
        let mv = *moves
            .choose(&mut self.rng)
            .ok_or(EngineError::NoLegalMoves(self.color))?;
        self.board.perform_valid_move(mv, self.color);
        Ok(mv)
    }

    fn opponent_move(&mut self, mv: Move) -> bool {
        record_move(&mut self.board, mv, self.color.flip())
    }

    fn force_move(&mut self, mv: Move) -> bool {
        record_move(&mut self.board, mv, self.color)
    }
}
