//! Game tree search for choosing moves

use log::debug;
use rayon::prelude::*;

use crate::{
    board::{Board, Move},
    error::EngineError,
    evaluator::{evaluate, is_terminal, terminal_score, MY_WIN, OPP_WIN},
    movegen::generate_moves,
    piece::Color,
};

/// The default number of plies searched
pub const DEFAULT_SEARCH_DEPTH: usize = 3;

/// Plies dropped from the search once a player starts relocating pieces
pub const STEP_DEPTH_CUTBACK: usize = 1;

/// Search depth settings
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchConfig {
    /// Plies searched while the player is still placing pieces
    pub depth: usize,
    /// Plies dropped once the player has placed all of its pieces
    pub step_depth_cutback: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            step_depth_cutback: STEP_DEPTH_CUTBACK,
        }
    }
}

impl SearchConfig {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// The depth to search for `color` on `board`, never less than one ply
    ///
    /// Relocation multiplies the branching factor by the number of pieces,
    /// so the depth is cut back once `color` has no placements left.
    pub fn depth_for(&self, board: &Board, color: Color) -> usize {
        let depth = if board.has_pieces_left(color) {
            self.depth
        } else {
            self.depth.saturating_sub(self.step_depth_cutback)
        };
        depth.max(1)
    }
}

/// A move together with the score the search gave it
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ScoredMove {
    pub score: i32,
    pub mv: Move,
}

/// The result of a top-level search
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SearchOutcome {
    Best(ScoredMove),
    NoLegalMoves,
}

/// Prefers quicker wins and slower losses by shrinking a win/loss score by
/// the number of plies it took to reach
fn scale(score: i32, plies: usize) -> i32 {
    if is_terminal(score) {
        score / plies.max(1) as i32
    } else {
        score
    }
}

/// A minimax searcher with alpha-beta pruning
///
/// # Notes
/// The board is searched in place: every move tried is applied through
/// [`Board::apply`](../board/struct.Board.html#method.apply) and undone
/// before the next one, so the board is unchanged when a search returns.
///
/// # Position Scoring
/// Leaves are scored by [`evaluate`](../evaluator/fn.evaluate.html) from the
/// searching player's point of view. Win and loss scores are divided by
/// the number of plies needed to reach them.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    color: Color,
    depth: usize,

    /// The number of nodes searched by this `SearchEngine` so far (for diagnostics only)
    pub node_count: usize,
}

impl SearchEngine {
    /// Creates an engine searching `depth` plies (at least one) for `color`
    pub fn new(color: Color, depth: usize) -> Self {
        Self {
            color,
            depth: depth.max(1),
            node_count: 0,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn check_not_over(&self, board: &Board) -> Result<(), EngineError> {
        match terminal_score(board, self.color) {
            Some(MY_WIN) => Err(EngineError::GameOver { winner: self.color }),
            Some(_) => Err(EngineError::GameOver {
                winner: self.color.flip(),
            }),
            None => Ok(()),
        }
    }

    /// Finds the best move for this engine's colour
    ///
    /// Ties go to the first move generated. The board is left as it was.
    pub fn search(&mut self, board: &mut Board) -> Result<SearchOutcome, EngineError> {
        self.check_not_over(board)?;

        let moves = generate_moves(board, self.color);
        let mut alpha = OPP_WIN;
        let beta = MY_WIN;
        let mut best: Option<ScoredMove> = None;

        for mv in moves {
            let score = self.score_root_move(board, mv, alpha, beta);
            if best.map_or(true, |best| score > best.score) {
                best = Some(ScoredMove { score, mv });
            }
            if score > alpha {
                alpha = score;
            }
            // a forced win in one ply can't be beaten
            if alpha >= beta {
                break;
            }
        }

        debug!(
            "searched {} nodes at depth {} for {}: {:?}",
            self.node_count, self.depth, self.color, best
        );
        Ok(best.map_or(SearchOutcome::NoLegalMoves, SearchOutcome::Best))
    }

    /// Finds the best move like [`search`](#method.search), splitting the
    /// root moves across threads. Each thread works on its own copy of the board.
    pub fn search_parallel(&mut self, board: &Board) -> Result<SearchOutcome, EngineError> {
        self.check_not_over(board)?;

        let moves = generate_moves(board, self.color);
        let (color, depth) = (self.color, self.depth);
        let scored: Vec<(ScoredMove, usize)> = moves
            .par_iter()
            .map(|&mv| {
                let mut worker = SearchEngine::new(color, depth);
                let mut board = board.clone();
                let score = worker.score_root_move(&mut board, mv, OPP_WIN, MY_WIN);
                (ScoredMove { score, mv }, worker.node_count)
            })
            .collect();

        let mut best: Option<ScoredMove> = None;
        for (scored_move, nodes) in scored {
            self.node_count += nodes;
            if best.map_or(true, |best| scored_move.score > best.score) {
                best = Some(scored_move);
            }
        }

        debug!(
            "searched {} nodes at depth {} for {} in parallel: {:?}",
            self.node_count, self.depth, self.color, best
        );
        Ok(best.map_or(SearchOutcome::NoLegalMoves, SearchOutcome::Best))
    }

    fn score_root_move(&mut self, board: &mut Board, mv: Move, alpha: i32, beta: i32) -> i32 {
        self.node_count += 1;
        let mut next = board.apply(mv, self.color);
        if self.depth <= 1 {
            scale(evaluate(&next, self.color), 1)
        } else {
            self.alpha_beta(&mut next, self.color.flip(), alpha, beta, 2)
        }
    }

    /// Performs game tree search for `side` to move at ply `depth`
    /// (the root's moves are ply 1)
    ///
    /// Returns the score of the position from this engine's point of view
    fn alpha_beta(&mut self, board: &mut Board, side: Color, mut alpha: i32, mut beta: i32, depth: usize) -> i32 {
        // a network already on the board ends the game
        if let Some(score) = terminal_score(board, self.color) {
            return scale(score, depth - 1);
        }

        let moves = generate_moves(board, side);
        if moves.is_empty() {
            // the side to move has to pass
            return evaluate(board, self.color);
        }

        let maximising = side == self.color;

        // leaf layer: score every move directly
        if depth >= self.depth {
            let mut best = if maximising { OPP_WIN } else { MY_WIN };
            for mv in moves {
                self.node_count += 1;
                let next = board.apply(mv, side);
                let score = scale(evaluate(&next, self.color), depth);
                best = if maximising { best.max(score) } else { best.min(score) };
            }
            return best;
        }

        for mv in moves {
            self.node_count += 1;
            let score = {
                let mut next = board.apply(mv, side);
                self.alpha_beta(&mut next, side.flip(), alpha, beta, depth + 1)
            };
            if maximising {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            // if the window closes, the other player will never allow this position
            if alpha >= beta {
                break;
            }
        }

        if maximising {
            alpha
        } else {
            beta
        }
    }
}
