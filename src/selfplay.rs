//! Playing complete games between two players

use log::{debug, warn};

use crate::{
    board::{Board, Move},
    error::EngineError,
    evaluator::winner,
    piece::Color,
    player::Player,
};

/// The default number of plies before a game is called a draw
pub const DEFAULT_MAX_PLIES: usize = 200;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameResult {
    Win(Color),
    Draw,
}

/// A finished game
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub result: GameResult,
    /// The final position
    pub board: Board,
}

/// Plays a game between `white` and `black` until one of them completes a
/// network, quits or cannot move, or `max_plies` moves have been played
///
/// Every move is checked on a separate referee board before the other
/// player is told about it.
pub fn play_game<'a>(
    white: &'a mut dyn Player,
    black: &'a mut dyn Player,
    max_plies: usize,
) -> Result<GameRecord, EngineError> {
    debug_assert!(white.color() == Color::White && black.color() == Color::Black);

    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut side = Color::White;

    let result = loop {
        if moves.len() >= max_plies {
            warn!("no winner after {} plies, calling the game a draw", max_plies);
            break GameResult::Draw;
        }

        let (mover, other) = match side {
            Color::White => (&mut *white, &mut *black),
            Color::Black => (&mut *black, &mut *white),
        };

        let mv = match mover.choose_move() {
            Ok(Move::Quit) | Err(EngineError::NoLegalMoves(_)) => {
                debug!("{} cannot continue", side);
                break GameResult::Win(side.flip());
            }
            Ok(mv) => mv,
            Err(err) => return Err(err),
        };

        if !board.is_legal_move(mv, side) || !other.opponent_move(mv) {
            return Err(EngineError::IllegalMove { color: side, mv });
        }
        board.perform_valid_move(mv, side);
        moves.push(mv);

        if let Some(color) = winner(&board, side) {
            break GameResult::Win(color);
        }
        side = side.flip();
    };

    Ok(GameRecord {
        moves,
        result,
        board,
    })
}
