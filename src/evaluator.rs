//! Static evaluation of board positions

use crate::{
    board::{Board, Direction},
    network::has_network,
    piece::Color,
};

/// Score of a position in which the evaluating player has a network
pub const MY_WIN: i32 = i32::MAX;
/// Score of a position in which the opponent has a network
pub const OPP_WIN: i32 = i32::MIN;

/// Returns the win/loss sentinel if either player has completed a network.
/// A network for `perspective` takes precedence.
pub fn terminal_score(board: &Board, perspective: Color) -> Option<i32> {
    if has_network(board, perspective) {
        Some(MY_WIN)
    } else if has_network(board, perspective.flip()) {
        Some(OPP_WIN)
    } else {
        None
    }
}

/// The colour with a completed network after `mover` has played.
/// The mover's own network counts first.
pub fn winner(board: &Board, mover: Color) -> Option<Color> {
    [mover, mover.flip()]
        .iter()
        .copied()
        .find(|&color| has_network(board, color))
}

/// Whether `score` is one of the win/loss sentinels
pub fn is_terminal(score: i32) -> bool {
    score == MY_WIN || score == OPP_WIN
}

/// How many of the eight rays from each of `color`'s pieces hit another
/// piece of either colour, summed over all of its pieces
pub fn connectivity(board: &Board, color: Color) -> i32 {
    board
        .pieces(color)
        .iter()
        .map(|piece| {
            Direction::ALL
                .iter()
                .filter(|&&direction| board.ray(piece.x, piece.y, direction).is_some())
                .count() as i32
        })
        .sum()
}

/// Scores the board from `perspective`'s point of view
///
/// Completed networks score [`MY_WIN`] or [`OPP_WIN`]; otherwise the score is
/// the difference in [`connectivity`] between the two players.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    terminal_score(board, perspective).unwrap_or_else(|| {
        connectivity(board, perspective) - connectivity(board, perspective.flip())
    })
}
