//! Legal move generation

use crate::{
    board::{Board, Move},
    piece::Color,
    BOARD_SIZE,
};

/// Returns a slice ordering the rows/columns from the middle outwards, as
/// central cells are usually the more useful ones
pub const fn scan_order() -> [usize; BOARD_SIZE] {
    let mut order = [0; BOARD_SIZE];
    let mut i = 0;
    while i < BOARD_SIZE {
        order[i] = (BOARD_SIZE / 2) - 1 + (i % 2) * (i / 2 + 1) - (1 - i % 2) * (i / 2);
        i += 1;
    }
    order
}

/// All cells a `color` piece could be put on, with `lifted` treated as empty
fn destinations(board: &Board, color: Color, lifted: Option<(usize, usize)>) -> Vec<(usize, usize)> {
    let order = scan_order();
    let mut cells = Vec::new();
    for &x in order.iter() {
        for &y in order.iter() {
            let valid = match lifted {
                None => board.is_valid_move(Move::Add { x, y }, color),
                Some((x2, y2)) => board.is_valid_move(Move::Step { x1: x, y1: y, x2, y2 }, color),
            };
            if valid {
                cells.push((x, y));
            }
        }
    }
    cells
}

/// Every legal move for `color`
///
/// Until all ten pieces are placed these are additions to empty cells;
/// afterwards they are steps moving one existing piece to another cell.
/// Each piece being stepped is considered lifted off the board, so it never
/// counts against its own destination.
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    if board.has_pieces_left(color) {
        return destinations(board, color, None)
            .into_iter()
            .map(|(x, y)| Move::Add { x, y })
            .collect();
    }

    let mut moves = Vec::new();
    for piece in board.pieces(color) {
        let (x2, y2) = (piece.x, piece.y);
        moves.extend(
            destinations(board, color, Some((x2, y2)))
                .into_iter()
                .map(|(x1, y1)| Move::Step { x1, y1, x2, y2 }),
        );
    }
    moves
}
