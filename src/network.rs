//! Finding connected networks of pieces
//!
//! A network is a sequence of same-coloured pieces, each visible from the
//! previous one along an unobstructed horizontal, vertical or diagonal line.
//! No piece may appear twice, and two consecutive hops may not go in the
//! same direction, so no three consecutive pieces are collinear.

use crate::{
    board::{Board, Direction},
    piece::{Color, Piece},
    MIN_NETWORK_LEN,
};

/// A chain of pieces in the order they were discovered
///
/// Chains borrow their pieces from the board they were found on.
#[derive(Clone, Debug)]
pub struct Chain<'a> {
    color: Color,
    pieces: Vec<&'a Piece>,
}

impl<'a> Chain<'a> {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            pieces: Vec::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn pieces(&self) -> &[&'a Piece] {
        &self.pieces
    }

    pub fn first(&self) -> Option<&'a Piece> {
        self.pieces.first().copied()
    }

    pub fn last(&self) -> Option<&'a Piece> {
        self.pieces.last().copied()
    }

    /// Whether this exact piece (not merely an equal one) is in the chain
    pub fn contains(&self, piece: &Piece) -> bool {
        self.pieces.iter().any(|&p| std::ptr::eq(p, piece))
    }

    /// The chain's cells, in order
    pub fn coordinates(&self) -> Vec<(usize, usize)> {
        self.pieces.iter().map(|piece| (piece.x, piece.y)).collect()
    }

    /// Whether this chain starts and ends in opposite goals with enough pieces to win
    pub fn is_winning(&self) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => {
                self.len() >= MIN_NETWORK_LEN
                    && self.color.in_start_goal(first.x, first.y)
                    && self.color.in_end_goal(last.x, last.y)
            }
            _ => false,
        }
    }

    fn push(&mut self, piece: &'a Piece) {
        debug_assert!(!self.contains(piece));
        self.pieces.push(piece);
    }
}

struct NetworkSearch<'a> {
    board: &'a Board,
    color: Color,
    stop_at_first: bool,
    found: Vec<Chain<'a>>,
}

impl<'a> NetworkSearch<'a> {
    fn new(board: &'a Board, color: Color, stop_at_first: bool) -> Self {
        Self {
            board,
            color,
            stop_at_first,
            found: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Chain<'a>> {
        let board = self.board;
        let color = self.color;
        let roots = board
            .pieces(color)
            .iter()
            .filter(|piece| color.in_start_goal(piece.x, piece.y));

        for root in roots {
            let mut chain = Chain::new(color);
            chain.push(root);
            if self.extend(chain, None) {
                break;
            }
        }
        self.found
    }

    /// Depth-first extension of `chain` from its last piece.
    /// Returns true once the search should stop altogether.
    fn extend(&mut self, chain: Chain<'a>, previous: Option<Direction>) -> bool {
        let current = match chain.last() {
            Some(piece) => piece,
            None => return false,
        };

        if self.color.in_end_goal(current.x, current.y) && chain.len() >= MIN_NETWORK_LEN {
            self.found.push(chain);
            return self.stop_at_first;
        }

        for &direction in Direction::ALL.iter() {
            // no three in a row
            if Some(direction) == previous {
                continue;
            }
            let next = match self.board.ray(current.x, current.y, direction) {
                Some(piece) => piece,
                None => continue,
            };
            if chain.contains(next) || next.color != self.color {
                continue;
            }

            let mut branch = chain.clone();
            branch.push(next);
            if self.extend(branch, Some(direction)) {
                return true;
            }
        }
        false
    }
}

/// Returns every completed network of `color` on the board
///
/// Networks are grown from pieces in the colour's starting goal and are
/// complete once they reach the opposite goal with at least
/// [`MIN_NETWORK_LEN`](../constant.MIN_NETWORK_LEN.html) pieces. Each distinct
/// path is reported, so the same set of pieces may appear more than once in
/// a different order.
pub fn find_networks(board: &Board, color: Color) -> Vec<Chain<'_>> {
    NetworkSearch::new(board, color, false).run()
}

/// Whether `color` has at least one completed network
pub fn has_network(board: &Board, color: Color) -> bool {
    !NetworkSearch::new(board, color, true).run().is_empty()
}
