//! Pieces and the per-colour record of which pieces are on the board

use std::fmt;

use crate::{END_INDEX, PIECE_CAP};

/// The two players. White moves first.
///
/// White's goals are the left and right columns (`x == 0` and `x == 7`),
/// black's are the top and bottom rows (`y == 0` and `y == 7`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the other player
    pub fn flip(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Whether `(x, y)` lies in either of this colour's goal zones
    pub fn in_goal(self, x: usize, y: usize) -> bool {
        self.in_start_goal(x, y) || self.in_end_goal(x, y)
    }

    /// The goal zone networks are grown from
    pub fn in_start_goal(self, x: usize, y: usize) -> bool {
        match self {
            Color::White => x == 0,
            Color::Black => y == 0,
        }
    }

    /// The goal zone a network has to reach
    pub fn in_end_goal(self, x: usize, y: usize) -> bool {
        match self {
            Color::White => x == END_INDEX,
            Color::Black => y == END_INDEX,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// A piece on the board. Its coordinate always matches the cell holding it.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Piece {
    pub color: Color,
    pub x: usize,
    pub y: usize,
}

impl Piece {
    pub fn new(color: Color, x: usize, y: usize) -> Self {
        Self { color, x, y }
    }
}

/// The live pieces of each colour, in placement order
///
/// Pieces are only ever removed by undoing their placement.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct PieceStore {
    pieces: [Vec<Piece>; 2],
}

impl PieceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces[color.index()].len()
    }

    /// True while `color` has not yet placed its full allotment
    pub fn has_pieces_left(&self, color: Color) -> bool {
        self.count(color) < PIECE_CAP
    }

    pub fn pieces(&self, color: Color) -> &[Piece] {
        &self.pieces[color.index()]
    }

    pub(crate) fn get(&self, color: Color, index: usize) -> Option<&Piece> {
        self.pieces[color.index()].get(index)
    }

    pub(crate) fn get_mut(&mut self, color: Color, index: usize) -> Option<&mut Piece> {
        self.pieces[color.index()].get_mut(index)
    }

    /// Adds a piece, returning its index within its colour
    pub(crate) fn push(&mut self, piece: Piece) -> usize {
        let pieces = &mut self.pieces[piece.color.index()];
        pieces.push(piece);
        pieces.len() - 1
    }

    /// Removes the piece at `index`, shifting later pieces down by one
    pub(crate) fn remove(&mut self, color: Color, index: usize) -> Option<Piece> {
        let pieces = &mut self.pieces[color.index()];
        if index < pieces.len() {
            Some(pieces.remove(index))
        } else {
            None
        }
    }
}
