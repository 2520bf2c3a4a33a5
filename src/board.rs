//! The game board, moves, and the rules deciding where a piece may go

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::{
    error::EngineError,
    piece::{Color, Piece, PieceStore},
    BOARD_SIZE, END_INDEX,
};

/// The eight compass directions a ray can be cast in.
/// `Up` is towards `y == 0`, `Right` is towards `x == 7`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::Down => (0, 1),
            Direction::DownLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// The adjacent cell in this direction, or `None` if it is off the board
    pub fn step(self, x: usize, y: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.delta();
        let (nx, ny) = (x as isize + dx, y as isize + dy);
        if 0 <= nx && nx < BOARD_SIZE as isize && 0 <= ny && ny < BOARD_SIZE as isize {
            Some((nx as usize, ny as usize))
        } else {
            None
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MoveKind {
    Add,
    Step,
    Quit,
}

/// A single move. `(x1, y1)` is always the destination; a step also
/// carries its source cell in `(x2, y2)`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Move {
    Add { x: usize, y: usize },
    Step { x1: usize, y1: usize, x2: usize, y2: usize },
    Quit,
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Add { .. } => MoveKind::Add,
            Move::Step { .. } => MoveKind::Step,
            Move::Quit => MoveKind::Quit,
        }
    }

    pub fn destination(&self) -> Option<(usize, usize)> {
        match *self {
            Move::Add { x, y } => Some((x, y)),
            Move::Step { x1, y1, .. } => Some((x1, y1)),
            Move::Quit => None,
        }
    }

    pub fn source(&self) -> Option<(usize, usize)> {
        match *self {
            Move::Step { x2, y2, .. } => Some((x2, y2)),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Add { x, y } => write!(f, "add {} {}", x, y),
            Move::Step { x1, y1, x2, y2 } => write!(f, "step {} {} {} {}", x1, y1, x2, y2),
            Move::Quit => write!(f, "quit"),
        }
    }
}

fn parse_coordinate(token: &str) -> Option<usize> {
    token.parse::<usize>().ok().filter(|&value| value < BOARD_SIZE)
}

fn parse_tokens(tokens: &[&str]) -> Option<Move> {
    match tokens {
        [kind] if kind.eq_ignore_ascii_case("quit") => Some(Move::Quit),
        [kind, x, y] if kind.eq_ignore_ascii_case("add") => Some(Move::Add {
            x: parse_coordinate(x)?,
            y: parse_coordinate(y)?,
        }),
        [kind, x1, y1, x2, y2] if kind.eq_ignore_ascii_case("step") => Some(Move::Step {
            x1: parse_coordinate(x1)?,
            y1: parse_coordinate(y1)?,
            x2: parse_coordinate(x2)?,
            y2: parse_coordinate(y2)?,
        }),
        // bare coordinates are a placement
        [x, y] => Some(Move::Add {
            x: parse_coordinate(x)?,
            y: parse_coordinate(y)?,
        }),
        _ => None,
    }
}

impl FromStr for Move {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        parse_tokens(&tokens).ok_or_else(|| EngineError::MalformedMove(s.trim().to_string()))
    }
}

// which piece in the `PieceStore` a cell holds
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct Slot {
    color: Color,
    index: usize,
}

/// The 8x8 grid of pieces
///
/// # Mutation
/// The board only changes through [`perform_valid_move`] and
/// [`undo_move`], which must be paired in last-in first-out order.
/// [`apply`] wraps the pair in a guard that undoes the move when dropped.
///
/// [`perform_valid_move`]: #method.perform_valid_move
/// [`undo_move`]: #method.undo_move
/// [`apply`]: #method.apply
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Board {
    // indexed [x][y]
    cells: [[Option<Slot>; BOARD_SIZE]; BOARD_SIZE],
    store: PieceStore,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_board(x: usize, y: usize) -> bool {
        x < BOARD_SIZE && y < BOARD_SIZE
    }

    pub fn is_corner(x: usize, y: usize) -> bool {
        (x == 0 || x == END_INDEX) && (y == 0 || y == END_INDEX)
    }

    fn slot(&self, x: usize, y: usize) -> Option<Slot> {
        *self.cells.get(x)?.get(y)?
    }

    pub fn piece_at(&self, x: usize, y: usize) -> Option<&Piece> {
        let slot = self.slot(x, y)?;
        self.store.get(slot.color, slot.index)
    }

    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        self.slot(x, y).map(|slot| slot.color)
    }

    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        self.slot(x, y).is_none()
    }

    pub fn store(&self) -> &PieceStore {
        &self.store
    }

    /// The live pieces of `color`, in placement order
    pub fn pieces(&self, color: Color) -> &[Piece] {
        self.store.pieces(color)
    }

    pub fn num_pieces(&self, color: Color) -> usize {
        self.store.count(color)
    }

    /// True while `color` may still place new pieces
    pub fn has_pieces_left(&self, color: Color) -> bool {
        self.store.has_pieces_left(color)
    }

    fn neighbors(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| direction.step(x, y))
    }

    /// Whether a `color` piece on `(x, y)` would form a group of three or
    /// more adjacent pieces. `lifted` is a cell to treat as empty.
    fn forms_cluster(&self, x: usize, y: usize, color: Color, lifted: Option<(usize, usize)>) -> bool {
        let is_friend = |cell: (usize, usize)| {
            Some(cell) != lifted && cell != (x, y) && self.color_at(cell.0, cell.1) == Some(color)
        };

        let mut friends = Self::neighbors(x, y).filter(|&cell| is_friend(cell));
        match (friends.next(), friends.next()) {
            (None, _) => false,
            (Some(_), Some(_)) => true,
            (Some((fx, fy)), None) => Self::neighbors(fx, fy).any(&is_friend),
        }
    }

    /// Checks the placement rules for the destination of `mv`
    ///
    /// The destination must be on the board, empty, not a corner, not in the
    /// opponent's goal and must not form a cluster. A step's source cell is
    /// treated as empty and must hold one of `color`'s pieces.
    ///
    /// Whether `color` is allowed to add or step at all is checked by
    /// [`is_legal_move`](#method.is_legal_move).
    pub fn is_valid_move(&self, mv: Move, color: Color) -> bool {
        let (x, y, lifted) = match mv {
            Move::Quit => return true,
            Move::Add { x, y } => (x, y, None),
            Move::Step { x1, y1, x2, y2 } => {
                if self.color_at(x2, y2) != Some(color) {
                    return false;
                }
                (x1, y1, Some((x2, y2)))
            }
        };

        if !Self::on_board(x, y) || Self::is_corner(x, y) {
            return false;
        }
        // piece already there
        if !self.is_empty(x, y) {
            return false;
        }
        if color.flip().in_goal(x, y) {
            return false;
        }
        !self.forms_cluster(x, y, color, lifted)
    }

    /// [`is_valid_move`](#method.is_valid_move) plus the placement phase:
    /// adds are only allowed while pieces remain, steps only afterwards
    pub fn is_legal_move(&self, mv: Move, color: Color) -> bool {
        let phase_allows = match mv.kind() {
            MoveKind::Add => self.has_pieces_left(color),
            MoveKind::Step => !self.has_pieces_left(color),
            MoveKind::Quit => true,
        };
        phase_allows && self.is_valid_move(mv, color)
    }

    /// Plays a move the caller has already validated
    pub fn perform_valid_move(&mut self, mv: Move, color: Color) {
        match mv {
            Move::Add { x, y } => {
                let index = self.store.push(Piece::new(color, x, y));
                self.cells[x][y] = Some(Slot { color, index });
            }
            Move::Step { x1, y1, x2, y2 } => self.relocate((x2, y2), (x1, y1)),
            Move::Quit => {}
        }
    }

    /// Reverts `mv`, which should be the most recent move still in effect
    ///
    /// Undoing an older placement out of order removes just that piece and
    /// leaves the rest of the board consistent.
    pub fn undo_move(&mut self, mv: Move) {
        match mv {
            Move::Add { x, y } => {
                if let Some(slot) = self.cells[x][y].take() {
                    if slot.index + 1 != self.store.count(slot.color) {
                        self.shift_slots_down(slot);
                    }
                    self.store.remove(slot.color, slot.index);
                }
            }
            Move::Step { x1, y1, x2, y2 } => self.relocate((x1, y1), (x2, y2)),
            Move::Quit => {}
        }
    }

    // pieces placed after `removed` move down one place in the store
    fn shift_slots_down(&mut self, removed: Slot) {
        for piece in &self.store.pieces(removed.color)[removed.index + 1..] {
            if let Some(slot) = self.cells[piece.x][piece.y].as_mut() {
                slot.index -= 1;
            }
        }
    }

    fn relocate(&mut self, (from_x, from_y): (usize, usize), (to_x, to_y): (usize, usize)) {
        if let Some(slot) = self.cells[from_x][from_y].take() {
            if let Some(piece) = self.store.get_mut(slot.color, slot.index) {
                piece.x = to_x;
                piece.y = to_y;
            }
            self.cells[to_x][to_y] = Some(slot);
        }
    }

    /// Plays a validated move for the lifetime of the returned guard
    pub fn apply(&mut self, mv: Move, color: Color) -> AppliedMove<'_> {
        self.perform_valid_move(mv, color);
        AppliedMove { board: self, mv }
    }

    /// The first piece hit walking from `(x, y)` towards `direction`, if any
    pub fn ray(&self, x: usize, y: usize, direction: Direction) -> Option<&Piece> {
        let mut cell = direction.step(x, y);
        while let Some((cx, cy)) = cell {
            if let Some(piece) = self.piece_at(cx, cy) {
                return Some(piece);
            }
            cell = direction.step(cx, cy);
        }
        None
    }
}

/// A move in effect on a board, undone when this guard is dropped
pub struct AppliedMove<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl AppliedMove<'_> {
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for AppliedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.mv);
    }
}
