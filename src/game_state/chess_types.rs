//! Core value types shared by topology, move generation and state handling.
//!
//! Colors and piece kinds are closed enums so that every rule that depends on
//! them (gold pawn advance in particular) is checked for exhaustiveness.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::game_state::board_topology::BoardTopology;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// One of the three competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
    Gold,
}

impl Color {
    /// Fixed turn rotation.
    pub const ROTATION: [Color; 3] = [Color::White, Color::Black, Color::Gold];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
            Color::Gold => 2,
        }
    }

    /// Next color in the rotation, ignoring eliminations.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::Gold,
            Color::Gold => Color::White,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
            Color::Gold => 'g',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Gold => "gold",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A piece on the board.
///
/// `frozen` pieces are inert: they generate no moves, cannot be captured and
/// are ignored by attack scans, but still block sliding rays.
///
/// `heading` is the direction a gold pawn committed to on its first move. It
/// takes precedence over the direction recorded on the pawn's square, so a
/// pawn that has left its home file keeps advancing the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    #[serde(default, skip_serializing_if = "is_false")]
    pub frozen: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<GoldDirection>,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            frozen: false,
            heading: None,
        }
    }

    /// True if `self` may capture `target`.
    #[inline]
    pub fn can_capture(&self, target: &Piece) -> bool {
        target.color != self.color && !target.frozen
    }
}

/// Home region a square belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    White,
    Black,
    Gold,
    Center,
}

/// Horizontal advance direction used by gold pawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoldDirection {
    E,
    W,
}

impl GoldDirection {
    /// Column step for a pawn advancing in this direction.
    #[inline]
    pub const fn dx(self) -> i32 {
        match self {
            GoldDirection::E => 1,
            GoldDirection::W => -1,
        }
    }
}

/// Integer board coordinate, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Stable external square identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareId(String);

impl SquareId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id used by the standard board for the square at column `x`, row `y`.
    pub fn standard(x: i32, y: i32) -> Self {
        Self(format!("s{y}_{x}"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SquareId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SquareId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for SquareId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SquareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A proposed or committed move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: SquareId,
    pub to: SquareId,
}

impl Move {
    pub fn new(from: impl Into<SquareId>, to: impl Into<SquareId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
