//! Rule constants for the three-player variant.
//!
//! Board size of the standard layout, the starting setup tables and the
//! movement offsets shared by the generators.

use crate::game_state::chess_types::PieceKind;

pub const STANDARD_BOARD_WIDTH: i32 = 12;
pub const STANDARD_BOARD_HEIGHT: i32 = 8;

/// Largest width or height accepted from a board definition.
pub const MAX_BOARD_SIDE: i32 = 256;

/// Rows occupied by the two gold clusters.
pub const GOLD_ROWS: std::ops::RangeInclusive<i32> = 2..=5;

/// White and black back ranks, columns 0..8.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Gold back file on the west edge, rows 2..=5.
pub const GOLD_WEST_FILE: [PieceKind; 4] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
];

/// Gold back file on the east edge, rows 2..=5.
pub const GOLD_EAST_FILE: [PieceKind; 4] = [
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
