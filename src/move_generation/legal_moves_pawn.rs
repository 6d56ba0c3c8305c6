//! Pawn move generation.
//!
//! White advances toward increasing rows, black toward decreasing rows, and
//! gold sideways. A gold pawn keeps the heading it committed to when it first
//! moved; before that it follows the direction recorded on its square. A
//! gold pawn with neither cannot move.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{add_if_capture, add_if_empty};

/// Advance direction of a gold pawn standing on `from`.
#[inline]
pub fn gold_heading(topology: &BoardTopology, pawn: &Piece, from: Coord) -> Option<GoldDirection> {
    pawn.heading.or_else(|| topology.gold_direction_at(from))
}

/// Unit advance vector of `pawn` standing on `from`.
#[inline]
pub fn pawn_advance(topology: &BoardTopology, pawn: &Piece, from: Coord) -> Option<(i32, i32)> {
    match pawn.color {
        Color::White => Some((0, 1)),
        Color::Black => Some((0, -1)),
        Color::Gold => gold_heading(topology, pawn, from).map(|dir| (dir.dx(), 0)),
    }
}

/// True if `pawn` on `from` is on its color's two-step starting line.
#[inline]
pub fn is_pawn_start(topology: &BoardTopology, pawn: &Piece, from: Coord) -> bool {
    match pawn.color {
        Color::White => from.y == 1,
        Color::Black => from.y == topology.height() - 2,
        Color::Gold => match gold_heading(topology, pawn, from) {
            Some(GoldDirection::E) => from.x == 1,
            Some(GoldDirection::W) => from.x == topology.width() - 2,
            None => false,
        },
    }
}

/// True if `to` lies on the promotion edge of a pawn of `color`.
///
/// `direction` is the gold advance direction the pawn moved with. Without
/// one, either side column counts as the edge.
#[inline]
pub fn is_promotion_square(
    topology: &BoardTopology,
    color: Color,
    direction: Option<GoldDirection>,
    to: Coord,
) -> bool {
    match color {
        Color::White => to.y == topology.height() - 1,
        Color::Black => to.y == 0,
        Color::Gold => match direction {
            Some(GoldDirection::E) => to.x == topology.width() - 1,
            Some(GoldDirection::W) => to.x == 0,
            None => to.x == 0 || to.x == topology.width() - 1,
        },
    }
}

/// Appends pawn destinations and returns whether any of them promotes.
pub fn generate_pawn_moves(
    topology: &BoardTopology,
    game_state: &GameState,
    piece: &Piece,
    from: Coord,
    out: &mut Vec<SquareId>,
) -> bool {
    let Some((dx, dy)) = pawn_advance(topology, piece, from) else {
        return false;
    };
    let first = out.len();

    let one_step = from.offset(dx, dy);
    let one_step_empty = add_if_empty(topology, game_state, one_step, out);
    if one_step_empty && is_pawn_start(topology, piece, from) {
        add_if_empty(topology, game_state, one_step.offset(dx, dy), out);
    }

    // Diagonals are perpendicular to the advance axis.
    let (sx, sy) = (dy.abs(), dx.abs());
    add_if_capture(topology, game_state, piece, from.offset(dx - sx, dy - sy), out);
    add_if_capture(topology, game_state, piece, from.offset(dx + sx, dy + sy), out);

    let direction = match piece.color {
        Color::Gold => gold_heading(topology, piece, from),
        _ => None,
    };
    out[first..].iter().any(|id| {
        topology
            .coord_of(id)
            .is_some_and(|to| is_promotion_square(topology, piece.color, direction, to))
    })
}
