//! Destination helpers shared by the per-piece generators.
//!
//! Every helper appends square ids to `out` and never mutates the state.

use crate::game_state::{chess_types::*, game_state::GameState};

/// What stands on an in-bounds square.
pub enum Occupancy<'a> {
    Empty(&'a SquareId),
    Occupied(&'a SquareId, &'a Piece),
}

/// `None` when `coord` is off the board or a hole.
#[inline]
pub fn occupancy_at<'a>(
    topology: &'a BoardTopology,
    game_state: &'a GameState,
    coord: Coord,
) -> Option<Occupancy<'a>> {
    let id = topology.id_at(coord)?;
    Some(match game_state.pieces.get(id) {
        Some(piece) => Occupancy::Occupied(id, piece),
        None => Occupancy::Empty(id),
    })
}

/// Empty square or capturable piece.
#[inline]
pub fn add_if_valid(
    topology: &BoardTopology,
    game_state: &GameState,
    mover: &Piece,
    target: Coord,
    out: &mut Vec<SquareId>,
) {
    match occupancy_at(topology, game_state, target) {
        Some(Occupancy::Empty(id)) => out.push(id.clone()),
        Some(Occupancy::Occupied(id, piece)) if mover.can_capture(piece) => out.push(id.clone()),
        _ => {}
    }
}

/// Empty square only. Returns whether the square was empty.
#[inline]
pub fn add_if_empty(
    topology: &BoardTopology,
    game_state: &GameState,
    target: Coord,
    out: &mut Vec<SquareId>,
) -> bool {
    match occupancy_at(topology, game_state, target) {
        Some(Occupancy::Empty(id)) => {
            out.push(id.clone());
            true
        }
        _ => false,
    }
}

/// Capturable piece only.
#[inline]
pub fn add_if_capture(
    topology: &BoardTopology,
    game_state: &GameState,
    mover: &Piece,
    target: Coord,
    out: &mut Vec<SquareId>,
) {
    if let Some(Occupancy::Occupied(id, piece)) = occupancy_at(topology, game_state, target) {
        if mover.can_capture(piece) {
            out.push(id.clone());
        }
    }
}

pub fn add_offsets(
    topology: &BoardTopology,
    game_state: &GameState,
    mover: &Piece,
    from: Coord,
    offsets: &[(i32, i32)],
    out: &mut Vec<SquareId>,
) {
    for &(dx, dy) in offsets {
        add_if_valid(topology, game_state, mover, from.offset(dx, dy), out);
    }
}

/// Rays stop at the first occupied square; it is included only when it can
/// be captured. Frozen pieces block like any other piece.
pub fn slide(
    topology: &BoardTopology,
    game_state: &GameState,
    mover: &Piece,
    from: Coord,
    directions: &[(i32, i32)],
    out: &mut Vec<SquareId>,
) {
    for &(dx, dy) in directions {
        let mut current = from.offset(dx, dy);
        while let Some(occupancy) = occupancy_at(topology, game_state, current) {
            match occupancy {
                Occupancy::Empty(id) => out.push(id.clone()),
                Occupancy::Occupied(id, piece) => {
                    if mover.can_capture(piece) {
                        out.push(id.clone());
                    }
                    break;
                }
            }
            current = current.offset(dx, dy);
        }
    }
}
