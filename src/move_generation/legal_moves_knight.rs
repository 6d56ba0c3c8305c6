//! Knight move generation.

use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::add_offsets;

pub fn generate_knight_moves(
    topology: &BoardTopology,
    game_state: &GameState,
    piece: &Piece,
    from: Coord,
    out: &mut Vec<SquareId>,
) {
    add_offsets(topology, game_state, piece, from, &KNIGHT_OFFSETS, out);
}
