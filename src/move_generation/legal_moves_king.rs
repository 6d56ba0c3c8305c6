//! King move generation. One step in any of the eight directions; there is
//! no castling in this variant.

use crate::game_state::chess_rules::QUEEN_DIRECTIONS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::add_offsets;

pub fn generate_king_moves(
    topology: &BoardTopology,
    game_state: &GameState,
    piece: &Piece,
    from: Coord,
    out: &mut Vec<SquareId>,
) {
    add_offsets(topology, game_state, piece, from, &QUEEN_DIRECTIONS, out);
}
