//! Bishop move generation.

use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::slide;

pub fn generate_bishop_moves(
    topology: &BoardTopology,
    game_state: &GameState,
    piece: &Piece,
    from: Coord,
    out: &mut Vec<SquareId>,
) {
    slide(topology, game_state, piece, from, &BISHOP_DIRECTIONS, out);
}
