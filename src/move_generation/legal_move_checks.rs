//! Check detection: which opponent pieces attack a color's king.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::raw_moves::raw_moves;

/// Square of the king of `color`, `None` once it has been captured.
#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<&SquareId> {
    game_state
        .pieces
        .iter()
        .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
        .map(|(sq, _)| sq)
}

/// Non-frozen pieces of colors other than `defender` whose raw moves reach
/// `square`.
pub fn attackers_to_square<'a>(
    topology: &'a BoardTopology,
    game_state: &'a GameState,
    square: &'a SquareId,
    defender: Color,
) -> impl Iterator<Item = (&'a SquareId, &'a Piece)> + 'a {
    game_state
        .pieces
        .iter()
        .filter(move |(_, p)| p.color != defender && !p.frozen)
        .filter(move |(from, _)| raw_moves(topology, game_state, from).contains(square))
}

/// True if the king of `color` is attacked by either opponent.
pub fn is_in_check(topology: &BoardTopology, game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    attackers_to_square(topology, game_state, king_sq, color)
        .next()
        .is_some()
}

/// Surviving colors whose king is currently attacked, in rotation order.
pub fn checked_colors(topology: &BoardTopology, game_state: &GameState) -> Vec<Color> {
    Color::ROTATION
        .into_iter()
        .filter(|c| !game_state.is_eliminated(*c))
        .filter(|c| is_in_check(topology, game_state, *c))
        .collect()
}
