use crate::game_state::{chess_types::*, game_state::GameState};

/// Legality oracle for a single origin square.
///
/// Implementations must agree exactly: the same state and origin yield the
/// same destinations in the same order.
pub trait MoveGenerator: Send + Sync {
    fn legal_moves(
        &self,
        topology: &BoardTopology,
        game_state: &GameState,
        from: &SquareId,
    ) -> Vec<SquareId>;

    /// Every legal move of the side to move, grouped by origin square in
    /// square id order.
    fn all_legal_moves(&self, topology: &BoardTopology, game_state: &GameState) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, piece) in game_state.pieces_of(game_state.active_color) {
            if piece.frozen {
                continue;
            }
            for to in self.legal_moves(topology, game_state, from) {
                moves.push(Move {
                    from: from.clone(),
                    to,
                });
            }
        }
        moves
    }
}
