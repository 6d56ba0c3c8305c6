use crate::game_state::chess_types::*;

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    /// Piece as it stood on `mv.from`, before any promotion.
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,

    pub prev_active_color: Color,
    /// Color added to the eliminated set by this move, if any.
    pub newly_eliminated: Option<Color>,
}
