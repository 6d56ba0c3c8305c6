//! Move commit: capture, king elimination, promotion and turn advance.
//!
//! `apply_move` trusts its input. Callers validate with the legal move
//! generator first (or use `apply_validated_move`). `make_move` and
//! `unmake_move` perform the same commit reversibly on a scratch state.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_pawn::{gold_heading, is_promotion_square};
use crate::move_generation::turn_sequencer::next_active_color;

/// Effects of a committed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// False when `from` held no piece; the state was left untouched.
    pub applied: bool,
    pub moved: Option<Piece>,
    pub captured: Option<Piece>,
    pub promoted: bool,
    pub eliminated: Option<Color>,
    pub next_active: Color,
}

impl MoveOutcome {
    fn not_applied(game_state: &GameState) -> Self {
        Self {
            applied: false,
            moved: None,
            captured: None,
            promoted: false,
            eliminated: None,
            next_active: game_state.active_color,
        }
    }
}

/// Commits `mv` in place. No-op if `from` is empty.
pub fn apply_move(topology: &BoardTopology, game_state: &mut GameState, mv: &Move) -> MoveOutcome {
    match make_move(topology, game_state, mv) {
        Some(undo) => MoveOutcome {
            applied: true,
            moved: Some(undo.moved_piece),
            captured: undo.captured_piece,
            promoted: game_state
                .piece_at(&mv.to)
                .is_some_and(|p| p.kind != undo.moved_piece.kind),
            eliminated: undo.newly_eliminated,
            next_active: game_state.active_color,
        },
        None => MoveOutcome::not_applied(game_state),
    }
}

/// Commits `mv` and returns what is needed to take it back.
pub fn make_move(
    topology: &BoardTopology,
    game_state: &mut GameState,
    mv: &Move,
) -> Option<UndoState> {
    let moved_piece = game_state.pieces.remove(&mv.from)?;
    let prev_active_color = game_state.active_color;

    let mut placed = moved_piece;
    if moved_piece.kind == PieceKind::Pawn {
        let heading = match moved_piece.color {
            Color::Gold => topology
                .coord_of(&mv.from)
                .and_then(|from| gold_heading(topology, &moved_piece, from)),
            _ => None,
        };
        if promotes_on(topology, &moved_piece, heading, &mv.to) {
            placed.kind = PieceKind::Queen;
            placed.heading = None;
        } else {
            // A gold pawn keeps the direction it left its home file with.
            placed.heading = heading;
        }
    }

    let captured_piece = game_state.pieces.insert(mv.to.clone(), placed);

    // Removing a king from the board ends that color's participation.
    let newly_eliminated = match captured_piece {
        Some(target) if target.kind == PieceKind::King => {
            game_state.eliminated.insert(target.color).then_some(target.color)
        }
        _ => None,
    };

    game_state.active_color = next_active_color(prev_active_color, &game_state.eliminated);

    Some(UndoState {
        mv: mv.clone(),
        moved_piece,
        captured_piece,
        prev_active_color,
        newly_eliminated,
    })
}

/// Restores the state exactly as it was before the matching `make_move`.
pub fn unmake_move(game_state: &mut GameState, undo: UndoState) {
    game_state.active_color = undo.prev_active_color;
    if let Some(color) = undo.newly_eliminated {
        game_state.eliminated.remove(&color);
    }

    match undo.captured_piece {
        Some(captured) => {
            game_state.pieces.insert(undo.mv.to, captured);
        }
        None => {
            game_state.pieces.remove(&undo.mv.to);
        }
    }
    game_state.pieces.insert(undo.mv.from, undo.moved_piece);
}

fn promotes_on(
    topology: &BoardTopology,
    pawn: &Piece,
    heading: Option<GoldDirection>,
    to: &SquareId,
) -> bool {
    topology
        .coord_of(to)
        .is_some_and(|to| is_promotion_square(topology, pawn.color, heading, to))
}
