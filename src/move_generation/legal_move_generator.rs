//! Legal move filtering.
//!
//! Raw moves are narrowed to those that do not leave the mover's own king
//! attacked. Leaving either opponent's king in check is allowed.
//!
//! `LegalMoveGenerator` simulates each candidate on a full copy of the
//! state. `FastLegalMoveGenerator` reuses one scratch copy with
//! `make_move`/`unmake_move` and yields identical results.

use crate::errors::{TriChessErrors, TriChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, make_move, unmake_move, MoveOutcome};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::move_generation::raw_moves::raw_moves;

pub struct LegalMoveGenerator;
pub struct FastLegalMoveGenerator;

/// Piece on `from` if it may move now: present, not frozen, and of the
/// color to move.
fn movable_piece<'a>(game_state: &'a GameState, from: &SquareId) -> Option<&'a Piece> {
    let piece = game_state.piece_at(from)?;
    if piece.frozen || piece.color != game_state.active_color {
        return None;
    }
    if game_state.is_eliminated(piece.color) {
        return None;
    }
    Some(piece)
}

impl MoveGenerator for LegalMoveGenerator {
    fn legal_moves(
        &self,
        topology: &BoardTopology,
        game_state: &GameState,
        from: &SquareId,
    ) -> Vec<SquareId> {
        let Some(piece) = movable_piece(game_state, from) else {
            return Vec::new();
        };
        let mover = piece.color;

        raw_moves(topology, game_state, from)
            .destinations
            .into_iter()
            .filter(|to| {
                let mut copy = game_state.clone();
                apply_move(topology, &mut copy, &Move::new(from.clone(), to.clone()));
                !is_in_check(topology, &copy, mover)
            })
            .collect()
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn legal_moves(
        &self,
        topology: &BoardTopology,
        game_state: &GameState,
        from: &SquareId,
    ) -> Vec<SquareId> {
        let Some(piece) = movable_piece(game_state, from) else {
            return Vec::new();
        };
        let mover = piece.color;
        let candidates = raw_moves(topology, game_state, from).destinations;
        if candidates.is_empty() {
            return candidates;
        }

        let mut scratch = game_state.clone();
        let mut legal = Vec::with_capacity(candidates.len());
        for to in candidates {
            let mv = Move::new(from.clone(), to);
            let Some(undo) = make_move(topology, &mut scratch, &mv) else {
                continue;
            };
            let exposed = is_in_check(topology, &scratch, mover);
            unmake_move(&mut scratch, undo);
            if !exposed {
                legal.push(mv.to);
            }
        }
        legal
    }
}

/// Legal destinations of the piece on `from`, in generation order.
///
/// Empty for an empty or unknown square, a frozen piece, or a piece that is
/// not of the color to move.
pub fn legal_moves(topology: &BoardTopology, game_state: &GameState, from: &SquareId) -> Vec<SquareId> {
    LegalMoveGenerator.legal_moves(topology, game_state, from)
}

/// Every legal move of the side to move.
pub fn all_legal_moves(topology: &BoardTopology, game_state: &GameState) -> Vec<Move> {
    FastLegalMoveGenerator.all_legal_moves(topology, game_state)
}

/// Commits `mv` only if it is legal; otherwise the state is left untouched.
pub fn apply_validated_move(
    topology: &BoardTopology,
    game_state: &mut GameState,
    mv: &Move,
) -> TriChessResult<MoveOutcome> {
    for square in [&mv.from, &mv.to] {
        if topology.coord_of(square).is_none() {
            return Err(TriChessErrors::UnknownSquare(square.clone()));
        }
    }
    if !legal_moves(topology, game_state, &mv.from).contains(&mv.to) {
        return Err(TriChessErrors::IllegalMove(mv.clone()));
    }
    Ok(apply_move(topology, game_state, mv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_topology::BoardDefinition;
    use crate::game_state::game_state::create_initial_state;

    fn topology() -> BoardTopology {
        BoardTopology::standard().expect("standard board should build")
    }

    fn state_with(pieces: &[(&str, PieceKind, Color)]) -> GameState {
        let mut state = GameState::new_empty();
        for (id, kind, color) in pieces {
            state.pieces.insert((*id).into(), Piece::new(*kind, *color));
        }
        state
    }

    #[test]
    fn start_position_has_24_white_moves() {
        let topology = topology();
        let state = create_initial_state(&BoardDefinition::standard()).expect("standard setup");
        let moves = all_legal_moves(&topology, &state);
        assert_eq!(moves.len(), 24);
        assert!(moves.contains(&Move::new("s0_7", "s0_11")));
        assert!(moves.contains(&Move::new("s1_1", "s2_0")));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let topology = topology();
        let state = state_with(&[
            ("s0_4", PieceKind::King, Color::White),
            ("s2_4", PieceKind::Knight, Color::White),
            ("s6_4", PieceKind::Rook, Color::Black),
            ("s7_0", PieceKind::King, Color::Black),
            ("s3_11", PieceKind::King, Color::Gold),
        ]);
        assert!(legal_moves(&topology, &state, &"s2_4".into()).is_empty());
        assert_eq!(legal_moves(&topology, &state, &"s0_4".into()).len(), 5);
    }

    #[test]
    fn leaving_an_opponent_in_check_is_legal() {
        let topology = topology();
        let state = state_with(&[
            ("s0_0", PieceKind::King, Color::White),
            ("s3_3", PieceKind::Rook, Color::White),
            ("s7_3", PieceKind::King, Color::Black),
            ("s3_9", PieceKind::King, Color::Gold),
        ]);
        // s3_4 leaves gold's king attacked along the rank.
        let moves = legal_moves(&topology, &state, &"s3_3".into());
        assert!(moves.contains(&"s3_9".into()));
        assert!(moves.contains(&"s7_3".into()));
        assert!(moves.contains(&"s3_4".into()));
    }

    #[test]
    fn rook_can_legally_capture_a_king() {
        let topology = topology();
        let mut state = state_with(&[
            ("s0_4", PieceKind::Rook, Color::White),
            ("s0_0", PieceKind::King, Color::White),
            ("s7_4", PieceKind::King, Color::Black),
            ("s3_11", PieceKind::King, Color::Gold),
        ]);
        let outcome = apply_validated_move(&topology, &mut state, &Move::new("s0_4", "s7_4"))
            .expect("king capture should be legal");
        assert_eq!(outcome.eliminated, Some(Color::Black));
        assert_eq!(state.active_color, Color::Gold);
    }

    #[test]
    fn no_moves_for_empty_frozen_or_waiting_pieces() {
        let topology = topology();
        let mut state = create_initial_state(&BoardDefinition::standard()).expect("standard setup");
        assert!(legal_moves(&topology, &state, &"s4_4".into()).is_empty());
        assert!(legal_moves(&topology, &state, &"s6_3".into()).is_empty());
        assert!(legal_moves(&topology, &state, &"s3_1".into()).is_empty());

        state.pieces.get_mut("s1_3").expect("pawn at s1_3").frozen = true;
        assert!(legal_moves(&topology, &state, &"s1_3".into()).is_empty());
        assert!(!legal_moves(&topology, &state, &"s1_4".into()).is_empty());
    }

    #[test]
    fn validated_commit_rejects_without_mutation() {
        let topology = topology();
        let mut state = create_initial_state(&BoardDefinition::standard()).expect("standard setup");
        let before = state.clone();

        let illegal = Move::new("s1_4", "s4_4");
        assert_eq!(
            apply_validated_move(&topology, &mut state, &illegal),
            Err(TriChessErrors::IllegalMove(illegal.clone()))
        );
        assert!(matches!(
            apply_validated_move(&topology, &mut state, &Move::new("s1_4", "z9")),
            Err(TriChessErrors::UnknownSquare(_))
        ));
        assert_eq!(state, before);

        let outcome = apply_validated_move(&topology, &mut state, &Move::new("s1_4", "s3_4"))
            .expect("double step should be legal");
        assert_eq!(outcome.next_active, Color::Black);
    }

    #[test]
    fn gold_pawn_crosses_the_board_and_promotes_through_legal_moves() {
        let topology = topology();
        let mut state = state_with(&[
            ("s2_1", PieceKind::Pawn, Color::Gold),
            ("s5_5", PieceKind::King, Color::Gold),
        ]);
        state.eliminated.extend([Color::White, Color::Black]);
        state.active_color = Color::Gold;

        apply_validated_move(&topology, &mut state, &Move::new("s2_1", "s2_3"))
            .expect("double step from the home file");
        for x in 3..10 {
            let from = SquareId::standard(x, 2);
            let to = SquareId::standard(x + 1, 2);
            assert_eq!(legal_moves(&topology, &state, &from), vec![to.clone()]);
            let outcome = apply_validated_move(&topology, &mut state, &Move { from, to })
                .expect("single step through the center");
            assert!(!outcome.promoted);
        }

        // s2_10 records a westward direction; the pawn keeps heading east.
        let last = SquareId::from("s2_10");
        let raw = raw_moves(&topology, &state, &last);
        assert!(raw.promotes);
        assert_eq!(raw.destinations, vec![SquareId::from("s2_11")]);

        let outcome = apply_validated_move(&topology, &mut state, &Move::new("s2_10", "s2_11"))
            .expect("step onto the far column");
        assert!(outcome.promoted);
        assert_eq!(
            state.piece_at(&"s2_11".into()),
            Some(&Piece::new(PieceKind::Queen, Color::Gold))
        );
    }

    #[test]
    fn fast_generator_matches_copying_generator() {
        let topology = topology();
        let mut state = create_initial_state(&BoardDefinition::standard()).expect("standard setup");
        for mv in [
            Move::new("s1_4", "s3_4"),
            Move::new("s6_3", "s4_3"),
            Move::new("s3_1", "s3_3"),
            Move::new("s3_4", "s4_3"),
        ] {
            apply_validated_move(&topology, &mut state, &mv).expect("scripted move should be legal");
            for from in state.pieces.keys() {
                assert_eq!(
                    LegalMoveGenerator.legal_moves(&topology, &state, from),
                    FastLegalMoveGenerator.legal_moves(&topology, &state, from),
                    "generators disagree on {from}"
                );
            }
        }
    }
}
