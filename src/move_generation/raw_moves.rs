//! Pseudo-legal destinations for a single piece.
//!
//! Raw moves ignore self-check; they are the input to the legal filter and
//! also serve as the attack sets used by check detection.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMoves {
    pub destinations: Vec<SquareId>,
    /// Set when a pawn destination lies on the promotion edge.
    pub promotes: bool,
}

impl RawMoves {
    #[inline]
    pub fn contains(&self, square: &SquareId) -> bool {
        self.destinations.contains(square)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

/// Raw destinations of the piece on `from`. Empty for empty, unknown or
/// frozen squares.
pub fn raw_moves(topology: &BoardTopology, game_state: &GameState, from: &SquareId) -> RawMoves {
    let mut out = RawMoves::default();
    let Some(piece) = game_state.piece_at(from) else {
        return out;
    };
    let Some(coord) = topology.coord_of(from) else {
        return out;
    };
    if piece.frozen {
        return out;
    }

    let destinations = &mut out.destinations;
    match piece.kind {
        PieceKind::Pawn => {
            out.promotes = generate_pawn_moves(topology, game_state, piece, coord, destinations);
        }
        PieceKind::Rook => generate_rook_moves(topology, game_state, piece, coord, destinations),
        PieceKind::Knight => generate_knight_moves(topology, game_state, piece, coord, destinations),
        PieceKind::Bishop => generate_bishop_moves(topology, game_state, piece, coord, destinations),
        PieceKind::Queen => generate_queen_moves(topology, game_state, piece, coord, destinations),
        PieceKind::King => generate_king_moves(topology, game_state, piece, coord, destinations),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topology() -> BoardTopology {
        BoardTopology::standard().expect("standard board should build")
    }

    fn ids(list: &[&str]) -> Vec<SquareId> {
        list.iter().map(|s| SquareId::from(*s)).collect()
    }

    #[test]
    fn empty_and_frozen_squares_have_no_moves() {
        let topology = topology();
        let mut state = GameState::new_empty();
        assert!(raw_moves(&topology, &state, &"s3_3".into()).is_empty());

        let mut rook = Piece::new(PieceKind::Rook, Color::White);
        rook.frozen = true;
        state.pieces.insert("s3_3".into(), rook);
        assert!(raw_moves(&topology, &state, &"s3_3".into()).is_empty());
        assert!(raw_moves(&topology, &state, &"nowhere".into()).is_empty());
    }

    #[test]
    fn rook_ray_stops_at_blockers() {
        let topology = topology();
        let mut state = GameState::new_empty();
        state.pieces.insert("s0_0".into(), Piece::new(PieceKind::Rook, Color::White));
        state.pieces.insert("s0_2".into(), Piece::new(PieceKind::Knight, Color::White));
        state.pieces.insert("s3_0".into(), Piece::new(PieceKind::Pawn, Color::Gold));

        let moves = raw_moves(&topology, &state, &"s0_0".into());
        assert_eq!(moves.destinations, ids(&["s0_1", "s1_0", "s2_0", "s3_0"]));
        assert!(!moves.promotes);
    }

    #[test]
    fn frozen_piece_blocks_but_is_not_capturable() {
        let topology = topology();
        let mut state = GameState::new_empty();
        state.pieces.insert("s2_2".into(), Piece::new(PieceKind::Bishop, Color::Black));
        let mut king = Piece::new(PieceKind::King, Color::Gold);
        king.frozen = true;
        state.pieces.insert("s4_4".into(), king);

        let moves = raw_moves(&topology, &state, &"s2_2".into());
        assert!(moves.contains(&"s3_3".into()));
        assert!(!moves.contains(&"s4_4".into()));
        assert!(!moves.contains(&"s5_5".into()));
    }

    #[test]
    fn knight_in_corner_and_center() {
        let topology = topology();
        let mut state = GameState::new_empty();
        state.pieces.insert("s0_0".into(), Piece::new(PieceKind::Knight, Color::Black));
        state.pieces.insert("s4_5".into(), Piece::new(PieceKind::Knight, Color::Black));
        state.pieces.insert("s6_6".into(), Piece::new(PieceKind::Pawn, Color::Black));

        let corner = raw_moves(&topology, &state, &"s0_0".into());
        assert_eq!(corner.destinations, ids(&["s2_1", "s1_2"]));

        let center = raw_moves(&topology, &state, &"s4_5".into());
        assert_eq!(center.destinations.len(), 7);
        assert!(!center.contains(&"s6_6".into()));
    }

    #[test]
    fn queen_covers_rook_and_bishop_lines() {
        let topology = topology();
        let mut state = GameState::new_empty();
        state.pieces.insert("s3_5".into(), Piece::new(PieceKind::Queen, Color::Gold));
        let queen = raw_moves(&topology, &state, &"s3_5".into());

        state.pieces.insert("s3_5".into(), Piece::new(PieceKind::Rook, Color::Gold));
        let rook = raw_moves(&topology, &state, &"s3_5".into());
        state.pieces.insert("s3_5".into(), Piece::new(PieceKind::Bishop, Color::Gold));
        let bishop = raw_moves(&topology, &state, &"s3_5".into());

        assert_eq!(rook.destinations.len(), 11 + 7);
        assert_eq!(
            queen.destinations.len(),
            rook.destinations.len() + bishop.destinations.len()
        );
    }

    #[test]
    fn king_has_eight_neighbours_in_open_board() {
        let topology = topology();
        let mut state = GameState::new_empty();
        state.pieces.insert("s4_4".into(), Piece::new(PieceKind::King, Color::White));
        state.pieces.insert("s5_5".into(), Piece::new(PieceKind::Pawn, Color::White));
        state.pieces.insert("s3_3".into(), Piece::new(PieceKind::Pawn, Color::Black));

        let moves = raw_moves(&topology, &state, &"s4_4".into());
        assert_eq!(moves.destinations.len(), 7);
        assert!(moves.contains(&"s3_3".into()));
    }
}
