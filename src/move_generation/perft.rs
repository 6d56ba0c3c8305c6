//! Move-path enumeration for the three-player game.
//!
//! Counts leaf nodes of the legal move tree together with a few per-move
//! statistics. Used to cross-check generators and as a benchmark workload.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::checked_colors;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub eliminations: usize,
    /// Leaf moves after which at least one surviving king is attacked.
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.eliminations += rhs.eliminations;
        self.checks += rhs.checks;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    topology: &BoardTopology,
    game_state: &GameState,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }
    let mut scratch = game_state.clone();
    perft_recurse(generator, topology, &mut scratch, depth)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    topology: &BoardTopology,
    game_state: &mut GameState,
    depth: u8,
) -> PerftCounts {
    let mut total = PerftCounts::default();

    for mv in generator.all_legal_moves(topology, game_state) {
        let Some(undo) = make_move(topology, game_state, &mv) else {
            continue;
        };

        if depth == 1 {
            total.nodes += 1;
            if undo.captured_piece.is_some() {
                total.captures += 1;
            }
            if game_state
                .piece_at(&mv.to)
                .is_some_and(|p| p.kind != undo.moved_piece.kind)
            {
                total.promotions += 1;
            }
            if undo.newly_eliminated.is_some() {
                total.eliminations += 1;
            }
            if !checked_colors(topology, game_state).is_empty() {
                total.checks += 1;
            }
        } else {
            total.merge(perft_recurse(generator, topology, game_state, depth - 1));
        }

        unmake_move(game_state, undo);
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::{FastLegalMoveGenerator, LegalMoveGenerator};

    #[test]
    fn depth_one_matches_move_count() {
        let topology = BoardTopology::standard().expect("standard board should build");
        let state = GameState::new_game(&topology).expect("standard setup");
        let counts = perft(&FastLegalMoveGenerator, &topology, &state, 1);
        assert_eq!(counts.nodes, 24);
        // Three pawn captures and one knight capture hit gold's west cluster.
        assert_eq!(counts.captures, 4);
        assert_eq!(counts.promotions, 0);
        assert_eq!(perft(&FastLegalMoveGenerator, &topology, &state, 0).nodes, 1);
    }

    #[test]
    fn generators_agree_at_depth_two() {
        let topology = BoardTopology::standard().expect("standard board should build");
        let state = GameState::new_game(&topology).expect("standard setup");
        let fast = perft(&FastLegalMoveGenerator, &topology, &state, 2);
        let copying = perft(&LegalMoveGenerator, &topology, &state, 2);
        assert_eq!(fast, copying);
        assert!(fast.nodes > 24);
    }
}
