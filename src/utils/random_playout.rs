//! Seeded random self-play.
//!
//! Plays uniformly random legal moves for whichever color is to move. Used
//! for randomized rule checks and as a stress workload; the same seed always
//! produces the same game.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutEnd {
    /// Only one color is left in the rotation.
    LastColorStanding(Color),
    /// The side to move had no legal move.
    NoLegalMoves(Color),
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct PlayoutSummary {
    pub plies: usize,
    pub history: Vec<Move>,
    /// Colors in the order they lost their king.
    pub elimination_order: Vec<Color>,
    pub end: PlayoutEnd,
    pub final_state: GameState,
}

pub fn play_random_game(
    topology: &BoardTopology,
    initial_state: &GameState,
    max_plies: usize,
    seed: u64,
) -> PlayoutSummary {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = initial_state.clone();
    let mut history = Vec::new();
    let mut elimination_order = Vec::new();

    let end = loop {
        let survivors = state.surviving_colors();
        if survivors.len() == 1 {
            break PlayoutEnd::LastColorStanding(survivors[0]);
        }
        if history.len() >= max_plies {
            break PlayoutEnd::MaxPlies;
        }

        let moves = all_legal_moves(topology, &state);
        let Some(picked) = moves.as_slice().choose(&mut rng) else {
            break PlayoutEnd::NoLegalMoves(state.active_color);
        };

        let outcome = apply_move(topology, &mut state, picked);
        if let Some(color) = outcome.eliminated {
            elimination_order.push(color);
        }
        history.push(picked.clone());
    };

    PlayoutSummary {
        plies: history.len(),
        history,
        elimination_order,
        end,
        final_state: state,
    }
}
