//! Crate root module declarations for the three-player chess rule engine.
//!
//! The engine is a pure, synchronous library: board topology, per-piece move
//! generation, check detection, legal move filtering and the move commit
//! (capture, king elimination, promotion, turn rotation). Transport,
//! persistence and presentation belong to the caller.

pub mod errors;

pub mod game_state {
    pub mod board_topology;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
    pub mod raw_moves;
    pub mod turn_sequencer;
}

pub mod utils {
    pub mod random_playout;
    pub mod render_game_state;
    pub mod serialization;
}

pub use game_state::game_state::create_initial_state;
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::is_in_check;
pub use move_generation::legal_move_generator::legal_moves;
