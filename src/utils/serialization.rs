//! JSON interchange for match state.
//!
//! The wire shape is `{"activeColor", "pieces": {id: piece}, "eliminated": [..]}`
//! and round-trips every field of `GameState` exactly.

use crate::errors::TriChessResult;
use crate::game_state::game_state::GameState;

pub fn game_state_to_json(game_state: &GameState) -> TriChessResult<String> {
    Ok(serde_json::to_string(game_state)?)
}

pub fn game_state_from_json(payload: &str) -> TriChessResult<GameState> {
    Ok(serde_json::from_str(payload)?)
}
