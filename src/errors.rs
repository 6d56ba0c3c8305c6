//! Errors used throughout the engine.
//!
//! `TriChessErrors` is the single error type of the crate. Board definition
//! problems are configuration errors: they surface once when a topology or an
//! initial state is built and are not recoverable by the engine. Gameplay
//! functions do not fail; illegal input is rejected by omission from the
//! legal move set, and only the validating commit reports `IllegalMove`.

use thiserror::Error;

use crate::game_state::chess_types::{Move, SquareId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriChessErrors {
    /// Board width or height is not in `1..=MAX_BOARD_SIDE`.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidBoardDimensions { width: i32, height: i32 },

    /// Two square definitions share the same id.
    #[error("duplicate square id `{0}`")]
    DuplicateSquareId(String),

    /// A square lies outside the declared `width x height` rectangle.
    #[error("square `{id}` at ({x},{y}) is outside the board")]
    CoordinateOutOfRange { id: String, x: i32, y: i32 },

    /// Two different ids were given the same coordinate.
    #[error("square `{id}` reuses coordinate ({x},{y})")]
    DuplicateCoordinate { id: String, x: i32, y: i32 },

    /// The standard setup needs a square the board does not define.
    #[error("board has no square at ({x},{y}) required by the initial setup")]
    MissingSetupSquare { x: i32, y: i32 },

    /// Two parts of the initial setup land on the same square, as happens on
    /// boards too small for the three starting clusters.
    #[error("initial setup places two pieces at ({x},{y})")]
    OccupiedSetupSquare { x: i32, y: i32 },

    #[error("unknown square `{0}`")]
    UnknownSquare(SquareId),

    /// Move rejected by the validating commit.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl TriChessErrors {
    /// True for malformed board definitions.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            TriChessErrors::InvalidBoardDimensions { .. }
                | TriChessErrors::DuplicateSquareId(_)
                | TriChessErrors::CoordinateOutOfRange { .. }
                | TriChessErrors::DuplicateCoordinate { .. }
                | TriChessErrors::MissingSetupSquare { .. }
                | TriChessErrors::OccupiedSetupSquare { .. }
        )
    }
}

impl From<serde_json::Error> for TriChessErrors {
    fn from(value: serde_json::Error) -> Self {
        TriChessErrors::Serialization(value.to_string())
    }
}

pub type TriChessResult<T> = Result<T, TriChessErrors>;
