//! Match state: side to move, piece placement and eliminated colors.
//!
//! `GameState` is owned by a single match. It only changes through
//! `apply_move` (or the reversible `make_move`/`unmake_move` pair); every read
//! function takes it by shared reference.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::errors::{TriChessErrors, TriChessResult};
use crate::game_state::board_topology::{BoardDefinition, BoardTopology};
use crate::game_state::chess_rules::{BACK_RANK, GOLD_EAST_FILE, GOLD_ROWS, GOLD_WEST_FILE};
use crate::game_state::chess_types::{Color, Coord, Move, Piece, PieceKind, SquareId};
use crate::move_generation::legal_move_apply::{apply_move, MoveOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub active_color: Color,
    /// Occupied squares only.
    pub pieces: BTreeMap<SquareId, Piece>,
    #[serde(default)]
    pub eliminated: BTreeSet<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            active_color: Color::White,
            pieces: BTreeMap::new(),
            eliminated: BTreeSet::new(),
        }
    }
}

impl GameState {
    /// Empty board, white to move.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting setup on `topology`.
    ///
    /// White and black get their back rank and pawn rank on columns 0..8 of
    /// the bottom and top edges; gold gets a back file and a pawn file on
    /// each side edge over rows 2..=5.
    pub fn new_game(topology: &BoardTopology) -> TriChessResult<Self> {
        let mut state = Self::default();
        let top = topology.height() - 1;
        let right = topology.width() - 1;

        for (x, kind) in BACK_RANK.iter().enumerate() {
            let x = x as i32;
            state.place(topology, Coord::new(x, 0), Piece::new(*kind, Color::White))?;
            state.place(topology, Coord::new(x, 1), Piece::new(PieceKind::Pawn, Color::White))?;
            state.place(topology, Coord::new(x, top), Piece::new(*kind, Color::Black))?;
            state.place(topology, Coord::new(x, top - 1), Piece::new(PieceKind::Pawn, Color::Black))?;
        }

        for (i, y) in GOLD_ROWS.enumerate() {
            let gold = |kind| Piece::new(kind, Color::Gold);
            state.place(topology, Coord::new(0, y), gold(GOLD_WEST_FILE[i]))?;
            state.place(topology, Coord::new(1, y), gold(PieceKind::Pawn))?;
            state.place(topology, Coord::new(right, y), gold(GOLD_EAST_FILE[i]))?;
            state.place(topology, Coord::new(right - 1, y), gold(PieceKind::Pawn))?;
        }

        Ok(state)
    }

    fn place(&mut self, topology: &BoardTopology, at: Coord, piece: Piece) -> TriChessResult<()> {
        let id = topology
            .id_at(at)
            .ok_or(TriChessErrors::MissingSetupSquare { x: at.x, y: at.y })?;
        if self.pieces.contains_key(id) {
            return Err(TriChessErrors::OccupiedSetupSquare { x: at.x, y: at.y });
        }
        self.pieces.insert(id.clone(), piece);
        Ok(())
    }

    #[inline]
    pub fn piece_at(&self, square: &SquareId) -> Option<&Piece> {
        self.pieces.get(square)
    }

    #[inline]
    pub fn is_eliminated(&self, color: Color) -> bool {
        self.eliminated.contains(&color)
    }

    /// Colors still in the rotation, in rotation order.
    pub fn surviving_colors(&self) -> Vec<Color> {
        Color::ROTATION
            .into_iter()
            .filter(|c| !self.is_eliminated(*c))
            .collect()
    }

    /// Pieces of `color`, in square id order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (&SquareId, &Piece)> + '_ {
        self.pieces.iter().filter(move |(_, p)| p.color == color)
    }

    /// Pure commit: returns the state after `mv`, leaving `self` untouched.
    pub fn after_move(&self, topology: &BoardTopology, mv: &Move) -> (GameState, MoveOutcome) {
        let mut next = self.clone();
        let outcome = apply_move(topology, &mut next, mv);
        (next, outcome)
    }
}

/// Validates `definition` and returns the standard starting state for it.
pub fn create_initial_state(definition: &BoardDefinition) -> TriChessResult<GameState> {
    let topology = BoardTopology::build(definition)?;
    GameState::new_game(&topology)
}
