//! Static board description and the queryable topology built from it.
//!
//! A `BoardDefinition` is external configuration (usually JSON). It is turned
//! into a `BoardTopology` exactly once; the topology is immutable afterwards
//! and can be shared by every match played on that board.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{TriChessErrors, TriChessResult};
use crate::game_state::chess_rules::{
    GOLD_ROWS, MAX_BOARD_SIDE, STANDARD_BOARD_HEIGHT, STANDARD_BOARD_WIDTH,
};
use crate::game_state::chess_types::{Coord, GoldDirection, SquareId, Zone};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquareDefinition {
    pub id: SquareId,
    pub x: i32,
    pub y: i32,
    pub zone: Zone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gold_direction: Option<GoldDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDefinition {
    pub width: i32,
    pub height: i32,
    pub squares: Vec<SquareDefinition>,
}

impl BoardDefinition {
    /// The 12x8 three-player board.
    ///
    /// Rows 0-1 are white's zone, rows 6-7 black's. Gold owns columns 0-1
    /// (advancing east) and 10-11 (advancing west) of rows 2-5.
    pub fn standard() -> Self {
        let width = STANDARD_BOARD_WIDTH;
        let height = STANDARD_BOARD_HEIGHT;
        let mut squares = Vec::with_capacity((STANDARD_BOARD_WIDTH * STANDARD_BOARD_HEIGHT) as usize);

        for y in 0..height {
            for x in 0..width {
                let gold_row = GOLD_ROWS.contains(&y);
                let (zone, gold_direction) = if y < 2 {
                    (Zone::White, None)
                } else if y >= height - 2 {
                    (Zone::Black, None)
                } else if gold_row && x < 2 {
                    (Zone::Gold, Some(GoldDirection::E))
                } else if gold_row && x >= width - 2 {
                    (Zone::Gold, Some(GoldDirection::W))
                } else {
                    (Zone::Center, None)
                };
                squares.push(SquareDefinition {
                    id: SquareId::standard(x, y),
                    x,
                    y,
                    zone,
                    gold_direction,
                });
            }
        }

        Self {
            width,
            height,
            squares,
        }
    }

    pub fn from_json(json: &str) -> TriChessResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> TriChessResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone)]
struct SquareInfo {
    id: SquareId,
    zone: Zone,
    gold_direction: Option<GoldDirection>,
}

/// Read-only view of a validated board definition.
///
/// Adjacency is not stored: neighbours are derived from coordinates and
/// `in_bounds`. Coordinates inside the rectangle without a square are holes.
#[derive(Debug, Clone)]
pub struct BoardTopology {
    width: i32,
    height: i32,
    // Row-major, `None` for holes.
    cells: Vec<Option<SquareInfo>>,
    by_id: HashMap<SquareId, Coord>,
}

impl BoardTopology {
    pub fn build(definition: &BoardDefinition) -> TriChessResult<Self> {
        let (width, height) = (definition.width, definition.height);
        let side_ok = |side: i32| (1..=MAX_BOARD_SIDE).contains(&side);
        let area = width
            .checked_mul(height)
            .filter(|_| side_ok(width) && side_ok(height))
            .ok_or(TriChessErrors::InvalidBoardDimensions { width, height })?;

        let mut cells: Vec<Option<SquareInfo>> = vec![None; area as usize];
        let mut by_id = HashMap::with_capacity(definition.squares.len());

        for square in &definition.squares {
            let (x, y) = (square.x, square.y);
            if x < 0 || x >= width || y < 0 || y >= height {
                return Err(TriChessErrors::CoordinateOutOfRange {
                    id: square.id.to_string(),
                    x,
                    y,
                });
            }
            if by_id.contains_key(&square.id) {
                return Err(TriChessErrors::DuplicateSquareId(square.id.to_string()));
            }

            let index = (y * width + x) as usize;
            if cells[index].is_some() {
                return Err(TriChessErrors::DuplicateCoordinate {
                    id: square.id.to_string(),
                    x,
                    y,
                });
            }

            cells[index] = Some(SquareInfo {
                id: square.id.clone(),
                zone: square.zone,
                gold_direction: square.gold_direction,
            });
            by_id.insert(square.id.clone(), Coord::new(x, y));
        }

        Ok(Self {
            width,
            height,
            cells,
            by_id,
        })
    }

    /// Topology of [`BoardDefinition::standard`].
    pub fn standard() -> TriChessResult<Self> {
        Self::build(&BoardDefinition::standard())
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn square_count(&self) -> usize {
        self.by_id.len()
    }

    #[inline]
    fn cell(&self, x: i32, y: i32) -> Option<&SquareInfo> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        self.cells[(y * self.width + x) as usize].as_ref()
    }

    /// True if a square exists at `(x, y)`.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_some()
    }

    #[inline]
    pub fn coord_of(&self, id: &SquareId) -> Option<Coord> {
        self.by_id.get(id).copied()
    }

    #[inline]
    pub fn id_at(&self, coord: Coord) -> Option<&SquareId> {
        self.cell(coord.x, coord.y).map(|info| &info.id)
    }

    pub fn zone_of(&self, id: &SquareId) -> Option<Zone> {
        let coord = self.coord_of(id)?;
        self.cell(coord.x, coord.y).map(|info| info.zone)
    }

    pub fn gold_direction_of(&self, id: &SquareId) -> Option<GoldDirection> {
        let coord = self.coord_of(id)?;
        self.gold_direction_at(coord)
    }

    #[inline]
    pub fn gold_direction_at(&self, coord: Coord) -> Option<GoldDirection> {
        self.cell(coord.x, coord.y).and_then(|info| info.gold_direction)
    }

    /// Square ids in row-major order, bottom row first.
    pub fn square_ids(&self) -> impl Iterator<Item = &SquareId> + '_ {
        self.cells.iter().flatten().map(|info| &info.id)
    }
}
