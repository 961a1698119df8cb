//! Tile collision for the active room.
//!
//! A room's tiles are reduced once to a [`WalkabilityGrid`]; candidate points are
//! then mapped onto that grid. There is no implicit crossing into a neighbouring
//! room here: anything outside the room's rectangle is simply not walkable.

use crate::config::GameConfig;
use crate::env::RoomTiles;
use crate::state::Point;

/// Walkability of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Walkability {
    Walkable,
    Blocked,
}

impl Walkability {
    /// Grid marker used by consumers of the bounds view: `0` walkable, `1` blocked.
    pub const fn marker(self) -> u8 {
        match self {
            Walkability::Walkable => 0,
            Walkability::Blocked => 1,
        }
    }

    pub const fn is_walkable(self) -> bool {
        matches!(self, Walkability::Walkable)
    }
}

/// Per-cell walkability derived from a room's tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkabilityGrid {
    cells: [[Walkability; GameConfig::ROOM_COLUMNS]; GameConfig::ROOM_ROWS],
}

impl WalkabilityGrid {
    /// Floor (`0`) is walkable; every other id, including `-1`, blocks.
    pub fn from_tiles(tiles: &RoomTiles) -> Self {
        let cells = tiles.map(|row| {
            row.map(|tile| {
                if tile.is_floor() {
                    Walkability::Walkable
                } else {
                    Walkability::Blocked
                }
            })
        });
        Self { cells }
    }

    pub fn get(&self, column: usize, row: usize) -> Option<Walkability> {
        self.cells.get(row)?.get(column).copied()
    }

    /// Grid of `0` (walkable) / `1` (blocked) markers, indexed `[row][column]`.
    pub fn markers(&self) -> [[u8; GameConfig::ROOM_COLUMNS]; GameConfig::ROOM_ROWS] {
        self.cells.map(|row| row.map(Walkability::marker))
    }

    pub fn walkable_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_walkable())
            .count()
    }

    /// Cell `(column, row)` containing `point` for a room whose top-left corner
    /// sits at `origin`, or `None` when the point is outside the room.
    pub fn cell_at(origin: Point, point: Point) -> Option<(usize, usize)> {
        let dx = i64::from(point.x) - i64::from(origin.x);
        let dy = i64::from(point.y) - i64::from(origin.y);
        if dx < 0 || dy < 0 {
            return None;
        }

        let cell = i64::from(GameConfig::CELL_SIZE);
        let column = usize::try_from(dx / cell).ok()?;
        let row = usize::try_from(dy / cell).ok()?;
        (column < GameConfig::ROOM_COLUMNS && row < GameConfig::ROOM_ROWS)
            .then_some((column, row))
    }

    /// Returns true only if `point` falls inside a walkable cell.
    pub fn is_walkable(&self, origin: Point, point: Point) -> bool {
        Self::cell_at(origin, point)
            .and_then(|(column, row)| self.get(column, row))
            .is_some_and(Walkability::is_walkable)
    }
}
