use crate::state::Point;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Scale applied to a room offset when players are forced across the seam
    /// into the next room, so they land just inside its entry edge.
    pub entry_nudge: i32,

    /// World position the first player is placed at when the session loads.
    pub spawn_point: Point,
}

impl GameConfig {
    // ===== structural constants =====
    /// Edge length of a square tile cell, in pixels.
    pub const CELL_SIZE: i32 = 16;
    /// Number of tile columns in every room.
    pub const ROOM_COLUMNS: usize = 9;
    /// Number of tile rows in every room.
    pub const ROOM_ROWS: usize = 6;
    pub const ROOM_PIXEL_WIDTH: i32 = Self::ROOM_COLUMNS as i32 * Self::CELL_SIZE;
    pub const ROOM_PIXEL_HEIGHT: i32 = Self::ROOM_ROWS as i32 * Self::CELL_SIZE;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ENTRY_NUDGE: i32 = 2;
    pub const DEFAULT_SPAWN_POINT: Point = Point::new(20, 20);

    pub fn new() -> Self {
        Self {
            entry_nudge: Self::DEFAULT_ENTRY_NUDGE,
            spawn_point: Self::DEFAULT_SPAWN_POINT,
        }
    }

    #[must_use]
    pub fn with_entry_nudge(mut self, entry_nudge: i32) -> Self {
        self.entry_nudge = entry_nudge;
        self
    }

    #[must_use]
    pub fn with_spawn_point(mut self, spawn_point: Point) -> Self {
        self.spawn_point = spawn_point;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
