//! Per-frame player input and scripted input sequences.
//!
//! Scripts are RON files listing frames, each applied for `repeat` ticks:
//!
//! ```ron
//! (frames: [
//!     (commands: [Move(slot: One, dx: 2, dy: 0)], repeat: 60),
//!     (commands: [JoinSecondPlayer]),
//! ])
//! ```

use std::path::Path;

use game_core::{PlayerSlot, RoomOffset};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

/// One input applied before a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCommand {
    /// Collision-checked move; a blocked step past the room edge becomes a
    /// room-change request.
    ///
    /// The crossing only nudges the player by the entry nudge, so a step
    /// longer than that leaves them short of the new room. Until a step lands
    /// inside it, a step back towards the old room requests that room again.
    Move { slot: PlayerSlot, dx: i32, dy: i32 },
    RequestRoom { slot: PlayerSlot, offset: RoomOffset },
    /// Marks the player dead but keeps it in its slot.
    Die { slot: PlayerSlot },
    /// Takes the player out of the session entirely.
    Remove { slot: PlayerSlot },
    JoinSecondPlayer,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub commands: Vec<PlayerCommand>,
    #[serde(default = "Frame::default_repeat")]
    pub repeat: u32,
}

impl Frame {
    fn default_repeat() -> u32 {
        1
    }

    pub fn once(commands: Vec<PlayerCommand>) -> Self {
        Self {
            commands,
            repeat: 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub frames: Vec<Frame>,
}

impl Script {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ScriptIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Total ticks the script runs for.
    pub fn tick_count(&self) -> u64 {
        self.frames.iter().map(|frame| u64::from(frame.repeat)).sum()
    }

    /// Command lists in tick order, with repeats expanded.
    pub fn ticks(&self) -> impl Iterator<Item = &[PlayerCommand]> {
        self.frames.iter().flat_map(|frame| {
            std::iter::repeat_n(frame.commands.as_slice(), frame.repeat as usize)
        })
    }
}
