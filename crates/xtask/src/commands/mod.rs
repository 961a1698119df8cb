//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod inspect_map;
mod render_room;
mod simulate;

pub use inspect_map::InspectMap;
pub use render_room::RenderRoom;
pub use simulate::Simulate;
