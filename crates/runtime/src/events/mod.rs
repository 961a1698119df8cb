//! Topic-based event bus for runtime events.
//!
//! Port adapters and the runtime publish here; renderers, tooling and tests
//! subscribe to the topics they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{PlayerEvent, RoomEvent, SessionEvent};
