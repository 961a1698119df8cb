//! Runtime orchestration for room navigation sessions.
//!
//! This crate wires loaded content, the game-core [`RoomNavigator`] and an
//! event bus into a frame-stepped runtime. Consumers build a [`Runtime`], feed
//! it [`PlayerCommand`]s once per frame, and subscribe to [`Event`]s.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`adapters`] implements the navigator's ports on top of the bus
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`input`] defines per-frame commands and RON input scripts
//!
//! [`RoomNavigator`]: game_core::RoomNavigator
pub mod adapters;
pub mod error;
pub mod events;
pub mod input;
pub mod runtime;

pub use adapters::{BusCamera, BusPositionObserver, BusTileCanvas, SessionScoreboard};
pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, PlayerEvent, RoomEvent, SessionEvent, Topic};
pub use input::{Frame, PlayerCommand, Script};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig, ScriptReport, SessionNavigator};
