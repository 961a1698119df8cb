//! Data-driven content definitions and loaders.
//!
//! This crate reads static game content from disk:
//! - Map layouts (RON, or the JSON room list exported by the level editor)
//! - Game configuration (TOML)
//!
//! Content is turned into game-core types ([`game_core::RoomMap`],
//! [`game_core::GameConfig`]) and never changes after load.

pub mod loaders;

pub use loaders::{ConfigLoader, ContentFactory, LoadResult, MapFormat, MapLoader, RoomData};
