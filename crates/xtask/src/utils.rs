//! Utility functions for xtask commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use game_content::{ContentFactory, MapLoader};
use game_core::{MapOracle, RoomCoord, RoomMap, RoomOffset};

/// Where to read a map from.
#[derive(Args)]
pub struct MapArgs {
    /// Data directory holding `config.toml` and `maps/`
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Map name under `maps/` (without extension)
    #[arg(short, long, value_name = "NAME", default_value = "playground")]
    pub map: String,

    /// Read this map file directly instead of looking it up by name
    #[arg(short, long, value_name = "FILE", conflicts_with = "map")]
    pub file: Option<PathBuf>,
}

impl MapArgs {
    pub fn load(&self) -> Result<RoomMap> {
        match &self.file {
            Some(path) => MapLoader::load(path),
            None => ContentFactory::new(&self.data_dir).load_map(&self.map),
        }
        .context("Failed to load map")
    }
}

/// Parse a room coordinate written as `x,y`.
pub fn parse_room_coord(value: &str) -> std::result::Result<RoomCoord, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{value}`"))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x in `{value}`"))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y in `{value}`"))?;
    Ok(RoomCoord::new(x, y))
}

/// Directions out of `room` that lead to another room.
pub fn exits(map: &dyn MapOracle, room: RoomCoord) -> Vec<(&'static str, RoomCoord)> {
    RoomOffset::ALL
        .iter()
        .zip(["north", "south", "east", "west"])
        .filter_map(|(offset, name)| Some((name, room.checked_offset(*offset)?)))
        .filter(|(_, neighbour)| map.contains(*neighbour))
        .collect()
}
