//! Inspect a map file
//!
//! Lists every room with its walkable cell count and the exits that lead to
//! another room.

use anyhow::Result;
use clap::Parser;
use console::style;

use game_core::{GameConfig, MapOracle, RoomMap};

use crate::utils::{MapArgs, exits};

/// List the rooms of a map with their exits
#[derive(Parser)]
pub struct InspectMap {
    #[command(flatten)]
    source: MapArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per room
    Summary,
    /// JSON array of rooms
    Json,
}

impl InspectMap {
    pub fn execute(self) -> Result<()> {
        let map = self.source.load()?;

        match self.format {
            OutputFormat::Summary => print_summary(&map),
            OutputFormat::Json => print_json(&map)?,
        }

        Ok(())
    }
}

fn print_summary(map: &RoomMap) {
    let cells = GameConfig::ROOM_COLUMNS * GameConfig::ROOM_ROWS;

    println!("{}", style("=== Map Summary ===").bold().green());
    println!("{} {}", style("Rooms:").bold().cyan(), map.room_count());
    println!();

    for room in map.rooms() {
        let exits = exits(map, room.coord());
        let exit_list = if exits.is_empty() {
            style("none".to_string()).dim().to_string()
        } else {
            exits
                .iter()
                .map(|(name, target)| format!("{name} -> {target}"))
                .collect::<Vec<_>>()
                .join(", ")
        };

        println!(
            "  {} walkable {}/{}  exits: {}",
            style(room.coord()).bold().yellow(),
            room.walkability().walkable_count(),
            cells,
            exit_list
        );
    }

    if !map.contains(game_core::RoomCoord::ORIGIN) {
        println!();
        println!(
            "{} no room at {}; sessions cannot start on this map",
            style("warning:").bold().red(),
            game_core::RoomCoord::ORIGIN
        );
    }
}

fn print_json(map: &RoomMap) -> Result<()> {
    let rooms: Vec<_> = map
        .rooms()
        .map(|room| {
            serde_json::json!({
                "room": room.coord(),
                "origin": room.origin(),
                "walkable": room.walkability().walkable_count(),
                "exits": exits(map, room.coord())
                    .into_iter()
                    .map(|(name, _)| name)
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rooms)?);
    Ok(())
}
