//! Render one room as text
//!
//! `.` walkable floor, `#` blocking tile, blank for empty cells. With
//! `--tiles` the raw tile ids are printed instead.

use anyhow::Result;
use clap::Parser;
use console::style;

use game_core::{GameConfig, MapOracle, RoomCoord, TileId};

use crate::utils::{MapArgs, parse_room_coord};

/// Draw one room's walkability grid
#[derive(Parser)]
pub struct RenderRoom {
    #[command(flatten)]
    source: MapArgs,

    /// Room to draw, as `x,y`
    #[arg(short, long, value_name = "X,Y", default_value = "0,0", value_parser = parse_room_coord)]
    room: RoomCoord,

    /// Print tile ids instead of walkability glyphs
    #[arg(long)]
    tiles: bool,
}

impl RenderRoom {
    pub fn execute(self) -> Result<()> {
        let map = self.source.load()?;
        let Some(room) = map.find_room(self.room) else {
            anyhow::bail!(
                "Room {} not found\n\nHint: run `cargo xtask inspect-map` to list rooms",
                self.room
            );
        };

        println!(
            "{} {} (origin {})",
            style("Room").bold().cyan(),
            room.coord(),
            room.origin()
        );

        for row in 0..GameConfig::ROOM_ROWS {
            let line: String = (0..GameConfig::ROOM_COLUMNS)
                .map(|column| {
                    let tile = room.tile(column, row).unwrap_or(TileId::EMPTY);
                    if self.tiles {
                        format!("{:>3}", tile.0)
                    } else {
                        glyph(tile).to_string()
                    }
                })
                .collect();
            println!("  {line}");
        }

        Ok(())
    }
}

fn glyph(tile: TileId) -> char {
    if tile.is_empty() {
        ' '
    } else if tile.is_floor() {
        '.'
    } else {
        '#'
    }
}
