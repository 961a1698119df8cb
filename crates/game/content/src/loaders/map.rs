//! Map data loader.
//!
//! A map is a flat list of rooms, each addressed by its `x`/`y` offset from the
//! origin room and holding a 6 × 9 grid of tile ids. Two encodings are read:
//!
//! ```ron
//! (rooms: [(x: 0, y: 0, tiles: [[1, 1, 1, 1, 1, 1, 1, 1, 1], ...])])
//! ```
//!
//! and the editor's JSON export, a bare array of `{ "x", "y", "tiles" }`
//! objects.

use std::path::Path;

use game_core::{Room, RoomCoord, RoomMap};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One room as stored in map files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomData {
    pub x: i32,
    pub y: i32,
    /// Rows of tile ids, top to bottom.
    pub tiles: Vec<Vec<i32>>,
}

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    rooms: Vec<RoomData>,
}

/// Supported map encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapFormat {
    Ron,
    Json,
}

impl MapFormat {
    pub const ALL: [MapFormat; 2] = [MapFormat::Ron, MapFormat::Json];

    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ron" => Some(MapFormat::Ron),
            "json" => Some(MapFormat::Json),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            MapFormat::Ron => "ron",
            MapFormat::Json => "json",
        }
    }
}

/// Loader for map data from RON or JSON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map file, picking the format from its extension.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.ron` or `.json` map file
    pub fn load(path: &Path) -> LoadResult<RoomMap> {
        let format = MapFormat::from_path(path).ok_or_else(|| {
            anyhow::anyhow!("Unsupported map file extension: {}", path.display())
        })?;
        let content = read_file(path)?;
        Self::parse(&content, format)
            .map_err(|e| anyhow::anyhow!("Failed to load map {}: {}", path.display(), e))
    }

    /// Parse map content that is already in memory.
    pub fn parse(content: &str, format: MapFormat) -> LoadResult<RoomMap> {
        let rooms = match format {
            MapFormat::Ron => {
                let data: MapDataRon = ron::from_str(content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;
                data.rooms
            }
            MapFormat::Json => serde_json::from_str::<Vec<RoomData>>(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse map JSON: {}", e))?,
        };
        Self::build(&rooms)
    }

    /// Validate raw room records and index them by coordinate.
    pub fn build(rooms: &[RoomData]) -> LoadResult<RoomMap> {
        let rooms = rooms
            .iter()
            .map(|data| Room::from_rows(RoomCoord::new(data.x, data.y), &data.tiles))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RoomMap::new(rooms)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{MapOracle, TileId};
    use std::io::Write;

    fn tiles_literal(fill: i32) -> String {
        let row = format!("[{}]", vec![fill.to_string(); 9].join(", "));
        format!("[{}]", vec![row; 6].join(", "))
    }

    #[test]
    fn parses_ron_room_list() {
        let content = format!(
            "(rooms: [(x: 0, y: 0, tiles: {}), (x: 1, y: 0, tiles: {})])",
            tiles_literal(0),
            tiles_literal(3)
        );

        let map = MapLoader::parse(&content, MapFormat::Ron).unwrap();
        assert_eq!(map.len(), 2);
        let east = map.find_room(RoomCoord::new(1, 0)).unwrap();
        assert_eq!(east.tile(8, 5), Some(TileId(3)));
        assert_eq!(east.walkability().walkable_count(), 0);
    }

    #[test]
    fn parses_json_export() {
        let content = format!(
            r#"[{{"x": 0, "y": 0, "tiles": {}}}, {{"x": 0, "y": -1, "tiles": {}}}]"#,
            tiles_literal(0),
            tiles_literal(-1)
        );

        let map = MapLoader::parse(&content, MapFormat::Json).unwrap();
        assert!(map.contains(RoomCoord::new(0, -1)));
        assert_eq!(
            map.find_room(RoomCoord::ORIGIN)
                .unwrap()
                .walkability()
                .walkable_count(),
            54
        );
    }

    #[test]
    fn rejects_malformed_rooms() {
        let short = r#"[{"x": 0, "y": 0, "tiles": [[0, 0, 0, 0, 0, 0, 0, 0, 0]]}]"#;
        let error = MapLoader::parse(short, MapFormat::Json).unwrap_err();
        assert!(error.to_string().contains("has 1 rows"));

        let duplicate = format!(
            "(rooms: [(x: 2, y: 2, tiles: {0}), (x: 2, y: 2, tiles: {0})])",
            tiles_literal(0)
        );
        let error = MapLoader::parse(&duplicate, MapFormat::Ron).unwrap_err();
        assert!(error.to_string().contains("more than one room"));
    }

    #[test]
    fn rejects_rooms_beyond_the_addressable_map() {
        let far = format!(
            "(rooms: [(x: 20000000, y: 0, tiles: {})])",
            tiles_literal(0)
        );
        let error = MapLoader::parse(&far, MapFormat::Ron).unwrap_err();
        assert!(error.to_string().contains("outside the addressable map"));
    }

    #[test]
    fn load_picks_format_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("playground.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"[{{"x": 0, "y": 0, "tiles": {}}}]"#, tiles_literal(0)).unwrap();

        let map = MapLoader::load(&path).unwrap();
        assert_eq!(map.len(), 1);

        let unknown = dir.path().join("playground.txt");
        std::fs::write(&unknown, "").unwrap();
        assert!(MapLoader::load(&unknown).is_err());
    }
}
