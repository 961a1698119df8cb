use std::collections::BTreeMap;
use std::fmt;

use crate::collision::WalkabilityGrid;
use crate::config::GameConfig;
use crate::env::MapError;
use crate::state::{Point, RoomBounds, RoomCoord};

/// Static map oracle exposing the immutable room layout.
pub trait MapOracle: Send + Sync {
    /// Returns the room defined at exactly `coord`, if any.
    fn find_room(&self, coord: RoomCoord) -> Option<&Room>;

    /// Iterates over every room in a stable order.
    fn rooms(&self) -> Box<dyn Iterator<Item = &Room> + '_>;

    fn contains(&self, coord: RoomCoord) -> bool {
        self.find_room(coord).is_some()
    }

    fn room_count(&self) -> usize {
        self.rooms().count()
    }
}

/// Raw tile identifier as stored in map data.
///
/// `-1` draws nothing, `0` is walkable floor, positive ids are solid or
/// decorative tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TileId(pub i32);

impl TileId {
    pub const EMPTY: Self = Self(-1);
    pub const FLOOR: Self = Self(0);

    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    pub const fn is_floor(self) -> bool {
        self.0 == Self::FLOOR.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 >= Self::EMPTY.0
    }

    /// Name of the texture the rendering side draws this tile with.
    pub fn texture_key(self) -> String {
        format!("tile_{}", self.0)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed-size tile grid, indexed `[row][column]`.
pub type RoomTiles = [[TileId; GameConfig::ROOM_COLUMNS]; GameConfig::ROOM_ROWS];

/// A tile instantiated into world space.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePlacement {
    pub tile: TileId,
    pub position: Point,
    /// Draw order. Floor is pushed two cells back so entities standing on it
    /// always render above.
    pub z_index: i32,
}

impl TilePlacement {
    pub fn texture_key(&self) -> String {
        self.tile.texture_key()
    }
}

/// One room of the map: its address and its tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    coord: RoomCoord,
    tiles: RoomTiles,
    walkability: WalkabilityGrid,
}

impl Room {
    pub fn new(coord: RoomCoord, tiles: RoomTiles) -> Self {
        let walkability = WalkabilityGrid::from_tiles(&tiles);
        Self {
            coord,
            tiles,
            walkability,
        }
    }

    /// Builds a room from row-major data, validating its shape and tile ids.
    ///
    /// # Errors
    ///
    /// Returns a [`MapError`] when the coordinate is not addressable, the grid
    /// is not `ROOM_ROWS × ROOM_COLUMNS` or it holds an id below `-1`.
    pub fn from_rows(coord: RoomCoord, rows: &[Vec<i32>]) -> Result<Self, MapError> {
        if !coord.is_addressable() {
            return Err(MapError::CoordinateOutOfRange(coord));
        }
        if rows.len() != GameConfig::ROOM_ROWS {
            return Err(MapError::InvalidRowCount {
                room: coord,
                rows: rows.len(),
            });
        }

        let mut tiles = [[TileId::EMPTY; GameConfig::ROOM_COLUMNS]; GameConfig::ROOM_ROWS];
        for (row, (cells, values)) in tiles.iter_mut().zip(rows).enumerate() {
            if values.len() != GameConfig::ROOM_COLUMNS {
                return Err(MapError::InvalidColumnCount {
                    room: coord,
                    row,
                    columns: values.len(),
                });
            }
            for (column, (cell, &value)) in cells.iter_mut().zip(values).enumerate() {
                let tile = TileId(value);
                if !tile.is_valid() {
                    return Err(MapError::InvalidTile {
                        room: coord,
                        row,
                        column,
                        tile: value,
                    });
                }
                *cell = tile;
            }
        }

        Ok(Self::new(coord, tiles))
    }

    pub fn coord(&self) -> RoomCoord {
        self.coord
    }

    pub fn tiles(&self) -> &RoomTiles {
        &self.tiles
    }

    pub fn tile(&self, column: usize, row: usize) -> Option<TileId> {
        self.tiles.get(row)?.get(column).copied()
    }

    pub fn walkability(&self) -> &WalkabilityGrid {
        &self.walkability
    }

    pub fn origin(&self) -> Point {
        self.coord.origin()
    }

    pub fn bounds(&self) -> RoomBounds {
        self.coord.bounds()
    }

    /// Returns true if `point` lies on a floor cell of this room.
    pub fn is_walkable(&self, point: Point) -> bool {
        self.walkability.is_walkable(self.origin(), point)
    }

    /// World-space placements for every drawable tile; `-1` cells are skipped.
    pub fn tile_placements(&self) -> Vec<TilePlacement> {
        let origin = self.origin();
        let cell = GameConfig::CELL_SIZE;

        self.tiles
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, tile)| !tile.is_empty())
                    .map(move |(column, &tile)| {
                        let position =
                            origin.offset(column as i32 * cell, row as i32 * cell);
                        let floor_shift = if tile.is_floor() { 2 * cell } else { 0 };
                        TilePlacement {
                            tile,
                            position,
                            z_index: position.y - floor_shift + cell,
                        }
                    })
            })
            .collect()
    }
}

/// In-memory map keyed by room coordinate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomMap {
    rooms: BTreeMap<RoomCoord, Room>,
}

impl RoomMap {
    /// Indexes `rooms` by coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::DuplicateRoom`] if two rooms share a coordinate and
    /// [`MapError::CoordinateOutOfRange`] for a room built with [`Room::new`]
    /// outside the addressable range.
    pub fn new(rooms: impl IntoIterator<Item = Room>) -> Result<Self, MapError> {
        let mut indexed = BTreeMap::new();
        for room in rooms {
            let coord = room.coord();
            if !coord.is_addressable() {
                return Err(MapError::CoordinateOutOfRange(coord));
            }
            if indexed.insert(coord, room).is_some() {
                return Err(MapError::DuplicateRoom(coord));
            }
        }
        Ok(Self { rooms: indexed })
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl MapOracle for RoomMap {
    fn find_room(&self, coord: RoomCoord) -> Option<&Room> {
        self.rooms.get(&coord)
    }

    fn rooms(&self) -> Box<dyn Iterator<Item = &Room> + '_> {
        Box::new(self.rooms.values())
    }

    fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_rows() -> Vec<Vec<i32>> {
        vec![vec![0; GameConfig::ROOM_COLUMNS]; GameConfig::ROOM_ROWS]
    }

    #[test]
    fn from_rows_rejects_wrong_shapes() {
        let coord = RoomCoord::new(2, 1);

        let short = vec![vec![0; GameConfig::ROOM_COLUMNS]; 5];
        assert_eq!(
            Room::from_rows(coord, &short),
            Err(MapError::InvalidRowCount { room: coord, rows: 5 })
        );

        let mut ragged = floor_rows();
        ragged[3].pop();
        assert_eq!(
            Room::from_rows(coord, &ragged),
            Err(MapError::InvalidColumnCount {
                room: coord,
                row: 3,
                columns: 8
            })
        );

        let mut bad_tile = floor_rows();
        bad_tile[1][4] = -7;
        assert_eq!(
            Room::from_rows(coord, &bad_tile),
            Err(MapError::InvalidTile {
                room: coord,
                row: 1,
                column: 4,
                tile: -7
            })
        );
    }

    #[test]
    fn coordinates_without_representable_bounds_are_rejected() {
        let far = RoomCoord::new(20_000_000, 0);
        assert_eq!(
            Room::from_rows(far, &floor_rows()),
            Err(MapError::CoordinateOutOfRange(far))
        );

        let edge = RoomCoord::new(-RoomCoord::MAX_ABS_X, RoomCoord::MAX_ABS_Y);
        let room = Room::from_rows(edge, &floor_rows()).unwrap();
        assert!(room.is_walkable(room.origin()));

        let unchecked = Room::new(RoomCoord::new(0, i32::MIN), *room.tiles());
        assert_eq!(
            RoomMap::new([unchecked]),
            Err(MapError::CoordinateOutOfRange(RoomCoord::new(0, i32::MIN)))
        );
    }

    #[test]
    fn find_room_matches_exact_coordinate_only() {
        let map = RoomMap::new([
            Room::from_rows(RoomCoord::new(1, 1), &floor_rows()).unwrap(),
            Room::from_rows(RoomCoord::new(2, 1), &floor_rows()).unwrap(),
        ])
        .unwrap();

        assert_eq!(
            map.find_room(RoomCoord::new(2, 1)).map(Room::coord),
            Some(RoomCoord::new(2, 1))
        );
        assert!(map.find_room(RoomCoord::new(1, 2)).is_none());
        assert!(map.contains(RoomCoord::new(1, 1)));
        assert_eq!(map.room_count(), 2);
    }

    #[test]
    fn duplicate_coordinates_are_rejected() {
        let room = Room::from_rows(RoomCoord::ORIGIN, &floor_rows()).unwrap();
        let result = RoomMap::new([room.clone(), room]);
        assert_eq!(result, Err(MapError::DuplicateRoom(RoomCoord::ORIGIN)));
    }

    #[test]
    fn tile_placements_skip_empty_cells_and_layer_floor_below() {
        let mut rows = vec![vec![-1; GameConfig::ROOM_COLUMNS]; GameConfig::ROOM_ROWS];
        rows[0][0] = 0;
        rows[2][3] = 5;
        let room = Room::from_rows(RoomCoord::new(1, 1), &rows).unwrap();

        let placements = room.tile_placements();
        assert_eq!(placements.len(), 2);

        assert_eq!(placements[0].tile, TileId::FLOOR);
        assert_eq!(placements[0].position, Point::new(144, 96));
        assert_eq!(placements[0].z_index, 96 - 32 + 16);

        assert_eq!(placements[1].tile, TileId(5));
        assert_eq!(placements[1].position, Point::new(144 + 48, 96 + 32));
        assert_eq!(placements[1].z_index, 96 + 32 + 16);
        assert_eq!(placements[1].texture_key(), "tile_5");
    }
}
