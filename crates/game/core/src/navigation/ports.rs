//! Collaborators the controller talks to.
//!
//! Drawing, camera motion and the score overlay live outside the core. The
//! controller owns one implementation of each port, injected at construction.
//! The unit type implements every port as a no-op for headless use.

use crate::env::TilePlacement;
use crate::state::{Point, RoomCoord};

/// Follows the active room.
pub trait Camera {
    /// Called with the new active room and its world origin after every switch.
    fn move_to(&mut self, room: RoomCoord, origin: Point);
}

/// Rendering side of tile materialization.
///
/// Placements carry the texture key of each tile; resolving keys to textures and
/// discarding the previous room's sprites is the implementor's job.
pub trait TileCanvas {
    fn place_tiles(&mut self, room: RoomCoord, tiles: &[TilePlacement]);
}

/// Score overlay gate for a second player joining.
pub trait Scoreboard {
    fn can_spawn_second_player(&self) -> bool;
    fn remove_second_player_text(&mut self);
}

/// Bundle of the collaborators owned by a [`RoomNavigator`](super::RoomNavigator).
#[derive(Clone, Debug, Default)]
pub struct Ports<C, T, S> {
    pub camera: C,
    pub tiles: T,
    pub scoreboard: S,
}

impl<C, T, S> Ports<C, T, S>
where
    C: Camera,
    T: TileCanvas,
    S: Scoreboard,
{
    pub fn new(camera: C, tiles: T, scoreboard: S) -> Self {
        Self {
            camera,
            tiles,
            scoreboard,
        }
    }
}

impl Camera for () {
    fn move_to(&mut self, _room: RoomCoord, _origin: Point) {}
}

impl TileCanvas for () {
    fn place_tiles(&mut self, _room: RoomCoord, _tiles: &[TilePlacement]) {}
}

impl Scoreboard for () {
    fn can_spawn_second_player(&self) -> bool {
        true
    }

    fn remove_second_player_text(&mut self) {}
}
