//! Port implementations that forward controller callbacks onto the event bus.

use game_core::{
    Camera, Point, PositionChanged, PositionObserver, RoomCoord, Scoreboard, TileCanvas,
    TilePlacement,
};

use crate::events::{EventBus, PlayerEvent, RoomEvent, SessionEvent};

/// Camera that announces where it is pointed.
#[derive(Clone, Debug)]
pub struct BusCamera {
    bus: EventBus,
    target: Option<(RoomCoord, Point)>,
}

impl BusCamera {
    pub fn new(bus: EventBus) -> Self {
        Self { bus, target: None }
    }

    /// Room and world origin of the last `move_to` call.
    pub fn target(&self) -> Option<(RoomCoord, Point)> {
        self.target
    }
}

impl Camera for BusCamera {
    fn move_to(&mut self, room: RoomCoord, origin: Point) {
        self.target = Some((room, origin));
        self.bus.publish(RoomEvent::CameraMoved { room, origin });
    }
}

/// Tile canvas that publishes each materialized room.
///
/// Only the latest room is kept; placing a new room replaces the old one.
#[derive(Clone, Debug)]
pub struct BusTileCanvas {
    bus: EventBus,
    placed: Vec<TilePlacement>,
}

impl BusTileCanvas {
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus,
            placed: Vec::new(),
        }
    }

    pub fn placed(&self) -> &[TilePlacement] {
        &self.placed
    }
}

impl TileCanvas for BusTileCanvas {
    fn place_tiles(&mut self, room: RoomCoord, tiles: &[TilePlacement]) {
        self.placed = tiles.to_vec();
        self.bus.publish(RoomEvent::Materialized {
            room,
            tiles: self.placed.clone(),
        });
    }
}

/// Scoreboard overlay state for a running session.
#[derive(Clone, Debug)]
pub struct SessionScoreboard {
    bus: EventBus,
    allow_second_player: bool,
    join_prompt_visible: bool,
}

impl SessionScoreboard {
    pub fn new(bus: EventBus, allow_second_player: bool) -> Self {
        Self {
            bus,
            allow_second_player,
            join_prompt_visible: allow_second_player,
        }
    }

    pub fn join_prompt_visible(&self) -> bool {
        self.join_prompt_visible
    }

    pub fn set_allow_second_player(&mut self, allow: bool) {
        self.allow_second_player = allow;
    }
}

impl Scoreboard for SessionScoreboard {
    fn can_spawn_second_player(&self) -> bool {
        self.allow_second_player
    }

    fn remove_second_player_text(&mut self) {
        if self.join_prompt_visible {
            self.join_prompt_visible = false;
            self.bus.publish(SessionEvent::JoinPromptHidden);
        }
    }
}

/// Position observer attached to every player entity.
#[derive(Clone, Debug)]
pub struct BusPositionObserver {
    bus: EventBus,
}

impl BusPositionObserver {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl PositionObserver for BusPositionObserver {
    fn position_changed(&self, change: &PositionChanged) {
        self.bus.publish(PlayerEvent::Moved(*change));
    }
}
