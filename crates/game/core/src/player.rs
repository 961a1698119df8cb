//! Player characters as seen by the navigation core.
//!
//! A player is an [`Entity`] plus the few pieces of state room navigation needs:
//! which mode it runs in, whether it is alive, the zombification carried over a
//! slot swap, and its room-change request.

use std::sync::Arc;

use crate::movement::{Entity, PositionObserver};
use crate::state::{EntityId, Point, RoomOffset};

/// Operating mode of a player character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlayerMode {
    /// Single player; decides room transitions alone.
    Solo,
    /// First player of a two-player session.
    P1,
    /// Second player of a two-player session.
    P2,
}

impl PlayerMode {
    pub const fn slot(self) -> PlayerSlot {
        match self {
            PlayerMode::Solo | PlayerMode::P1 => PlayerSlot::One,
            PlayerMode::P2 => PlayerSlot::Two,
        }
    }

    pub const fn entity_id(self) -> EntityId {
        match self.slot() {
            PlayerSlot::One => EntityId::PLAYER_ONE,
            PlayerSlot::Two => EntityId::PLAYER_TWO,
        }
    }
}

/// Controller slot a player occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerSlot {
    One,
    Two,
}

/// Room-change request raised by a player and consumed by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomRequest {
    #[default]
    Idle,
    Requested(RoomOffset),
    Consumed,
}

impl RoomRequest {
    /// Moves `Requested(offset)` to `Consumed`, handing back the offset.
    ///
    /// `Idle` and `Consumed` yield `None`; the request becomes `Consumed` either way.
    pub fn take(&mut self) -> Option<RoomOffset> {
        match std::mem::replace(self, RoomRequest::Consumed) {
            RoomRequest::Requested(offset) => Some(offset),
            RoomRequest::Idle | RoomRequest::Consumed => None,
        }
    }

    pub fn pending(&self) -> Option<RoomOffset> {
        match self {
            RoomRequest::Requested(offset) => Some(*offset),
            RoomRequest::Idle | RoomRequest::Consumed => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    mode: PlayerMode,
    entity: Entity,
    alive: bool,
    zombification: u32,
    room_request: RoomRequest,
}

impl Player {
    pub fn new(mode: PlayerMode) -> Self {
        Self {
            mode,
            entity: Entity::new(mode.entity_id()),
            alive: true,
            zombification: 0,
            room_request: RoomRequest::Idle,
        }
    }

    #[must_use]
    pub fn with_observers(mut self, observers: Vec<Arc<dyn PositionObserver>>) -> Self {
        self.entity = self.entity.with_observers(observers);
        self
    }

    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    pub fn slot(&self) -> PlayerSlot {
        self.mode.slot()
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn position(&self) -> Point {
        self.entity.position()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_dead(&self) -> bool {
        !self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn zombification(&self) -> u32 {
        self.zombification
    }

    pub fn apply_zombification(&mut self, amount: u32) {
        self.zombification = self.zombification.saturating_add(amount);
    }

    /// Latches a request to move to the neighbouring room at `offset`.
    pub fn request_room_change(&mut self, offset: RoomOffset) {
        self.room_request = RoomRequest::Requested(offset);
    }

    pub fn room_request(&self) -> RoomRequest {
        self.room_request
    }

    pub fn take_room_request(&mut self) -> Option<RoomOffset> {
        self.room_request.take()
    }
}
