//! Movable entities and collision-checked displacement.
//!
//! Entities are plain positional state. Rendering or any other interested party
//! attaches a [`PositionObserver`] and hears about every committed move; a
//! rejected move leaves no trace at all.

use std::fmt;
use std::sync::Arc;

use crate::env::Room;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("destination {destination} is not walkable")]
    Blocked { destination: Point },

    #[error("no active room to test {destination} against")]
    NoActiveRoom { destination: Point },

    #[error("player slot {0} is empty")]
    PlayerMissing(crate::player::PlayerSlot),
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::Blocked { .. } => ErrorSeverity::Recoverable,
            MoveError::NoActiveRoom { .. } => ErrorSeverity::Internal,
            MoveError::PlayerMissing(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::Blocked { .. } => "MOVE_BLOCKED",
            MoveError::NoActiveRoom { .. } => "MOVE_NO_ACTIVE_ROOM",
            MoveError::PlayerMissing(_) => "MOVE_PLAYER_MISSING",
        }
    }
}

/// Notification emitted whenever an entity's position is committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionChanged {
    pub entity: EntityId,
    pub position: Point,
    pub z_index: i32,
}

/// Receives committed position changes.
pub trait PositionObserver: Send + Sync {
    fn position_changed(&self, change: &PositionChanged);
}

/// Positional state of anything that moves through rooms.
#[derive(Clone)]
pub struct Entity {
    id: EntityId,
    position: Point,
    z_index: i32,
    observers: Vec<Arc<dyn PositionObserver>>,
}

impl Entity {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            position: Point::ORIGIN,
            z_index: 0,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_observers(mut self, observers: Vec<Arc<dyn PositionObserver>>) -> Self {
        self.observers = observers;
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn observers(&self) -> &[Arc<dyn PositionObserver>] {
        &self.observers
    }

    pub fn subscribe(&mut self, observer: Arc<dyn PositionObserver>) {
        self.observers.push(observer);
    }

    /// Moves by `(dx, dy)` if the destination is walkable in `room`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Blocked`] and leaves the entity untouched when the
    /// destination cell is not floor or lies outside the room. A delta that
    /// overflows the coordinate range is blocked at the clamped destination.
    pub fn try_move(&mut self, dx: i32, dy: i32, room: &Room) -> Result<Point, MoveError> {
        let Some(destination) = self.position.checked_offset(dx, dy) else {
            return Err(MoveError::Blocked {
                destination: self.position.saturating_offset(dx, dy),
            });
        };
        if !room.is_walkable(destination) {
            return Err(MoveError::Blocked { destination });
        }
        Ok(self.commit(destination, dy))
    }

    /// Moves by `(dx, dy)` without any collision test.
    ///
    /// Reserved for spawn placement and for carrying players across a room seam,
    /// where the old room's grid says nothing about the destination. Saturates
    /// at the edge of the coordinate range.
    pub fn force_move(&mut self, dx: i32, dy: i32) -> Point {
        let destination = self.position.saturating_offset(dx, dy);
        self.commit(destination, dy)
    }

    fn commit(&mut self, destination: Point, dy: i32) -> Point {
        self.position = destination;
        // Draw order follows vertical movement.
        self.z_index = self.z_index.saturating_add(dy);

        let change = PositionChanged {
            entity: self.id,
            position: self.position,
            z_index: self.z_index,
        };
        for observer in &self.observers {
            observer.position_changed(&change);
        }
        self.position
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("z_index", &self.z_index)
            .field("observers", &self.observers.len())
            .finish()
    }
}
