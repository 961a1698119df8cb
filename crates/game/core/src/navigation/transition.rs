//! Two-player agreement rule.
//!
//! Each tick both players are polled once. A player that is dead or has been
//! removed never blocks the other and never contributes an offset.

use crate::error::GameError;
use crate::navigation::TransitionError;
use crate::player::{Player, PlayerSlot};
use crate::state::{RoomCoord, RoomOffset};

/// One player's answer to this tick's poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    /// Dead or removed.
    Down,
    /// Alive, no request this tick.
    Idle,
    /// Alive and asking to move by the offset.
    Ready(RoomOffset),
}

impl Readiness {
    /// Polls `player`, consuming its request whether or not it will be used.
    pub fn poll(player: Option<&mut Player>) -> Self {
        let Some(player) = player else {
            return Readiness::Down;
        };
        let request = player.take_room_request();
        if player.is_dead() {
            return Readiness::Down;
        }
        request.map_or(Readiness::Idle, Readiness::Ready)
    }
}

/// Result of combining both players' readiness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Agreement {
    /// Nobody asked for anything.
    Idle,
    /// One living player asked; the other has not.
    Waiting { ready: PlayerSlot },
    /// Everyone alive agrees; move by the offset.
    Proceed(RoomOffset),
    /// No living player remains.
    Abort,
}

/// Applies the agreement rule. The first player's offset wins when both ask.
pub fn evaluate_agreement(one: Readiness, two: Readiness) -> Agreement {
    use Readiness::*;
    match (one, two) {
        (Down, Down) => Agreement::Abort,
        (Ready(offset), Ready(_) | Down) | (Down, Ready(offset)) => Agreement::Proceed(offset),
        (Ready(_), Idle) => Agreement::Waiting {
            ready: PlayerSlot::One,
        },
        (Idle, Ready(_)) => Agreement::Waiting {
            ready: PlayerSlot::Two,
        },
        (Idle, Idle) | (Idle, Down) | (Down, Idle) => Agreement::Idle,
    }
}

/// What a single controller tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do.
    Idle,
    /// A living player is waiting for the other to agree.
    Waiting { ready: PlayerSlot },
    /// An agreed transition was dropped.
    Rejected(TransitionError),
    /// No living player remains; any pending transition was discarded.
    AllPlayersDown { cleared: Option<RoomOffset> },
    /// The active room changed.
    Transitioned {
        from: RoomCoord,
        to: RoomCoord,
        offset: RoomOffset,
    },
}

impl TickOutcome {
    pub fn is_transition(&self) -> bool {
        matches!(self, TickOutcome::Transitioned { .. })
    }

    /// Error code of a rejected transition, for logging.
    pub fn rejection_code(&self) -> Option<&'static str> {
        match self {
            TickOutcome::Rejected(error) => Some(error.error_code()),
            _ => None,
        }
    }
}
