//! Room navigation controller.
//!
//! [`RoomNavigator`] owns the active-room coordinate and the player slots. Once
//! per simulation tick, [`RoomNavigator::tick`] polls the players' room-change
//! requests, applies the agreement rule for the current [`SessionMode`], and
//! resolves any pending transition:
//!
//! 1. an approved offset is recorded as pending and living players are forced
//!    across the seam by `offset * entry_nudge`;
//! 2. the active coordinate advances by the pending offset;
//! 3. the new room's tiles are handed to the [`TileCanvas`] and the
//!    [`Camera`] is told where the room now is;
//! 4. the pending offset is cleared.
//!
//! Rejections (blocked exits, double requests) are routine and come back as
//! values; nothing here panics.

mod error;
mod ports;
mod transition;

pub use error::{NavigationError, SpawnError, TransitionError};
pub use ports::{Camera, Ports, Scoreboard, TileCanvas};
pub use transition::{Agreement, Readiness, TickOutcome, evaluate_agreement};

use std::sync::Arc;

use crate::collision::WalkabilityGrid;
use crate::config::GameConfig;
use crate::env::{MapOracle, Room};
use crate::movement::{MoveError, PositionObserver};
use crate::player::{Player, PlayerMode, PlayerSlot};
use crate::state::{Point, RoomBounds, RoomCoord, RoomOffset};

/// Who decides room transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionMode {
    /// One player moves rooms on their own request.
    Solo,
    /// Both living players must ask in the same tick.
    TwoPlayer,
}

pub struct RoomNavigator<C, T, S> {
    config: GameConfig,
    map: Arc<dyn MapOracle>,
    ports: Ports<C, T, S>,
    observers: Vec<Arc<dyn PositionObserver>>,
    mode: Option<SessionMode>,
    current: RoomCoord,
    pending: Option<RoomOffset>,
    player_one: Option<Player>,
    player_two: Option<Player>,
}

impl<C, T, S> RoomNavigator<C, T, S>
where
    C: Camera,
    T: TileCanvas,
    S: Scoreboard,
{
    pub fn new(config: GameConfig, map: Arc<dyn MapOracle>, ports: Ports<C, T, S>) -> Self {
        Self {
            config,
            map,
            ports,
            observers: Vec::new(),
            mode: None,
            current: RoomCoord::ORIGIN,
            pending: None,
            player_one: None,
            player_two: None,
        }
    }

    /// Attaches `observer` to every player spawned by [`load`](Self::load).
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn PositionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Materializes the starting room and spawns the solo player.
    ///
    /// # Errors
    ///
    /// Fails if the session was already loaded or the map has no room at the
    /// origin coordinate.
    pub fn load(&mut self) -> Result<(), NavigationError> {
        if self.mode.is_some() {
            return Err(NavigationError::AlreadyLoaded);
        }
        if !self.map.contains(self.current) {
            return Err(NavigationError::StartingRoomMissing(self.current));
        }

        self.materialize_current_room();
        self.notify_camera();

        let spawn = self.config.spawn_point;
        let mut player = Player::new(PlayerMode::Solo).with_observers(self.observers.clone());
        player.entity_mut().force_move(spawn.x, spawn.y);
        self.player_one = Some(player);
        self.mode = Some(SessionMode::Solo);
        Ok(())
    }

    /// Promotes the solo player to `p1` and adds `p2` at the same spot.
    ///
    /// Position, zombification and position observers carry over; a room
    /// request latched by the solo player does not.
    ///
    /// # Errors
    ///
    /// Refused before [`load`](Self::load), when two players already exist,
    /// when the scoreboard says no, or when there is no living solo player.
    pub fn spawn_second_player(&mut self) -> Result<(), SpawnError> {
        match self.mode {
            None => return Err(SpawnError::NotLoaded),
            Some(SessionMode::TwoPlayer) => return Err(SpawnError::AlreadyTwoPlayers),
            Some(SessionMode::Solo) => {}
        }
        if !self.ports.scoreboard.can_spawn_second_player() {
            return Err(SpawnError::NotAllowed);
        }
        if !self.player_one.as_ref().is_some_and(Player::is_alive) {
            return Err(SpawnError::NoLivingPlayer);
        }
        let Some(solo) = self.player_one.take() else {
            return Err(SpawnError::NoLivingPlayer);
        };

        let position = solo.position();
        let observers = solo.entity().observers().to_vec();

        let mut one = Player::new(PlayerMode::P1).with_observers(observers.clone());
        one.apply_zombification(solo.zombification());
        one.entity_mut().force_move(position.x, position.y);

        let mut two = Player::new(PlayerMode::P2).with_observers(observers);
        two.entity_mut().force_move(position.x, position.y);

        self.player_one = Some(one);
        self.player_two = Some(two);
        self.mode = Some(SessionMode::TwoPlayer);
        self.ports.scoreboard.remove_second_player_text();
        Ok(())
    }

    /// Removes the player in `slot` from the session and hands it back.
    ///
    /// An empty slot counts as a dead player for agreement purposes.
    pub fn kill_player(&mut self, slot: PlayerSlot) -> Option<Player> {
        self.slot_mut(slot).take()
    }

    /// Collision-checked move of the player in `slot` against the active room.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Blocked`] for illegal moves (the player does not
    /// move) and [`MoveError::PlayerMissing`] for an empty slot.
    pub fn move_player(&mut self, slot: PlayerSlot, dx: i32, dy: i32) -> Result<Point, MoveError> {
        let player = match slot {
            PlayerSlot::One => self.player_one.as_mut(),
            PlayerSlot::Two => self.player_two.as_mut(),
        }
        .ok_or(MoveError::PlayerMissing(slot))?;

        match self.map.find_room(self.current) {
            Some(room) => player.entity_mut().try_move(dx, dy, room),
            None => Err(MoveError::NoActiveRoom {
                destination: player.position().saturating_offset(dx, dy),
            }),
        }
    }

    /// Runs the per-tick state machine. See the module docs for the ordering.
    pub fn tick(&mut self) -> TickOutcome {
        let agreement = match self.mode {
            None => Agreement::Idle,
            Some(SessionMode::Solo) => {
                match self.player_one.as_mut().and_then(Player::take_room_request) {
                    Some(offset) => Agreement::Proceed(offset),
                    None => Agreement::Idle,
                }
            }
            Some(SessionMode::TwoPlayer) => {
                let one = Readiness::poll(self.player_one.as_mut());
                let two = Readiness::poll(self.player_two.as_mut());
                evaluate_agreement(one, two)
            }
        };

        let outcome = match agreement {
            Agreement::Idle => TickOutcome::Idle,
            Agreement::Waiting { ready } => TickOutcome::Waiting { ready },
            Agreement::Abort => TickOutcome::AllPlayersDown {
                cleared: self.pending.take(),
            },
            Agreement::Proceed(offset) => match self.load_room(offset) {
                Ok(_) => TickOutcome::Idle,
                Err(error) => TickOutcome::Rejected(error),
            },
        };

        match self.apply_pending() {
            Some(transition) => transition,
            None => outcome,
        }
    }

    /// Approves a transition by `offset` if a room exists there.
    ///
    /// Living players are forced across the seam immediately; the room switch
    /// itself happens at the end of the next [`tick`](Self::tick).
    ///
    /// # Errors
    ///
    /// Dropped with [`TransitionError::AlreadyPending`] while another transition
    /// waits, or [`TransitionError::RoomNotFound`] when the exit leads nowhere
    /// (including offsets that run past the addressable map). Neither changes
    /// any state.
    pub fn load_room(&mut self, offset: RoomOffset) -> Result<RoomCoord, TransitionError> {
        if let Some(pending) = self.pending {
            return Err(TransitionError::AlreadyPending { pending });
        }

        let target = match self.current.checked_offset(offset) {
            Some(target) if self.map.contains(target) => target,
            Some(target) => return Err(TransitionError::RoomNotFound { target }),
            None => {
                return Err(TransitionError::RoomNotFound {
                    target: self.current.saturating_offset(offset),
                });
            }
        };

        self.pending = Some(offset);
        let (dx, dy) = offset.scaled(self.config.entry_nudge);
        for player in [self.player_one.as_mut(), self.player_two.as_mut()]
            .into_iter()
            .flatten()
            .filter(|player| player.is_alive())
        {
            player.entity_mut().force_move(dx, dy);
        }
        Ok(target)
    }

    fn apply_pending(&mut self) -> Option<TickOutcome> {
        let offset = self.pending.take()?;
        let from = self.current;
        self.current = from.offset(offset);
        self.materialize_current_room();
        self.notify_camera();
        Some(TickOutcome::Transitioned {
            from,
            to: self.current,
            offset,
        })
    }

    fn materialize_current_room(&mut self) {
        if let Some(room) = self.map.find_room(self.current) {
            let placements = room.tile_placements();
            self.ports.tiles.place_tiles(self.current, &placements);
        }
    }

    fn notify_camera(&mut self) {
        let origin = self.current_room_origin();
        self.ports.camera.move_to(self.current, origin);
    }

    fn slot_mut(&mut self, slot: PlayerSlot) -> &mut Option<Player> {
        match slot {
            PlayerSlot::One => &mut self.player_one,
            PlayerSlot::Two => &mut self.player_two,
        }
    }
}

impl<C, T, S> RoomNavigator<C, T, S> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn map(&self) -> &Arc<dyn MapOracle> {
        &self.map
    }

    pub fn ports(&self) -> &Ports<C, T, S> {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut Ports<C, T, S> {
        &mut self.ports
    }

    pub fn mode(&self) -> Option<SessionMode> {
        self.mode
    }

    pub fn player(&self, slot: PlayerSlot) -> Option<&Player> {
        match slot {
            PlayerSlot::One => self.player_one.as_ref(),
            PlayerSlot::Two => self.player_two.as_ref(),
        }
    }

    pub fn player_mut(&mut self, slot: PlayerSlot) -> Option<&mut Player> {
        match slot {
            PlayerSlot::One => self.player_one.as_mut(),
            PlayerSlot::Two => self.player_two.as_mut(),
        }
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.player_one.iter().chain(self.player_two.iter())
    }

    pub fn pending_transition(&self) -> Option<RoomOffset> {
        self.pending
    }

    pub fn current_room_position(&self) -> RoomCoord {
        self.current
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.map.find_room(self.current)
    }

    /// Walkability grid of the active room (`0` walkable, `1` blocked markers).
    pub fn current_room_bounds(&self) -> Option<&WalkabilityGrid> {
        self.current_room().map(Room::walkability)
    }

    pub fn current_room_origin(&self) -> Point {
        self.current.origin()
    }

    pub fn current_room_max(&self) -> Point {
        self.current.bounds().max
    }

    pub fn current_room_rect(&self) -> RoomBounds {
        self.current.bounds()
    }
}

#[cfg(test)]
mod tests;
