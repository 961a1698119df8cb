//! High-level runtime orchestrator.
//!
//! The runtime loads content, wires the room navigator to event-publishing
//! ports, and drives it one frame at a time: queued player commands are applied
//! first, then the navigator ticks.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::broadcast;

use game_content::ContentFactory;
use game_core::{
    GameConfig, GameError, MapOracle, MoveError, PlayerSlot, Ports, RoomCoord, RoomNavigator,
    TickOutcome,
};

use crate::adapters::{BusCamera, BusPositionObserver, BusTileCanvas, SessionScoreboard};
use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, PlayerEvent, RoomEvent, SessionEvent, Topic};
use crate::input::{PlayerCommand, Script};

/// Navigator type driven by the runtime.
pub type SessionNavigator = RoomNavigator<BusCamera, BusTileCanvas, SessionScoreboard>;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Directory holding `config.toml` and `maps/`.
    pub data_dir: PathBuf,
    /// Map file stem under `maps/`.
    pub map_name: String,
    pub event_buffer_size: usize,
    /// Whether the scoreboard lets a second player join.
    pub allow_second_player: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            map_name: "playground".to_string(),
            event_buffer_size: 100,
            allow_second_player: true,
        }
    }
}

/// Summary of a finished script run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptReport {
    pub ticks: u64,
    pub transitions: Vec<(RoomCoord, RoomCoord)>,
    pub final_room: RoomCoord,
}

/// Main runtime that drives a navigation session.
pub struct Runtime {
    navigator: SessionNavigator,
    bus: EventBus,
    frame: u64,
    players_down: bool,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Build from `config` and load the session in one go.
    pub fn start(config: RuntimeConfig) -> Result<Self> {
        let mut runtime = Self::builder().config(config).build()?;
        runtime.load()?;
        Ok(runtime)
    }

    /// Materialize the starting room and spawn the solo player.
    ///
    /// Separate from [`RuntimeBuilder::build`] so that subscribers created in
    /// between see the starting room's events.
    pub fn load(&mut self) -> Result<()> {
        self.navigator.load()?;
        let room = self.navigator.current_room_position();
        let spawn = self.navigator.config().spawn_point;
        tracing::info!("Session loaded in room {} with player at {}", room, spawn);
        self.bus.publish(SessionEvent::Loaded { room, spawn });
        Ok(())
    }

    /// Subscribe to events on one topic
    pub fn subscribe_events(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn navigator(&self) -> &SessionNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut SessionNavigator {
        &mut self.navigator
    }

    /// Number of frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Apply `commands` and run one navigator tick.
    pub fn step(&mut self, commands: &[PlayerCommand]) -> TickOutcome {
        for command in commands {
            self.apply(*command);
        }

        let outcome = self.navigator.tick();
        self.frame += 1;
        self.report(&outcome);
        outcome
    }

    /// Run every frame of `script` in order.
    pub fn run_script(&mut self, script: &Script) -> ScriptReport {
        let mut report = ScriptReport {
            ticks: 0,
            transitions: Vec::new(),
            final_room: self.navigator.current_room_position(),
        };

        for commands in script.ticks() {
            if let TickOutcome::Transitioned { from, to, .. } = self.step(commands) {
                report.transitions.push((from, to));
            }
            report.ticks += 1;
        }

        report.final_room = self.navigator.current_room_position();
        tracing::info!(
            "Script finished after {} ticks with {} transitions, in room {}",
            report.ticks,
            report.transitions.len(),
            report.final_room
        );
        report
    }

    fn apply(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Move { slot, dx, dy } => self.move_player(slot, dx, dy),
            PlayerCommand::RequestRoom { slot, offset } => {
                match self.navigator.player_mut(slot) {
                    Some(player) => player.request_room_change(offset),
                    None => tracing::debug!("Room request from empty slot {}", slot),
                }
            }
            PlayerCommand::Die { slot } => {
                if let Some(player) = self.navigator.player_mut(slot)
                    && player.is_alive()
                {
                    player.kill();
                    tracing::info!("Player {} died", slot);
                    self.bus.publish(PlayerEvent::Died { slot });
                }
            }
            PlayerCommand::Remove { slot } => {
                if self.navigator.kill_player(slot).is_some() {
                    tracing::info!("Player {} removed from session", slot);
                    self.bus.publish(PlayerEvent::Removed { slot });
                }
            }
            PlayerCommand::JoinSecondPlayer => match self.navigator.spawn_second_player() {
                Ok(()) => {
                    tracing::info!("Second player joined");
                    self.bus.publish(SessionEvent::SecondPlayerJoined);
                }
                Err(error) => {
                    tracing::warn!(
                        "Second player spawn refused [{}]: {}",
                        error.error_code(),
                        error
                    );
                }
            },
        }
    }

    fn move_player(&mut self, slot: PlayerSlot, dx: i32, dy: i32) {
        if self
            .navigator
            .player(slot)
            .is_some_and(|player| player.is_dead())
        {
            tracing::trace!("Ignoring move for dead player {}", slot);
            return;
        }

        match self.navigator.move_player(slot, dx, dy) {
            Ok(_) => {}
            Err(MoveError::Blocked { destination }) => {
                let Some(offset) = self.navigator.current_room_rect().exit_offset(destination)
                else {
                    tracing::trace!("Player {} blocked at {}", slot, destination);
                    return;
                };
                if let Some(player) = self.navigator.player_mut(slot) {
                    player.request_room_change(offset);
                    tracing::debug!("Player {} requested exit {}", slot, offset);
                    self.bus.publish(PlayerEvent::ExitRequested { slot, offset });
                }
            }
            Err(error) => {
                tracing::debug!("Move ignored [{}]: {}", error.error_code(), error);
            }
        }
    }

    fn report(&mut self, outcome: &TickOutcome) {
        let players_down = matches!(outcome, TickOutcome::AllPlayersDown { .. });
        let newly_down = players_down && !self.players_down;
        self.players_down = players_down;

        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Waiting { ready } => {
                tracing::debug!(
                    "Frame {}: player {} waiting for partner to reach the exit",
                    self.frame,
                    ready
                );
            }
            TickOutcome::Rejected(error) => {
                tracing::debug!(
                    "Frame {}: transition rejected [{}]: {}",
                    self.frame,
                    error.error_code(),
                    error
                );
            }
            TickOutcome::AllPlayersDown { cleared } => {
                if newly_down || cleared.is_some() {
                    tracing::info!("Frame {}: all players down", self.frame);
                    self.bus
                        .publish(SessionEvent::AllPlayersDown { cleared: *cleared });
                }
            }
            TickOutcome::Transitioned { from, to, offset } => {
                tracing::info!("Frame {}: room {} -> {}", self.frame, from, to);
                self.bus.publish(RoomEvent::Changed {
                    from: *from,
                    to: *to,
                    offset: *offset,
                });
            }
        }
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    game_config: Option<GameConfig>,
    map: Option<Arc<dyn MapOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            game_config: None,
            map: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `game_config` instead of reading `config.toml`.
    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = Some(game_config);
        self
    }

    /// Use `map` instead of loading `maps/{map_name}` from the data directory.
    pub fn map(mut self, map: Arc<dyn MapOracle>) -> Self {
        self.map = Some(map);
        self
    }

    pub fn allow_second_player(mut self, allow: bool) -> Self {
        self.config.allow_second_player = allow;
        self
    }

    /// Build the runtime. Content not supplied directly is read from
    /// `config.data_dir`; a missing `config.toml` means default settings.
    pub fn build(self) -> Result<Runtime> {
        let factory = ContentFactory::new(&self.config.data_dir);

        let game_config = match self.game_config {
            Some(game_config) => game_config,
            None => factory
                .load_config_or_default()
                .map_err(RuntimeError::content)?,
        };

        let map = match self.map {
            Some(map) => map,
            None => {
                let map = factory
                    .load_map(&self.config.map_name)
                    .map_err(RuntimeError::content)?;
                tracing::debug!(
                    "Loaded map '{}' with {} rooms",
                    self.config.map_name,
                    map.len()
                );
                Arc::new(map)
            }
        };

        let bus = EventBus::with_capacity(self.config.event_buffer_size);
        let ports = Ports::new(
            BusCamera::new(bus.clone()),
            BusTileCanvas::new(bus.clone()),
            SessionScoreboard::new(bus.clone(), self.config.allow_second_player),
        );
        let navigator = RoomNavigator::new(game_config, map, ports)
            .with_observer(Arc::new(BusPositionObserver::new(bus.clone())));

        Ok(Runtime {
            navigator,
            bus,
            frame: 0,
            players_down: false,
        })
    }
}
