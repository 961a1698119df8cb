use std::sync::Mutex;

use super::*;
use crate::env::{RoomMap, TileId, TilePlacement};
use crate::movement::PositionChanged;
use crate::state::EntityId;

#[derive(Debug, Default)]
struct RecordingCamera {
    moves: Vec<(RoomCoord, Point)>,
}

impl Camera for RecordingCamera {
    fn move_to(&mut self, room: RoomCoord, origin: Point) {
        self.moves.push((room, origin));
    }
}

#[derive(Debug, Default)]
struct RecordingCanvas {
    rooms: Vec<(RoomCoord, Vec<TilePlacement>)>,
}

impl TileCanvas for RecordingCanvas {
    fn place_tiles(&mut self, room: RoomCoord, tiles: &[TilePlacement]) {
        self.rooms.push((room, tiles.to_vec()));
    }
}

#[derive(Debug)]
struct Gate {
    allow: bool,
    prompt_visible: bool,
}

impl Scoreboard for Gate {
    fn can_spawn_second_player(&self) -> bool {
        self.allow
    }

    fn remove_second_player_text(&mut self) {
        self.prompt_visible = false;
    }
}

#[derive(Default)]
struct Recorder(Mutex<Vec<PositionChanged>>);

impl PositionObserver for Recorder {
    fn position_changed(&self, change: &PositionChanged) {
        self.0.lock().unwrap().push(*change);
    }
}

type TestNavigator = RoomNavigator<RecordingCamera, RecordingCanvas, Gate>;

fn floor_room(x: i32, y: i32) -> Room {
    Room::new(
        RoomCoord::new(x, y),
        [[TileId::FLOOR; GameConfig::ROOM_COLUMNS]; GameConfig::ROOM_ROWS],
    )
}

fn unloaded(coords: &[(i32, i32)], allow_second: bool) -> TestNavigator {
    let map = RoomMap::new(coords.iter().map(|&(x, y)| floor_room(x, y))).unwrap();
    let ports = Ports::new(
        RecordingCamera::default(),
        RecordingCanvas::default(),
        Gate {
            allow: allow_second,
            prompt_visible: true,
        },
    );
    RoomNavigator::new(GameConfig::default(), Arc::new(map), ports)
}

fn navigator(coords: &[(i32, i32)]) -> TestNavigator {
    let mut navigator = unloaded(coords, true);
    navigator.load().unwrap();
    navigator
}

fn two_players(coords: &[(i32, i32)]) -> TestNavigator {
    let mut navigator = navigator(coords);
    navigator.spawn_second_player().unwrap();
    navigator
}

fn request(navigator: &mut TestNavigator, slot: PlayerSlot, offset: RoomOffset) {
    navigator
        .player_mut(slot)
        .expect("player present")
        .request_room_change(offset);
}

fn position(navigator: &TestNavigator, slot: PlayerSlot) -> Point {
    navigator.player(slot).expect("player present").position()
}

#[test]
fn load_spawns_solo_player_and_materializes_origin() {
    let navigator = navigator(&[(0, 0), (1, 0)]);

    assert_eq!(navigator.mode(), Some(SessionMode::Solo));
    let player = navigator.player(PlayerSlot::One).unwrap();
    assert_eq!(player.mode(), PlayerMode::Solo);
    assert_eq!(player.position(), Point::new(20, 20));
    assert_eq!(player.entity().z_index(), 20);
    assert!(navigator.player(PlayerSlot::Two).is_none());

    let canvas = &navigator.ports().tiles;
    assert_eq!(canvas.rooms.len(), 1);
    assert_eq!(canvas.rooms[0].0, RoomCoord::ORIGIN);
    assert_eq!(canvas.rooms[0].1.len(), 54);
    assert_eq!(
        navigator.ports().camera.moves,
        vec![(RoomCoord::ORIGIN, Point::ORIGIN)]
    );
}

#[test]
fn load_requires_origin_room_and_runs_once() {
    let mut missing = unloaded(&[(1, 0)], true);
    assert_eq!(
        missing.load(),
        Err(NavigationError::StartingRoomMissing(RoomCoord::ORIGIN))
    );
    assert_eq!(missing.mode(), None);
    assert_eq!(missing.tick(), TickOutcome::Idle);

    let mut loaded = navigator(&[(0, 0)]);
    assert_eq!(loaded.load(), Err(NavigationError::AlreadyLoaded));
}

#[test]
fn solo_request_switches_room_within_the_tick() {
    let mut navigator = navigator(&[(0, 0), (1, 0)]);
    request(&mut navigator, PlayerSlot::One, RoomOffset::EAST);

    let outcome = navigator.tick();

    assert_eq!(
        outcome,
        TickOutcome::Transitioned {
            from: RoomCoord::ORIGIN,
            to: RoomCoord::new(1, 0),
            offset: RoomOffset::EAST,
        }
    );
    assert_eq!(navigator.current_room_position(), RoomCoord::new(1, 0));
    assert_eq!(navigator.pending_transition(), None);
    assert_eq!(position(&navigator, PlayerSlot::One), Point::new(22, 20));
    assert_eq!(
        navigator.ports().camera.moves.last(),
        Some(&(RoomCoord::new(1, 0), Point::new(144, 0)))
    );
    let (room, tiles) = navigator.ports().tiles.rooms.last().unwrap();
    assert_eq!(*room, RoomCoord::new(1, 0));
    assert_eq!(tiles[0].position, Point::new(144, 0));

    assert_eq!(navigator.tick(), TickOutcome::Idle);
}

#[test]
fn exit_into_the_void_is_dropped() {
    let mut navigator = navigator(&[(0, 0), (1, 0)]);
    request(&mut navigator, PlayerSlot::One, RoomOffset::WEST);

    assert_eq!(
        navigator.tick(),
        TickOutcome::Rejected(TransitionError::RoomNotFound {
            target: RoomCoord::new(-1, 0)
        })
    );
    assert_eq!(navigator.current_room_position(), RoomCoord::ORIGIN);
    assert_eq!(navigator.pending_transition(), None);
    assert_eq!(position(&navigator, PlayerSlot::One), Point::new(20, 20));
    assert_eq!(navigator.ports().camera.moves.len(), 1);
}

#[test]
fn second_load_room_while_pending_is_a_no_op() {
    let mut navigator = navigator(&[(0, 0), (1, 0), (0, 1)]);

    assert_eq!(
        navigator.load_room(RoomOffset::EAST),
        Ok(RoomCoord::new(1, 0))
    );
    assert_eq!(navigator.pending_transition(), Some(RoomOffset::EAST));
    assert_eq!(position(&navigator, PlayerSlot::One), Point::new(22, 20));

    assert_eq!(
        navigator.load_room(RoomOffset::SOUTH),
        Err(TransitionError::AlreadyPending {
            pending: RoomOffset::EAST
        })
    );
    assert_eq!(navigator.pending_transition(), Some(RoomOffset::EAST));
    assert_eq!(navigator.current_room_position(), RoomCoord::ORIGIN);
    assert_eq!(position(&navigator, PlayerSlot::One), Point::new(22, 20));

    assert!(navigator.tick().is_transition());
    assert_eq!(navigator.current_room_position(), RoomCoord::new(1, 0));
    assert_eq!(navigator.tick(), TickOutcome::Idle);
}

#[test]
fn pending_transition_wins_over_a_rejected_request() {
    let mut navigator = navigator(&[(0, 0), (1, 0)]);
    navigator.load_room(RoomOffset::EAST).unwrap();
    request(&mut navigator, PlayerSlot::One, RoomOffset::EAST);

    let outcome = navigator.tick();
    assert_eq!(
        outcome,
        TickOutcome::Transitioned {
            from: RoomCoord::ORIGIN,
            to: RoomCoord::new(1, 0),
            offset: RoomOffset::EAST,
        }
    );
    assert_eq!(position(&navigator, PlayerSlot::One), Point::new(22, 20));
}

#[test]
fn two_players_must_agree_in_the_same_tick() {
    let mut navigator = two_players(&[(0, 0), (1, 0)]);

    request(&mut navigator, PlayerSlot::One, RoomOffset::EAST);
    assert_eq!(
        navigator.tick(),
        TickOutcome::Waiting {
            ready: PlayerSlot::One
        }
    );
    assert_eq!(navigator.current_room_position(), RoomCoord::ORIGIN);
    assert_eq!(position(&navigator, PlayerSlot::One), Point::new(20, 20));

    // The first request was consumed by the poll.
    request(&mut navigator, PlayerSlot::Two, RoomOffset::EAST);
    assert_eq!(
        navigator.tick(),
        TickOutcome::Waiting {
            ready: PlayerSlot::Two
        }
    );

    request(&mut navigator, PlayerSlot::One, RoomOffset::EAST);
    request(&mut navigator, PlayerSlot::Two, RoomOffset::EAST);
    assert_eq!(
        navigator.tick(),
        TickOutcome::Transitioned {
            from: RoomCoord::ORIGIN,
            to: RoomCoord::new(1, 0),
            offset: RoomOffset::EAST,
        }
    );
    assert_eq!(position(&navigator, PlayerSlot::One), Point::new(22, 20));
    assert_eq!(position(&navigator, PlayerSlot::Two), Point::new(22, 20));
}

#[test]
fn dead_first_player_defers_to_second_players_offset() {
    let mut navigator = two_players(&[(0, 0), (1, 0), (0, -1)]);
    request(&mut navigator, PlayerSlot::One, RoomOffset::EAST);
    navigator.player_mut(PlayerSlot::One).unwrap().kill();
    request(&mut navigator, PlayerSlot::Two, RoomOffset::NORTH);

    assert_eq!(
        navigator.tick(),
        TickOutcome::Transitioned {
            from: RoomCoord::ORIGIN,
            to: RoomCoord::new(0, -1),
            offset: RoomOffset::NORTH,
        }
    );
    // Dead players are not carried across the seam.
    assert_eq!(position(&navigator, PlayerSlot::One), Point::new(20, 20));
    assert_eq!(position(&navigator, PlayerSlot::Two), Point::new(20, 18));
}

#[test]
fn removed_slot_counts_as_dead() {
    let mut navigator = two_players(&[(0, 0), (1, 0)]);
    let removed = navigator.kill_player(PlayerSlot::Two).unwrap();
    assert_eq!(removed.mode(), PlayerMode::P2);

    request(&mut navigator, PlayerSlot::One, RoomOffset::EAST);
    assert!(navigator.tick().is_transition());
    assert_eq!(navigator.players().count(), 1);
}

#[test]
fn all_players_down_discards_the_pending_transition() {
    let mut navigator = two_players(&[(0, 0), (1, 0)]);
    navigator.load_room(RoomOffset::EAST).unwrap();
    navigator.player_mut(PlayerSlot::One).unwrap().kill();
    navigator.kill_player(PlayerSlot::Two);

    assert_eq!(
        navigator.tick(),
        TickOutcome::AllPlayersDown {
            cleared: Some(RoomOffset::EAST)
        }
    );
    assert_eq!(navigator.current_room_position(), RoomCoord::ORIGIN);
    assert_eq!(navigator.pending_transition(), None);
    assert_eq!(navigator.ports().camera.moves.len(), 1);

    assert_eq!(
        navigator.tick(),
        TickOutcome::AllPlayersDown { cleared: None }
    );
}

#[test]
fn second_player_inherits_position_zombification_and_observers() {
    let recorder = Arc::new(Recorder::default());
    let observer: Arc<dyn PositionObserver> = recorder.clone();
    let mut navigator = unloaded(&[(0, 0)], true).with_observer(observer);
    navigator.load().unwrap();

    navigator.move_player(PlayerSlot::One, 10, 5).unwrap();
    navigator
        .player_mut(PlayerSlot::One)
        .unwrap()
        .apply_zombification(4);
    navigator.spawn_second_player().unwrap();

    assert_eq!(navigator.mode(), Some(SessionMode::TwoPlayer));
    let one = navigator.player(PlayerSlot::One).unwrap();
    let two = navigator.player(PlayerSlot::Two).unwrap();
    assert_eq!(one.mode(), PlayerMode::P1);
    assert_eq!(two.mode(), PlayerMode::P2);
    assert_eq!(one.position(), Point::new(30, 25));
    assert_eq!(two.position(), Point::new(30, 25));
    assert_eq!(one.zombification(), 4);
    assert_eq!(two.zombification(), 0);
    assert!(!navigator.ports().scoreboard.prompt_visible);

    navigator.move_player(PlayerSlot::Two, 0, 3).unwrap();
    let changes = recorder.0.lock().unwrap();
    let last = changes.last().unwrap();
    assert_eq!(last.entity, EntityId::PLAYER_TWO);
    assert_eq!(last.position, Point::new(30, 28));
}

#[test]
fn second_player_spawn_is_gated() {
    let mut denied = unloaded(&[(0, 0)], false);
    assert_eq!(denied.spawn_second_player(), Err(SpawnError::NotLoaded));
    denied.load().unwrap();
    assert_eq!(denied.spawn_second_player(), Err(SpawnError::NotAllowed));
    assert_eq!(denied.mode(), Some(SessionMode::Solo));
    assert!(denied.ports().scoreboard.prompt_visible);

    let mut twice = two_players(&[(0, 0)]);
    assert_eq!(
        twice.spawn_second_player(),
        Err(SpawnError::AlreadyTwoPlayers)
    );

    let mut dead = navigator(&[(0, 0)]);
    dead.player_mut(PlayerSlot::One).unwrap().kill();
    assert_eq!(dead.spawn_second_player(), Err(SpawnError::NoLivingPlayer));
    assert!(dead.player(PlayerSlot::One).is_some());
}

#[test]
fn movement_is_checked_against_the_active_room() {
    let mut navigator = navigator(&[(0, 0), (1, 0)]);
    assert_eq!(
        navigator.move_player(PlayerSlot::One, 100, 0),
        Ok(Point::new(120, 20))
    );
    assert_eq!(
        navigator.move_player(PlayerSlot::One, 30, 0),
        Err(MoveError::Blocked {
            destination: Point::new(150, 20)
        })
    );

    request(&mut navigator, PlayerSlot::One, RoomOffset::EAST);
    navigator.tick();
    assert_eq!(position(&navigator, PlayerSlot::One), Point::new(122, 20));

    // (122, 20) belongs to the previous room; the new grid rejects it.
    assert!(navigator.move_player(PlayerSlot::One, 1, 0).is_err());
    assert_eq!(
        navigator.move_player(PlayerSlot::One, 30, 0),
        Ok(Point::new(152, 20))
    );
    assert_eq!(
        navigator.move_player(PlayerSlot::Two, 1, 0),
        Err(MoveError::PlayerMissing(PlayerSlot::Two))
    );
}

#[test]
fn oversized_moves_are_rejected_without_moving() {
    let mut navigator = navigator(&[(0, 0)]);

    assert_eq!(
        navigator.move_player(PlayerSlot::One, i32::MAX, 0),
        Err(MoveError::Blocked {
            destination: Point::new(i32::MAX, 20)
        })
    );
    assert!(navigator.move_player(PlayerSlot::One, 0, i32::MIN).is_err());
    assert_eq!(position(&navigator, PlayerSlot::One), Point::new(20, 20));
    assert_eq!(
        navigator.move_player(PlayerSlot::One, 1, 0),
        Ok(Point::new(21, 20))
    );
}

#[test]
fn offsets_past_the_addressable_map_find_no_room() {
    let mut navigator = navigator(&[(0, 0), (1, 0)]);

    assert_eq!(
        navigator.load_room(RoomOffset::new(i32::MAX, 0)),
        Err(TransitionError::RoomNotFound {
            target: RoomCoord::new(i32::MAX, 0)
        })
    );
    assert_eq!(
        navigator.load_room(RoomOffset::new(0, i32::MIN)),
        Err(TransitionError::RoomNotFound {
            target: RoomCoord::new(0, i32::MIN)
        })
    );
    assert_eq!(position(&navigator, PlayerSlot::One), Point::new(20, 20));
    assert_eq!(navigator.load_room(RoomOffset::EAST), Ok(RoomCoord::new(1, 0)));
}

#[test]
fn room_lookup_follows_relative_offsets() {
    let mut navigator = navigator(&[(0, 0), (1, 0), (1, 1), (2, 1)]);
    for offset in [RoomOffset::EAST, RoomOffset::SOUTH] {
        request(&mut navigator, PlayerSlot::One, offset);
        assert!(navigator.tick().is_transition());
    }
    assert_eq!(navigator.current_room_position(), RoomCoord::new(1, 1));
    assert_eq!(navigator.current_room_origin(), Point::new(144, 96));
    assert_eq!(navigator.current_room_max(), Point::new(288, 192));

    request(&mut navigator, PlayerSlot::One, RoomOffset::EAST);
    navigator.tick();
    assert_eq!(navigator.current_room_position(), RoomCoord::new(2, 1));
    assert_eq!(
        navigator.current_room().map(Room::coord),
        Some(RoomCoord::new(2, 1))
    );

    request(&mut navigator, PlayerSlot::One, RoomOffset::EAST);
    assert_eq!(
        navigator.tick(),
        TickOutcome::Rejected(TransitionError::RoomNotFound {
            target: RoomCoord::new(3, 1)
        })
    );
    assert_eq!(navigator.current_room_position(), RoomCoord::new(2, 1));
}

#[test]
fn current_room_bounds_marks_blocked_cells() {
    let mut tiles = [[TileId::FLOOR; GameConfig::ROOM_COLUMNS]; GameConfig::ROOM_ROWS];
    tiles[0] = [TileId(2); GameConfig::ROOM_COLUMNS];
    tiles[5][8] = TileId::EMPTY;
    let map = RoomMap::new([Room::new(RoomCoord::ORIGIN, tiles)]).unwrap();
    let mut navigator = RoomNavigator::new(
        GameConfig::default(),
        Arc::new(map),
        Ports::<(), (), ()>::default(),
    );
    navigator.load().unwrap();

    let markers = navigator.current_room_bounds().unwrap().markers();
    assert_eq!(markers[0], [1; GameConfig::ROOM_COLUMNS]);
    assert_eq!(markers[1], [0; GameConfig::ROOM_COLUMNS]);
    assert_eq!(markers[5][8], 1);
}
