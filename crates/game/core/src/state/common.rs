use std::fmt;
use std::ops::Add;

use crate::config::GameConfig;

/// Unique identifier for a movable entity tracked by the navigation core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the first (or solo) player character.
    pub const PLAYER_ONE: Self = Self(0);

    /// Reserved identifier for the second player character.
    pub const PLAYER_TWO: Self = Self(1);
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// World-space position expressed in pixel units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Like [`Point::offset`], but `None` when either axis leaves the `i32` range.
    pub const fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Like [`Point::offset`], clamped to the `i32` range on each axis.
    #[must_use]
    pub const fn saturating_offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.offset(rhs.x, rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Address of a room on the map, relative to the origin room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomCoord {
    pub x: i32,
    pub y: i32,
}

impl RoomCoord {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Largest `|x|` whose pixel rectangle still fits in `i32`.
    pub const MAX_ABS_X: i32 = i32::MAX / GameConfig::ROOM_PIXEL_WIDTH - 1;

    /// Largest `|y|` whose pixel rectangle still fits in `i32`.
    pub const MAX_ABS_Y: i32 = i32::MAX / GameConfig::ROOM_PIXEL_HEIGHT - 1;

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate reached by applying `offset` to this one.
    #[must_use]
    pub const fn offset(self, offset: RoomOffset) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }

    /// Applies `offset`, or `None` when the result is not [addressable](Self::is_addressable).
    pub const fn checked_offset(self, offset: RoomOffset) -> Option<Self> {
        match (self.x.checked_add(offset.x), self.y.checked_add(offset.y)) {
            (Some(x), Some(y)) if Self::new(x, y).is_addressable() => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Applies `offset`, clamping each axis to the `i32` range.
    ///
    /// Only meant for reporting a target that [`RoomCoord::checked_offset`] refused.
    #[must_use]
    pub const fn saturating_offset(self, offset: RoomOffset) -> Self {
        Self::new(self.x.saturating_add(offset.x), self.y.saturating_add(offset.y))
    }

    /// Whether the room's pixel rectangle ([`RoomCoord::bounds`]) is representable.
    ///
    /// Maps only ever hold addressable rooms.
    pub const fn is_addressable(self) -> bool {
        self.x.unsigned_abs() <= Self::MAX_ABS_X as u32
            && self.y.unsigned_abs() <= Self::MAX_ABS_Y as u32
    }

    /// World-space pixel position of the room's top-left corner.
    pub const fn origin(self) -> Point {
        Point::new(
            self.x * GameConfig::ROOM_PIXEL_WIDTH,
            self.y * GameConfig::ROOM_PIXEL_HEIGHT,
        )
    }

    /// Pixel-space rectangle covered by the room.
    pub const fn bounds(self) -> RoomBounds {
        let min = self.origin();
        RoomBounds {
            min,
            max: Point::new(
                min.x + GameConfig::ROOM_PIXEL_WIDTH,
                min.y + GameConfig::ROOM_PIXEL_HEIGHT,
            ),
        }
    }
}

impl fmt::Display for RoomCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Relative displacement between two rooms, in room units.
///
/// Screen coordinates grow downwards, so north is `y = -1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomOffset {
    pub x: i32,
    pub y: i32,
}

impl RoomOffset {
    pub const NORTH: Self = Self { x: 0, y: -1 };
    pub const SOUTH: Self = Self { x: 0, y: 1 };
    pub const EAST: Self = Self { x: 1, y: 0 };
    pub const WEST: Self = Self { x: -1, y: 0 };

    pub const ALL: [RoomOffset; 4] = [Self::NORTH, Self::SOUTH, Self::EAST, Self::WEST];

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel displacement obtained by scaling the offset by `factor`.
    pub const fn scaled(self, factor: i32) -> (i32, i32) {
        (self.x.saturating_mul(factor), self.y.saturating_mul(factor))
    }
}

impl fmt::Display for RoomOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.x, self.y)
    }
}

/// Half-open pixel rectangle `[min, max)` covered by a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomBounds {
    pub min: Point,
    pub max: Point,
}

impl RoomBounds {
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x && point.y >= self.min.y && point.x < self.max.x && point.y < self.max.y
    }

    /// Direction of the neighbouring room a point outside the rectangle falls towards.
    ///
    /// Horizontal exits win when the point is beyond a corner. Returns `None` for
    /// points inside the rectangle.
    pub fn exit_offset(&self, point: Point) -> Option<RoomOffset> {
        if point.x < self.min.x {
            Some(RoomOffset::WEST)
        } else if point.x >= self.max.x {
            Some(RoomOffset::EAST)
        } else if point.y < self.min.y {
            Some(RoomOffset::NORTH)
        } else if point.y >= self.max.y {
            Some(RoomOffset::SOUTH)
        } else {
            None
        }
    }
}
