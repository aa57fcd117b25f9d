// src/geometry/direction.rs

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::geometry::Vec3;

/// The six axis-aligned unit directions.
///
/// The cardinals are listed in the order of entity `Rotation` data, so
/// `cardinals()` doubles as a lookup for quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    South,
    West,
    North,
    East,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::South,
        Direction::West,
        Direction::North,
        Direction::East,
        Direction::Up,
        Direction::Down,
    ];

    pub fn cardinals() -> [Direction; 4] {
        [
            Direction::South,
            Direction::West,
            Direction::North,
            Direction::East,
        ]
    }

    pub fn vector(self) -> Vec3 {
        match self {
            Direction::South => Vec3::new(0.0, 0.0, 1.0),
            Direction::West => Vec3::new(-1.0, 0.0, 0.0),
            Direction::North => Vec3::new(0.0, 0.0, -1.0),
            Direction::East => Vec3::new(1.0, 0.0, 0.0),
            Direction::Up => Vec3::new(0.0, 1.0, 0.0),
            Direction::Down => Vec3::new(0.0, -1.0, 0.0),
        }
    }

    /// The NBT `facing` value for this direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::South => "south",
            Direction::West => "west",
            Direction::North => "north",
            Direction::East => "east",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn from_vector(vector: Vec3) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.vector() == vector)
    }

    /// The cardinal direction faced when looking from `p1` towards `p2`.
    pub fn facing(p1: Vec3, p2: Vec3) -> Direction {
        let mut angle = (p2.z - p1.z).atan2(p2.x - p1.x);
        angle += PI * 5.0 / 4.0;
        angle /= PI / 2.0;
        let quarter = (angle as usize + 1) % 4;
        Self::cardinals()[quarter]
    }
}

impl From<Direction> for Vec3 {
    fn from(direction: Direction) -> Self {
        direction.vector()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == name)
            .ok_or(Error::UnknownName {
                kind: "direction",
                name,
            })
    }
}

/// The three coordinate planes of a cuboid, as pairs of array axes
/// (0 = x, 1 = y, 2 = z).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Plane {
    XY,
    XZ,
    YZ,
}

impl Plane {
    pub fn axes(self) -> (usize, usize) {
        match self {
            Plane::XY => (0, 1),
            Plane::XZ => (0, 2),
            Plane::YZ => (1, 2),
        }
    }
}
