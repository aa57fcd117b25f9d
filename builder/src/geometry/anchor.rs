// src/geometry/anchor.rs

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::Error;

/// Anchor point of a 2D profile: which cell lands on the start position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Middle,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
        Anchor::Middle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Anchor::TopLeft => "top_left",
            Anchor::TopRight => "top_right",
            Anchor::BottomLeft => "bottom_left",
            Anchor::BottomRight => "bottom_right",
            Anchor::Middle => "middle",
        }
    }
}

/// Anchor point of a cuboid volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor3 {
    Middle,
    BottomMiddle,
    TopMiddle,

    BottomSw,
    BottomNw,
    BottomNe,
    BottomSe,

    TopSw,
    TopNw,
    TopNe,
    TopSe,
}

impl Anchor3 {
    pub const ALL: [Anchor3; 11] = [
        Anchor3::Middle,
        Anchor3::BottomMiddle,
        Anchor3::TopMiddle,
        Anchor3::BottomSw,
        Anchor3::BottomNw,
        Anchor3::BottomNe,
        Anchor3::BottomSe,
        Anchor3::TopSw,
        Anchor3::TopNw,
        Anchor3::TopNe,
        Anchor3::TopSe,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Anchor3::Middle => "middle",
            Anchor3::BottomMiddle => "bottom_middle",
            Anchor3::TopMiddle => "top_middle",
            Anchor3::BottomSw => "bottom_sw",
            Anchor3::BottomNw => "bottom_nw",
            Anchor3::BottomNe => "bottom_ne",
            Anchor3::BottomSe => "bottom_se",
            Anchor3::TopSw => "top_sw",
            Anchor3::TopNw => "top_nw",
            Anchor3::TopNe => "top_ne",
            Anchor3::TopSe => "top_se",
        }
    }

    pub fn on(self, face: Anchor3Face) -> bool {
        use Anchor3::*;

        match face {
            Anchor3Face::Top => matches!(self, TopSw | TopNw | TopNe | TopSe | TopMiddle),
            Anchor3Face::Bottom => matches!(self, BottomSw | BottomNw | BottomNe | BottomSe),
            Anchor3Face::MiddleFace => matches!(self, BottomMiddle | TopMiddle),
            Anchor3Face::North => matches!(self, TopNw | TopNe | BottomNw | BottomNe),
            Anchor3Face::South => matches!(self, TopSw | TopSe | BottomSw | BottomSe),
            Anchor3Face::East => matches!(self, TopNe | TopSe | BottomNe | BottomSe),
            Anchor3Face::West => matches!(self, TopSw | TopNw | BottomSw | BottomNw),
        }
    }
}

/// Groupings of [`Anchor3`] by the face of the volume they sit on.
/// `MiddleFace` holds the centres of the top and bottom faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor3Face {
    Top,
    Bottom,
    MiddleFace,
    North,
    South,
    East,
    West,
}

impl Anchor3Face {
    pub fn members(self) -> impl Iterator<Item = Anchor3> {
        Anchor3::ALL.into_iter().filter(move |a| a.on(self))
    }
}

static ANCHOR_NAMES: Lazy<HashMap<&'static str, Anchor>> = Lazy::new(|| {
    let mut names: HashMap<_, _> = Anchor::ALL.into_iter().map(|a| (a.name(), a)).collect();
    names.insert("center", Anchor::Middle);
    names.insert("centre", Anchor::Middle);
    names
});

static ANCHOR3_NAMES: Lazy<HashMap<&'static str, Anchor3>> = Lazy::new(|| {
    let mut names: HashMap<_, _> = Anchor3::ALL.into_iter().map(|a| (a.name(), a)).collect();
    names.insert("center", Anchor3::Middle);
    names.insert("centre", Anchor3::Middle);
    names.insert("bottom_center", Anchor3::BottomMiddle);
    names.insert("bottom_centre", Anchor3::BottomMiddle);
    names.insert("top_center", Anchor3::TopMiddle);
    names.insert("top_centre", Anchor3::TopMiddle);
    names
});

static ANCHOR3_FACE_NAMES: Lazy<HashMap<&'static str, Anchor3Face>> = Lazy::new(|| {
    HashMap::from([
        ("top", Anchor3Face::Top),
        ("bottom", Anchor3Face::Bottom),
        ("middle_face", Anchor3Face::MiddleFace),
        ("center_face", Anchor3Face::MiddleFace),
        ("centre_face", Anchor3Face::MiddleFace),
        ("north", Anchor3Face::North),
        ("south", Anchor3Face::South),
        ("east", Anchor3Face::East),
        ("west", Anchor3Face::West),
    ])
});

fn lookup<T: Copy>(table: &HashMap<&'static str, T>, kind: &'static str, s: &str) -> Result<T, Error> {
    let name = s.trim().to_ascii_lowercase().replace('-', "_");
    table
        .get(name.as_str())
        .copied()
        .ok_or(Error::UnknownName { kind, name })
}

impl FromStr for Anchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        lookup(&ANCHOR_NAMES, "anchor", s)
    }
}

impl FromStr for Anchor3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        lookup(&ANCHOR3_NAMES, "anchor3", s)
    }
}

impl FromStr for Anchor3Face {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        lookup(&ANCHOR3_FACE_NAMES, "anchor3 face", s)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Anchor3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
