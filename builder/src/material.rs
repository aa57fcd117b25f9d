// src/material.rs

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

const NAMESPACE: &str = "minecraft:";

/// Key that marks a material leaf in persisted item lists.
pub const ITEM_KEY: &str = "__Item__";

/// An opaque token naming a placeable substance, without its namespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "TaggedItem", from = "TaggedItem")]
pub struct Item(Cow<'static, str>);

impl Item {
    /// Nothing placed here.
    pub const AIR: Item = Item::from_static("air");
    pub const STONE: Item = Item::from_static("stone");
    pub const GLASS: Item = Item::from_static("glass");
    pub const RED_CONCRETE: Item = Item::from_static("red_concrete");
    pub const GREEN_CONCRETE: Item = Item::from_static("green_concrete");
    pub const BLUE_CONCRETE: Item = Item::from_static("blue_concrete");
    pub const YELLOW_CONCRETE: Item = Item::from_static("yellow_concrete");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Builds an item from a server-side name, dropping any namespace.
    pub fn new(name: &str) -> Self {
        let name = name.trim().to_ascii_lowercase();
        let name = name.strip_prefix(NAMESPACE).unwrap_or(&name).to_owned();
        Self(Cow::Owned(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_air(&self) -> bool {
        *self == Item::AIR
    }
}

impl Default for Item {
    fn default() -> Self {
        Item::AIR
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{NAMESPACE}{}", self.0)
    }
}

impl FromStr for Item {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let item = Item::new(s);
        let valid = !item.0.is_empty()
            && item
                .0
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if valid {
            Ok(item)
        } else {
            Err(Error::UnknownName {
                kind: "item",
                name: s.to_owned(),
            })
        }
    }
}

/// Persisted form of an [`Item`]: `{"__Item__": "stone"}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct TaggedItem {
    #[serde(rename = "__Item__")]
    item: String,
}

impl From<Item> for TaggedItem {
    fn from(item: Item) -> Self {
        TaggedItem {
            item: item.0.into_owned(),
        }
    }
}

impl From<TaggedItem> for Item {
    fn from(tagged: TaggedItem) -> Self {
        Item::new(&tagged.item)
    }
}

pub type Row = Vec<Item>;
pub type Profile = Vec<Row>;
/// Indexed `[x][y][z]`.
pub type Cuboid = Vec<Profile>;

/// A profile cell that may be left unset and filled in later.
pub trait ProfileCell {
    fn resolve(&self, default: &Item) -> Item;
}

impl ProfileCell for Item {
    fn resolve(&self, _default: &Item) -> Item {
        self.clone()
    }
}

impl ProfileCell for Option<Item> {
    fn resolve(&self, default: &Item) -> Item {
        self.as_ref().unwrap_or(default).clone()
    }
}

/// A row, profile or cuboid of items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Items {
    Row(Row),
    Profile(Profile),
    Cuboid(Cuboid),
}

impl Items {
    pub fn rank(&self) -> usize {
        match self {
            Items::Row(_) => 1,
            Items::Profile(_) => 2,
            Items::Cuboid(_) => 3,
        }
    }

    fn mismatch(&self, expected: usize) -> Error {
        Error::RankMismatch {
            expected,
            found: self.rank(),
        }
    }

    pub fn into_row(self) -> Result<Row, Error> {
        match self {
            Items::Row(row) => Ok(row),
            other => Err(other.mismatch(1)),
        }
    }

    pub fn into_profile(self) -> Result<Profile, Error> {
        match self {
            Items::Profile(profile) => Ok(profile),
            other => Err(other.mismatch(2)),
        }
    }

    pub fn into_cuboid(self) -> Result<Cuboid, Error> {
        match self {
            Items::Cuboid(cuboid) => Ok(cuboid),
            other => Err(other.mismatch(3)),
        }
    }
}

impl From<Row> for Items {
    fn from(row: Row) -> Self {
        Items::Row(row)
    }
}

impl From<Profile> for Items {
    fn from(profile: Profile) -> Self {
        Items::Profile(profile)
    }
}

impl From<Cuboid> for Items {
    fn from(cuboid: Cuboid) -> Self {
        Items::Cuboid(cuboid)
    }
}
