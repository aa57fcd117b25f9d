//! The seam between geometry and whatever world server receives it.

mod command;
mod world;

use std::fmt;
use std::str::FromStr;

pub use command::{parse_loot_response, CommandClient, ScriptTransport, Transport};
pub use world::{Call, World};

use crate::error::{Error, Result};
use crate::geometry::Vec3;
use crate::material::Item;

/// Server-side policy for which existing blocks a fill may overwrite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillMode {
    #[default]
    Replace,
    Keep,
    Destroy,
    Hollow,
    Outline,
}

impl FillMode {
    pub fn name(self) -> &'static str {
        match self {
            FillMode::Replace => "replace",
            FillMode::Keep => "keep",
            FillMode::Destroy => "destroy",
            FillMode::Hollow => "hollow",
            FillMode::Outline => "outline",
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(FillMode::Replace),
            "keep" => Ok(FillMode::Keep),
            "destroy" => Ok(FillMode::Destroy),
            "hollow" => Ok(FillMode::Hollow),
            "outline" => Ok(FillMode::Outline),
            other => Err(Error::UnknownName {
                kind: "fill mode",
                name: other.to_owned(),
            }),
        }
    }
}

/// One fill of an inclusive axis-aligned box.
#[derive(Clone, Debug, PartialEq)]
pub struct FillCommand {
    pub start: Vec3,
    pub end: Vec3,
    pub item: Item,
    pub mode: FillMode,
    /// Only blocks of this kind are replaced. Used with [`FillMode::Replace`].
    pub filter: Option<Item>,
}

impl FillCommand {
    /// Number of blocks the command touches.
    pub fn cells(&self) -> f64 {
        ((self.end - self.start).abs() + 1.0).volume()
    }
}

/// A connection to a voxel world.
///
/// Calls are synchronous and each waits for the server's answer. Holding the
/// client by `&mut` keeps one call chain on a connection at a time.
pub trait Client {
    fn setblock(&mut self, position: Vec3, item: &Item) -> Result<()>;

    fn fill(
        &mut self,
        start: Vec3,
        end: Vec3,
        item: &Item,
        mode: FillMode,
        filter: Option<&Item>,
    ) -> Result<()>;

    fn get_block(&mut self, position: Vec3) -> Result<Item>;

    fn execute(&mut self, command: &FillCommand) -> Result<()> {
        self.fill(
            command.start,
            command.end,
            &command.item,
            command.mode,
            command.filter.as_ref(),
        )
    }
}

impl<C: Client + ?Sized> Client for &mut C {
    fn setblock(&mut self, position: Vec3, item: &Item) -> Result<()> {
        (**self).setblock(position, item)
    }

    fn fill(
        &mut self,
        start: Vec3,
        end: Vec3,
        item: &Item,
        mode: FillMode,
        filter: Option<&Item>,
    ) -> Result<()> {
        (**self).fill(start, end, item, mode, filter)
    }

    fn get_block(&mut self, position: Vec3) -> Result<Item> {
        (**self).get_block(position)
    }
}
