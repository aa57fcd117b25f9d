//! Builds structures in a voxel world from profiles, volumes and cuboids of
//! blocks, through any [`Client`] that can place and read blocks.

pub mod blocks;
pub mod client;
pub mod error;
pub mod geometry;
pub mod itemlists;
pub mod material;
pub mod shapes;
pub mod volume;

pub use blocks::Blocks;
pub use client::{Client, CommandClient, FillCommand, FillMode, World};
pub use error::{Error, Result};
pub use geometry::{Anchor, Anchor3, Anchor3Face, Direction, Plane, Vec3};
pub use material::{Cuboid, Item, Items, Profile, Row};
pub use volume::{Volume, Walls};

#[cfg(test)]
mod tests;
