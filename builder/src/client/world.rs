// src/client/world.rs

use std::collections::HashMap;

use crate::client::{Client, FillCommand, FillMode};
use crate::error::Result;
use crate::geometry::Vec3;
use crate::material::{Cuboid, Item};
use crate::volume::Volume;

/// A call received by a [`World`], in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    SetBlock { position: Vec3, item: Item },
    Fill(FillCommand),
}

/// An in-memory voxel world. Unset positions read as air.
///
/// Used for dry runs and previews, and as the stand-in server in tests.
#[derive(Clone, Debug, Default)]
pub struct World {
    blocks: HashMap<[i64; 3], Item>,
    history: Vec<Call>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(&self, position: Vec3) -> Item {
        self.blocks
            .get(&position.block())
            .cloned()
            .unwrap_or(Item::AIR)
    }

    fn put(&mut self, key: [i64; 3], item: &Item) {
        if item.is_air() {
            self.blocks.remove(&key);
        } else {
            self.blocks.insert(key, item.clone());
        }
    }

    /// Number of non-air blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec3, &Item)> {
        self.blocks.iter().map(|(key, item)| (Vec3::from(*key), item))
    }

    pub fn history(&self) -> &[Call] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Smallest volume holding every non-air block.
    pub fn bounds(&self) -> Option<Volume> {
        let mut keys = self.blocks.keys().map(|key| Vec3::from(*key));
        let first = keys.next()?;
        let (lo, hi) = keys.fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Some(Volume::from_corners(lo, hi))
    }

    /// Sends every recorded call to `client`, in the order it arrived.
    pub fn replay<C: Client + ?Sized>(&self, client: &mut C) -> Result<()> {
        for call in &self.history {
            match call {
                Call::SetBlock { position, item } => client.setblock(*position, item)?,
                Call::Fill(command) => client.execute(command)?,
            }
        }
        Ok(())
    }

    /// A copy of every block inside `volume`, indexed `[x][y][z]` from its
    /// start.
    pub fn cuboid(&self, volume: &Volume) -> Cuboid {
        let [nx, ny, nz] = volume.size.dims();
        (0..nx)
            .map(|x| {
                (0..ny)
                    .map(|y| {
                        (0..nz)
                            .map(|z| self.block(volume.start + Vec3::from([x, y, z])))
                            .collect()
                    })
                    .collect()
            })
            .collect()
    }

    /// Whether the world at `position` holds exactly `cuboid`, air included.
    pub fn compare(&self, position: Vec3, cuboid: &[Vec<Vec<Item>>]) -> bool {
        cuboid.iter().enumerate().all(|(x, plane)| {
            plane.iter().enumerate().all(|(y, row)| {
                row.iter()
                    .enumerate()
                    .all(|(z, item)| self.block(position + Vec3::from([x, y, z])) == *item)
            })
        })
    }
}

impl Client for World {
    fn setblock(&mut self, position: Vec3, item: &Item) -> Result<()> {
        self.put(position.block(), item);
        self.history.push(Call::SetBlock {
            position,
            item: item.clone(),
        });
        Ok(())
    }

    fn fill(
        &mut self,
        start: Vec3,
        end: Vec3,
        item: &Item,
        mode: FillMode,
        filter: Option<&Item>,
    ) -> Result<()> {
        let lo = start.inf(end).block();
        let hi = start.sup(end).block();
        let air = Item::AIR;

        for x in lo[0]..=hi[0] {
            for y in lo[1]..=hi[1] {
                for z in lo[2]..=hi[2] {
                    let key = [x, y, z];
                    let shell = key
                        .iter()
                        .zip(lo.iter().zip(hi.iter()))
                        .any(|(c, (l, h))| c == l || c == h);
                    let current = self.blocks.get(&key).cloned().unwrap_or(Item::AIR);

                    let placed = match mode {
                        FillMode::Replace => match filter {
                            Some(filter) if current != *filter => None,
                            _ => Some(item),
                        },
                        FillMode::Destroy => Some(item),
                        FillMode::Keep => current.is_air().then_some(item),
                        FillMode::Hollow => Some(if shell { item } else { &air }),
                        FillMode::Outline => shell.then_some(item),
                    };

                    if let Some(placed) = placed {
                        self.put(key, placed);
                    }
                }
            }
        }

        self.history.push(Call::Fill(FillCommand {
            start,
            end,
            item: item.clone(),
            mode,
            filter: filter.cloned(),
        }));
        Ok(())
    }

    fn get_block(&mut self, position: Vec3) -> Result<Item> {
        Ok(self.block(position))
    }
}
