// src/blocks.rs

use std::path::Path;

use log::{debug, warn};

use crate::client::Client;
use crate::error::Result;
use crate::geometry::{Anchor3, Plane, Vec3};
use crate::itemlists::{grab, load_items, save_items};
use crate::material::{Cuboid, Item, Profile};
use crate::shapes::cuboid_dims;
use crate::volume::Volume;

/// A cuboid of blocks placed in the world, which can be moved and rotated
/// as one piece.
///
/// The world is only touched through the client passed to each call.
#[derive(Clone, Debug, PartialEq)]
pub struct Blocks {
    cube: Cuboid,
    anchor: Anchor3,
    volume: Volume,
}

impl Blocks {
    /// Places `cube` with its `anchor` point at `position` without drawing it.
    pub fn new(position: Vec3, cube: Cuboid, anchor: Anchor3) -> Result<Self> {
        let dims = cuboid_dims(&cube)?;
        let volume = Volume::from_anchor(position, Vec3::from(dims), anchor);
        Ok(Self {
            cube,
            anchor,
            volume,
        })
    }

    /// Like [`Blocks::new`] but also renders the blocks.
    pub fn place<C: Client + ?Sized>(
        client: &mut C,
        position: Vec3,
        cube: Cuboid,
        anchor: Anchor3,
    ) -> Result<Self> {
        let blocks = Self::new(position, cube, anchor)?;
        blocks.render(client)?;
        Ok(blocks)
    }

    /// Takes over whatever the world holds inside `volume`.
    pub fn from_volume<C: Client + ?Sized>(client: &mut C, volume: &Volume) -> Result<Self> {
        let cube = grab(client, volume)?;
        Self::new(volume.position, cube, volume.anchor)
    }

    pub fn cube(&self) -> &Cuboid {
        &self.cube
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn anchor(&self) -> Anchor3 {
        self.anchor
    }

    pub fn position(&self) -> Vec3 {
        self.volume.position
    }

    pub fn to_cuboid(&self) -> Cuboid {
        self.cube.clone()
    }

    fn size(&self) -> Vec3 {
        let profile = self.cube.first();
        let row = profile.and_then(|p| p.first());
        Vec3::from([
            self.cube.len(),
            profile.map_or(0, Vec::len),
            row.map_or(0, Vec::len),
        ])
    }

    fn resize(&mut self, position: Vec3) {
        self.volume = Volume::from_anchor(position, self.size(), self.anchor);
    }

    /// Sets every non-air block. Air cells leave the world untouched.
    pub fn render<C: Client + ?Sized>(&self, client: &mut C) -> Result<()> {
        for (idx, item) in cells(&self.cube).filter(|(_, item)| !item.is_air()) {
            client.setblock(self.volume.start + Vec3::from(idx), item)?;
        }
        Ok(())
    }

    /// Turns the blocks by `steps` quarter turns in `plane`, keeping the
    /// anchor point where it is. With `clear`, the old volume is emptied
    /// first.
    pub fn rotate<C: Client + ?Sized>(
        &mut self,
        client: &mut C,
        plane: Plane,
        steps: i32,
        clear: bool,
    ) -> Result<()> {
        let rotated = rotate90(&self.cube, plane, steps)?;

        if clear {
            self.volume.fill(client, &Item::AIR)?;
        }

        self.cube = rotated;
        self.resize(self.volume.position);
        self.render(client)
    }

    /// Moves the blocks by `vector` and redraws them. With `clear`, blocks
    /// left behind are set to air.
    ///
    /// Only the faces exposed by a one block step are cleared, so longer
    /// moves can leave stale blocks.
    pub fn move_by<C: Client + ?Sized>(&mut self, client: &mut C, vector: Vec3, clear: bool) -> Result<()> {
        let old_start = self.volume.start;
        self.resize(self.volume.position + vector);
        self.render(client)?;

        if !clear {
            return Ok(());
        }

        if vector.iter().any(|d| d.abs() > 1.0) {
            warn!("move by {vector} is longer than one block, old blocks may remain");
        }

        let moved = shift(&self.cube, vector)?;
        let exposed = cells(&self.cube)
            .filter(|([x, y, z], item)| !item.is_air() && moved[*x][*y][*z].is_air());
        for (idx, _) in exposed {
            client.setblock(old_start + Vec3::from(idx), &Item::AIR)?;
        }
        Ok(())
    }

    /// Moves the anchor point to `position` and redraws the blocks there. With
    /// `clear`, the whole old volume is emptied first.
    ///
    /// Clearing comes before rendering so that blocks in the overlap of the
    /// old and new volumes survive the move.
    pub fn move_to<C: Client + ?Sized>(&mut self, client: &mut C, position: Vec3, clear: bool) -> Result<()> {
        if clear {
            self.volume.fill(client, &Item::AIR)?;
        }
        self.resize(position);
        self.render(client)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_items(&self.cube, path)
    }

    /// Replaces the blocks with a saved cuboid and renders it at the current
    /// position.
    pub fn load<C: Client + ?Sized>(&mut self, client: &mut C, path: impl AsRef<Path>) -> Result<()> {
        self.cube = load_items(path, Some(3))?.into_cuboid()?;
        self.resize(self.volume.position);
        self.render(client)
    }
}

fn cells(cube: &[Profile]) -> impl Iterator<Item = ([usize; 3], &Item)> {
    cube.iter().enumerate().flat_map(|(x, profile)| {
        profile.iter().enumerate().flat_map(move |(y, row)| {
            row.iter().enumerate().map(move |(z, item)| ([x, y, z], item))
        })
    })
}

fn build(dims: [usize; 3], cell: impl Fn([usize; 3]) -> Item) -> Cuboid {
    let cell = &cell;
    (0..dims[0])
        .map(|x| {
            (0..dims[1])
                .map(|y| (0..dims[2]).map(|z| cell([x, y, z])).collect())
                .collect()
        })
        .collect()
}

/// Rotates a cuboid by `steps` quarter turns in `plane`, turning its first
/// axis towards its second. Negative steps turn the other way.
pub fn rotate90(cube: &[Profile], plane: Plane, steps: i32) -> Result<Cuboid> {
    let (a, b) = plane.axes();
    let mut dims = cuboid_dims(cube)?;
    let mut rotated = cube.to_vec();

    for _ in 0..steps.rem_euclid(4) {
        let old = dims;
        dims.swap(a, b);
        rotated = build(dims, |idx| {
            let mut src = idx;
            src[a] = idx[b];
            src[b] = old[b] - 1 - idx[a];
            rotated[src[0]][src[1]][src[2]].clone()
        });
    }

    debug!("rotated {steps} quarter turns in {plane:?}");
    Ok(rotated)
}

/// Moves the contents one cell along each axis `vector` points in. Cells
/// shifted in from outside are air.
pub fn shift(cube: &[Profile], vector: Vec3) -> Result<Cuboid> {
    let dims = cuboid_dims(cube)?;
    let step = [vector.x, vector.y, vector.z].map(|d| match d {
        d if d > 0.0 => 1,
        d if d < 0.0 => -1,
        _ => 0isize,
    });

    Ok(build(dims, |idx| {
        let mut src = [0; 3];
        for axis in 0..3 {
            match idx[axis].checked_add_signed(-step[axis]) {
                Some(i) if i < dims[axis] => src[axis] = i,
                _ => return Item::AIR,
            }
        }
        cube[src[0]][src[1]][src[2]].clone()
    }))
}
