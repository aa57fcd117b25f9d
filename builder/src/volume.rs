// src/volume.rs

use log::{debug, info};

use crate::client::{Client, FillMode};
use crate::error::{Error, Result};
use crate::geometry::{Anchor, Anchor3, Anchor3Face, Direction, Vec3};
use crate::material::Item;
use crate::shapes::{make_tunnel, TunnelExtent, TunnelOptions};

/// Largest number of blocks the server accepts in one fill, exclusive.
pub const MAX_FILL: f64 = 32768.0;

/// An axis-aligned box of blocks, located through one of its anchor points.
///
/// `start` is the lowest corner and `end` the highest, both inclusive, so
/// `end == start + size - 1`. `position` is where the `anchor` point sits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Volume {
    pub position: Vec3,
    pub anchor: Anchor3,
    pub size: Vec3,
    pub start: Vec3,
    pub end: Vec3,
}

/// Which faces [`Volume::walls`] covers, and how thick they are.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Walls {
    pub thickness: u32,
    pub top: bool,
    pub bottom: bool,
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            thickness: 1,
            top: true,
            bottom: true,
            north: true,
            south: true,
            east: true,
            west: true,
        }
    }
}

impl Volume {
    pub fn from_anchor(position: Vec3, size: Vec3, anchor: Anchor3) -> Self {
        let mut offset = Vec3::ZERO;
        if anchor.on(Anchor3Face::Top) {
            offset.y += 1.0 - size.y;
        }
        if anchor.on(Anchor3Face::South) {
            offset.z += 1.0 - size.z;
        }
        if anchor.on(Anchor3Face::East) {
            offset.x += 1.0 - size.x;
        }
        if anchor.on(Anchor3Face::MiddleFace) {
            let half = (size / 2.0).with_ints();
            offset -= Vec3::new(half.x, 0.0, half.z);
        } else if anchor == Anchor3::Middle {
            offset = -(size / 2.0).with_ints();
        }

        let start = position + offset;
        Self {
            position,
            anchor,
            size,
            start,
            end: start + (size - 1.0),
        }
    }

    /// The volume spanned by two opposite corners, in any order.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        let (a, b) = (a.with_ints(), b.with_ints());
        let start = a.inf(b);
        let end = a.sup(b);

        Self {
            position: start,
            anchor: Anchor3::BottomNw,
            size: end - start + 1.0,
            start,
            end,
        }
    }

    /// Takes exactly one of `size` and `corner`. A corner is paired with
    /// `position` and the anchor is ignored.
    pub fn from_parts(
        position: Vec3,
        size: Option<Vec3>,
        corner: Option<Vec3>,
        anchor: Anchor3,
    ) -> Result<Self> {
        match (size, corner) {
            (Some(size), None) => Ok(Self::from_anchor(position, size, anchor)),
            (None, Some(corner)) => Ok(Self::from_corners(position, corner)),
            (Some(_), Some(_)) => Err(Error::InvalidArguments("give either a size or a corner, not both")),
            (None, None) => Err(Error::InvalidArguments("a volume needs a size or a corner")),
        }
    }

    /// Whether `point` lies within the volume grown by the given tolerances.
    pub fn inside(&self, point: Vec3, xtol: f64, ytol: f64, ztol: f64) -> bool {
        let tol = Vec3::new(xtol, ytol, ztol);
        let (lo, hi) = (self.start - tol, self.end + tol);
        (0..3).all(|axis| lo[axis] <= point[axis] && point[axis] <= hi[axis])
    }

    pub fn translate(&mut self, distance: Vec3) {
        self.start += distance;
        self.end += distance;
        self.position += distance;
    }

    /// Moves the anchor point to `position`.
    pub fn move_to(&mut self, position: Vec3) {
        self.translate(position - self.position);
    }

    /// Fills the whole volume with `item`. Volumes too large for one fill are
    /// sent as tunnels of vertical columns, stacked when a column alone would
    /// be too tall.
    pub fn fill<C: Client + ?Sized>(&self, client: &mut C, item: &Item) -> Result<()> {
        if self.size.volume() < MAX_FILL {
            return client.fill(self.start, self.end, item, FillMode::Replace, None);
        }

        let [width, height, depth] = self.size.dims();
        let run = MAX_FILL as usize - 1;
        info!(
            "volume of {} blocks split into {} columns of up to {run} blocks",
            self.size.volume(),
            width * depth
        );

        let profile = vec![vec![item.clone(); width]; depth];
        let options = TunnelOptions {
            anchor: Anchor::BottomLeft,
            mode: FillMode::Replace,
            ..TunnelOptions::default()
        };
        for base in (0..height).step_by(run) {
            make_tunnel(
                client,
                &profile,
                self.start + Vec3::from([0, base, 0]),
                TunnelExtent::along(Direction::Up, run.min(height - base)),
                &options,
            )?;
        }
        Ok(())
    }

    /// Covers the selected faces with `item`, `walls.thickness` blocks deep.
    pub fn walls<C: Client + ?Sized>(&self, client: &mut C, item: &Item, walls: Walls) -> Result<()> {
        let t = f64::from(walls.thickness.max(1) - 1);
        let (start, end) = (self.start, self.end);

        let faces = [
            (walls.north, start, Vec3::new(end.x, end.y, start.z + t)),
            (walls.south, end, Vec3::new(start.x, start.y, end.z - t)),
            (walls.west, start, Vec3::new(start.x + t, end.y, end.z)),
            (walls.east, end, Vec3::new(end.x - t, start.y, start.z)),
            (walls.top, end, Vec3::new(start.x, end.y - t, start.z)),
            (walls.bottom, start, Vec3::new(end.x, start.y + t, end.z)),
        ];

        for (_, from, to) in faces.into_iter().filter(|(wanted, ..)| *wanted) {
            debug!("wall {from} to {to}");
            client.fill(from, to, item, FillMode::Replace, None)?;
        }
        Ok(())
    }
}
