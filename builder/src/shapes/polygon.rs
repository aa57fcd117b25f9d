// src/shapes/polygon.rs

use std::f64::consts::PI;

use log::info;

use crate::client::{Client, FillMode};
use crate::error::{Error, Result};
use crate::geometry::{Anchor, Direction, Vec3};
use crate::material::{Item, Profile};
use crate::shapes::tunnel::{make_tunnel, TunnelExtent, TunnelOptions};

/// A regular prism: a polygon outline extruded `height` blocks along
/// `direction` from its centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub sides: usize,
    pub diameter: u32,
    pub height: usize,
    pub direction: Direction,
    pub item: Item,
    /// Fills the inside of the outline.
    pub fill_item: Option<Item>,
    /// Rotation of the first vertex, in radians. Defaults to half a side.
    pub offset: Option<f64>,
    pub mode: FillMode,
}

impl Default for Polygon {
    fn default() -> Self {
        Self {
            sides: 4,
            diameter: 15,
            height: 1,
            direction: Direction::Up,
            item: Item::STONE,
            fill_item: None,
            offset: None,
            mode: FillMode::Keep,
        }
    }
}

impl Polygon {
    pub fn profile(&self) -> Result<Profile> {
        poly_profile(
            self.sides,
            self.diameter,
            &self.item,
            self.offset,
            self.fill_item.as_ref(),
        )
    }
}

/// Vertices of a regular polygon around the origin, as `(x, z)` pairs.
pub fn poly_points(diameter: u32, sides: usize, offset: Option<f64>) -> Result<Vec<(i64, i64)>> {
    if sides < 3 {
        return Err(Error::TooFewSides(sides));
    }

    let radius = f64::from(diameter / 2);
    let angle = 2.0 * PI / sides as f64;
    let offset = offset.unwrap_or(angle / 2.0);

    Ok((0..sides)
        .map(|i| {
            let theta = i as f64 * angle + offset;
            (
                (radius * theta.cos()).round_ties_even() as i64,
                (radius * theta.sin()).round_ties_even() as i64,
            )
        })
        .collect())
}

/// A profile just large enough to hold the polygon's outline, indexed
/// `[x][z]`. Everything off the outline is air unless `fill_item` is given.
pub fn poly_profile(
    sides: usize,
    diameter: u32,
    item: &Item,
    offset: Option<f64>,
    fill_item: Option<&Item>,
) -> Result<Profile> {
    let points = poly_points(diameter, sides, offset)?;

    let (min_x, max_x) = bounds(points.iter().map(|p| p.0));
    let (min_z, max_z) = bounds(points.iter().map(|p| p.1));
    let x_size = (max_x - min_x + 1) as usize;
    let z_size = (max_z - min_z + 1) as usize;

    let mut profile = vec![vec![Item::AIR; z_size]; x_size];
    let center = (-min_x, -min_z);

    for (i, &(x, z)) in points.iter().enumerate() {
        let (next_x, next_z) = points[(i + 1) % points.len()];
        draw_line_xz(
            &mut profile,
            (center.0 + x, center.1 + z),
            (center.0 + next_x, center.1 + next_z),
            item,
        );
    }

    if let Some(fill_item) = fill_item {
        for row in &mut profile {
            let first = row.iter().position(|cell| cell == item);
            let last = row.iter().rposition(|cell| cell == item);
            if let (Some(first), Some(last)) = (first, last) {
                for cell in &mut row[first + 1..last] {
                    if cell.is_air() {
                        *cell = fill_item.clone();
                    }
                }
            }
        }
    }

    info!("{sides} sided polygon profile {x_size}x{z_size}");
    Ok(profile)
}

fn bounds(values: impl Iterator<Item = i64>) -> (i64, i64) {
    values.fold((i64::MAX, i64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

fn plot(profile: &mut Profile, (x, z): (i64, i64), item: &Item) {
    let cell = usize::try_from(x)
        .ok()
        .zip(usize::try_from(z).ok())
        .and_then(|(x, z)| profile.get_mut(x)?.get_mut(z));
    if let Some(cell) = cell {
        *cell = item.clone();
    }
}

/// Draws a straight line of `item` from `start` to `end`, both `(x, z)` and
/// inclusive. Points outside the profile are dropped.
pub fn draw_line_xz(profile: &mut Profile, start: (i64, i64), end: (i64, i64), item: &Item) {
    let delta_x = end.0 - start.0;
    let delta_z = end.1 - start.1;
    let steps = delta_x.abs().max(delta_z.abs()).max(1);

    let x_step = delta_x as f64 / steps as f64;
    let z_step = delta_z as f64 / steps as f64;

    plot(profile, start, item);
    let mut last = start;
    for i in 1..=steps {
        let point = (
            (start.0 as f64 + x_step * i as f64).round_ties_even() as i64,
            (start.1 as f64 + z_step * i as f64).round_ties_even() as i64,
        );
        if point != last {
            plot(profile, point, item);
            last = point;
        }
    }
}

/// Builds the polygon's profile and extrudes it from `center`.
pub fn polygon<C: Client + ?Sized>(client: &mut C, center: Vec3, polygon: &Polygon) -> Result<()> {
    let profile = polygon.profile()?;
    info!(
        "polygon at {center}, {} high towards {}",
        polygon.height, polygon.direction
    );

    let options = TunnelOptions {
        anchor: Anchor::Middle,
        mode: polygon.mode,
        ..TunnelOptions::default()
    };
    make_tunnel(
        client,
        &profile,
        center,
        TunnelExtent::along(polygon.direction, polygon.height),
        &options,
    )
}
