// src/shapes/tunnel.rs

use log::{debug, info};

use crate::client::{Client, FillCommand, FillMode};
use crate::error::{Error, Result};
use crate::geometry::{Anchor, Direction, Vec3};
use crate::material::{Item, ProfileCell};
use crate::shapes::profile::{get_direction, normalize, offset_rows, profile_dims};

/// How far a tunnel runs from its start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TunnelExtent {
    /// Up to and including this end point, which must share two coordinates
    /// with the start.
    To(Vec3),
    /// `length` blocks along `direction`, start included.
    Along { direction: Vec3, length: usize },
}

impl TunnelExtent {
    pub fn along(direction: impl Into<Vec3>, length: usize) -> Self {
        TunnelExtent::Along {
            direction: direction.into(),
            length,
        }
    }

    /// Exactly one of `end` and `direction` must be given.
    pub fn from_parts(end: Option<Vec3>, direction: Option<Direction>, length: usize) -> Result<Self> {
        match (end, direction) {
            (Some(end), None) => Ok(TunnelExtent::To(end)),
            (None, Some(direction)) => Ok(TunnelExtent::along(direction, length)),
            (Some(_), Some(_)) => Err(Error::InvalidArguments("give either an end or a direction, not both")),
            (None, None) => Err(Error::InvalidArguments("a tunnel needs an end or a direction")),
        }
    }

    /// End point and direction vector of a tunnel starting at `start`.
    pub fn resolve(self, start: Vec3) -> Result<(Vec3, Vec3)> {
        match self {
            TunnelExtent::To(end) => Ok((end, get_direction(start, end)?)),
            TunnelExtent::Along { length: 0, .. } => {
                Err(Error::InvalidArguments("tunnel length must be at least 1"))
            }
            TunnelExtent::Along { direction, length } => {
                Ok((start + direction * (length - 1) as f64, direction))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TunnelOptions {
    /// Which profile cell sits on the tunnel's axis.
    pub anchor: Anchor,
    /// Substituted for unset profile cells.
    pub default: Item,
    pub mode: FillMode,
    pub filter: Option<Item>,
}

impl Default for TunnelOptions {
    fn default() -> Self {
        Self {
            anchor: Anchor::Middle,
            default: Item::AIR,
            mode: FillMode::Keep,
            filter: None,
        }
    }
}

/// The fill commands that extrude `profile` from `start`, one per profile
/// cell. Nothing is sent anywhere.
pub fn tunnel_commands<'a, C: ProfileCell>(
    profile: &'a [Vec<C>],
    start: Vec3,
    extent: TunnelExtent,
    options: &'a TunnelOptions,
) -> Result<impl Iterator<Item = FillCommand> + 'a> {
    let dims = profile_dims(profile)?;
    let (end, direction) = extent.resolve(start)?;
    info!(
        "tunnel {}x{} from {start} to {end} anchored {}",
        dims.0, dims.1, options.anchor
    );

    let rows = normalize(profile, &options.default);
    let cells = offset_rows(rows, dims, direction, options.anchor)?;

    Ok(cells.map(move |(item, offset)| FillCommand {
        start: start + offset,
        end: end + offset,
        item,
        mode: options.mode,
        filter: options.filter.clone(),
    }))
}

/// Extrudes `profile` from `start` and sends every fill to `client`.
pub fn make_tunnel<C, P>(
    client: &mut C,
    profile: &[Vec<P>],
    start: Vec3,
    extent: TunnelExtent,
    options: &TunnelOptions,
) -> Result<()>
where
    C: Client + ?Sized,
    P: ProfileCell,
{
    let mut sent = 0;
    for command in tunnel_commands(profile, start, extent, options)? {
        client.execute(&command)?;
        sent += 1;
    }
    debug!("tunnel sent {sent} fill commands");
    Ok(())
}
