// src/shapes/profile.rs

use serde_json::Value;

use crate::error::{Error, Result};
use crate::geometry::{Anchor, Direction, Vec3};
use crate::material::{Item, Items, ProfileCell, Row, ITEM_KEY};

/// A profile cell paired with its offset from the tunnel start.
pub type Offset = (Item, Vec3);

/// Rank of a nested list of items: 1 for a row, 2 for a profile, 3 for a
/// cuboid, 0 when any level is empty or ragged.
pub trait Validate {
    fn rank(&self) -> usize;
}

pub fn validate<T: Validate + ?Sized>(items: &T) -> usize {
    items.rank()
}

// Shape of every level below this one, or None when ragged.
fn shape_of<T>(children: &[T], shape: impl Fn(&T) -> Option<Vec<usize>>) -> Option<Vec<usize>> {
    let (first, rest) = children.split_first()?;
    let inner = shape(first)?;
    for child in rest {
        if shape(child)? != inner {
            return None;
        }
    }

    let mut outer = vec![children.len()];
    outer.extend(inner);
    Some(outer)
}

fn row_shape<C>(row: &[C]) -> Option<Vec<usize>> {
    (!row.is_empty()).then(|| vec![row.len()])
}

fn profile_shape<C>(profile: &[Vec<C>]) -> Option<Vec<usize>> {
    shape_of(profile, |row| row_shape(row))
}

fn cuboid_shape<C>(cuboid: &[Vec<Vec<C>>]) -> Option<Vec<usize>> {
    shape_of(cuboid, |profile| profile_shape(profile))
}

/// `(width, height)` of a rectangular profile.
pub(crate) fn profile_dims<C>(profile: &[Vec<C>]) -> Result<(usize, usize)> {
    match profile_shape(profile).as_deref() {
        Some(&[height, width]) => Ok((width, height)),
        _ => Err(Error::NotRectangular),
    }
}

/// `[x, y, z]` extents of a rectangular cuboid.
pub(crate) fn cuboid_dims<C>(cuboid: &[Vec<Vec<C>>]) -> Result<[usize; 3]> {
    match cuboid_shape(cuboid).as_deref() {
        Some(&[x, y, z]) => Ok([x, y, z]),
        Some(shape) => Err(Error::RankMismatch {
            expected: 3,
            found: shape.len(),
        }),
        None => Err(Error::NotRectangular),
    }
}

macro_rules! impl_validate {
    ($($cell:ty),*) => {$(
        impl Validate for Vec<$cell> {
            fn rank(&self) -> usize {
                row_shape(self).map_or(0, |s| s.len())
            }
        }

        impl Validate for Vec<Vec<$cell>> {
            fn rank(&self) -> usize {
                profile_shape(self).map_or(0, |s| s.len())
            }
        }

        impl Validate for Vec<Vec<Vec<$cell>>> {
            fn rank(&self) -> usize {
                cuboid_shape(self).map_or(0, |s| s.len())
            }
        }
    )*};
}

impl_validate!(Item, Option<Item>);

impl Validate for Items {
    fn rank(&self) -> usize {
        match self {
            Items::Row(row) => row.rank(),
            Items::Profile(profile) => profile.rank(),
            Items::Cuboid(cuboid) => cuboid.rank(),
        }
    }
}

fn value_shape(value: &Value) -> Option<Vec<usize>> {
    match value {
        Value::Object(map) if map.len() == 1 && map.get(ITEM_KEY).is_some_and(Value::is_string) => {
            Some(Vec::new())
        }
        Value::Array(children) => shape_of(children, value_shape),
        _ => None,
    }
}

/// Untyped JSON is checked down to its leaves, which must be tagged items.
impl Validate for Value {
    fn rank(&self) -> usize {
        match value_shape(self) {
            Some(shape) if (1..=3).contains(&shape.len()) => shape.len(),
            _ => 0,
        }
    }
}

/// Checks that `start` and `end` lie on one axis-aligned line and returns
/// the vector between them.
pub fn get_direction(start: Vec3, end: Vec3) -> Result<Vec3> {
    let differing = start.iter().zip(end.iter()).filter(|(a, b)| a != b).count();
    if differing != 1 {
        return Err(Error::NotALine { start, end });
    }

    Ok(end - start)
}

/// Fills unset cells with `default`, one row at a time.
pub fn normalize<'a, C: ProfileCell>(
    profile: &'a [Vec<C>],
    default: &'a Item,
) -> impl Iterator<Item = Row> + 'a {
    profile
        .iter()
        .map(move |row| row.iter().map(|cell| cell.resolve(default)).collect())
}

// Which way the profile faces, taken from the first matching predicate.
fn facing(direction: Vec3) -> Result<Direction> {
    if direction.north() {
        Ok(Direction::North)
    } else if direction.south() {
        Ok(Direction::South)
    } else if direction.east() {
        Ok(Direction::East)
    } else if direction.west() {
        Ok(Direction::West)
    } else if direction.up() {
        Ok(Direction::Up)
    } else if direction.down() {
        Ok(Direction::Down)
    } else {
        Err(Error::UnknownDirection(direction))
    }
}

fn offset(facing: Direction, x_start: f64, y_start: f64, delta_y: f64, delta_xz: f64) -> Vec3 {
    match facing {
        Direction::North => Vec3::new(-x_start + delta_xz, y_start - delta_y, 0.0),
        Direction::South => Vec3::new(x_start - delta_xz, y_start - delta_y, 0.0),
        Direction::East => Vec3::new(0.0, y_start - delta_y, -x_start + delta_xz),
        Direction::West => Vec3::new(0.0, y_start - delta_y, x_start - delta_xz),
        Direction::Up => Vec3::new(-x_start + delta_xz, 0.0, y_start - delta_y),
        Direction::Down => Vec3::new(-x_start + delta_xz, 0.0, -y_start + delta_y),
    }
}

fn anchor_start(width: usize, height: usize, anchor: Anchor) -> (f64, f64) {
    let right = width.saturating_sub(1);
    let bottom = height.saturating_sub(1);
    let (x, y) = match anchor {
        Anchor::TopLeft => (0, 0),
        Anchor::TopRight => (right, 0),
        Anchor::BottomLeft => (0, bottom),
        Anchor::BottomRight => (right, bottom),
        Anchor::Middle => (width / 2, height / 2),
    };
    (x as f64, y as f64)
}

// Shared by `offsets` and the tunnel builder, which feeds normalized rows
// straight through without collecting them.
pub(crate) fn offset_rows<R>(
    rows: R,
    (width, height): (usize, usize),
    direction: Vec3,
    anchor: Anchor,
) -> Result<impl Iterator<Item = Offset>>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = Item>,
{
    let facing = facing(direction)?;
    let (x_start, y_start) = anchor_start(width, height, anchor);

    Ok(rows.into_iter().enumerate().flat_map(move |(delta_y, row)| {
        row.into_iter().enumerate().map(move |(delta_xz, item)| {
            let vec = offset(facing, x_start, y_start, delta_y as f64, delta_xz as f64);
            (item, vec)
        })
    }))
}

/// Maps every cell of a rectangular profile to its offset from the start of a
/// tunnel running in `direction`, with the `anchor` cell at the origin.
///
/// Cells come out row by row. The direction may be any vector that points
/// along one of the six directions; a zero vector is rejected.
pub fn offsets<'a>(
    profile: &'a [Row],
    direction: impl Into<Vec3>,
    anchor: Anchor,
) -> Result<impl Iterator<Item = Offset> + 'a> {
    let height = profile.len();
    let width = profile.first().map_or(0, Vec::len);
    let rows = profile.iter().map(|row| row.iter().cloned());

    offset_rows(rows, (width, height), direction.into(), anchor)
}
