// src/geometry/coords.rs

use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use nalgebra::Vector3;

use crate::error::Error;

/// A 3D vector.
///
/// Serves both as a continuous displacement and, after flooring, as a block
/// position on the world lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    fn map(self, f: impl FnMut(f64) -> f64) -> Self {
        self.vector().map(f).into()
    }

    pub fn abs(self) -> Self {
        self.vector().abs().into()
    }

    pub fn floor(self) -> Self {
        self.map(f64::floor)
    }

    pub fn ceil(self) -> Self {
        self.map(f64::ceil)
    }

    /// Rounds half-way cases to the nearest even integer.
    pub fn round(self) -> Self {
        self.map(f64::round_ties_even)
    }

    /// Floors every coordinate, which is how the world resolves negative
    /// positions to blocks.
    pub fn with_ints(self) -> Self {
        self.floor()
    }

    /// Componentwise minimum.
    pub fn inf(self, other: Vec3) -> Self {
        self.vector().inf(&other.vector()).into()
    }

    /// Componentwise maximum.
    pub fn sup(self, other: Vec3) -> Self {
        self.vector().sup(&other.vector()).into()
    }

    /// Volume of the space spanned by the origin and this vector.
    pub fn volume(self) -> f64 {
        self.dx() * self.dy() * self.dz()
    }

    pub fn is_direction(self) -> bool {
        self.iter().filter(|coord| *coord != 0.0).count() == 1
    }

    pub fn dx(self) -> f64 {
        self.x.abs()
    }

    pub fn dy(self) -> f64 {
        self.y.abs()
    }

    pub fn dz(self) -> f64 {
        self.z.abs()
    }

    /// Length of the spatial diagonal.
    pub fn length(self) -> f64 {
        self.vector().norm()
    }

    pub fn west(self) -> bool {
        self.x < 0.0
    }

    pub fn east(self) -> bool {
        self.x > 0.0
    }

    pub fn north(self) -> bool {
        self.z < 0.0
    }

    pub fn south(self) -> bool {
        self.z > 0.0
    }

    pub fn down(self) -> bool {
        self.y < 0.0
    }

    pub fn up(self) -> bool {
        self.y > 0.0
    }

    pub fn iter(self) -> impl Iterator<Item = f64> {
        [self.x, self.y, self.z].into_iter()
    }

    /// The block containing this position.
    pub fn block(self) -> [i64; 3] {
        let floored = self.floor();
        [floored.x as i64, floored.y as i64, floored.z as i64]
    }

    /// Extent along each axis as array dimensions. Negative sizes clamp to 0.
    pub fn dims(self) -> [usize; 3] {
        let floored = self.floor();
        [floored.x, floored.y, floored.z].map(|d| d.max(0.0) as usize)
    }
}

impl From<Vector3<f64>> for Vec3 {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3<f64> {
    fn from(v: Vec3) -> Self {
        v.vector()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i64; 3]> for Vec3 {
    fn from([x, y, z]: [i64; 3]) -> Self {
        Self::new(x as f64, y as f64, z as f64)
    }
}

/// Array indices map straight onto x, y and z.
impl From<[usize; 3]> for Vec3 {
    fn from([x, y, z]: [usize; 3]) -> Self {
        Self::new(x as f64, y as f64, z as f64)
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index {index} out of range"),
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        (self.vector() + rhs.vector()).into()
    }
}

impl Add<f64> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: f64) -> Vec3 {
        self.vector().add_scalar(rhs).into()
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        (self.vector() - rhs.vector()).into()
    }
}

impl Sub<f64> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: f64) -> Vec3 {
        self.vector().add_scalar(-rhs).into()
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

/// Componentwise product, not a dot or cross product.
impl Mul for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.vector().component_mul(&rhs.vector()).into()
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        (self.vector() * rhs).into()
    }
}

impl Div for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: Vec3) -> Vec3 {
        self.vector().component_div(&rhs.vector()).into()
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f64) -> Vec3 {
        (self.vector() / rhs).into()
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        (-self.vector()).into()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// Parses `x,y,z`.
impl FromStr for Vec3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let coords = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::Format(format!("bad coordinate in {s:?}: {e}")))?;

        match coords[..] {
            [x, y, z] => Ok(Vec3::new(x, y, z)),
            _ => Err(Error::Format(format!("expected x,y,z but got {s:?}"))),
        }
    }
}
