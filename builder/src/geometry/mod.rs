pub mod anchor;
pub mod coords;
pub mod direction;

pub use anchor::{Anchor, Anchor3, Anchor3Face};
pub use coords::Vec3;
pub use direction::{Direction, Plane};
