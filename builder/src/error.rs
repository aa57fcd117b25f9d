// src/error.rs

use thiserror::Error;

use crate::geometry::Vec3;

/// Everything that can go wrong while computing or rendering a structure.
#[derive(Debug, Error)]
pub enum Error {
    #[error("items are not a rectangular row, profile or cuboid")]
    NotRectangular,

    #[error("expected {expected} dimensional items but found {found}")]
    RankMismatch { expected: usize, found: usize },

    #[error("{start:?} and {end:?} do not form a straight axis-aligned line")]
    NotALine { start: Vec3, end: Vec3 },

    #[error("cannot determine offset for direction {0:?}")]
    UnknownDirection(Vec3),

    #[error("number of sides must be at least 3, got {0}")]
    TooFewSides(usize),

    #[error("invalid arguments: {0}")]
    InvalidArguments(&'static str),

    #[error("unknown {kind} name {name:?}")]
    UnknownName { kind: &'static str, name: String },

    #[error("unexpected data: {0}")]
    Format(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("transport failure: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
