//! Error types for grid construction and queries

use crate::grid::Coord;
use crate::search::InvalidNode;

/// Everything that can go wrong when building or querying a map.
///
/// An unreachable goal is deliberately not in this list: `find_path` reports
/// it as `Ok(None)`, a normal result the caller presents however it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("invalid map dimensions {width}x{length}: both must be positive")]
    InvalidDimensions { width: i32, length: i32 },

    #[error("tile {0} is out of bounds or impassable")]
    InvalidNode(Coord),

    #[error("terrain at {0} is impassable")]
    ImpassableTerrain(Coord),
}

impl From<InvalidNode<Coord>> for GridError {
    fn from(err: InvalidNode<Coord>) -> Self {
        GridError::InvalidNode(err.0)
    }
}
