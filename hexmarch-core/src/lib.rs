//! hexmarch core - hex map and pathfinding engine
//!
//! This crate provides the core logic for hexmarch:
//! - Grid geometry (rectangular hex map with row-parity neighbor offsets)
//! - Terrain types and traversal costs
//! - Generic A* search over an abstract weighted space
//! - Seeded random map generation and JSON map files
//! - Tile selection state machine

pub mod error;
pub mod grid;
pub mod mapgen;
pub mod search;
pub mod selection;
pub mod terrain;

// Re-exports for convenient access
pub use error::GridError;
pub use grid::{Cell, Coord, HexGrid, EVEN_ROW_OFFSETS, ODD_ROW_OFFSETS};
pub use mapgen::{generate, MapConfig, MapFile};
pub use search::{find_path, path_cost, InvalidNode, SearchSpace};
pub use selection::{Pick, Selection};
pub use terrain::Terrain;
