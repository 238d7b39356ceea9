//! Rectangular hex map with row-parity neighbor offsets
//!
//! Tiles are addressed by offset coordinates `(x, z)`: `x` runs along a row,
//! `z` counts rows. Every other row sits half a tile to the side, so the six
//! neighbor offsets of a tile depend on the parity of its row.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::search::{find_path, SearchSpace};
use crate::terrain::Terrain;

// ============================================================================
// COORDINATES
// ============================================================================

/// Offset-coordinate identity of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub z: i32,
}

impl Coord {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Neighbor offsets for even rows (z % 2 == 0), in fixed iteration order:
/// right, bottom-right, bottom-left, left, top-left, top-right.
pub const EVEN_ROW_OFFSETS: [(i32, i32); 6] = [
    (1, 0),   // Right
    (0, 1),   // Bottom Right
    (-1, 1),  // Bottom Left
    (-1, 0),  // Left
    (-1, -1), // Top Left
    (0, -1),  // Top Right
];

/// Neighbor offsets for odd rows, same iteration order
pub const ODD_ROW_OFFSETS: [(i32, i32); 6] = [
    (1, 0),  // Right
    (1, 1),  // Bottom Right
    (0, 1),  // Bottom Left
    (-1, 0), // Left
    (0, -1), // Top Left
    (1, -1), // Top Right
];

/// Offset table for the row containing `z`
pub fn offsets_for_row(z: i32) -> &'static [(i32, i32); 6] {
    if z % 2 == 0 {
        &EVEN_ROW_OFFSETS
    } else {
        &ODD_ROW_OFFSETS
    }
}

// ============================================================================
// GRID
// ============================================================================

/// A single tile of the map
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coord: Coord,
    pub terrain: Terrain,
}

/// Rectangular hex map over `[0,width) x [0,length)`, row-major storage.
///
/// The grid is immutable once built. Searches only read it, so any number of
/// concurrent [`find_path`] calls may share one grid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HexGrid {
    width: i32,
    length: i32,
    cells: Vec<Cell>,
}

impl HexGrid {
    /// Build a grid, calling `lookup` once for every in-range coordinate in
    /// row-major order.
    pub fn build<F>(width: i32, length: i32, mut lookup: F) -> Result<Self, GridError>
    where
        F: FnMut(Coord) -> Terrain,
    {
        if width <= 0 || length <= 0 {
            return Err(GridError::InvalidDimensions { width, length });
        }

        let mut cells = Vec::with_capacity((width * length) as usize);
        for z in 0..length {
            for x in 0..width {
                let coord = Coord::new(x, z);
                cells.push(Cell {
                    coord,
                    terrain: lookup(coord),
                });
            }
        }

        Ok(Self {
            width,
            length,
            cells,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    /// Are these coordinates within the map?
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.z >= 0 && c.z < self.length
    }

    /// Tile at the coordinates, or `None` when out of bounds
    pub fn at(&self, c: Coord) -> Option<&Cell> {
        if !self.in_bounds(c) {
            return None;
        }
        Some(&self.cells[(c.z * self.width + c.x) as usize])
    }

    /// All tiles in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Can a search enter this tile? In bounds and not impassable.
    pub fn is_enterable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(|cell| cell.terrain.is_passable())
    }

    /// All traversable neighbors of `c`, appended to `buf` in offset-table
    /// order. Out-of-bounds and impassable candidates are omitted, never
    /// returned as high-cost entries.
    pub fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for &(dx, dz) in offsets_for_row(c.z) {
            let n = Coord::new(c.x + dx, c.z + dz);
            if self.is_enterable(n) {
                buf.push(n);
            }
        }
    }

    /// Cost of moving into the tile at `c`.
    ///
    /// `neighbors` already filters impassable tiles, but the query re-checks
    /// so callers that bypass it still get a safe answer.
    pub fn cost_into(&self, c: Coord) -> Result<f32, GridError> {
        let cell = self.at(c).ok_or(GridError::InvalidNode(c))?;
        cell.terrain
            .travel_cost()
            .ok_or(GridError::ImpassableTerrain(c))
    }

    /// World-space position of a tile center. Even rows are shifted half a
    /// tile on x; rows are packed at 0.75 tile spacing.
    pub fn world_pos(c: Coord) -> (f32, f32) {
        let x_offset = if c.z % 2 == 0 { -0.5 } else { 0.0 };
        (c.x as f32 + x_offset, 0.75 * c.z as f32)
    }

    /// Straight-line distance between two tile centers, the A* heuristic.
    ///
    /// Terrain cost is ignored, so this is admissible only while the minimum
    /// traversal cost is at least one grid unit. Cheaper terrain can break
    /// optimality; a known limitation kept from the reference behavior.
    pub fn estimate(from: Coord, goal: Coord) -> f32 {
        let (fx, fz) = Self::world_pos(from);
        let (gx, gz) = Self::world_pos(goal);
        let dx = gx - fx;
        let dz = gz - fz;
        (dx * dx + dz * dz).sqrt()
    }

    /// Cheapest path from `start` to `goal` on this grid.
    ///
    /// `Ok(None)` means the goal is unreachable; an invalid endpoint (out of
    /// bounds or water) is an error.
    pub fn find_path(&self, start: Coord, goal: Coord) -> Result<Option<Vec<Coord>>, GridError> {
        Ok(find_path(self, start, goal)?)
    }
}

impl SearchSpace for HexGrid {
    type Node = Coord;

    fn contains(&self, n: Coord) -> bool {
        self.is_enterable(n)
    }

    fn neighbors(&self, n: Coord, buf: &mut Vec<Coord>) {
        HexGrid::neighbors(self, n, buf);
    }

    fn cost_into(&self, n: Coord) -> f32 {
        // Unreachable tiles price as infinite; `neighbors` never yields them.
        self.at(n)
            .and_then(|cell| cell.terrain.travel_cost())
            .unwrap_or(f32::INFINITY)
    }

    fn estimate(&self, from: Coord, goal: Coord) -> f32 {
        HexGrid::estimate(from, goal)
    }
}
