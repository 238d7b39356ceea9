//! Seeded random map generation and JSON map files

use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::grid::HexGrid;
use crate::terrain::Terrain;

/// Parameters for random map generation
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MapConfig {
    pub width: i32,
    pub length: i32,
    pub seed: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 8,
            length: 8,
            seed: 0,
        }
    }
}

/// Generate a map with one uniformly random terrain per tile.
///
/// The grid builder walks coordinates in row-major order, so a given seed
/// and size always produce the same map.
pub fn generate(config: &MapConfig) -> Result<HexGrid, GridError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    HexGrid::build(config.width, config.length, |_| Terrain::random(&mut rng))
}

/// On-disk map snapshot: dimensions plus row-major terrain
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapFile {
    pub width: i32,
    pub length: i32,
    pub tiles: Vec<Terrain>,
}

impl MapFile {
    pub fn from_grid(grid: &HexGrid) -> Self {
        Self {
            width: grid.width(),
            length: grid.length(),
            tiles: grid.cells().map(|cell| cell.terrain).collect(),
        }
    }

    pub fn to_grid(&self) -> anyhow::Result<HexGrid> {
        let expected = (self.width.max(0) as usize) * (self.length.max(0) as usize);
        anyhow::ensure!(
            self.tiles.len() == expected,
            "map file has {} tiles, expected {} for {}x{}",
            self.tiles.len(),
            expected,
            self.width,
            self.length
        );
        let grid = HexGrid::build(self.width, self.length, |c| {
            self.tiles[(c.z * self.width + c.x) as usize]
        })?;
        Ok(grid)
    }

    /// Load a map from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<HexGrid> {
        let content = std::fs::read_to_string(path)?;
        let file: MapFile = serde_json::from_str(&content)?;
        file.to_grid()
    }

    /// Save as pretty-printed JSON
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
