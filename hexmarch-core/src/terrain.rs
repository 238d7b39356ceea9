//! Terrain types and traversal costs

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Terrain classification of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Grass,
    Forest,
    Desert,
    Mountain,
    Water,
}

/// All terrain types, in map-generation order
pub const ALL_TERRAINS: [Terrain; 5] = [
    Terrain::Grass,
    Terrain::Forest,
    Terrain::Desert,
    Terrain::Mountain,
    Terrain::Water,
];

impl Terrain {
    /// Cost of entering a tile of this terrain, or `None` if impassable.
    /// Distance to a neighbor is always the same (1 tile), so the move cost
    /// is the destination terrain cost alone.
    pub fn travel_cost(self) -> Option<f32> {
        match self {
            Terrain::Grass => Some(1.0),
            Terrain::Forest => Some(3.0),
            Terrain::Desert => Some(5.0),
            Terrain::Mountain => Some(10.0),
            Terrain::Water => None,
        }
    }

    /// Water can never be entered
    pub fn is_passable(self) -> bool {
        self.travel_cost().is_some()
    }

    /// One-character code for ASCII map previews
    pub fn glyph(self) -> char {
        match self {
            Terrain::Grass => 'g',
            Terrain::Forest => 'f',
            Terrain::Desert => 'd',
            Terrain::Mountain => 'm',
            Terrain::Water => '~',
        }
    }

    /// Pick one of the terrain types uniformly at random
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        ALL_TERRAINS[rng.gen_range(0..ALL_TERRAINS.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_costs() {
        assert_eq!(Terrain::Grass.travel_cost(), Some(1.0));
        assert_eq!(Terrain::Mountain.travel_cost(), Some(10.0));
        assert_eq!(Terrain::Water.travel_cost(), None);
        assert!(!Terrain::Water.is_passable());
        assert!(Terrain::Desert.is_passable());
    }

    #[test]
    fn test_random_is_seeded() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..32 {
            assert_eq!(Terrain::random(&mut a), Terrain::random(&mut b));
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Terrain::Forest).unwrap();
        assert_eq!(json, "\"Forest\"");
        let back: Terrain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Terrain::Forest);
    }
}
