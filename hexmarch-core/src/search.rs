//! Generic A* search over an abstract weighted space
//!
//! The engine knows nothing about hex geometry. Any type that can enumerate
//! neighbors, price a move, and estimate remaining distance can be searched;
//! [`crate::grid::HexGrid`] is the one implementation in this crate.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

// ============================================================================
// SEARCH SPACE CAPABILITY
// ============================================================================

/// The contract a graph must satisfy to be searchable.
pub trait SearchSpace {
    /// Stable node identity used for equality and hashing in search
    /// bookkeeping.
    type Node: Copy + Eq + Hash;

    /// Is `n` a valid search endpoint (present in the space and enterable)?
    fn contains(&self, n: Self::Node) -> bool;

    /// Append the traversable neighbors of `n` to `buf`, in a deterministic
    /// order. The caller clears `buf` beforehand.
    fn neighbors(&self, n: Self::Node, buf: &mut Vec<Self::Node>);

    /// Cost of entering `n`. Must be non-negative and finite for any node
    /// produced by `neighbors`.
    fn cost_into(&self, n: Self::Node) -> f32;

    /// Heuristic estimate of the remaining cost from `from` to `goal`.
    /// Must never overestimate the true cost for paths to stay optimal.
    fn estimate(&self, from: Self::Node, goal: Self::Node) -> f32;
}

/// A search endpoint that is not a valid node of the space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("search endpoint {0} is out of bounds or impassable")]
pub struct InvalidNode<N: fmt::Debug + fmt::Display>(pub N);

// ============================================================================
// FRONTIER
// ============================================================================

/// Frontier entry. Min-ordered by f-score, with a deterministic tie-break:
/// lower heuristic first, then earlier insertion. Pops are reproducible no
/// matter how the score maps iterate.
struct Open<N> {
    node: N,
    g: f32,
    h: f32,
    f: f32,
    seq: u64,
}

impl<N> PartialEq for Open<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Open<N> {}

impl<N> Ord for Open<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (a max-heap) pops the smallest entry first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for Open<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// A* SEARCH
// ============================================================================

/// Compute the cheapest path from `start` to `goal`.
///
/// Returns the full path including both endpoints, `Ok(None)` when the goal
/// is unreachable, or [`InvalidNode`] when either endpoint is not a valid
/// node of the space. A search with `start == goal` returns the
/// single-element path immediately.
///
/// All search state lives inside this call; the space is only read, so
/// independent searches over a shared space may run concurrently.
pub fn find_path<S: SearchSpace>(
    space: &S,
    start: S::Node,
    goal: S::Node,
) -> Result<Option<Vec<S::Node>>, InvalidNode<S::Node>>
where
    S::Node: fmt::Debug + fmt::Display,
{
    if !space.contains(start) {
        return Err(InvalidNode(start));
    }
    if !space.contains(goal) {
        return Err(InvalidNode(goal));
    }
    if start == goal {
        return Ok(Some(vec![start]));
    }

    let mut open: BinaryHeap<Open<S::Node>> = BinaryHeap::new();
    let mut g_score: FxHashMap<S::Node, f32> = FxHashMap::default();
    let mut came_from: FxHashMap<S::Node, S::Node> = FxHashMap::default();
    let mut seq = 0u64;

    let h = space.estimate(start, goal);
    g_score.insert(start, 0.0);
    open.push(Open {
        node: start,
        g: 0.0,
        h,
        f: h,
        seq,
    });

    let mut nbuf: Vec<S::Node> = Vec::with_capacity(6);

    while let Some(entry) = open.pop() {
        let current = entry.node;

        // Stale frontier entry: a cheaper route to this node was recorded
        // after the push.
        match g_score.get(&current) {
            Some(&g) if g == entry.g => {}
            _ => continue,
        }

        if current == goal {
            return Ok(Some(reconstruct(&came_from, goal)));
        }

        nbuf.clear();
        space.neighbors(current, &mut nbuf);

        for &next in &nbuf {
            let tentative = entry.g + space.cost_into(next);
            let improved = match g_score.get(&next) {
                Some(&g) => tentative < g,
                None => true,
            };
            if !improved {
                continue;
            }

            g_score.insert(next, tentative);
            came_from.insert(next, current);

            let h = space.estimate(next, goal);
            seq += 1;
            open.push(Open {
                node: next,
                g: tentative,
                h,
                f: tentative + h,
                seq,
            });
        }
    }

    Ok(None)
}

/// Walk predecessor links back from the goal. The start node has no
/// predecessor entry, so the walk terminates there.
fn reconstruct<N: Copy + Eq + Hash>(came_from: &FxHashMap<N, N>, goal: N) -> Vec<N> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Total cost of a path: the sum of `cost_into` over every node after the
/// first (entering the start tile is free).
pub fn path_cost<S: SearchSpace>(space: &S, path: &[S::Node]) -> f32 {
    path.iter().skip(1).map(|&n| space.cost_into(n)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Coord, HexGrid};
    use crate::mapgen::{self, MapConfig};
    use crate::terrain::Terrain;

    fn uniform_grid(width: i32, length: i32) -> HexGrid {
        HexGrid::build(width, length, |_| Terrain::Grass).unwrap()
    }

    /// Reference shortest-path cost by naive Dijkstra relaxation. Slow but
    /// obviously correct; used to cross-check A* on small maps.
    fn dijkstra_cost(grid: &HexGrid, start: Coord, goal: Coord) -> Option<f32> {
        let mut dist: FxHashMap<Coord, f32> = FxHashMap::default();
        let mut done: rustc_hash::FxHashSet<Coord> = rustc_hash::FxHashSet::default();
        dist.insert(start, 0.0);

        let mut buf = Vec::new();
        loop {
            let current = dist
                .iter()
                .filter(|(c, _)| !done.contains(*c))
                .min_by(|(ca, da), (cb, db)| {
                    da.total_cmp(db).then_with(|| (ca.z, ca.x).cmp(&(cb.z, cb.x)))
                })
                .map(|(&c, &d)| (c, d));
            let Some((current, d)) = current else {
                return None;
            };
            if current == goal {
                return Some(d);
            }
            done.insert(current);

            buf.clear();
            grid.neighbors(current, &mut buf);
            for &next in &buf {
                let nd = d + grid.cost_into(next).unwrap();
                if nd < dist.get(&next).copied().unwrap_or(f32::INFINITY) {
                    dist.insert(next, nd);
                }
            }
        }
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = uniform_grid(4, 4);
        for z in 0..4 {
            for x in 0..4 {
                let c = Coord::new(x, z);
                assert_eq!(find_path(&grid, c, c).unwrap(), Some(vec![c]));
            }
        }
    }

    #[test]
    fn test_invalid_endpoints() {
        let grid = uniform_grid(3, 3);
        let out = Coord::new(5, 5);
        let ok = Coord::new(1, 1);
        assert_eq!(find_path(&grid, out, ok), Err(InvalidNode(out)));
        assert_eq!(find_path(&grid, ok, out), Err(InvalidNode(out)));
    }

    #[test]
    fn test_water_endpoint_is_invalid() {
        let wet = Coord::new(1, 1);
        let grid = HexGrid::build(3, 3, |c| {
            if c == wet {
                Terrain::Water
            } else {
                Terrain::Grass
            }
        })
        .unwrap();
        assert_eq!(
            find_path(&grid, Coord::new(0, 0), wet),
            Err(InvalidNode(wet))
        );
        assert_eq!(
            find_path(&grid, wet, Coord::new(0, 0)),
            Err(InvalidNode(wet))
        );
    }

    #[test]
    fn test_unique_two_step_path() {
        // On a uniform 3x3 map the only cheapest route from (0,0) to (1,2)
        // runs through (0,1): three tiles, two cost-bearing steps.
        let grid = uniform_grid(3, 3);
        let path = find_path(&grid, Coord::new(0, 0), Coord::new(1, 2))
            .unwrap()
            .unwrap();
        assert_eq!(
            path,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 2)]
        );
        assert_eq!(path_cost(&grid, &path), 2.0);
    }

    #[test]
    fn test_corner_to_corner_cost() {
        // (0,0) to (2,2) takes three steps under these offset tables.
        let grid = uniform_grid(3, 3);
        let path = find_path(&grid, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path_cost(&grid, &path), 3.0);
    }

    #[test]
    fn test_enclosed_goal_is_unreachable() {
        // Goal at (2,2) ringed by water on a 5x5 map.
        let goal = Coord::new(2, 2);
        let grid = HexGrid::build(5, 5, |c| {
            let ring = crate::grid::EVEN_ROW_OFFSETS
                .iter()
                .any(|&(dx, dz)| c == Coord::new(goal.x + dx, goal.z + dz));
            if ring {
                Terrain::Water
            } else {
                Terrain::Grass
            }
        })
        .unwrap();
        assert_eq!(find_path(&grid, Coord::new(0, 0), goal).unwrap(), None);
        // The goal itself is still a valid endpoint.
        assert_eq!(find_path(&grid, goal, goal).unwrap(), Some(vec![goal]));
    }

    #[test]
    fn test_expensive_terrain_is_avoided() {
        // A mountain wall with a grass corridor: the cheap detour wins even
        // though the straight line is shorter.
        let grid = HexGrid::build(5, 5, |c| {
            if c.z == 2 && c.x != 4 {
                Terrain::Mountain
            } else {
                Terrain::Grass
            }
        })
        .unwrap();
        let path = find_path(&grid, Coord::new(0, 0), Coord::new(0, 4))
            .unwrap()
            .unwrap();
        let cost = path_cost(&grid, &path);
        assert!(
            !path.iter().any(|c| c.z == 2 && c.x != 4),
            "path crossed the mountain wall: {path:?}"
        );
        assert_eq!(cost, dijkstra_cost(&grid, Coord::new(0, 0), Coord::new(0, 4)).unwrap());
    }

    #[test]
    fn test_consecutive_cells_are_mutual_neighbors() {
        let grid = mapgen::generate(&MapConfig {
            width: 6,
            length: 6,
            seed: 11,
        })
        .unwrap();
        let mut buf = Vec::new();
        for sz in 0..6 {
            for sx in 0..6 {
                let start = Coord::new(sx, sz);
                let goal = Coord::new(5, 5);
                if !grid.is_enterable(start) || !grid.is_enterable(goal) {
                    continue;
                }
                let Some(path) = find_path(&grid, start, goal).unwrap() else {
                    continue;
                };
                for pair in path.windows(2) {
                    buf.clear();
                    grid.neighbors(pair[0], &mut buf);
                    assert!(buf.contains(&pair[1]), "{:?} !~ {:?}", pair[0], pair[1]);
                    buf.clear();
                    grid.neighbors(pair[1], &mut buf);
                    assert!(buf.contains(&pair[0]), "{:?} !~ {:?}", pair[1], pair[0]);
                }
            }
        }
    }

    #[test]
    fn test_matches_dijkstra_on_random_maps() {
        for seed in [1u64, 2, 3, 42] {
            let grid = mapgen::generate(&MapConfig {
                width: 5,
                length: 5,
                seed,
            })
            .unwrap();
            for sz in 0..5 {
                for sx in 0..5 {
                    for gz in 0..5 {
                        for gx in 0..5 {
                            let start = Coord::new(sx, sz);
                            let goal = Coord::new(gx, gz);
                            if !grid.is_enterable(start) || !grid.is_enterable(goal) {
                                continue;
                            }
                            let expected = dijkstra_cost(&grid, start, goal);
                            let actual = find_path(&grid, start, goal)
                                .unwrap()
                                .map(|p| path_cost(&grid, &p));
                            match (expected, actual) {
                                (None, None) => {}
                                (Some(e), Some(a)) => {
                                    assert!(
                                        (e - a).abs() < 1e-4,
                                        "seed {seed} {start} -> {goal}: dijkstra {e}, astar {a}"
                                    );
                                }
                                (e, a) => {
                                    panic!("seed {seed} {start} -> {goal}: {e:?} vs {a:?}")
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let grid = mapgen::generate(&MapConfig {
            width: 6,
            length: 6,
            seed: 99,
        })
        .unwrap();
        let start = Coord::new(0, 0);
        let goal = Coord::new(5, 5);
        if !grid.is_enterable(start) || !grid.is_enterable(goal) {
            return;
        }
        let first = find_path(&grid, start, goal).unwrap();
        for _ in 0..10 {
            assert_eq!(find_path(&grid, start, goal).unwrap(), first);
        }
    }
}
