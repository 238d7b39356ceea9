//! Tile selection state machine
//!
//! Two clicks choose the endpoints of a path query. The machine only tracks
//! selection state; it never runs a search. The pathfinding core receives
//! the finished `(start, goal)` pair and nothing else.

use crate::grid::{Coord, HexGrid};

/// Current selection state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// No tile picked yet
    #[default]
    Idle,
    /// Start tile picked, waiting for the goal
    StartPicked(Coord),
}

/// Outcome of feeding one click to the machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    /// Click ignored: the tile is water or out of bounds. State unchanged.
    Rejected(Coord),
    /// Start recorded, waiting for a goal click
    Start(Coord),
    /// Both endpoints chosen; the machine has reset to idle
    Pair { start: Coord, goal: Coord },
}

impl Selection {
    pub fn new() -> Self {
        Selection::Idle
    }

    /// Feed a clicked tile. Tiles a path could never use are rejected
    /// without changing state.
    pub fn click(&mut self, grid: &HexGrid, coord: Coord) -> Pick {
        if !grid.is_enterable(coord) {
            return Pick::Rejected(coord);
        }
        match *self {
            Selection::Idle => {
                *self = Selection::StartPicked(coord);
                Pick::Start(coord)
            }
            Selection::StartPicked(start) => {
                *self = Selection::Idle;
                Pick::Pair { start, goal: coord }
            }
        }
    }

    /// Right-click: drop any pending selection
    pub fn clear(&mut self) {
        *self = Selection::Idle;
    }
}
