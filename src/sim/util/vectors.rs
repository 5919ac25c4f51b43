use std::fmt::Display;

/// A cell coordinate on the simulation grid.
/// x is the column axis, positive to the right.
/// y is the row axis, positive upward; row 0 is the bottom of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridVector {
    pub x: usize,
    pub y: usize,
}

/// Convienient constants
impl GridVector {
    pub const ZERO: Self = Self { x: 0, y: 0 };
}

/// A relative offset from a cell, as used by the movement rule tables.
/// Offsets are signed so candidates past the left or bottom edge can be
/// rejected before any unsigned coordinate arithmetic happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridOffset {
    pub dx: isize,
    pub dy: isize,
}

/// The offsets the movement rules try
impl GridOffset {
    pub const DOWN: Self = Self { dx: 0, dy: -1 };
    pub const DOWN_LEFT: Self = Self { dx: -1, dy: -1 };
    pub const DOWN_RIGHT: Self = Self { dx: 1, dy: -1 };
    pub const LEFT: Self = Self { dx: -1, dy: 0 };
    pub const RIGHT: Self = Self { dx: 1, dy: 0 };
}

/// A pointer sample in window space, in pixels.
/// Screen y grows downward; the brush flips it into grid space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Display for ScreenPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(ScreenPoint: ({}, {}))", self.x, self.y)
    }
}
