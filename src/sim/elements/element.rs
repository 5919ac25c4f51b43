use rand::Rng;
use strum_macros::{Display, EnumIter};

use crate::sim::data::element_grid::ElementGrid;
use crate::sim::elements::movement::fluid::fluid_process;
use crate::sim::elements::movement::solid::solid_process;
use crate::sim::util::clock::Clock;
use crate::sim::util::vectors::GridVector;

/// The discrete substance a cell can hold.
/// Air is the empty sentinel; it never moves on its own.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ElementType {
    #[default]
    Air,
    Sand,
    Water,
}

impl ElementType {
    /// The material code written into the render buffer.
    /// These values are a contract with the renderer's shaders.
    pub fn cell_value(self) -> u32 {
        match self {
            ElementType::Air => 0,
            ElementType::Sand => 1,
            ElementType::Water => 2,
        }
    }

    /// How the movement rules see a cell of this material as a swap target.
    pub fn state_of_matter(self) -> StateOfMatter {
        match self {
            ElementType::Air => StateOfMatter::Empty,
            ElementType::Water => StateOfMatter::Liquid,
            ElementType::Sand => StateOfMatter::Solid,
        }
    }
}

/// Swap-acceptance ordering for the movement rules.
/// A mover may displace anything up to the state its rule allows: solids
/// sink through liquids and empty space, liquids only flow into empty space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StateOfMatter {
    Empty,
    Liquid,
    Solid,
}

/// One grid slot's state.
///
/// The stored position is kept consistent with the slot the element occupies
/// in the grid's backing storage; `ElementGrid` re-stamps it on every set and
/// swap. `last_moved` carries the tick the element last took part in a swap,
/// which is what keeps a cell from moving twice in one sweep.
#[derive(Debug, Clone, Copy)]
pub struct Element {
    material: ElementType,
    pos: GridVector,
    last_moved: Clock,
}

impl Element {
    pub fn new(material: ElementType, pos: GridVector) -> Self {
        Self {
            material,
            pos,
            last_moved: Clock::default(),
        }
    }

    pub fn get_type(&self) -> ElementType {
        self.material
    }
    pub fn get_pos(&self) -> GridVector {
        self.pos
    }
    pub fn get_last_moved(&self) -> Clock {
        self.last_moved
    }

    /// True if this element was already the source or target of a swap this
    /// tick.
    pub fn displaced(&self, current_time: Clock) -> bool {
        self.last_moved.get_current_frame() >= current_time.get_current_frame()
    }

    /// Re-stamp the position bookkeeping only. Used by plain sets, which
    /// must not mark the slot as having moved.
    pub(crate) fn stamp_pos(&mut self, pos: GridVector) {
        self.pos = pos;
    }

    /// Re-stamp position and displacement together. Used by swaps.
    pub(crate) fn stamp(&mut self, pos: GridVector, time: Clock) {
        self.pos = pos;
        self.last_moved = time;
    }

    /// Mutate the material in place, leaving the position bookkeeping and
    /// the displacement stamp untouched.
    pub(crate) fn set_type(&mut self, material: ElementType) {
        self.material = material;
    }

    /// Apply this element's movement rule for one tick. Results in at most
    /// one swap of this cell with one of its neighbors.
    pub fn process(&self, grid: &mut ElementGrid, current_time: Clock, rng: &mut impl Rng) {
        match self.material {
            ElementType::Air => {}
            ElementType::Sand => solid_process(self.pos, grid, current_time),
            ElementType::Water => fluid_process(self.pos, grid, current_time, rng),
        }
    }
}
