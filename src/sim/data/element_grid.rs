use hashbrown::HashMap;
use strum::IntoEnumIterator;

use crate::sim::elements::element::{Element, ElementType};
use crate::sim::util::clock::Clock;
use crate::sim::util::grid::{Grid, GridOutOfBoundsError};
use crate::sim::util::vectors::{GridOffset, GridVector};

/// The authoritative simulation grid.
///
/// Every slot holds exactly one element; air is the only representation of
/// emptiness. The grid is allocated once at simulation start, mutated in
/// place every tick, and never resized. The renderer never touches it, it
/// only reads the separately synced render buffer.
pub struct ElementGrid {
    grid: Grid<Element>,

    /// This deals with whether or not the grid has seen any changes
    /// since the last frame
    last_set: Clock,
}

/* Initialization */
impl ElementGrid {
    /// Creates a new element grid of the given size and fills it with air
    pub fn new_empty(width: usize, height: usize) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(Element::new(ElementType::Air, GridVector { x, y }));
            }
        }
        Self {
            grid: Grid::new_from_vec(width, height, data),
            last_set: Clock::default(),
        }
    }
}

/* Getters & Setters */
impl ElementGrid {
    pub fn get_width(&self) -> usize {
        self.grid.get_width()
    }
    pub fn get_height(&self) -> usize {
        self.grid.get_height()
    }
    pub fn total_size(&self) -> usize {
        self.grid.total_size()
    }
    /// The tick the grid last changed. Hosts can compare this against their
    /// own clock to skip re-uploading an unchanged render buffer.
    pub fn get_last_set(&self) -> Clock {
        self.last_set
    }
    pub fn get_grid(&self) -> &Grid<Element> {
        &self.grid
    }
}

/// Bounds checking
impl ElementGrid {
    /// True when (x, y) lands on the grid. Coordinates arrive signed because
    /// neighbor candidates may underflow zero; the lower-bound check is real
    /// here, unlike a comparison on unsigned values.
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && x < self.get_width() as isize && y < self.get_height() as isize
    }

    /// Resolve a relative offset from pos. Anything outside the grid,
    /// including underflow past the left or bottom edge, reports as absent
    /// rather than wrapping or crashing.
    pub fn neighbor(
        &self,
        pos: GridVector,
        offset: GridOffset,
    ) -> Result<GridVector, GridOutOfBoundsError> {
        let x = pos.x as isize + offset.dx;
        let y = pos.y as isize + offset.dy;
        if !self.in_bounds(x, y) {
            return Err(GridOutOfBoundsError(x, y));
        }
        Ok(GridVector {
            x: x as usize,
            y: y as usize,
        })
    }
}

/// Position based access
impl ElementGrid {
    /// Gets a copy of the element at pos. The copy matters: movement rules
    /// read neighbor state and then commit a swap against the same grid in
    /// the same pass.
    pub fn get(&self, pos: GridVector) -> Element {
        *self.grid.get(pos)
    }

    /// Like get, but returns an error instead of panicking out of bounds
    pub fn checked_get(&self, pos: GridVector) -> Result<Element, GridOutOfBoundsError> {
        self.grid.checked_get(pos).copied()
    }

    /// Overwrite the slot at pos. The element's stored position is re-stamped
    /// to pos, so the location invariant holds no matter what the caller
    /// constructed. Out of bounds writes are reported, not applied.
    pub fn checked_set(
        &mut self,
        pos: GridVector,
        mut element: Element,
        time: Clock,
    ) -> Result<(), GridOutOfBoundsError> {
        if !self.in_bounds(pos.x as isize, pos.y as isize) {
            return Err(GridOutOfBoundsError(pos.x as isize, pos.y as isize));
        }
        element.stamp_pos(pos);
        self.grid.set(pos, element);
        self.last_set = time;
        Ok(())
    }

    /// Material-only overload of set. Mutates the slot in place, leaving the
    /// position bookkeeping and the displacement stamp untouched.
    pub fn checked_set_material(
        &mut self,
        pos: GridVector,
        material: ElementType,
        time: Clock,
    ) -> Result<(), GridOutOfBoundsError> {
        if !self.in_bounds(pos.x as isize, pos.y as isize) {
            return Err(GridOutOfBoundsError(pos.x as isize, pos.y as isize));
        }
        self.grid.get_mut(pos).set_type(material);
        self.last_set = time;
        Ok(())
    }

    /// Swap the contents of two slots. Both elements are re-stamped with
    /// their new positions and marked displaced for this tick. Both
    /// positions must be in bounds.
    pub fn swap(&mut self, a: GridVector, b: GridVector, time: Clock) {
        debug_assert!(self.in_bounds(a.x as isize, a.y as isize));
        debug_assert!(self.in_bounds(b.x as isize, b.y as isize));
        let mut element_a = self.get(a);
        let mut element_b = self.get(b);
        element_a.stamp(b, time);
        element_b.stamp(a, time);
        self.grid.set(b, element_a);
        self.grid.set(a, element_b);
        self.last_set = time;
    }
}

/// Proceedural generation helpers
impl ElementGrid {
    /// Fill the whole grid with one material
    pub fn fill(&mut self, material: ElementType, time: Clock) {
        for element in self.grid.iter_mut() {
            element.set_type(material);
        }
        self.last_set = time;
    }

    /// Fill one column with a material, from from_y up to the top row.
    /// A column outside the grid is silently dropped.
    pub fn fill_column(&mut self, x: usize, from_y: usize, material: ElementType, time: Clock) {
        for y in from_y..self.get_height() {
            let _ = self.checked_set_material(GridVector { x, y }, material, time);
        }
    }
}

/// Census
impl ElementGrid {
    /// Count the cells of each material. Every material appears as a key,
    /// including ones with a zero count.
    pub fn count_by_type(&self) -> HashMap<ElementType, usize> {
        let mut out: HashMap<ElementType, usize> =
            ElementType::iter().map(|material| (material, 0)).collect();
        for element in self.grid.iter() {
            *out.entry(element.get_type()).or_insert(0) += 1;
        }
        out
    }
}
