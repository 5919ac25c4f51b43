//! A simple 2d grid type backed by the ndarray crate.
//! The backing array is row-major and contiguous, which is what the
//! render buffer sync relies on when it walks the cells flat.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt;

use super::vectors::GridVector;

/// A simple 2d grid type
#[derive(Clone)]
pub struct Grid<T>(ndarray::Array2<T>);

/* =================
 * Initialization
 * ================= */
impl<T> Grid<T> {
    /// Create a new grid filled with one value
    pub fn new_fill(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self(ndarray::Array2::from_elem((height, width), value))
    }
    /// Create a new grid with the given width and height, and fill it with the given data
    /// The data is row-major, bottom row first
    pub fn new_from_vec(width: usize, height: usize, data: Vec<T>) -> Self {
        Self(ndarray::Array2::from_shape_vec((height, width), data).unwrap())
    }
}

/* ======================================
 * Simple Getters
 * Access basic attributes of the struct
 * ====================================== */
impl<T> Grid<T> {
    /// Get the width of the grid
    pub fn get_width(&self) -> usize {
        self.0.shape()[1]
    }
    /// Get the height of the grid
    pub fn get_height(&self) -> usize {
        self.0.shape()[0]
    }
    /// Get the total size of the grid
    pub fn total_size(&self) -> usize {
        self.0.len()
    }
    /// Get the data as a flat row-major slice, index `y * width + x`
    pub fn get_data_slice(&self) -> &[T] {
        self.0.as_slice().unwrap()
    }
}

/// Defines when the user has simply exceeded the bounds of the grid.
/// Holds the offending coordinate as signed values so underflowed neighbor
/// candidates can be reported as-is.
#[derive(Debug, Clone)]
pub struct GridOutOfBoundsError(pub isize, pub isize);
impl fmt::Display for GridOutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}) went outside the constraints of grid", self.0, self.1)
    }
}
impl std::error::Error for GridOutOfBoundsError {}

/* ======================================
 * Position Based Getters
 * Access data at a position
 * ====================================== */
impl<T> Grid<T> {
    /// Gets the value at the given coordinate
    pub fn get(&self, idx: GridVector) -> &T {
        let idx = self.transform_xy_coord_to_ndarray(idx);
        &self.0[idx]
    }
    /// Gets the value at the given coordinate, or returns an error if the coordinate is out of bounds
    pub fn checked_get(&self, idx: GridVector) -> Result<&T, GridOutOfBoundsError> {
        if idx.x >= self.get_width() || idx.y >= self.get_height() {
            return Err(GridOutOfBoundsError(idx.x as isize, idx.y as isize));
        }
        Ok(self.get(idx))
    }
    /// Gets the value at the given coordinate, mutably
    pub fn get_mut(&mut self, idx: GridVector) -> &mut T {
        let idx = self.transform_xy_coord_to_ndarray(idx);
        &mut self.0[idx]
    }
    /// Sets the value at the given coordinate, overwriting the old value
    pub fn set(&mut self, idx: GridVector, value: T) {
        self.replace(idx, value);
    }
    /// Like set, but gives you ownership of the original value
    pub fn replace(&mut self, idx: GridVector, replacement: T) -> T {
        let coord = self.transform_xy_coord_to_ndarray(idx);
        std::mem::replace(&mut self.0[coord], replacement)
    }
    /// Transforms the coordinate to the ndarray coordinate system, which is
    /// row-then-column
    fn transform_xy_coord_to_ndarray(&self, idx: GridVector) -> [usize; 2] {
        [idx.y, idx.x]
    }
}

/// Iteration
impl<T> Grid<T> {
    /// Get an iterator over the grid in flat row-major order
    pub fn iter(&self) -> std::slice::Iter<T> {
        self.0.as_slice().unwrap().iter()
    }

    /// Get a mutable iterator over the grid in flat row-major order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<T> {
        self.0.as_slice_mut().unwrap().iter_mut()
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
