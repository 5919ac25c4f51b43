use itertools::iproduct;
use log::debug;

use crate::sim::data::element_grid::ElementGrid;
use crate::sim::elements::element::ElementType;
use crate::sim::util::clock::Clock;
use crate::sim::util::vectors::{GridVector, ScreenPoint};

/// The square painting brush.
///
/// The radius is in cells; the default of 3 covers the 7x7 neighborhood
/// around the pointer. Painting goes through the grid's material-only
/// setter, so position bookkeeping is untouched and anything falling outside
/// the grid is dropped by the bounds check rather than crashing.
#[derive(Debug, Clone, Copy)]
pub struct Brush {
    radius: isize,
}

impl Default for Brush {
    fn default() -> Self {
        Self { radius: 3 }
    }
}

impl Brush {
    pub fn new(radius: isize) -> Self {
        Self {
            radius: radius.max(0),
        }
    }

    pub fn get_radius(&self) -> isize {
        self.radius
    }

    /// Resize the brush, clamped so it always covers at least one cell
    pub fn resize(&mut self, radius: isize) {
        self.radius = radius.max(0);
    }
}

/// Screen space to grid space
impl Brush {
    /// Map a pointer sample to the grid cell under it by linear scaling.
    /// Screen y grows downward and grid y grows upward, so the vertical axis
    /// flips. The result is signed and can land outside the grid, including
    /// one row above it when the pointer sits on the window's top edge;
    /// painting relies on the grid's own bounds check to drop those cells.
    pub fn grid_position(
        screen: ScreenPoint,
        window_width: f64,
        window_height: f64,
        grid_width: usize,
        grid_height: usize,
    ) -> (isize, isize) {
        let grid_x = (screen.x / window_width * grid_width as f64).floor() as isize;
        let grid_y =
            grid_height as isize - (screen.y / window_height * grid_height as f64).floor() as isize;
        (grid_x, grid_y)
    }
}

/// Brush effect
impl Brush {
    /// Paint one material over the square neighborhood centered on the
    /// pointer. Out of bounds cells are silently dropped.
    pub fn apply(
        &self,
        grid: &mut ElementGrid,
        screen: ScreenPoint,
        material: ElementType,
        window_width: f64,
        window_height: f64,
        time: Clock,
    ) {
        debug!("applying brush at {}", screen);
        let (center_x, center_y) = Self::grid_position(
            screen,
            window_width,
            window_height,
            grid.get_width(),
            grid.get_height(),
        );
        for (i, j) in iproduct!(-self.radius..=self.radius, -self.radius..=self.radius) {
            let x = center_x + i;
            let y = center_y + j;
            if !grid.in_bounds(x, y) {
                continue;
            }
            let pos = GridVector {
                x: x as usize,
                y: y as usize,
            };
            grid.checked_set_material(pos, material, time).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_grid() -> ElementGrid {
        ElementGrid::new_empty(8, 8)
    }

    /// Map through an 800x800 window onto an 8x8 grid
    fn apply_at(grid: &mut ElementGrid, screen_x: f64, screen_y: f64, material: ElementType) {
        Brush::default().apply(
            grid,
            ScreenPoint::new(screen_x, screen_y),
            material,
            800.0,
            800.0,
            Clock::new(),
        );
    }

    #[test]
    fn test_grid_position_scales_and_flips() {
        // The window center maps to the grid center
        assert_eq!(
            Brush::grid_position(ScreenPoint::new(400.0, 400.0), 800.0, 800.0, 128, 128),
            (64, 64)
        );
        // The window's bottom edge maps to the bottom row
        assert_eq!(
            Brush::grid_position(ScreenPoint::new(0.0, 800.0), 800.0, 800.0, 128, 128),
            (0, 0)
        );
        // The window's top edge maps one row above the grid; painting there
        // clips against the top rather than crashing
        assert_eq!(
            Brush::grid_position(ScreenPoint::new(0.0, 0.0), 800.0, 800.0, 128, 128),
            (0, 128)
        );
    }

    /// The full 7x7 neighborhood is painted and nothing else
    #[test]
    fn test_paint_neighborhood() {
        let mut grid = get_test_grid();

        // Maps to cell (3, 5)
        apply_at(&mut grid, 350.0, 350.0, ElementType::Sand);

        for y in 0..8 {
            for x in 0..8 {
                let expected = if (2..=7).contains(&y) && x <= 6 {
                    ElementType::Sand
                } else {
                    ElementType::Air
                };
                assert_eq!(
                    grid.get(GridVector { x, y }).get_type(),
                    expected,
                    "at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    /// Painting near the origin clips against the boundary instead of
    /// wrapping or crashing
    #[test]
    fn test_paint_clips_at_the_boundary() {
        let mut grid = get_test_grid();

        // Maps to cell (0, 1)
        apply_at(&mut grid, 0.0, 700.0, ElementType::Sand);

        let census = grid.count_by_type();
        // x in [0, 3], y in [0, 4]
        assert_eq!(census[&ElementType::Sand], 4 * 5);
    }

    #[test]
    fn test_erase_restores_air() {
        let mut grid = get_test_grid();
        apply_at(&mut grid, 350.0, 350.0, ElementType::Sand);

        apply_at(&mut grid, 350.0, 350.0, ElementType::Air);

        assert_eq!(grid.count_by_type()[&ElementType::Air], 64);
    }

    /// The radius clamps at zero so the brush always covers at least the
    /// cell under the pointer
    #[test]
    fn test_resize_clamps() {
        let mut brush = Brush::new(-2);
        assert_eq!(brush.get_radius(), 0);

        brush.resize(5);
        assert_eq!(brush.get_radius(), 5);

        brush.resize(-1);
        assert_eq!(brush.get_radius(), 0);
    }

    /// A brush of radius zero paints exactly one cell
    #[test]
    fn test_radius_zero_paints_one_cell() {
        let mut grid = get_test_grid();

        Brush::new(0).apply(
            &mut grid,
            ScreenPoint::new(350.0, 350.0),
            ElementType::Water,
            800.0,
            800.0,
            Clock::new(),
        );

        assert_eq!(grid.count_by_type()[&ElementType::Water], 1);
        assert_eq!(
            grid.get(GridVector { x: 3, y: 5 }).get_type(),
            ElementType::Water
        );
    }
}
