use std::fmt;

use bytemuck::{Pod, Zeroable};

use super::element_grid::ElementGrid;

/// One render-visible cell.
///
/// Matches the host-to-device layout the renderer uploads: a single material
/// code padded out to 16 bytes so an array of cells satisfies std140 stride
/// rules. The simulation writes it once per frame; the renderer only reads.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct Cell {
    /// The material code, see `ElementType::cell_value`
    pub value: u32,
    /// Explicit std140 padding, always zero
    _pad: [u32; 3],
}

impl Cell {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            _pad: [0; 3],
        }
    }
}

/// Returned when the host's render buffer does not match the grid size
#[derive(Debug, Clone)]
pub struct RenderBufferSizeError {
    pub expected: usize,
    pub actual: usize,
}
impl fmt::Display for RenderBufferSizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "render buffer holds {} cells but the grid has {}",
            self.actual, self.expected
        )
    }
}
impl std::error::Error for RenderBufferSizeError {}

/// Copy every cell's material code into the externally owned render buffer,
/// in the same row-major flat order as the grid, so that
/// `out[y * width + x]` mirrors the element at (x, y).
///
/// Must run after the tick's `step` and before the renderer reads the
/// buffer; the two buffers are otherwise deliberately duplicated so the
/// renderer never needs to understand the element representation.
pub fn sync_to_render_buffer(
    grid: &ElementGrid,
    out: &mut [Cell],
) -> Result<(), RenderBufferSizeError> {
    if out.len() != grid.total_size() {
        return Err(RenderBufferSizeError {
            expected: grid.total_size(),
            actual: out.len(),
        });
    }
    for (cell, element) in out.iter_mut().zip(grid.get_grid().iter()) {
        *cell = Cell::new(element.get_type().cell_value());
    }
    Ok(())
}
