use std::time::Duration;

use log::{info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::sim::brush::Brush;
use crate::sim::data::element_grid::ElementGrid;
use crate::sim::data::render_buffer::{sync_to_render_buffer, Cell, RenderBufferSizeError};
use crate::sim::elements::element::ElementType;
use crate::sim::util::clock::{Clock, FramePacer};
use crate::sim::util::grid::GridOutOfBoundsError;
use crate::sim::util::vectors::{GridVector, ScreenPoint};

/// Reference configuration defaults
pub const DEFAULT_GRID_SIZE_X: usize = 128;
pub const DEFAULT_GRID_SIZE_Y: usize = 128;
pub const DEFAULT_WINDOW_WIDTH: f64 = 800.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 800.0;
pub const DEFAULT_MIN_FRAME_TIME: Duration = Duration::from_millis(16);

/// Builder for a [Simulation]
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    grid_width: usize,
    grid_height: usize,
    window_width: f64,
    window_height: f64,
    min_frame_time: Duration,
    seed: Option<u64>,
    demo_columns: bool,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_SIZE_X,
            grid_height: DEFAULT_GRID_SIZE_Y,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            min_frame_time: DEFAULT_MIN_FRAME_TIME,
            seed: None,
            demo_columns: false,
        }
    }
}

impl SimulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    /// The simulation grid dimensions in cells
    pub fn grid_size(mut self, width: usize, height: usize) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }
    /// The host window dimensions in pixels, used to map pointer samples
    /// onto the grid
    pub fn window_size(mut self, width: f64, height: f64) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }
    /// The minimum frame interval handed to [Simulation::frame_pacer]
    pub fn min_frame_time(mut self, min_frame_time: Duration) -> Self {
        self.min_frame_time = min_frame_time;
        self
    }
    /// Seed the tie-break rng for reproducible runs
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    /// Seed a few vertical sand columns for visual demonstration
    pub fn demo_columns(mut self, demo_columns: bool) -> Self {
        self.demo_columns = demo_columns;
        self
    }

    pub fn build(self) -> Simulation {
        let clock = Clock::new();
        let mut grid = ElementGrid::new_empty(self.grid_width, self.grid_height);
        if self.demo_columns {
            let from_y = self.grid_height / 2;
            for x in [
                self.grid_width / 4,
                self.grid_width / 2,
                3 * self.grid_width / 4,
            ] {
                grid.fill_column(x, from_y, ElementType::Sand, clock);
            }
        }
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        info!(
            "new simulation: {}x{} grid, {}x{} window",
            self.grid_width, self.grid_height, self.window_width, self.window_height
        );
        Simulation {
            grid,
            clock,
            rng,
            brush: Brush::default(),
            selected: ElementType::Sand,
            window_width: self.window_width,
            window_height: self.window_height,
            min_frame_time: self.min_frame_time,
        }
    }
}

/// The simulation object the host constructs once and drives by reference
/// every frame. There is no global engine state; everything the engine
/// mutates lives here.
pub struct Simulation {
    grid: ElementGrid,
    clock: Clock,
    rng: StdRng,
    brush: Brush,
    selected: ElementType,
    window_width: f64,
    window_height: f64,
    min_frame_time: Duration,
}

/* Getters & Setters */
impl Simulation {
    pub fn get_grid(&self) -> &ElementGrid {
        &self.grid
    }
    pub fn get_grid_mut(&mut self) -> &mut ElementGrid {
        &mut self.grid
    }
    pub fn get_clock(&self) -> Clock {
        self.clock
    }
    pub fn get_brush(&self) -> &Brush {
        &self.brush
    }
    pub fn get_brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }
    pub fn get_selected_element(&self) -> ElementType {
        self.selected
    }
    /// Choose the material the primary pointer button paints
    pub fn set_selected_element(&mut self, material: ElementType) {
        self.selected = material;
    }
    /// A pacer for the host loop, configured with this simulation's minimum
    /// frame interval
    pub fn frame_pacer(&self) -> FramePacer {
        FramePacer::new(self.min_frame_time)
    }
    /// Place one material directly, mostly useful for scenario setup
    pub fn set_element(
        &mut self,
        pos: GridVector,
        material: ElementType,
    ) -> Result<(), GridOutOfBoundsError> {
        self.grid.checked_set_material(pos, material, self.clock)
    }
}

/* Processing */
impl Simulation {
    /// Advance the simulation by exactly one tick.
    ///
    /// Visits every cell once, in row-major flat order with the bottom row
    /// first, and applies the material's movement rule in place. A cell can
    /// observe neighbors that already moved earlier in the same sweep; that
    /// iteration-order dependency is part of the contract, not an accident,
    /// and the displacement stamp keeps any cell from moving twice. One call
    /// is one tick of evolution, never more.
    pub fn step(&mut self, delta: Duration) {
        self.clock.update(delta);
        let current_time = self.clock;
        trace!("processing tick {}", current_time.get_current_frame());
        for y in 0..self.grid.get_height() {
            for x in 0..self.grid.get_width() {
                let element = self.grid.get(GridVector { x, y });
                // Skip anything that already swapped earlier in this sweep
                if element.displaced(current_time) {
                    continue;
                }
                element.process(&mut self.grid, current_time, &mut self.rng);
            }
        }
    }

    /// Paint or erase a square neighborhood of cells under a pointer
    /// sample. The primary button paints the selected element, the
    /// secondary erases back to air.
    pub fn paint(&mut self, screen_x: f64, screen_y: f64, erase: bool) {
        let material = if erase {
            ElementType::Air
        } else {
            self.selected
        };
        self.brush.apply(
            &mut self.grid,
            ScreenPoint::new(screen_x, screen_y),
            material,
            self.window_width,
            self.window_height,
            self.clock,
        );
    }

    /// Mirror the grid into the host's render buffer. Within a frame this
    /// must run after [Simulation::step] and before the renderer reads the
    /// buffer.
    pub fn sync_to_render_buffer(&self, out: &mut [Cell]) -> Result<(), RenderBufferSizeError> {
        sync_to_render_buffer(&self.grid, out)
    }
}

/// The per-frame entry point the render loop drives.
///
/// The host owns the render buffer and hands the engine a mutable reference
/// once per displayed frame; the engine runs one tick and republishes the
/// grid into it. Keeping this behind a trait decouples the render loop from
/// the engine without handing it a raw function pointer.
pub trait FrameUpdate {
    /// Run exactly one tick, then mirror the grid into the render buffer
    fn update(
        &mut self,
        delta: Duration,
        render_buffer: &mut [Cell],
    ) -> Result<(), RenderBufferSizeError>;
}

impl FrameUpdate for Simulation {
    fn update(
        &mut self,
        delta: Duration,
        render_buffer: &mut [Cell],
    ) -> Result<(), RenderBufferSizeError> {
        self.step(delta);
        self.sync_to_render_buffer(render_buffer)
    }
}
