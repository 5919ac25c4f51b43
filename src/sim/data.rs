pub mod element_grid;
pub mod render_buffer;
pub mod simulation;
