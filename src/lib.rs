//! A real-time falling sand simulation core.
//!
//! The crate owns the grid data model, the per-cell transition rules, the
//! pointer painting input, and the render buffer sync. Window, device and
//! pipeline plumbing belong to the host application, which drives the engine
//! once per displayed frame through
//! [sim::data::simulation::FrameUpdate](crate::sim::data::simulation::FrameUpdate).

pub mod sim;
