//! Movement rules shared by the elements, grouped by how the material
//! behaves rather than what it is.

pub mod fluid;
pub mod solid;
