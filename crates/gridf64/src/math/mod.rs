//! Container types: `Grid` (2D, row-major) and `Vector` (1D), plus the
//! row/column addressing shared by extraction and reductions.
pub mod axis;
pub mod matrix;
pub mod vector;

pub use axis::{Axis, AxisSelector};
pub use matrix::Grid;
pub use vector::Vector;
