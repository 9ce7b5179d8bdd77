//! gridf64: dense row-major 2D arrays of `f64`.
//!
//! This crate provides a rectangular `Grid` and a one-dimensional `Vector`,
//! in-place element-wise arithmetic that broadcasts a scalar, a vector or a
//! grid over the left-hand grid, sum/product/average over the whole grid or
//! a single row or column (negative indices count from the end), predicate
//! checks, user-defined reducers and the matrix product.
//!
//! Misuse (mismatched shapes, out-of-range indices, averaging nothing) is
//! reported through [`GridError`]; IEEE results such as `inf` and `NaN` from
//! division are passed through unchanged.
//!
//! ```
//! use gridf64::{AxisSelector, Grid};
//!
//! let mut m: Grid = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
//! m.mul(2.0)?;
//! assert_eq!(m.to_nested(), vec![vec![2.0, 4.0], vec![6.0, 8.0]]);
//! assert_eq!(m.sum_axis(AxisSelector::column(-1))?, 12.0);
//! # Ok::<(), gridf64::GridError>(())
//! ```
pub mod config;
pub mod error;
pub mod math;
pub mod ops;

pub use config::RandomFill;
pub use error::{GridError, Result};
pub use math::{Axis, AxisSelector, Grid, Vector};
pub use ops::{dot, make_reducer, transpose, BinaryOp, Elements, Operand, Reducer, Reduction};
