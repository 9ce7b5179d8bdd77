//! Numeric operations over `Grid` and `Vector`.
pub mod broadcast;
pub mod functional;
pub mod linalg;
pub mod reduce;

pub use broadcast::{BinaryOp, Operand};
pub use functional::{make_reducer, Elements, Reducer};
pub use linalg::{dot, transpose};
pub use reduce::Reduction;
