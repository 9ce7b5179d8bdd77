use std::error::Error;
use std::fmt;

/// Result alias used by every fallible grid operation.
pub type Result<T> = std::result::Result<T, GridError>;

/// Misuse of a grid operation.
///
/// All variants describe caller errors. They are reported before any element
/// is mutated, so a rejected in-place operation leaves its target untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Operand shape is incompatible with the target (broadcast or dot).
    ShapeMismatch {
        op: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Signed index outside `[-len, len)`.
    IndexOutOfBounds {
        op: &'static str,
        index: isize,
        len: usize,
    },
    /// Axis discriminator that is neither row nor column.
    InvalidAxis { found: String },
    /// Average over zero elements.
    EmptyReduction { op: &'static str },
    /// Nested rows of unequal length.
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Flat buffer does not match the requested shape.
    BufferLength { rows: usize, cols: usize, len: usize },
    /// Random fill range that is empty or not finite.
    InvalidRange { low: f64, high: f64 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ShapeMismatch { op, expected, found } => write!(
                f,
                "{}: incompatible shapes, expected ({}, {}) but received ({}, {})",
                op, expected.0, expected.1, found.0, found.1
            ),
            GridError::IndexOutOfBounds { op, index, len } => write!(
                f,
                "{}: index {} is out of bounds for axis of length {}",
                op, index, len
            ),
            GridError::InvalidAxis { found } => write!(
                f,
                "axis must be 0 or \"row\" for rows, 1 or \"column\" for columns, but {} was passed",
                found
            ),
            GridError::EmptyReduction { op } => {
                write!(f, "{}: cannot reduce over zero elements", op)
            }
            GridError::Jagged { row, expected, found } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, found, expected
            ),
            GridError::BufferLength { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            GridError::InvalidRange { low, high } => {
                write!(f, "invalid sampling range [{}, {})", low, high)
            }
        }
    }
}

impl Error for GridError {}
