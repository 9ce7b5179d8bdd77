//! Row/column addressing with signed indices.
//!
//! A non-negative index counts from the start of the axis, a negative one
//! from the end: `-1` is the last row (or column) and `-n` the first for an
//! axis of length `n`.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// One of the two addressing dimensions of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Row,
    Column,
}

impl TryFrom<usize> for Axis {
    type Error = GridError;

    /// `0` selects rows and `1` selects columns.
    fn try_from(value: usize) -> Result<Self> {
        match value {
            0 => Ok(Axis::Row),
            1 => Ok(Axis::Column),
            other => Err(GridError::InvalidAxis {
                found: other.to_string(),
            }),
        }
    }
}

impl FromStr for Axis {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "row" => Ok(Axis::Row),
            "column" => Ok(Axis::Column),
            _ => Err(GridError::InvalidAxis {
                found: format!("{:?}", s),
            }),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// An axis paired with a signed index, selecting exactly one row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisSelector {
    pub axis: Axis,
    pub index: isize,
}

impl AxisSelector {
    pub fn new(axis: Axis, index: isize) -> Self {
        Self { axis, index }
    }

    pub fn row(index: isize) -> Self {
        Self::new(Axis::Row, index)
    }

    pub fn column(index: isize) -> Self {
        Self::new(Axis::Column, index)
    }
}

impl From<(Axis, isize)> for AxisSelector {
    fn from(value: (Axis, isize)) -> Self {
        AxisSelector::new(value.0, value.1)
    }
}

/// Map a signed index onto `0..len`.
pub(crate) fn resolve_index(op: &'static str, index: isize, len: usize) -> Result<usize> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        let index = index as usize;
        (index < len).then_some(index)
    };
    resolved.ok_or_else(|| {
        log::debug!("{}: rejected index {} for axis of length {}", op, index, len);
        GridError::IndexOutOfBounds { op, index, len }
    })
}
