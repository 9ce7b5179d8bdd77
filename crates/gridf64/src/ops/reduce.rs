//! Sum, product and average over a whole grid or a single row/column.
//!
//! Row reductions read one contiguous slice, column reductions a strided scan
//! down the grid; neither touches elements outside the selected lane.
use std::fmt;

use crate::error::{GridError, Result};
use crate::math::axis::{resolve_index, Axis, AxisSelector};
use crate::math::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reduction {
    Sum,
    Product,
    Average,
}

impl Reduction {
    pub fn name(self) -> &'static str {
        match self {
            Reduction::Sum => "sum",
            Reduction::Product => "product",
            Reduction::Average => "average",
        }
    }

    fn identity(self) -> f64 {
        match self {
            Reduction::Product => 1.0,
            Reduction::Sum | Reduction::Average => 0.0,
        }
    }

    #[inline]
    fn combine(self, acc: f64, x: f64) -> f64 {
        match self {
            Reduction::Product => acc * x,
            Reduction::Sum | Reduction::Average => acc + x,
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Grid<f64> {
    /// Reduce every element (`None`) or the lane picked by `selector`.
    ///
    /// Fails if the selector's index is out of range, or when averaging zero
    /// elements.
    pub fn reduce(&self, kind: Reduction, selector: Option<AxisSelector>) -> Result<f64> {
        log::trace!("{}: {:?} over {:?}", kind, self.shape(), selector);
        let (acc, count) = self.scan(kind, selector)?;
        match kind {
            Reduction::Average if count == 0 => {
                log::debug!("{}: nothing to average in {:?}", kind, self.shape());
                Err(GridError::EmptyReduction { op: kind.name() })
            }
            Reduction::Average => Ok(acc / count as f64),
            Reduction::Sum | Reduction::Product => Ok(acc),
        }
    }

    /// Sum of all elements; `0.0` for an empty grid.
    pub fn sum(&self) -> f64 {
        self.as_slice().iter().fold(0.0, |acc, &x| acc + x)
    }

    pub fn sum_axis(&self, selector: AxisSelector) -> Result<f64> {
        self.reduce(Reduction::Sum, Some(selector))
    }

    /// Product of all elements; `1.0` for an empty grid.
    pub fn product(&self) -> f64 {
        self.as_slice().iter().fold(1.0, |acc, &x| acc * x)
    }

    pub fn product_axis(&self, selector: AxisSelector) -> Result<f64> {
        self.reduce(Reduction::Product, Some(selector))
    }

    pub fn average(&self) -> Result<f64> {
        self.reduce(Reduction::Average, None)
    }

    pub fn average_axis(&self, selector: AxisSelector) -> Result<f64> {
        self.reduce(Reduction::Average, Some(selector))
    }

    /// Fold the selected elements, returning the accumulator and how many
    /// elements went into it.
    fn scan(&self, kind: Reduction, selector: Option<AxisSelector>) -> Result<(f64, usize)> {
        let fold = |acc: f64, &x: &f64| kind.combine(acc, x);
        match selector {
            None => Ok((
                self.as_slice().iter().fold(kind.identity(), fold),
                self.len(),
            )),
            Some(AxisSelector {
                axis: Axis::Row,
                index,
            }) => {
                let row = resolve_index(kind.name(), index, self.nrows())?;
                let values = self.row_slice(row);
                Ok((values.iter().fold(kind.identity(), fold), values.len()))
            }
            Some(AxisSelector {
                axis: Axis::Column,
                index,
            }) => {
                let col = resolve_index(kind.name(), index, self.ncols())?;
                let acc = self
                    .as_slice()
                    .iter()
                    .skip(col)
                    .step_by(self.ncols())
                    .fold(kind.identity(), fold);
                Ok((acc, self.nrows()))
            }
        }
    }
}
