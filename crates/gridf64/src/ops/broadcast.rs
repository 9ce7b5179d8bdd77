//! Element-wise arithmetic with broadcasting.
//!
//! The right-hand side of every operator is an [`Operand`]: a scalar, a
//! vector broadcast across every row, or a grid of identical shape. Shapes are
//! validated before the left-hand grid is touched, so a rejected call leaves
//! it unchanged. Division follows IEEE semantics and never fails on zero.
use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use crate::error::{GridError, Result};
use crate::math::{Grid, Vector};

/// The four arithmetic operators understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
        }
    }

    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Right-hand side of a broadcasting operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Scalar(f64),
    /// Length must equal the column count of the target.
    Vector(&'a Vector),
    /// Shape must equal the shape of the target.
    Grid(&'a Grid),
}

impl<'a> Operand<'a> {
    /// Shape as `(rows, cols)`; a scalar is `(1, 1)` and a vector one row.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Operand::Scalar(_) => (1, 1),
            Operand::Vector(v) => (1, v.len()),
            Operand::Grid(g) => g.shape(),
        }
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<&'a Vector> for Operand<'a> {
    fn from(value: &'a Vector) -> Self {
        Operand::Vector(value)
    }
}

impl<'a> From<&'a Grid> for Operand<'a> {
    fn from(value: &'a Grid) -> Self {
        Operand::Grid(value)
    }
}

macro_rules! kernels {
    ($($assign:tt => $scalar:ident, $vector:ident, $grid:ident;)*) => {
        $(
            #[inline]
            fn $scalar(lhs: &mut [f64], rhs: f64) {
                for x in lhs.iter_mut() {
                    *x $assign rhs;
                }
            }

            /// `rhs.len()` equals `cols`.
            #[inline]
            fn $vector(lhs: &mut [f64], cols: usize, rhs: &[f64]) {
                if cols == 0 {
                    return;
                }
                for row in lhs.chunks_exact_mut(cols) {
                    for (x, &y) in row.iter_mut().zip(rhs) {
                        *x $assign y;
                    }
                }
            }

            /// `rhs.len()` equals `lhs.len()`.
            #[inline]
            fn $grid(lhs: &mut [f64], rhs: &[f64]) {
                for (x, &y) in lhs.iter_mut().zip(rhs) {
                    *x $assign y;
                }
            }
        )*
    };
}

kernels! {
    += => add_scalar, add_vector, add_grid;
    -= => sub_scalar, sub_vector, sub_grid;
    *= => mul_scalar, mul_vector, mul_grid;
    /= => div_scalar, div_vector, div_grid;
}

impl Grid<f64> {
    /// Apply `op` element-wise with `rhs` broadcast over `self`, in place.
    pub fn broadcast<'a>(&mut self, op: BinaryOp, rhs: impl Into<Operand<'a>>) -> Result<()> {
        let rhs = rhs.into();
        log::trace!(
            "{}: {:?} with operand of shape {:?}",
            op,
            self.shape(),
            rhs.shape()
        );
        self.check_operand(op, &rhs)?;

        let cols = self.ncols();
        let lhs = self.as_mut_slice();
        match (op, rhs) {
            (BinaryOp::Add, Operand::Scalar(s)) => add_scalar(lhs, s),
            (BinaryOp::Add, Operand::Vector(v)) => add_vector(lhs, cols, v.as_slice()),
            (BinaryOp::Add, Operand::Grid(g)) => add_grid(lhs, g.as_slice()),
            (BinaryOp::Sub, Operand::Scalar(s)) => sub_scalar(lhs, s),
            (BinaryOp::Sub, Operand::Vector(v)) => sub_vector(lhs, cols, v.as_slice()),
            (BinaryOp::Sub, Operand::Grid(g)) => sub_grid(lhs, g.as_slice()),
            (BinaryOp::Mul, Operand::Scalar(s)) => mul_scalar(lhs, s),
            (BinaryOp::Mul, Operand::Vector(v)) => mul_vector(lhs, cols, v.as_slice()),
            (BinaryOp::Mul, Operand::Grid(g)) => mul_grid(lhs, g.as_slice()),
            (BinaryOp::Div, Operand::Scalar(s)) => div_scalar(lhs, s),
            (BinaryOp::Div, Operand::Vector(v)) => div_vector(lhs, cols, v.as_slice()),
            (BinaryOp::Div, Operand::Grid(g)) => div_grid(lhs, g.as_slice()),
        }
        Ok(())
    }

    pub fn add<'a>(&mut self, rhs: impl Into<Operand<'a>>) -> Result<()> {
        self.broadcast(BinaryOp::Add, rhs)
    }

    pub fn sub<'a>(&mut self, rhs: impl Into<Operand<'a>>) -> Result<()> {
        self.broadcast(BinaryOp::Sub, rhs)
    }

    pub fn mul<'a>(&mut self, rhs: impl Into<Operand<'a>>) -> Result<()> {
        self.broadcast(BinaryOp::Mul, rhs)
    }

    pub fn div<'a>(&mut self, rhs: impl Into<Operand<'a>>) -> Result<()> {
        self.broadcast(BinaryOp::Div, rhs)
    }

    fn check_operand(&self, op: BinaryOp, rhs: &Operand<'_>) -> Result<()> {
        let fits = match rhs {
            Operand::Scalar(_) => true,
            Operand::Vector(v) => v.len() == self.ncols(),
            Operand::Grid(g) => g.shape() == self.shape(),
        };
        if fits {
            return Ok(());
        }

        let expected = match rhs {
            Operand::Vector(_) => (1, self.ncols()),
            _ => self.shape(),
        };
        log::debug!(
            "{}: operand of shape {:?} does not broadcast onto {:?}",
            op,
            rhs.shape(),
            self.shape()
        );
        Err(GridError::ShapeMismatch {
            op: op.name(),
            expected,
            found: rhs.shape(),
        })
    }
}

impl AddAssign<f64> for Grid<f64> {
    fn add_assign(&mut self, rhs: f64) {
        add_scalar(self.as_mut_slice(), rhs);
    }
}

impl SubAssign<f64> for Grid<f64> {
    fn sub_assign(&mut self, rhs: f64) {
        sub_scalar(self.as_mut_slice(), rhs);
    }
}

impl MulAssign<f64> for Grid<f64> {
    fn mul_assign(&mut self, rhs: f64) {
        mul_scalar(self.as_mut_slice(), rhs);
    }
}

impl DivAssign<f64> for Grid<f64> {
    fn div_assign(&mut self, rhs: f64) {
        div_scalar(self.as_mut_slice(), rhs);
    }
}
