use crate::error::{GridError, Result};
use crate::math::Grid;

/// Matrix product of `a` (`r x k`) and `b` (`k x c`), returned as a new
/// `r x c` grid.
///
/// Uses the plain triple loop: `O(r * k * c)` time and no storage beyond the
/// result.
pub fn dot(a: &Grid, b: &Grid) -> Result<Grid> {
    let (r, k) = a.shape();
    let (bk, c) = b.shape();
    log::trace!("dot: ({}, {}) x ({}, {})", r, k, bk, c);
    if k != bk {
        log::debug!("dot: inner dimensions {} and {} differ", k, bk);
        return Err(GridError::ShapeMismatch {
            op: "dot",
            expected: (k, c),
            found: (bk, c),
        });
    }

    let lhs = a.as_slice();
    let rhs = b.as_slice();
    let mut out: Grid = Grid::zeros(r, c);
    let res = out.as_mut_slice();
    for i in 0..r {
        for j in 0..c {
            let mut acc = 0.0;
            for t in 0..k {
                acc += lhs[i * k + t] * rhs[t * c + j];
            }
            res[i * c + j] = acc;
        }
    }
    Ok(out)
}

/// New grid with rows and columns swapped: `out[(j, i)] == m[(i, j)]`.
pub fn transpose<T: Clone>(m: &Grid<T>) -> Grid<T> {
    let (rows, cols) = m.shape();
    let src = m.as_slice();
    let mut data = Vec::with_capacity(src.len());
    for j in 0..cols {
        for i in 0..rows {
            data.push(src[i * cols + j].clone());
        }
    }
    Grid::from_parts(cols, rows, data)
}

impl Grid<f64> {
    pub fn dot(&self, rhs: &Grid) -> Result<Grid> {
        dot(self, rhs)
    }
}

impl<T: Clone> Grid<T> {
    /// Transposed copy; `self` is left untouched.
    pub fn t(&self) -> Grid<T> {
        transpose(self)
    }
}
