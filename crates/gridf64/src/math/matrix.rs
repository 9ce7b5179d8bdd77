use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::config::RandomFill;
use crate::error::{GridError, Result};
use crate::math::axis::resolve_index;
use crate::math::vector::Vector;

/// Dense row-major grid.
///
/// Elements live in one contiguous buffer of `rows * cols` values, so every
/// row has the same length by construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Grid<T = f64> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

#[derive(Deserialize)]
struct GridRepr<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> TryFrom<GridRepr<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(repr: GridRepr<T>) -> Result<Self> {
        Grid::from_shape_vec((repr.rows, repr.cols), repr.data)
    }
}

impl<T> Grid<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(GridError::BufferLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Build a grid from nested rows, rejecting jagged input.
    ///
    /// An empty outer vector yields a `0 x 0` grid.
    pub fn from_rows(nested: Vec<Vec<T>>) -> Result<Self> {
        let rows = nested.len();
        let cols = nested.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows * cols);
        for (row, values) in nested.into_iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::Jagged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self { rows, cols, data })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Iterate over the rows as slices, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| self.row_slice(row))
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| f(v)).collect(),
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Copy of the rows as nested vectors.
    pub fn to_nested(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows_iter().map(<[T]>::to_vec).collect()
    }
}

/// Number of elements in a `rows x cols` grid, if it fits in `usize`.
fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or_else(|| {
        log::debug!("shape ({}, {}) overflows the element count", rows, cols);
        GridError::BufferLength {
            rows,
            cols,
            len: 0,
        }
    })
}

impl<T: Clone> Grid<T> {
    /// Panics if `rows * cols` overflows `usize`.
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        let len = match element_count(rows, cols) {
            Ok(len) => len,
            Err(_) => panic!("shape ({}, {}) is too large", rows, cols),
        };
        Self {
            rows,
            cols,
            data: vec![value; len],
        }
    }

    /// Copy of one row. Negative indices count from the last row.
    pub fn row(&self, index: isize) -> Result<Vector<T>> {
        let row = resolve_index("row", index, self.rows)?;
        Ok(Vector::from_vec(self.row_slice(row).to_vec()))
    }

    /// Copy of one column. Negative indices count from the last column.
    pub fn column(&self, index: isize) -> Result<Vector<T>> {
        let col = resolve_index("column", index, self.cols)?;
        Ok((0..self.rows)
            .map(|row| self.data[self.offset(row, col)].clone())
            .collect())
    }

    /// All elements, row after row.
    pub fn flatten(&self) -> Vector<T> {
        Vector::from_vec(self.data.clone())
    }

    /// Append `column` to the right-hand side. Its length must equal the
    /// number of rows.
    pub fn append_column(&mut self, column: &Vector<T>) -> Result<()> {
        if column.len() != self.rows {
            log::debug!(
                "append_column: column of length {} does not fit {} rows",
                column.len(),
                self.rows
            );
            return Err(GridError::ShapeMismatch {
                op: "append_column",
                expected: (self.rows, 1),
                found: (column.len(), 1),
            });
        }
        let new_cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * new_cols);
        for (row, extra) in column.iter().enumerate() {
            data.extend_from_slice(self.row_slice(row));
            data.push(extra.clone());
        }
        self.data = data;
        self.cols = new_cols;
        Ok(())
    }
}

impl<T> Grid<T>
where
    T: Clone + Zero,
{
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::zero())
    }

    /// `n x n` grid of zeros.
    pub fn square(n: usize) -> Self {
        Self::zeros(n, n)
    }
}

impl<T> Grid<T>
where
    T: Clone + Zero + One,
{
    /// `n x n` identity: ones on the diagonal, zeros elsewhere.
    pub fn identity(n: usize) -> Self {
        let mut grid = Self::square(n);
        for i in 0..n {
            grid[(i, i)] = T::one();
        }
        grid
    }
}

impl Grid<f64> {
    /// `rows x cols` grid of values drawn uniformly from `fill`'s range.
    pub fn random(rows: usize, cols: usize, fill: &RandomFill) -> Result<Self> {
        let data = fill.sample_n(element_count(rows, cols)?)?;
        Ok(Self { rows, cols, data })
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index ({}, {}) out of bounds for shape ({}, {})",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index ({}, {}) out of bounds for shape ({}, {})",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (row, values) in self.rows_iter().enumerate() {
            if row > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (col, value) in values.iter().enumerate() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
