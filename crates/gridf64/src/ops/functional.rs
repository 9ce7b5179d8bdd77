//! Transform, filter and fold over every element of a vector or grid.
use std::fmt;

use crate::math::{Grid, Vector};

/// Containers whose elements can be visited in row-major order.
///
/// Implementors only expose their backing storage; the transform, filter and
/// fold operations are shared.
pub trait Elements {
    fn elements(&self) -> &[f64];

    fn elements_mut(&mut self) -> &mut [f64];

    /// Mutate every element in place, left to right and top to bottom.
    fn apply_transform<F>(&mut self, f: F)
    where
        F: FnMut(&mut f64),
    {
        self.elements_mut().iter_mut().for_each(f);
    }

    fn set_all(&mut self, value: f64) {
        self.elements_mut().fill(value);
    }

    /// `true` if every element satisfies `pred`, vacuously so when empty.
    /// Stops at the first failing element.
    fn all<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&f64) -> bool,
    {
        self.elements().iter().all(|x| pred(x))
    }

    /// `true` if at least one element satisfies `pred`; `false` when empty.
    /// Stops at the first satisfying element.
    fn any<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&f64) -> bool,
    {
        self.elements().iter().any(|x| pred(x))
    }

    fn fold<F>(&self, init: f64, mut f: F) -> f64
    where
        F: FnMut(f64, f64) -> f64,
    {
        self.elements().iter().fold(init, |acc, &x| f(acc, x))
    }
}

impl Elements for Vector<f64> {
    fn elements(&self) -> &[f64] {
        self.as_slice()
    }

    fn elements_mut(&mut self) -> &mut [f64] {
        self.as_mut_slice()
    }
}

impl Elements for Grid<f64> {
    fn elements(&self) -> &[f64] {
        self.as_slice()
    }

    fn elements_mut(&mut self) -> &mut [f64] {
        self.as_mut_slice()
    }
}

/// A reusable aggregation built from an initial accumulator and a combiner
/// `(accumulator, element) -> accumulator`.
///
/// Every call to [`Reducer::reduce`] starts again from the initial value, so
/// one reducer can be applied to any number of containers.
///
/// ```
/// use gridf64::{make_reducer, Elements, Grid};
///
/// let max = make_reducer(f64::NEG_INFINITY, f64::max);
/// let mut m: Grid = Grid::square(4);
/// m.set_all(2.0);
/// m[(1, 2)] = 7.0;
/// assert_eq!(max.reduce(&m), 7.0);
/// ```
#[derive(Clone, Copy)]
pub struct Reducer<F> {
    initial: f64,
    combine: F,
}

impl<F> Reducer<F>
where
    F: Fn(f64, f64) -> f64,
{
    pub fn new(initial: f64, combine: F) -> Self {
        Self { initial, combine }
    }

    pub fn initial(&self) -> f64 {
        self.initial
    }

    pub fn reduce<E>(&self, target: &E) -> f64
    where
        E: Elements,
    {
        target.fold(self.initial, &self.combine)
    }
}

impl<F> fmt::Debug for Reducer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer")
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`Reducer::new`].
pub fn make_reducer<F>(initial: f64, combine: F) -> Reducer<F>
where
    F: Fn(f64, f64) -> f64,
{
    Reducer::new(initial, combine)
}
