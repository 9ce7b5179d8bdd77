//! Integration tests for transforms, fills and user-defined reducers.

use gridf64::{make_reducer, Elements, Grid, Reducer, Vector};

fn grid(rows: &[&[f64]]) -> Grid {
    Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

// ---------------------------------------------------------------------------
// Transform and fill
// ---------------------------------------------------------------------------

#[test]
fn apply_transform_to_grid() {
    let mut m = grid(&[&[1.0, 2.0], &[3.0, 4.0]]);
    m.apply_transform(|x| *x = *x * *x);
    assert_eq!(m, grid(&[&[1.0, 4.0], &[9.0, 16.0]]));
}

#[test]
fn apply_transform_to_vector() {
    let mut v = Vector::from_vec(vec![-1.0, 0.5, 2.0]);
    v.apply_transform(|x| *x = x.abs());
    assert_eq!(v.to_vec(), vec![1.0, 0.5, 2.0]);
}

#[test]
fn apply_transform_visits_row_major() {
    let mut m: Grid = Grid::zeros(2, 3);
    let mut counter = 0.0;
    m.apply_transform(|x| {
        *x = counter;
        counter += 1.0;
    });
    assert_eq!(m, grid(&[&[0.0, 1.0, 2.0], &[3.0, 4.0, 5.0]]));
}

#[test]
fn set_all_on_grid_and_vector() {
    let mut m: Grid = Grid::zeros(3, 2);
    m.set_all(7.5);
    assert!(m.all(|&x| x == 7.5));

    let mut v: Vector = Vector::zeros(4);
    v.set_all(-1.0);
    assert!(v.all(|&x| x == -1.0));
}

#[test]
fn predicates_on_vectors() {
    let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    assert!(v.all(|&x| x > 0.0));
    assert!(!v.any(|&x| x > 3.0));

    let empty: Vector = Vector::zeros(0);
    assert!(empty.all(|_| false));
    assert!(!empty.any(|_| true));
}

// ---------------------------------------------------------------------------
// Reducers
// ---------------------------------------------------------------------------

#[test]
fn custom_sum_reducer() {
    let sum = make_reducer(0.0, |acc, x| acc + x);
    let mut m: Grid = Grid::square(4);
    m.set_all(2.0);
    assert_eq!(sum.reduce(&m), 32.0);
}

#[test]
fn reducer_starts_from_initial_value_on_every_call() {
    let sum = make_reducer(0.0, |acc, x| acc + x);
    let mut m: Grid = Grid::square(2);
    m.set_all(1.0);
    assert_eq!(sum.reduce(&m), 4.0);
    assert_eq!(sum.reduce(&m), 4.0);
    assert_eq!(sum.initial(), 0.0);
}

#[test]
fn reducer_is_reusable_across_grids_and_vectors() {
    let max = Reducer::new(f64::NEG_INFINITY, f64::max);
    let a = grid(&[&[1.0, 9.0], &[3.0, 4.0]]);
    let b = grid(&[&[-5.0, -2.0]]);
    let v = Vector::from_vec(vec![0.5, 0.25]);
    assert_eq!(max.reduce(&a), 9.0);
    assert_eq!(max.reduce(&b), -2.0);
    assert_eq!(max.reduce(&v), 0.5);
}

#[test]
fn reducer_on_empty_grid_returns_initial() {
    let count = make_reducer(10.0, |acc, _| acc + 1.0);
    let m: Grid = Grid::zeros(0, 0);
    assert_eq!(count.reduce(&m), 10.0);
}

#[test]
fn reducer_applies_combiner_in_row_major_order() {
    // acc * 10 + x encodes the visiting order as digits
    let digits = make_reducer(0.0, |acc, x| acc * 10.0 + x);
    let m = grid(&[&[1.0, 2.0], &[3.0, 4.0]]);
    assert_eq!(digits.reduce(&m), 1234.0);
}

#[test]
fn fold_matches_reducer() {
    let m = grid(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let product = make_reducer(1.0, |acc, x| acc * x);
    assert_eq!(m.fold(1.0, |acc, x| acc * x), product.reduce(&m));
    assert_eq!(m.fold(1.0, |acc, x| acc * x), m.product());
}

#[test]
fn reducer_debug_shows_initial_value() {
    let r = make_reducer(3.0, |acc, x| acc - x);
    assert!(format!("{:?}", r).contains("initial: 3.0"));
}
