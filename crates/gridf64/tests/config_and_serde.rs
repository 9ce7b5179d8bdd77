//! Integration tests for random-fill configuration and serde support.

use gridf64::{Axis, AxisSelector, Elements, Grid, GridError, RandomFill, Vector};

// ---------------------------------------------------------------------------
// RandomFill
// ---------------------------------------------------------------------------

#[test]
fn random_fill_default_is_unit_interval() {
    let fill = RandomFill::default();
    assert_eq!(fill.low, 0.0);
    assert_eq!(fill.high, 1.0);
    assert!(fill.seed.is_none());
}

#[test]
fn random_grid_has_requested_shape_and_range() {
    for rows in 0..4 {
        for cols in 0..4 {
            let m = Grid::random(rows, cols, &RandomFill::default()).unwrap();
            assert_eq!(m.shape(), (rows, cols));
            assert!(m.all(|&x| (0.0..1.0).contains(&x)));
        }
    }
}

#[test]
fn random_vector_respects_custom_range() {
    let v = Vector::random(200, &RandomFill::new(-3.0, -1.0)).unwrap();
    assert_eq!(v.len(), 200);
    assert!(v.all(|&x| (-3.0..-1.0).contains(&x)));
}

#[test]
fn up_to_sets_upper_bound() {
    let fill = RandomFill::up_to(5.0);
    assert_eq!((fill.low, fill.high), (0.0, 5.0));
}

#[test]
fn seeded_fill_is_reproducible() {
    let fill = RandomFill::new(0.0, 10.0).with_seed(42);
    let a = Grid::random(3, 4, &fill).unwrap();
    let b = Grid::random(3, 4, &fill).unwrap();
    assert_eq!(a, b);
}

#[test]
fn degenerate_range_fills_with_bound() {
    let v = Vector::random(3, &RandomFill::new(2.0, 2.0)).unwrap();
    assert_eq!(v.to_vec(), vec![2.0, 2.0, 2.0]);
}

#[test]
fn inverted_or_non_finite_range_errors() {
    assert_eq!(
        Grid::random(2, 2, &RandomFill::new(1.0, 0.0)).unwrap_err(),
        GridError::InvalidRange {
            low: 1.0,
            high: 0.0
        }
    );
    assert!(RandomFill::new(0.0, f64::INFINITY).validate().is_err());
    assert!(RandomFill::new(f64::NAN, 1.0).validate().is_err());
}

#[test]
fn range_wider_than_f64_is_rejected() {
    let fill = RandomFill::new(-f64::MAX, f64::MAX);
    assert!(fill.validate().is_err());
    assert_eq!(
        Grid::random(2, 2, &fill).unwrap_err(),
        GridError::InvalidRange {
            low: -f64::MAX,
            high: f64::MAX
        }
    );
    assert!("-1e308..1e308".parse::<RandomFill>().is_err());
}

#[test]
fn random_grid_with_overflowing_shape_errors() {
    let err = Grid::random(1 << (usize::BITS - 1), 2, &RandomFill::default()).unwrap_err();
    assert!(matches!(err, GridError::BufferLength { cols: 2, .. }));
}

#[test]
fn random_fill_from_str() {
    let fill: RandomFill = "-1..1".parse().unwrap();
    assert_eq!(fill, RandomFill::new(-1.0, 1.0));

    let seeded: RandomFill = "0 .. 2.5 @ 9".parse().unwrap();
    assert_eq!(seeded, RandomFill::new(0.0, 2.5).with_seed(9));
}

#[test]
fn random_fill_from_str_errors() {
    assert!("1-2".parse::<RandomFill>().is_err());
    assert!("a..2".parse::<RandomFill>().is_err());
    assert!("0..1@x".parse::<RandomFill>().is_err());
    assert!("3..1".parse::<RandomFill>().is_err());
}

#[test]
fn random_fill_serializes_to_json() {
    let fill = RandomFill::new(0.0, 2.0).with_seed(1);
    let json = serde_json::to_string(&fill).unwrap();
    assert!(json.contains("\"low\""));
    assert!(json.contains("\"seed\":1"));
}

#[test]
fn random_fill_missing_fields_use_defaults() {
    let fill: RandomFill = serde_json::from_str(r#"{"high": 4.0}"#).unwrap();
    assert_eq!(fill, RandomFill::up_to(4.0));
}

// ---------------------------------------------------------------------------
// Containers and selectors
// ---------------------------------------------------------------------------

#[test]
fn grid_json_round_trip() {
    let m = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, r#"{"rows":2,"cols":2,"data":[1.0,2.0,3.0,4.0]}"#);
    let back: Grid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn grid_deserialization_validates_buffer_length() {
    let result: Result<Grid, _> = serde_json::from_str(r#"{"rows":2,"cols":2,"data":[1.0]}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("invalid shape (2, 2)"));
}

#[test]
fn vector_serializes_as_plain_array() {
    let v = Vector::from_vec(vec![1.0, 2.5]);
    assert_eq!(serde_json::to_string(&v).unwrap(), "[1.0,2.5]");
}

#[test]
fn axis_selector_serde() {
    let sel = AxisSelector::new(Axis::Column, -1);
    let json = serde_json::to_string(&sel).unwrap();
    assert_eq!(json, r#"{"axis":"column","index":-1}"#);
    let back: AxisSelector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sel);
}
