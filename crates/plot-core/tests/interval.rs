// File: crates/plot-core/tests/interval.rs
// Purpose: Validate interval join/intersect/map_value properties.

use plot_core::{intersect, join, map_value, Interval};

#[test]
fn map_value_is_exact_at_endpoints() {
    let from = Interval::new(3.0, 11.0);
    let to = Interval::new(-2.0, 62.0);
    assert_eq!(map_value(3.0, from, to), -2.0);
    assert_eq!(map_value(11.0, from, to), 62.0);
}

#[test]
fn map_value_interpolates_linearly() {
    let from = Interval::new(0.0, 1.0);
    let to = Interval::new(1.0, 100.0);
    assert_eq!(map_value(0.5, from, to), 50.5);
    assert_eq!(map_value(0.25, Interval::UNIT, Interval::new(0.0, 100.0)), 25.0);
}

#[test]
fn map_value_round_trips() {
    let a = Interval::new(-7.0, 13.0);
    let b = Interval::new(40.0, 640.0);
    for &v in &[-7.0, -1.5, 0.0, 4.25, 13.0] {
        let mapped = map_value(v, a, b);
        let back = map_value(mapped, b, a);
        assert!((back - v).abs() < 1e-9, "round trip drifted for {v}: {back}");
    }
}

#[test]
fn map_value_degenerate_source_returns_target_min() {
    let from = Interval::new(5.0, 5.0);
    let to = Interval::new(0.0, 10.0);
    assert_eq!(map_value(7.0, from, to), 0.0);
}

#[test]
fn join_is_commutative_and_idempotent() {
    let a = Interval::new(0.0, 2.0);
    let b = Interval::new(-1.0, 1.0);
    assert_eq!(join(a, b), join(b, a));
    assert_eq!(join(a, a), a);
    let joined = join(a, b);
    assert!(joined.contains(a.min()) && joined.contains(a.max()));
    assert!(joined.contains(b.min()) && joined.contains(b.max()));
}

#[test]
fn intersect_is_empty_iff_disjoint() {
    let a = Interval::new(0.0, 2.0);
    let b = Interval::new(3.0, 4.0);
    assert_eq!(intersect(a, b), None);

    let c = Interval::new(1.0, 5.0);
    assert_eq!(intersect(a, c), Some(Interval::new(1.0, 2.0)));

    // Touching endpoints still intersect in a closed interval.
    let d = Interval::new(2.0, 3.0);
    assert_eq!(intersect(a, d), Some(Interval::new(2.0, 2.0)));
}

#[test]
fn new_swaps_reversed_bounds() {
    let interval = Interval::new(4.0, -4.0);
    assert_eq!(interval.min(), -4.0);
    assert_eq!(interval.max(), 4.0);
}

#[test]
fn from_values_tracks_extremes() {
    let interval = Interval::from_values([3.0, -1.0, 7.5, 2.0]).unwrap();
    assert_eq!(interval, Interval::new(-1.0, 7.5));
    assert!(Interval::from_values(std::iter::empty::<f64>()).is_none());
    // Non-finite entries are skipped.
    let interval = Interval::from_values([1.0, f64::NAN, 2.0]).unwrap();
    assert_eq!(interval, Interval::new(1.0, 2.0));
}
