// File: crates/plot-core/tests/ticks.rs
// Purpose: Validate tick generation policies and label formatting.

use plot_core::{Error, Interval, TickMark, Ticks};

fn values(ticks: &[TickMark]) -> Vec<f64> {
    ticks.iter().map(|t| t.value).collect()
}

#[test]
fn fit_spans_the_interval_inclusively() {
    let ticks = Ticks::Fit { count: 5 }
        .ticks_in_interval(Interval::new(0.0, 10.0))
        .unwrap();
    assert_eq!(values(&ticks), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn fit_hits_both_bounds_for_awkward_spans() {
    let ticks = Ticks::Fit { count: 3 }
        .ticks_in_interval(Interval::new(0.1, 0.8))
        .unwrap();
    assert_eq!(ticks.len(), 4);
    assert_eq!(ticks[0].value, 0.1);
    assert_eq!(ticks[3].value, 0.8);
}

#[test]
fn fit_rejects_zero_count() {
    let err = Ticks::Fit { count: 0 }
        .ticks_in_interval(Interval::new(0.0, 1.0))
        .unwrap_err();
    assert_eq!(err, Error::InvalidTickCount);
}

#[test]
fn space_lands_on_multiples_of_the_distance() {
    let ticks = Ticks::Space { distance: 2.5 }
        .ticks_in_interval(Interval::new(0.0, 10.0))
        .unwrap();
    assert_eq!(values(&ticks), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
}

#[test]
fn space_never_emits_below_the_interval() {
    // Snapping 1.4 to the nearest multiple of 1 gives 1, outside the
    // interval; the first emitted mark must be 2.
    let ticks = Ticks::Space { distance: 1.0 }
        .ticks_in_interval(Interval::new(1.4, 4.0))
        .unwrap();
    assert_eq!(values(&ticks), vec![2.0, 3.0, 4.0]);
}

#[test]
fn space_rejects_non_positive_distance() {
    let interval = Interval::new(0.0, 1.0);
    let err = Ticks::Space { distance: 0.0 }
        .ticks_in_interval(interval)
        .unwrap_err();
    assert_eq!(err, Error::InvalidTickSpacing(0.0));
    assert!(Ticks::Space { distance: -2.0 }.ticks_in_interval(interval).is_err());
    assert!(Ticks::Space { distance: f64::NAN }.ticks_in_interval(interval).is_err());
}

#[test]
fn list_filters_to_the_interval_preserving_order() {
    let ticks = Ticks::List {
        ticks: vec![
            TickMark::new(-1.0),
            TickMark::new(0.0),
            TickMark::new(5.0),
            TickMark::new(11.0),
        ],
    }
    .ticks_in_interval(Interval::new(0.0, 10.0))
    .unwrap();
    assert_eq!(values(&ticks), vec![0.0, 5.0]);
}

#[test]
fn default_labels_use_five_significant_digits() {
    assert_eq!(TickMark::new(2.0).label, "2");
    assert_eq!(TickMark::new(2.5).label, "2.5");
    assert_eq!(TickMark::new(-0.25).label, "-0.25");
    assert_eq!(TickMark::new(0.333333333).label, "0.33333");
    assert_eq!(TickMark::new(123456.0).label, "1.2346e5");
    assert_eq!(TickMark::new(0.0).label, "0");
}

#[test]
fn integer_construction_uses_exact_labels() {
    let tick = TickMark::from_int(42);
    assert_eq!(tick.value, 42.0);
    assert_eq!(tick.label, "42");
}

#[test]
fn explicit_labels_pass_through() {
    let tick = TickMark::with_label(3.2, "max load");
    assert_eq!(tick.label, "max load");
}
