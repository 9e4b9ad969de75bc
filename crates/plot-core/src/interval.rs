// File: crates/plot-core/src/interval.rs
// Summary: Closed numeric intervals with join/intersect/map operations.

/// A closed interval on the real line. `min <= max` holds for every
/// constructed value; emptiness is modeled with `Option<Interval>`, never
/// with reversed bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// The unit interval `[0, 1]`.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    /// The degenerate interval `[0, 0]`.
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };

    /// Create an interval, swapping the bounds if they arrive reversed.
    pub fn new(min: f64, max: f64) -> Self {
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// Extract the bounding interval of a value sequence, skipping
    /// non-finite entries. `None` when no finite value is present.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut result: Option<Self> = None;
        for v in values {
            if !v.is_finite() {
                continue;
            }
            result = Some(match result {
                None => Self { min: v, max: v },
                Some(interval) => Self {
                    min: interval.min.min(v),
                    max: interval.max.max(v),
                },
            });
        }
        result
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Union bounding interval of two intervals.
pub fn join(lhs: Interval, rhs: Interval) -> Interval {
    Interval {
        min: lhs.min.min(rhs.min),
        max: lhs.max.max(rhs.max),
    }
}

/// Tightest interval contained in both, `None` when disjoint.
pub fn intersect(lhs: Interval, rhs: Interval) -> Option<Interval> {
    if lhs.max < rhs.min || rhs.max < lhs.min {
        return None;
    }
    Some(Interval {
        min: lhs.min.max(rhs.min),
        max: lhs.max.min(rhs.max),
    })
}

/// Map a value linearly from one interval to another. Mapping 0.5 from
/// `[0, 1]` to `[0, 100]` yields 50; the endpoints of `from` map exactly
/// onto the endpoints of `to`. A zero-span `from` interval maps everything
/// to `to.min` rather than dividing by zero.
pub fn map_value(value: f64, from: Interval, to: Interval) -> f64 {
    let span = from.span();
    if span == 0.0 {
        return to.min;
    }
    let parameter = (value - from.min) / span;
    to.min + (to.max - to.min) * parameter
}
