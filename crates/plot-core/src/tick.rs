// File: crates/plot-core/src/tick.rs
// Summary: Tick marks and the policies that generate them from an interval.

use crate::error::Error;
use crate::interval::Interval;

/// A labeled position along an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub label: String,
    pub line_width: f64,
    pub line_length: f64,
}

impl TickMark {
    /// Tick mark labeled with the default 5-significant-digit format.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: format_sig(value, 5),
            line_width: 1.0,
            line_length: 5.0,
        }
    }

    /// Tick mark for an integer value with an exact integer label.
    pub fn from_int(value: i64) -> Self {
        Self {
            value: value as f64,
            label: value.to_string(),
            line_width: 1.0,
            line_length: 5.0,
        }
    }

    /// Tick mark with a caller-supplied label.
    pub fn with_label(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            line_width: 1.0,
            line_length: 5.0,
        }
    }
}

/// Tick generation policy for an axis.
#[derive(Clone, Debug)]
pub enum Ticks {
    /// A specific number of evenly spaced segments; emits `count + 1` marks
    /// including both interval endpoints.
    Fit { count: usize },

    /// Marks at every multiple of `distance` that falls inside the interval.
    Space { distance: f64 },

    /// A caller-supplied list, filtered to the current interval.
    List { ticks: Vec<TickMark> },
}

impl Ticks {
    /// Generate the marks for `interval`: ascending by value for `Fit` and
    /// `Space`, caller order for `List`.
    pub fn ticks_in_interval(&self, interval: Interval) -> Result<Vec<TickMark>, Error> {
        match self {
            Ticks::Fit { count } => {
                let count = *count;
                if count == 0 {
                    return Err(Error::InvalidTickCount);
                }
                let span = interval.span();
                Ok((0..=count)
                    .map(|i| {
                        // The last mark lands exactly on the upper bound.
                        let value = if i == count {
                            interval.max()
                        } else {
                            interval.min() + i as f64 * span / count as f64
                        };
                        TickMark::new(value)
                    })
                    .collect())
            }

            Ticks::Space { distance } => {
                let distance = *distance;
                if !(distance > 0.0) {
                    return Err(Error::InvalidTickSpacing(distance));
                }
                // Snap to the multiple of `distance` nearest the interval
                // start, then advance until inside.
                let mut v = (interval.min() / distance).round() * distance;
                while v < interval.min() {
                    v += distance;
                }
                let mut ticks = Vec::new();
                while v <= interval.max() {
                    ticks.push(TickMark::new(v));
                    let next = v + distance;
                    if next == v {
                        // Step underflows the value's precision.
                        break;
                    }
                    v = next;
                }
                Ok(ticks)
            }

            Ticks::List { ticks } => Ok(ticks
                .iter()
                .filter(|tick| interval.contains(tick.value))
                .cloned()
                .collect()),
        }
    }
}

/// Format `value` with `sig` significant digits, trimming trailing zeros.
/// Falls back to exponential notation outside printf's `%g` magnitude window.
fn format_sig(value: f64, sig: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= sig as i32 {
        trim_exponential(&format!("{:.*e}", sig.saturating_sub(1), value))
    } else {
        let decimals = (sig as i32 - 1 - exponent).max(0) as usize;
        trim_decimal(&format!("{value:.decimals$}"))
    }
}

fn trim_decimal(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn trim_exponential(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exponent)) => format!("{}e{exponent}", trim_decimal(mantissa)),
        None => s.to_string(),
    }
}
