// File: crates/plot-core/src/axis.rs
// Summary: Axis model: orientation, position, tick policy, and styling.

use crate::color::Color;
use crate::tick::Ticks;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Where the axis line sits along the orthogonal dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// The low edge of the data region.
    Start,
    /// The high edge of the data region.
    End,
    /// A fixed data value on the orthogonal axis.
    Value(f64),
}

/// Label styling consumed by the host text renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    pub size: f64,
    pub color: Color,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self { size: 10.0, color: Color::black() }
    }
}

/// Axis configuration. Stateless with respect to data; the interval to
/// generate ticks from is supplied by the plot container at render time.
#[derive(Clone, Debug)]
pub struct Axis {
    pub orientation: Orientation,
    pub position: Position,
    pub ticks: Ticks,
    pub line_width: f64,
    pub color: Color,
    pub label_style: LabelStyle,
}

impl Axis {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            position: Position::Start,
            ticks: Ticks::Fit { count: 10 },
            line_width: 1.0,
            color: Color::black(),
            label_style: LabelStyle::default(),
        }
    }

    pub fn with_ticks(orientation: Orientation, ticks: Ticks) -> Self {
        let mut axis = Self::new(orientation);
        axis.ticks = ticks;
        axis
    }
}
