// File: crates/plot-core/src/series.rs
// Summary: Series models: styled point sets and heat map value functions.

use crate::color::Color;
use crate::geometry::Point;
use crate::interval::{join, Interval};

/// Marker drawn at each point of a point set. The host backend switches
/// over the variant at draw time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointType {
    None,
    Ring { radius: f64 },
    Disk { radius: f64 },
    Square { side: f64 },
    FilledSquare { side: f64 },
}

/// An ordered sequence of `(x, y)` points with line/marker styling.
///
/// The bounding intervals always reflect the current points; they are
/// recomputed on every mutation, so reads are free. Points are owned
/// privately to keep the cache from going stale.
#[derive(Clone, Debug)]
pub struct PointSet {
    points: Vec<Point>,
    x_interval: Option<Interval>,
    y_interval: Option<Interval>,
    pub name: Option<String>,
    pub lines: bool,
    pub line_width: f64,
    pub color: Color,
    pub point_type: PointType,
}

impl PointSet {
    pub fn new() -> Self {
        Self::from_points(Vec::new())
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        let mut set = Self {
            points,
            x_interval: None,
            y_interval: None,
            name: None,
            lines: true,
            line_width: 1.0,
            color: Color::red(),
            point_type: PointType::None,
        };
        set.recompute_intervals();
        set
    }

    /// Build from bare values, auto-indexed by position `0, 1, 2, ..`.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self::from_points(
            values
                .into_iter()
                .enumerate()
                .map(|(i, y)| Point::new(i as f64, y))
                .collect(),
        )
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_point_type(mut self, point_type: PointType) -> Self {
        self.point_type = point_type;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Bounding interval of the x values; `[0, 0]` for an empty set.
    pub fn x_interval(&self) -> Interval {
        self.x_interval.unwrap_or(Interval::ZERO)
    }

    /// Bounding interval of the y values; `[0, 0]` for an empty set.
    pub fn y_interval(&self) -> Interval {
        self.y_interval.unwrap_or(Interval::ZERO)
    }

    /// Replace the points, recomputing the cached intervals.
    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
        self.recompute_intervals();
    }

    /// Append a point, widening the cached intervals as needed.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
        self.x_interval = include(self.x_interval, point.x);
        self.y_interval = include(self.y_interval, point.y);
    }

    pub fn extend(&mut self, points: impl IntoIterator<Item = Point>) {
        for point in points {
            self.push(point);
        }
    }

    fn recompute_intervals(&mut self) {
        self.x_interval = Interval::from_values(self.points.iter().map(|p| p.x));
        self.y_interval = Interval::from_values(self.points.iter().map(|p| p.y));
    }
}

impl Default for PointSet {
    fn default() -> Self {
        Self::new()
    }
}

fn include(interval: Option<Interval>, v: f64) -> Option<Interval> {
    if !v.is_finite() {
        return interval;
    }
    let single = Interval::new(v, v);
    Some(match interval {
        Some(i) => join(i, single),
        None => single,
    })
}

/// Continuous scalar field sampled through a value function. The x/y
/// intervals bound the sampled domain and the z interval normalizes the
/// output; none of them can be derived from a function, so all three are
/// explicit.
pub struct HeatMap {
    value_function: Box<dyn Fn(f64, f64) -> f64>,
    pub x_interval: Interval,
    pub y_interval: Interval,
    pub z_interval: Interval,
}

impl HeatMap {
    pub fn new(
        x_interval: Interval,
        y_interval: Interval,
        z_interval: Interval,
        value_function: impl Fn(f64, f64) -> f64 + 'static,
    ) -> Self {
        Self {
            value_function: Box::new(value_function),
            x_interval,
            y_interval,
            z_interval,
        }
    }

    /// Sample the field at `(x, y)`.
    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        (self.value_function)(x, y)
    }
}

impl std::fmt::Debug for HeatMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeatMap")
            .field("x_interval", &self.x_interval)
            .field("y_interval", &self.y_interval)
            .field("z_interval", &self.z_interval)
            .finish_non_exhaustive()
    }
}
