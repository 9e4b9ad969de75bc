// File: crates/plot-core/src/view.rs
// Summary: Per-series views: interval state, coordinate mapping, hit-testing,
// and heat map rasterization.

use crate::axis::{Axis, Orientation, Position};
use crate::color::{ColorMap, ViridisColorMap};
use crate::error::Error;
use crate::geometry::{Point, Rect, ScreenPoint};
use crate::interval::{map_value, Interval};
use crate::series::{HeatMap, PointSet};
use crate::tick::TickMark;

/// Pointer hits register strictly within this pixel radius of a mapped point.
pub const HIT_RADIUS: f64 = 8.0;

/// Map a data point into a pixel region. Screen y grows downward while
/// data y grows upward, so the y mapping flips.
pub(crate) fn data_to_screen(
    point: Point,
    x_interval: Interval,
    y_interval: Interval,
    region: Rect,
) -> ScreenPoint {
    let x = map_value(point.x, x_interval, Interval::new(region.left, region.right));
    let y = map_value(point.y, y_interval, Interval::new(region.top, region.bottom));
    ScreenPoint::new(x, region.bottom - (y - region.top))
}

/// Map a pixel location in a region back into data space. Exact inverse of
/// [`data_to_screen`] up to floating-point rounding.
pub(crate) fn screen_to_data(
    location: ScreenPoint,
    x_interval: Interval,
    y_interval: Interval,
    region: Rect,
) -> Point {
    let x = map_value(location.x, Interval::new(region.left, region.right), x_interval);
    let flipped = region.bottom - (location.y - region.top);
    let y = map_value(flipped, Interval::new(region.top, region.bottom), y_interval);
    Point::new(x, y)
}

/// An axis plus the intervals the container last pushed into it.
#[derive(Clone, Debug)]
pub struct AxisView {
    pub axis: Axis,
    x_interval: Interval,
    y_interval: Interval,
}

impl AxisView {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            x_interval: Interval::UNIT,
            y_interval: Interval::UNIT,
        }
    }

    pub fn x_interval(&self) -> Interval {
        self.x_interval
    }

    pub fn y_interval(&self) -> Interval {
        self.y_interval
    }

    pub(crate) fn set_intervals(&mut self, x: Interval, y: Interval) {
        self.x_interval = x;
        self.y_interval = y;
    }

    /// Generate marks from the interval matching the axis orientation.
    pub fn ticks(&self) -> Result<Vec<TickMark>, Error> {
        match self.axis.orientation {
            Orientation::Horizontal => self.axis.ticks.ticks_in_interval(self.x_interval),
            Orientation::Vertical => self.axis.ticks.ticks_in_interval(self.y_interval),
        }
    }

    /// Pixel offset of the axis line inside `region`, along the dimension
    /// orthogonal to the axis orientation.
    pub fn line_offset(&self, region: Rect) -> f64 {
        match self.axis.orientation {
            Orientation::Horizontal => match self.axis.position {
                Position::Start => region.bottom,
                Position::End => region.top,
                Position::Value(v) => {
                    let y = map_value(v, self.y_interval, Interval::new(region.top, region.bottom));
                    region.bottom - (y - region.top)
                }
            },
            Orientation::Vertical => match self.axis.position {
                Position::Start => region.left,
                Position::End => region.right,
                Position::Value(v) => {
                    map_value(v, self.x_interval, Interval::new(region.left, region.right))
                }
            },
        }
    }

    /// Pixel position of a tick value along the axis inside `region`.
    pub fn tick_offset(&self, value: f64, region: Rect) -> f64 {
        match self.axis.orientation {
            Orientation::Horizontal => {
                map_value(value, self.x_interval, Interval::new(region.left, region.right))
            }
            Orientation::Vertical => {
                let y = map_value(value, self.y_interval, Interval::new(region.top, region.bottom));
                region.bottom - (y - region.top)
            }
        }
    }
}

/// A point set plus the intervals the container last pushed into it.
///
/// A standalone view shows exactly its own data bounds; views owned by a
/// plot are re-aimed whenever the container recomputes its aggregate.
#[derive(Clone, Debug)]
pub struct PointSetView {
    point_set: PointSet,
    x_interval: Interval,
    y_interval: Interval,
}

impl PointSetView {
    pub fn new(point_set: PointSet) -> Self {
        let x_interval = point_set.x_interval();
        let y_interval = point_set.y_interval();
        Self {
            point_set,
            x_interval,
            y_interval,
        }
    }

    pub fn point_set(&self) -> &PointSet {
        &self.point_set
    }

    pub fn x_interval(&self) -> Interval {
        self.x_interval
    }

    pub fn y_interval(&self) -> Interval {
        self.y_interval
    }

    pub(crate) fn set_intervals(&mut self, x: Interval, y: Interval) {
        self.x_interval = x;
        self.y_interval = y;
    }

    /// Map a data point into `region`.
    pub fn convert_to_view(&self, region: Rect, point: Point) -> ScreenPoint {
        data_to_screen(point, self.x_interval, self.y_interval, region)
    }

    /// Map a pixel location in `region` back into data space.
    pub fn convert_from_view(&self, region: Rect, location: ScreenPoint) -> Point {
        screen_to_data(location, self.x_interval, self.y_interval, region)
    }

    /// The data point nearest `location`, if its mapped position lies
    /// within [`HIT_RADIUS`] pixels. Ties keep the earliest point in scan
    /// order.
    pub fn point_at(&self, region: Rect, location: ScreenPoint) -> Option<Point> {
        let mut nearest: Option<(Point, f64)> = None;
        for &point in self.point_set.points() {
            let mapped = self.convert_to_view(region, point);
            let d = mapped.distance_sq(location);
            match nearest {
                Some((_, best)) if d >= best => {}
                _ => nearest = Some((point, d)),
            }
        }
        nearest.and_then(|(point, d)| (d < HIT_RADIUS * HIT_RADIUS).then_some(point))
    }
}

/// A heat map plus interval state and the color map used for rendering.
pub struct HeatMapView {
    heat_map: HeatMap,
    color_map: Box<dyn ColorMap>,
    x_interval: Interval,
    y_interval: Interval,
}

impl HeatMapView {
    pub fn new(heat_map: HeatMap) -> Self {
        Self::with_color_map(heat_map, Box::new(ViridisColorMap))
    }

    pub fn with_color_map(heat_map: HeatMap, color_map: Box<dyn ColorMap>) -> Self {
        let x_interval = heat_map.x_interval;
        let y_interval = heat_map.y_interval;
        Self {
            heat_map,
            color_map,
            x_interval,
            y_interval,
        }
    }

    pub fn heat_map(&self) -> &HeatMap {
        &self.heat_map
    }

    pub fn set_color_map(&mut self, color_map: Box<dyn ColorMap>) {
        self.color_map = color_map;
    }

    pub fn x_interval(&self) -> Interval {
        self.x_interval
    }

    pub fn y_interval(&self) -> Interval {
        self.y_interval
    }

    pub(crate) fn set_intervals(&mut self, x: Interval, y: Interval) {
        self.x_interval = x;
        self.y_interval = y;
    }

    /// Rasterize into a fresh row-major RGBA buffer (stride `width * 4`,
    /// row 0 at the top).
    pub fn render_to_rgba8(&self, width: usize, height: usize) -> Vec<u8> {
        let mut pixels = vec![0u8; width * height * 4];
        self.fill_rgba8(&mut pixels, width, height);
        pixels
    }

    /// Fill an RGBA buffer: every pixel center is inverse-mapped into data
    /// space, the value function sampled, the result normalized against the
    /// z interval, and the color map consulted. The loop is deterministic
    /// and order-independent per pixel.
    ///
    /// `pixels.len()` must be `width * height * 4`.
    pub fn fill_rgba8(&self, pixels: &mut [u8], width: usize, height: usize) {
        assert_eq!(
            pixels.len(),
            width * height * 4,
            "pixel buffer does not match dimensions"
        );
        if width == 0 || height == 0 {
            return;
        }
        let region = Rect::from_ltwh(0.0, 0.0, width as f64, height as f64);
        let stride = width * 4;
        for row in 0..height {
            for col in 0..width {
                let location = ScreenPoint::new(col as f64 + 0.5, row as f64 + 0.5);
                let data = screen_to_data(location, self.x_interval, self.y_interval, region);
                let value = self.heat_map.value_at(data.x, data.y);
                let normalized = map_value(value, self.heat_map.z_interval, Interval::UNIT);
                let rgba = self.color_map.color_for_value(normalized).to_rgba8();
                let offset = row * stride + col * 4;
                pixels[offset..offset + 4].copy_from_slice(&rgba);
            }
        }
    }

    /// The sampled value under `location`: `(x, f(x, y))`. The field is
    /// defined everywhere in its region, so this always answers.
    pub fn point_at(&self, region: Rect, location: ScreenPoint) -> Option<Point> {
        let data = screen_to_data(location, self.x_interval, self.y_interval, region);
        Some(Point::new(data.x, self.heat_map.value_at(data.x, data.y)))
    }
}

impl std::fmt::Debug for HeatMapView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeatMapView")
            .field("heat_map", &self.heat_map)
            .field("x_interval", &self.x_interval)
            .field("y_interval", &self.y_interval)
            .finish_non_exhaustive()
    }
}

/// A data-bearing child of a plot.
#[derive(Debug)]
pub enum DataView {
    PointSet(PointSetView),
    HeatMap(HeatMapView),
}

impl DataView {
    pub(crate) fn set_intervals(&mut self, x: Interval, y: Interval) {
        match self {
            DataView::PointSet(view) => view.set_intervals(x, y),
            DataView::HeatMap(view) => view.set_intervals(x, y),
        }
    }

    /// The series' own x bounds, used for fitting aggregation.
    pub(crate) fn data_x_interval(&self) -> Interval {
        match self {
            DataView::PointSet(view) => view.point_set().x_interval(),
            DataView::HeatMap(view) => view.heat_map().x_interval,
        }
    }

    /// The series' own y bounds, used for fitting aggregation.
    pub(crate) fn data_y_interval(&self) -> Interval {
        match self {
            DataView::PointSet(view) => view.point_set().y_interval(),
            DataView::HeatMap(view) => view.heat_map().y_interval,
        }
    }

    /// The data value under `location`, if this view has one there.
    pub fn point_at(&self, region: Rect, location: ScreenPoint) -> Option<Point> {
        match self {
            DataView::PointSet(view) => view.point_at(region, location),
            DataView::HeatMap(view) => view.point_at(region, location),
        }
    }
}
