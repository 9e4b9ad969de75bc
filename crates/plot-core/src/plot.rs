// File: crates/plot-core/src/plot.rs
// Summary: Plot container: interval aggregation, propagation, and hit-testing.

use crate::axis::{Axis, Orientation};
use crate::geometry::{Point, Rect, ScreenPoint};
use crate::interval::{join, Interval};
use crate::series::{HeatMap, PointSet};
use crate::tick::Ticks;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::{AxisView, DataView, HeatMapView, PointSetView};

/// The root of the view hierarchy. Owns axes and data views, keeps their
/// intervals mutually consistent, and answers pointer queries.
///
/// Consistency is eager: every mutation recomputes the aggregate intervals
/// and pushes the result into every child, so no child ever observes a
/// stale coordinate system.
pub struct Plot {
    axis_views: Vec<AxisView>,
    data_views: Vec<DataView>,
    series_titles: Vec<String>,
    fitting_x: Option<Interval>,
    fitting_y: Option<Interval>,
    fixed_x: Option<Interval>,
    fixed_y: Option<Interval>,
    frame_width: f64,
    frame_height: f64,
    insets: Insets,
}

impl Plot {
    pub fn new() -> Self {
        Self::with_frame(WIDTH, HEIGHT)
    }

    /// A plot with the given drawable size in pixels.
    pub fn with_frame(width: f64, height: f64) -> Self {
        Self {
            axis_views: Vec::new(),
            data_views: Vec::new(),
            series_titles: Vec::new(),
            fitting_x: None,
            fitting_y: None,
            fixed_x: None,
            fixed_y: None,
            frame_width: width.max(0.0),
            frame_height: height.max(0.0),
            insets: Insets::default(),
        }
    }

    // ---- children ------------------------------------------------------

    pub fn add_axis(&mut self, axis: Axis) {
        self.axis_views.push(AxisView::new(axis));
        self.update_intervals();
    }

    pub fn add_point_set(&mut self, point_set: PointSet) {
        if let Some(name) = point_set.name.clone() {
            self.series_titles.push(name);
        }
        self.add_data_view(DataView::PointSet(PointSetView::new(point_set)));
    }

    pub fn add_heat_map(&mut self, heat_map: HeatMap) {
        self.add_data_view(DataView::HeatMap(HeatMapView::new(heat_map)));
    }

    /// Add a heat map view directly, keeping its configured color map.
    pub fn add_heat_map_view(&mut self, view: HeatMapView) {
        self.add_data_view(DataView::HeatMap(view));
    }

    fn add_data_view(&mut self, view: DataView) {
        // The first series seeds the fitting interval directly; joining the
        // [0, 1] placeholder would widen a deliberately small range.
        let x = view.data_x_interval();
        let y = view.data_y_interval();
        self.fitting_x = Some(match self.fitting_x {
            Some(i) => join(i, x),
            None => x,
        });
        self.fitting_y = Some(match self.fitting_y {
            Some(i) => join(i, y),
            None => y,
        });
        self.data_views.push(view);
        self.update_intervals();
    }

    /// Remove every data series, clearing legend titles and the cached
    /// fitting intervals (back to the `[0, 1]` default).
    pub fn remove_all_series(&mut self) {
        self.data_views.clear();
        self.series_titles.clear();
        self.fitting_x = None;
        self.fitting_y = None;
        self.update_intervals();
    }

    pub fn remove_all_axes(&mut self) {
        self.axis_views.clear();
    }

    // ---- intervals -----------------------------------------------------

    /// The x-range that fits all member series.
    pub fn fitting_x_interval(&self) -> Interval {
        self.fitting_x.unwrap_or(Interval::UNIT)
    }

    /// The y-range that fits all member series.
    pub fn fitting_y_interval(&self) -> Interval {
        self.fitting_y.unwrap_or(Interval::UNIT)
    }

    pub fn fixed_x_interval(&self) -> Option<Interval> {
        self.fixed_x
    }

    pub fn fixed_y_interval(&self) -> Option<Interval> {
        self.fixed_y
    }

    /// Fix the x-range, overriding the fitting interval; `None` restores
    /// the fitted behavior.
    pub fn set_fixed_x_interval(&mut self, interval: Option<Interval>) {
        self.fixed_x = interval;
        self.update_intervals();
    }

    /// Fix the y-range, overriding the fitting interval; `None` restores
    /// the fitted behavior.
    pub fn set_fixed_y_interval(&mut self, interval: Option<Interval>) {
        self.fixed_y = interval;
        self.update_intervals();
    }

    /// The x interval in force: the fixed override if set, else fitting.
    pub fn x_interval(&self) -> Interval {
        self.fixed_x.unwrap_or_else(|| self.fitting_x_interval())
    }

    /// The y interval in force: the fixed override if set, else fitting.
    pub fn y_interval(&self) -> Interval {
        self.fixed_y.unwrap_or_else(|| self.fitting_y_interval())
    }

    // ---- geometry ------------------------------------------------------

    /// Set the drawable size in pixels. The pushed intervals depend on it
    /// through the edge padding, so children are updated.
    pub fn set_frame(&mut self, width: f64, height: f64) {
        self.frame_width = width.max(0.0);
        self.frame_height = height.max(0.0);
        self.update_intervals();
    }

    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
        self.update_intervals();
    }

    pub fn frame(&self) -> (f64, f64) {
        (self.frame_width, self.frame_height)
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// The pixel region data maps into: the frame minus the insets, with
    /// extents clamped to be non-negative.
    pub fn data_region(&self) -> Rect {
        let width = (self.frame_width - self.insets.hsum()).max(0.0);
        let height = (self.frame_height - self.insets.vsum()).max(0.0);
        Rect::from_ltwh(self.insets.left, self.insets.top, width, height)
    }

    /// Recompute the effective intervals and push them into every child.
    ///
    /// The pushed intervals are inflated by half a data-unit-per-pixel so
    /// points lying exactly on an extreme are not clipped at the region
    /// edge. A degenerate drawable size clamps to one pixel.
    pub fn update_intervals(&mut self) {
        let region = self.data_region();
        let x = padded(self.x_interval(), region.width());
        let y = padded(self.y_interval(), region.height());
        for view in &mut self.axis_views {
            view.set_intervals(x, y);
        }
        for view in &mut self.data_views {
            view.set_intervals(x, y);
        }
    }

    // ---- queries -------------------------------------------------------

    /// The data value under a pointer location. Children are scanned in
    /// insertion order and the first view to answer wins.
    pub fn point_at(&self, location: ScreenPoint) -> Option<Point> {
        let region = self.data_region();
        self.data_views
            .iter()
            .find_map(|view| view.point_at(region, location))
    }

    pub fn axis_views(&self) -> &[AxisView] {
        &self.axis_views
    }

    pub fn data_views(&self) -> &[DataView] {
        &self.data_views
    }

    pub fn series_titles(&self) -> &[String] {
        &self.series_titles
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}

/// Pad an interval by half a data unit per pixel of `extent`.
fn padded(interval: Interval, extent: f64) -> Interval {
    let margin = 0.5 * interval.span() / extent.max(1.0);
    Interval::new(interval.min() - margin, interval.max() + margin)
}

/// A default-size plot with horizontal/vertical axes and the given y values.
pub fn plot_values(values: impl IntoIterator<Item = f64>, h_ticks: Ticks, v_ticks: Ticks) -> Plot {
    let mut plot = Plot::new();
    plot.add_axis(Axis::with_ticks(Orientation::Horizontal, h_ticks));
    plot.add_axis(Axis::with_ticks(Orientation::Vertical, v_ticks));
    plot.add_point_set(PointSet::from_values(values));
    plot
}

/// A default-size plot with horizontal/vertical axes and the given points.
pub fn plot_points(points: Vec<Point>, h_ticks: Ticks, v_ticks: Ticks) -> Plot {
    let mut plot = Plot::new();
    plot.add_axis(Axis::with_ticks(Orientation::Horizontal, h_ticks));
    plot.add_axis(Axis::with_ticks(Orientation::Vertical, v_ticks));
    plot.add_point_set(PointSet::from_points(points));
    plot
}
