// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the plotting engine API.

pub mod axis;
pub mod color;
pub mod error;
pub mod geometry;
pub mod interval;
pub mod plot;
pub mod series;
pub mod tick;
pub mod types;
pub mod view;

pub use axis::{Axis, LabelStyle, Orientation, Position};
pub use color::{Color, ColorMap, GrayScaleColorMap, ViridisColorMap};
pub use error::Error;
pub use geometry::{Point, Rect, ScreenPoint};
pub use interval::{intersect, join, map_value, Interval};
pub use plot::{plot_points, plot_values, Plot};
pub use series::{HeatMap, PointSet, PointType};
pub use tick::{TickMark, Ticks};
pub use types::Insets;
pub use view::{AxisView, DataView, HeatMapView, PointSetView, HIT_RADIUS};
