//! Mosaic rendering.
//!
//! [`painter`] lays a grid out on any [`Canvas`]. [`SvgCanvas`] turns the
//! drawing into SVG and [`Rasterizer`] turns that into pixels.
//! [`RecordingCanvas`] keeps the draw calls for inspection.

pub mod canvas;
pub mod painter;
pub mod raster;
pub mod recording;
pub mod svg;

pub use canvas::{Canvas, LinearGradient, Point, Rect, TextAlign, TextStyle};
pub use painter::{MONTH_SIZE, YEAR_SIZE, paint_month, paint_year};
pub use raster::{Raster, Rasterizer, RenderError};
pub use recording::{DrawCommand, RecordingCanvas};
pub use svg::SvgCanvas;

pub use resvg::usvg::fontdb;
