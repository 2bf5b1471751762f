//! Rasterizes mosaics through SVG.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};
use thiserror::Error;

use crate::entry::Rgba;
use crate::grid::{MonthGrid, YearGrid};
use crate::theme::Theme;

use super::painter::{MONTH_SIZE, YEAR_SIZE, paint_month, paint_year};
use super::svg::SvgCanvas;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to parse generated SVG: {0}")]
    Svg(#[from] usvg::Error),

    #[error("cannot allocate a {width}x{height} image")]
    Allocation { width: u32, height: u32 },
}

/// An RGBA8 image, row-major, not premultiplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes, four per pixel.
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_data(self) -> Vec<u8> {
        self.pixels
    }

    /// Colour at `(x, y)`; `None` outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.pixels.get(i..i + 4)?;
        Some(Rgba {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }
}

/// Turns grids into images.
///
/// Fonts are loaded once at construction and shared by every render, so a
/// single `Rasterizer` can be used from many threads.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    fontdb: Arc<fontdb::Database>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    /// Loads the system fonts.
    #[must_use]
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded font database");
        Self::with_fonts(db)
    }

    #[must_use]
    pub fn with_fonts(db: fontdb::Database) -> Self {
        Self {
            fontdb: Arc::new(db),
        }
    }

    pub fn render_month(&self, grid: &MonthGrid, theme: Theme) -> Result<Raster, RenderError> {
        let start = Instant::now();
        let mut canvas = SvgCanvas::new(MONTH_SIZE.0, MONTH_SIZE.1);
        paint_month(&mut canvas, grid, theme);
        let raster = self.rasterize(&canvas.finish(), MONTH_SIZE)?;
        tracing::debug!(
            month = %grid.month(),
            elapsed_ms = start.elapsed().as_millis(),
            "rendered month mosaic"
        );
        Ok(raster)
    }

    pub fn render_year(&self, grid: &YearGrid, theme: Theme) -> Result<Raster, RenderError> {
        let start = Instant::now();
        let mut canvas = SvgCanvas::new(YEAR_SIZE.0, YEAR_SIZE.1);
        paint_year(&mut canvas, grid, theme);
        let raster = self.rasterize(&canvas.finish(), YEAR_SIZE)?;
        tracing::debug!(
            year = grid.year(),
            elapsed_ms = start.elapsed().as_millis(),
            "rendered year mosaic"
        );
        Ok(raster)
    }

    /// Renders several months in parallel, preserving order.
    pub fn render_months(
        &self,
        grids: &[MonthGrid],
        theme: Theme,
    ) -> Result<Vec<Raster>, RenderError> {
        grids
            .par_iter()
            .map(|grid| self.render_month(grid, theme))
            .collect()
    }

    fn rasterize(&self, svg: &str, (width, height): (u32, u32)) -> Result<Raster, RenderError> {
        let options = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(svg, &options)?;

        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::Allocation { width, height })?;
        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

        let pixels = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();

        Ok(Raster {
            width,
            height,
            pixels,
        })
    }
}
