//! Render command: writes mosaic images as PNG files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use mm_core::{Clock, Journal, Raster, Rasterizer, Theme};
use mm_db::Database;
use png::{BitDepth, ColorType, Encoder};

use super::util::parse_month;
use crate::cli::RenderTarget;

/// Encodes a raster as an 8-bit RGBA PNG.
pub fn encode_png<W: Write>(writer: W, raster: &Raster) -> Result<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder
        .write_header()
        .context("failed to write PNG header")?
        .write_image_data(raster.data())
        .context("failed to write PNG data")?;
    Ok(())
}

fn write_png(path: &Path, raster: &Raster) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    encode_png(BufWriter::new(file), raster)
}

/// Renders `target` and returns the files written.
pub fn run<W: Write>(
    writer: &mut W,
    db: &Database,
    clock: &impl Clock,
    target: &RenderTarget,
    theme: Theme,
) -> Result<Vec<PathBuf>> {
    let journal = Journal::new(db, clock);
    let rasterizer = Rasterizer::new();
    let current_year = clock.today().year();

    let written = match target {
        RenderTarget::Month { month, output } => {
            let month = parse_month(month.as_deref(), clock.today())?;
            let grid = journal
                .month_grid(month)
                .with_context(|| format!("failed to load moods for {month}"))?;
            let raster = rasterizer
                .render_month(&grid, theme)
                .context("failed to render month mosaic")?;
            write_png(output, &raster)?;
            vec![output.clone()]
        }
        RenderTarget::Year { year, output } => {
            let year = year.unwrap_or(current_year);
            let grid = journal
                .year_grid(year)
                .with_context(|| format!("failed to load moods for {year}"))?;
            let raster = rasterizer
                .render_year(&grid, theme)
                .context("failed to render year mosaic")?;
            write_png(output, &raster)?;
            vec![output.clone()]
        }
        RenderTarget::Review { year, output } => {
            let year = year.unwrap_or(current_year);
            let grids = journal
                .year_review(year)
                .with_context(|| format!("failed to load moods for {year}"))?;
            let rasters = rasterizer
                .render_months(&grids, theme)
                .context("failed to render year review")?;

            let mut paths = Vec::with_capacity(rasters.len());
            for (grid, raster) in grids.iter().zip(&rasters) {
                let path = output.join(format!("{}.png", grid.month()));
                write_png(&path, raster)?;
                paths.push(path);
            }
            paths
        }
    };

    for path in &written {
        writeln!(writer, "Wrote {}", path.display())?;
    }
    tracing::debug!(files = written.len(), %theme, "render complete");
    Ok(written)
}
