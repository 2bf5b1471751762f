//! Mosaic layout: where every title, cell and label goes.

use crate::entry::Rgba;
use crate::grid::{MonthGrid, YearGrid};
use crate::theme::{Theme, ThemeColors};

use super::canvas::{Canvas, LinearGradient, Point, Rect, TextStyle};

/// Name printed in subtitles and footers.
pub const BRAND: &str = "Mood Mosaic";

/// Month mosaic size in pixels (width, height).
pub const MONTH_SIZE: (u32, u32) = (1080, 1080);

/// Year mosaic size in pixels (width, height).
pub const YEAR_SIZE: (u32, u32) = (1080, 1920);

/// Weekday header letters, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Emoji glyph size relative to the cell.
pub const EMOJI_SCALE: f32 = 0.4;

const BORDER_COLORS: [Rgba; 4] = [
    Rgba::rgb(0x6B, 0xCB, 0x77),
    Rgba::rgb(0x4E, 0xCD, 0xC4),
    Rgba::rgb(0xE0, 0x56, 0xFD),
    Rgba::rgb(0xFF, 0x6B, 0x6B),
];
const BORDER_INSET: f32 = 4.0;
const BORDER_WIDTH: f32 = 8.0;
const BORDER_RADIUS: f32 = 30.0;

const MONTH_PADDING: f32 = 60.0;
const MONTH_GRID_TOP: f32 = MONTH_PADDING + 120.0;
const MONTH_CELL_PADDING: f32 = 6.0;
const MONTH_CELL_RADIUS: f32 = 20.0;

const YEAR_GRID_TOP: f32 = 220.0;
const YEAR_PADDING: f32 = 40.0;
const YEAR_CELL_PADDING: f32 = 2.0;
const YEAR_CELL_RADIUS: f32 = 4.0;

#[allow(clippy::cast_precision_loss)]
fn paint_frame(canvas: &mut impl Canvas, (width, height): (u32, u32), background: Rgba) {
    let (w, h) = (width as f32, height as f32);
    canvas.fill_rect(Rect::new(0.0, 0.0, w, h), background);
    canvas.stroke_round_rect(
        Rect::new(0.0, 0.0, w, h).inset(BORDER_INSET),
        BORDER_RADIUS,
        BORDER_WIDTH,
        &LinearGradient {
            from: Point::new(0.0, 0.0),
            to: Point::new(w, h),
            stops: BORDER_COLORS.to_vec(),
        },
    );
}

/// Side of one month cell: the grid width split into seven whole pixels.
#[allow(clippy::cast_precision_loss)]
fn month_cell_size() -> f32 {
    let grid_size = MONTH_SIZE.0 - 2 * MONTH_PADDING as u32;
    (grid_size / 7) as f32
}

/// Paints a month mosaic onto a `MONTH_SIZE` canvas.
#[allow(clippy::cast_precision_loss)]
pub fn paint_month(canvas: &mut impl Canvas, grid: &MonthGrid, theme: Theme) {
    let colors: ThemeColors = theme.colors();
    let center = MONTH_SIZE.0 as f32 / 2.0;
    paint_frame(canvas, MONTH_SIZE, colors.background);

    let month = grid.month();
    canvas.draw_text(
        &format!("{} {}", month.name(), month.year()),
        Point::new(center, MONTH_PADDING + 40.0),
        TextStyle::centered(48.0, colors.text_primary).bold(),
    );
    canvas.draw_text(
        &format!("{BRAND} • {} days tracked", grid.populated_count()),
        Point::new(center, MONTH_PADDING + 75.0),
        TextStyle::centered(24.0, colors.text_secondary),
    );

    let cell_size = month_cell_size();
    for (col, label) in WEEKDAY_LABELS.iter().enumerate() {
        canvas.draw_text(
            label,
            Point::new(
                (col as f32).mul_add(cell_size, MONTH_PADDING) + cell_size / 2.0,
                MONTH_GRID_TOP - 10.0,
            ),
            TextStyle::centered(20.0, colors.text_tertiary),
        );
    }

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let Some(cell) = grid.cell(row, col) else {
                continue;
            };
            let rect = Rect::new(
                (col as f32).mul_add(cell_size, MONTH_PADDING),
                (row as f32).mul_add(cell_size, MONTH_GRID_TOP),
                cell_size,
                cell_size,
            )
            .inset(MONTH_CELL_PADDING);

            if let Some(entry) = &cell.entry {
                canvas.fill_round_rect(rect, MONTH_CELL_RADIUS, entry.color());
                let size = cell_size * EMOJI_SCALE;
                canvas.draw_text(
                    entry.emoji().as_str(),
                    Point::new(rect.center_x(), rect.center_y() + size / 3.0),
                    TextStyle::centered(size, Rgba::WHITE),
                );
            } else {
                canvas.fill_round_rect(rect, MONTH_CELL_RADIUS, colors.surface);
                canvas.draw_text(
                    &chrono::Datelike::day(&cell.date).to_string(),
                    Point::new(rect.center_x(), rect.center_y() + 6.0),
                    TextStyle::centered(18.0, colors.text_muted),
                );
            }
        }
    }

    canvas.draw_text(
        &format!("Created with {BRAND}"),
        Point::new(center, MONTH_SIZE.1 as f32 - MONTH_PADDING + 20.0),
        TextStyle::centered(18.0, colors.footer),
    );
}

/// Paints a year-in-pixels mosaic onto a `YEAR_SIZE` canvas.
#[allow(clippy::cast_precision_loss)]
pub fn paint_year(canvas: &mut impl Canvas, grid: &YearGrid, theme: Theme) {
    let colors = theme.colors();
    let (width, height) = (YEAR_SIZE.0 as f32, YEAR_SIZE.1 as f32);
    let center = width / 2.0;
    paint_frame(canvas, YEAR_SIZE, colors.background_deep);

    canvas.draw_text(
        &format!("{} in Pixels", grid.year()),
        Point::new(center, 120.0),
        TextStyle::centered(64.0, colors.text_primary).bold(),
    );
    canvas.draw_text(
        &format!("{} days of feelings", grid.populated_count()),
        Point::new(center, 170.0),
        TextStyle::centered(28.0, colors.text_secondary),
    );

    let cell_size = 2.0f32.mul_add(-YEAR_PADDING, width) / grid.columns() as f32;
    for (i, cell) in grid.cells().iter().enumerate() {
        let (row, col) = (i / grid.columns(), i % grid.columns());
        let rect = Rect::new(
            (col as f32).mul_add(cell_size, YEAR_PADDING),
            (row as f32).mul_add(cell_size, YEAR_GRID_TOP),
            cell_size,
            cell_size,
        )
        .inset(YEAR_CELL_PADDING);
        let fill = cell.entry.as_ref().map_or(colors.surface, |e| e.color());
        canvas.fill_round_rect(rect, YEAR_CELL_RADIUS, fill);
    }

    let legend_y = (grid.rows() as f32).mul_add(cell_size, YEAR_GRID_TOP) + 60.0;
    let legend = TextStyle::centered(22.0, colors.text_secondary).left();
    canvas.draw_text("Jan", Point::new(YEAR_PADDING, legend_y), legend);
    canvas.draw_text("Dec", Point::new(width - YEAR_PADDING - 40.0, legend_y), legend);

    canvas.draw_text(
        &format!("Created with {BRAND}"),
        Point::new(center, height - 60.0),
        TextStyle::centered(20.0, colors.footer),
    );
}
