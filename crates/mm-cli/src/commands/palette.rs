//! Palette command: the colours and emoji offered when logging.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use mm_core::MoodColor;
use mm_core::palette::{EMOJI_CATEGORIES, QUICK_EMOJIS};

pub fn format_palette() -> String {
    let mut output = String::new();
    writeln!(output, "COLORS").unwrap();
    writeln!(output, "──────").unwrap();
    for color in MoodColor::ALL {
        writeln!(output, "{:<10}{}", color.name(), color.rgba()).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "QUICK").unwrap();
    writeln!(output, "─────").unwrap();
    writeln!(output, "{}", QUICK_EMOJIS.join(" ")).unwrap();

    for (category, emojis) in EMOJI_CATEGORIES {
        writeln!(output).unwrap();
        writeln!(output, "{}", category.to_uppercase()).unwrap();
        writeln!(output, "{}", "─".repeat(category.chars().count())).unwrap();
        for row in emojis.chunks(16) {
            writeln!(output, "{}", row.join(" ")).unwrap();
        }
    }
    output
}

pub fn run<W: Write>(writer: &mut W) -> Result<()> {
    write!(writer, "{}", format_palette())?;
    Ok(())
}
