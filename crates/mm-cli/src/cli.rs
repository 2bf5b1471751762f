//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Mood mosaic journal.
///
/// Log one colour and emoji per day, see streaks and patterns, and render
/// your month or year as a shareable mosaic.
#[derive(Debug, Parser)]
#[command(name = "mm", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log or edit the mood for a day.
    Log(LogArgs),

    /// Delete the mood logged for a day.
    Delete {
        /// Day to delete: YYYY-MM-DD, "today", "yesterday" or "N days ago".
        date: String,
    },

    /// Show a month as a calendar grid.
    Show {
        /// Month as YYYY-MM (defaults to the current month).
        month: Option<String>,
    },

    /// Show streaks and mood distribution.
    Stats {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show today's mood, the last five days and the current streak.
    Today {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Render a mosaic image.
    Render {
        #[command(subcommand)]
        target: RenderTarget,

        /// Colour theme (defaults to the configured theme).
        #[arg(long, global = true, value_enum)]
        theme: Option<ThemeArg>,
    },

    /// List the mood colours and emoji.
    Palette,
}

/// Arguments for `mm log`.
#[derive(Debug, clap::Args)]
pub struct LogArgs {
    /// A single emoji.
    pub emoji: String,

    /// Palette colour name (e.g. calm) or hex (#RRGGBB).
    #[arg(long, default_value = "neutral")]
    pub color: String,

    /// Day to log: YYYY-MM-DD, "today", "yesterday" or "N days ago".
    #[arg(long, default_value = "today")]
    pub date: String,

    /// Optional note.
    #[arg(long)]
    pub note: Option<String>,
}

/// What to render.
#[derive(Debug, Subcommand)]
pub enum RenderTarget {
    /// One month as a 1080x1080 mosaic.
    Month {
        /// Month as YYYY-MM (defaults to the current month).
        month: Option<String>,

        /// Output PNG path.
        #[arg(short, long)]
        output: PathBuf,
    },

    /// A whole year in pixels, 1080x1920.
    Year {
        /// Year (defaults to the current year).
        year: Option<i32>,

        /// Output PNG path.
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Twelve month mosaics for a year, one PNG per month.
    Review {
        /// Year (defaults to the current year).
        year: Option<i32>,

        /// Output directory.
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for mm_core::Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}
