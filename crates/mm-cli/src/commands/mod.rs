//! CLI subcommand implementations.

pub mod delete;
pub mod log;
pub mod palette;
pub mod render;
pub mod show;
pub mod stats;
pub mod today;
pub mod util;
