//! Mood mosaic CLI library.
//!
//! This crate provides the `mm` command-line interface over the journal.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, LogArgs, RenderTarget, ThemeArg};
pub use config::Config;
