use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use mm_core::SystemClock;
use tracing_subscriber::EnvFilter;

use mm_cli::commands::{delete, log, palette, render, show, stats, today};
use mm_cli::{Cli, Commands, Config};

/// Load config and open database, ensuring the parent directory exists.
fn open_database(config_path: Option<&Path>) -> Result<(mm_db::Database, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    let db = mm_db::Database::open(&config.database_path).context("failed to open database")?;
    Ok((db, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // try_init: tests may have installed a subscriber already
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let clock = SystemClock;
    let mut out = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Log(args)) => {
            let (mut db, _config) = open_database(cli.config.as_deref())?;
            log::run(&mut out, &mut db, &clock, args)?;
        }
        Some(Commands::Delete { date }) => {
            let (mut db, _config) = open_database(cli.config.as_deref())?;
            delete::run(&mut out, &mut db, &clock, date)?;
        }
        Some(Commands::Show { month }) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            show::run(&mut out, &db, &clock, month.as_deref())?;
        }
        Some(Commands::Stats { json }) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            stats::run(&mut out, &db, &clock, *json)?;
        }
        Some(Commands::Today { json }) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            today::run(&mut out, &db, &clock, *json)?;
        }
        Some(Commands::Render { target, theme }) => {
            let (db, config) = open_database(cli.config.as_deref())?;
            let theme = theme.map_or(config.theme, Into::into);
            render::run(&mut out, &db, &clock, target, theme)?;
        }
        Some(Commands::Palette) => {
            // Palette doesn't need config or the database
            palette::run(&mut out)?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
