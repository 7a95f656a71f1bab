use std::io;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use minefield_core::{CellCount, Coord, Field, FieldConfig};
use rand::SeedableRng;
use rand::rngs::SmallRng;

mod command;
mod session;

/// Play Minesweeper in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of columns.
    #[arg(long, default_value_t = 32)]
    width: Coord,

    /// Number of rows.
    #[arg(long, default_value_t = 16)]
    height: Coord,

    /// Number of mines, must leave at least one safe cell.
    #[arg(long, default_value_t = 99)]
    mines: CellCount,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = FieldConfig::new(args.width, args.height, args.mines)
        .context("Invalid field parameters")?;
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let mut field = Field::new(config, &mut rng)?;
    log::info!(
        "Started {}x{} field with {} mines and {} safe cells",
        config.width,
        config.height,
        config.mines,
        config.safe_cells()
    );

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    session::play(&mut field, &mut rng, stdin, &mut stdout)?;
    Ok(())
}
