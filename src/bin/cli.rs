// src/bin/cli.rs
use clap::Parser;
use nba_pbp::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(Cli::parse())?;
    Ok(())
}
