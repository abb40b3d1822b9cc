// src/main.rs
use color_eyre::eyre::Result;

use lol_stats::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run()
}
