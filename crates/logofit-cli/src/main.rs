// this_file: crates/logofit-cli/src/main.rs

//! logofit CLI: draw a line of text as large as the canvas allows.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match &cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Fit(args) => commands::fit::run(args),
        Commands::Fonts(args) => commands::fonts::run(args),
    }
}

/// Initialize logging: `-v` forces Debug, otherwise `RUST_LOG` or Warn.
fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
