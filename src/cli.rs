//! `block-error-sim` CLI application
//!
//! The CLI application is organized in subcommands. The supported
//! subcommands can be seen by running `block-error-sim`. See the modules
//! below for more information about how to use each subcommand.

use clap::Parser;
use std::error::Error;

pub mod sample;
pub mod scale;

/// Trait to run a CLI subcommand
pub trait Run {
    /// Run the CLI subcommand
    fn run(&self) -> Result<(), Box<dyn Error>>;
}

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    name = "block-error-sim",
    about = "Block error Monte Carlo simulator"
)]
pub enum Args {
    /// sample subcommand
    Sample(sample::Args),
    /// scale subcommand
    Scale(scale::Args),
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        match self {
            Args::Sample(x) => x.run(),
            Args::Scale(x) => x.run(),
        }
    }
}
