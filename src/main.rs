use block_error_sim::cli::{Args, Run};
use clap::Parser;
use std::error::Error;

#[termination::display]
fn main() -> Result<(), Box<dyn Error>> {
    Args::parse().run()
}
