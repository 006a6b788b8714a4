//! Probability scale CLI subcommand.
//!
//! This subcommand prints the truncated probability scale for a given
//! block size, symbol error rate and accuracy: one line per error count
//! with its PMF value and cumulative sum, followed by the residual tail
//! mass.

use crate::{binomial::BinomialPmf, cli::Run, scale::ProbabilityScale};
use clap::Parser;
use std::error::Error;

/// Probability scale CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Prints the truncated cumulative probability scale")]
pub struct Args {
    /// Number of bits per block
    #[arg(long, default_value = "1000")]
    block_size: usize,
    /// Per-symbol error probability
    #[arg(long, default_value = "0.01")]
    error_rate: f64,
    /// Tail mass at which the cumulative scale is truncated
    #[arg(long, default_value = "0.001")]
    accuracy: f64,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let pmf = BinomialPmf::new(self.block_size, self.error_rate)?;
        let scale = ProbabilityScale::new(&pmf, self.accuracy)?;
        println!("errors | probability | cumulative");
        println!("-------|-------------|-----------");
        for (k, (probability, cumulative)) in scale
            .probabilities()
            .iter()
            .zip(scale.cumulative())
            .enumerate()
        {
            println!("{k:6} | {probability:11.4e} | {cumulative:.8}");
        }
        println!();
        println!(
            "tail mass beyond {} cases: {:.4e}",
            scale.num_cases(),
            scale.tail()
        );
        Ok(())
    }
}
