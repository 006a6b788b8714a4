//! Sampling CLI subcommand.
//!
//! This subcommand draws Monte Carlo samples of the number of bit errors
//! per block and prints one sampled integer per line, in draw order. A
//! draw that falls beyond the truncated cumulative scale prints `-1`.
//!
//! # Examples
//!
//! Five reproducible draws for 1000-bit blocks with a 1% symbol error
//! rate:
//! ```shell
//! $ block-error-sim sample --num-samples 5 --seed 42
//! ```

use crate::{
    binomial::BinomialPmf,
    cli::Run,
    rand::{Rng, SeedableRng},
    sampler::ErrorCountSampler,
    scale::ProbabilityScale,
};
use clap::Parser;
use std::{error::Error, io::Write};

/// Sampling CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Draws Monte Carlo samples of bit error counts per block")]
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
    /// Number of samples to draw
    #[arg(long, default_value = "50000")]
    num_samples: usize,
    /// Seed for reproducible sampling (entropy-seeded if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let pmf = BinomialPmf::new(self.block_size, self.error_rate)?;
        let scale = ProbabilityScale::new(&pmf, self.accuracy)?;
        let sampler = ErrorCountSampler::new(&scale);
        let mut rng = match self.seed {
            Some(seed) => Rng::seed_from_u64(seed),
            None => Rng::from_entropy(),
        };
        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        for _ in 0..self.num_samples {
            match sampler.draw_one(&mut rng) {
                Some(num_errors) => writeln!(stdout, "{num_errors}")?,
                None => writeln!(stdout, "-1")?,
            }
        }
        Ok(())
    }
}
