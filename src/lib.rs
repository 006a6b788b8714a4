//! # Block error simulator
//!
//! `block_error_sim` models the distribution of bit error counts in
//! fixed-size blocks transmitted over a noisy channel with a known
//! per-symbol error rate, and draws Monte Carlo samples of "number of
//! errors per block" from that distribution.
//!
//! The crate is organized as three small components. [`binomial`] evaluates
//! the exact binomial PMF for a block size and symbol error rate, using
//! big-integer factorials so that block sizes in the thousands keep full
//! precision. [`scale`] materializes the cumulative distribution as an
//! ordered table, truncated once the uncovered tail mass drops below an
//! accuracy threshold. [`sampler`] inverts the cumulative table against
//! uniform random draws.
//!
//! It can be used as a Rust library or as a CLI tool that prints sampled
//! error counts to the standard output. See [`cli`] for documentation about
//! the usage of the CLI tool.
//!
//! # Examples
//! ```
//! use block_error_sim::binomial::BinomialPmf;
//! use block_error_sim::rand::{Rng, SeedableRng};
//! use block_error_sim::sampler::ErrorCountSampler;
//! use block_error_sim::scale::ProbabilityScale;
//!
//! let pmf = BinomialPmf::new(1000, 0.01).unwrap();
//! let scale = ProbabilityScale::new(&pmf, 0.001).unwrap();
//! let sampler = ErrorCountSampler::new(&scale);
//! let mut rng = Rng::seed_from_u64(42);
//! match sampler.draw_one(&mut rng) {
//!     Some(errors) => assert!(errors < scale.num_cases()),
//!     None => (), // the draw fell in the truncated tail
//! }
//! ```

#![warn(missing_docs)]

pub mod binomial;
pub mod cli;
pub mod rand;
pub mod sampler;
pub mod scale;
