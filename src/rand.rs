//! # Reproducible random generation
//!
//! This module uses the [`ChaCha8Rng`] RNG from the [rand_chacha] crate so
//! that sampling runs can be reproduced from a seed.
//!
//! # Examples
//! ```
//! # use block_error_sim::rand::Rng;
//! # use block_error_sim::rand::*;
//! let seed = 42;
//! let mut rng = Rng::seed_from_u64(seed);
//! assert_eq!(rng.next_u64(), Rng::seed_from_u64(seed).next_u64());
//! ```
use rand_chacha::ChaCha8Rng;
pub use rand_chacha::rand_core::SeedableRng;
pub use rand_core::RngCore;

/// The RNG used throughout this crate wherever reproducible pseudorandom
/// sampling is needed.
pub type Rng = ChaCha8Rng;
