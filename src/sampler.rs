//! Monte Carlo sampling of error counts.
//!
//! This module contains the struct [`ErrorCountSampler`], which draws
//! independent samples of "number of errors per block" by inverting a
//! [`ProbabilityScale`] against uniform random draws.

use crate::scale::ProbabilityScale;
use rand::distributions::Distribution;
use rand::Rng;

/// Monte Carlo sampler of error counts per block.
///
/// Each draw generates a uniform variate in `[0, 1)` and locates it in the
/// cumulative scale. The sampler never mutates the scale, and the random
/// source belongs to the caller, so parallel sampling paths must each own
/// an independent generator.
#[derive(Debug, Clone, Copy)]
pub struct ErrorCountSampler<'a> {
    scale: &'a ProbabilityScale,
}

impl<'a> ErrorCountSampler<'a> {
    /// Creates a new sampler over a probability scale.
    pub fn new(scale: &'a ProbabilityScale) -> ErrorCountSampler<'a> {
        ErrorCountSampler { scale }
    }

    /// Draws one error count.
    ///
    /// Returns the smallest error count whose cumulative probability
    /// strictly exceeds the uniform draw, or `None` if the draw fell in
    /// the tail truncated away when the scale was built. The `None`
    /// outcome is part of the sampling semantics, not a failure; its
    /// probability is the scale's uncovered tail mass.
    pub fn draw_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let u = rng.gen::<f64>();
        self.scale.cumulative().iter().position(|&c| c > u)
    }

    /// Draws `count` independent error counts, in draw order.
    pub fn draw_many<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Option<usize>> {
        (0..count).map(|_| self.draw_one(rng)).collect()
    }
}

impl Distribution<Option<usize>> for ErrorCountSampler<'_> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        self.draw_one(rng)
    }
}
