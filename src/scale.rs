//! Truncated cumulative probability scale.
//!
//! This module contains the struct [`ProbabilityScale`], an ordered table
//! of binomial PMF values and their partial sums, truncated once the
//! uncovered tail mass drops below an accuracy threshold.

use crate::binomial::BinomialPmf;
use thiserror::Error;

/// Probability scale error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The accuracy threshold is NaN or lies outside the open interval
    /// (0, 1).
    #[error("accuracy should be contained in the open interval (0, 1)")]
    AccuracyOutOfRange,
    /// A PMF evaluation failed while building the table.
    #[error(transparent)]
    Pmf(#[from] crate::binomial::Error),
}

/// Truncated cumulative scale for error counts.
///
/// Index `k` of the table holds the probability of observing exactly `k`
/// errors in a block together with the probability of observing at most
/// `k` errors. Table generation stops as soon as the uncovered tail mass
/// is not greater than the accuracy the scale was built with, so for
/// distributions concentrated near their mean the table is much shorter
/// than the full `0..=block_size` range.
///
/// The scale is immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityScale {
    probabilities: Vec<f64>,
    cumulative: Vec<f64>,
}

impl ProbabilityScale {
    /// Builds the scale for a binomial PMF.
    ///
    /// Error counts are appended in increasing order starting from zero
    /// until the cumulative sum covers all but `accuracy` of the
    /// probability mass, or until the error count would exceed the block
    /// size. Afterwards the covered mass is at least `1 - accuracy`,
    /// unless the block size bound fired first.
    ///
    /// # Examples
    /// ```
    /// # use block_error_sim::binomial::BinomialPmf;
    /// # use block_error_sim::scale::ProbabilityScale;
    /// let pmf = BinomialPmf::new(1, 0.5).unwrap();
    /// let scale = ProbabilityScale::new(&pmf, 0.001).unwrap();
    /// assert_eq!(scale.num_cases(), 2);
    /// ```
    pub fn new(pmf: &BinomialPmf, accuracy: f64) -> Result<ProbabilityScale, Error> {
        if !(accuracy > 0.0 && accuracy < 1.0) {
            return Err(Error::AccuracyOutOfRange);
        }
        let mut probabilities = Vec::new();
        let mut cumulative = Vec::new();
        let mut sum = 0.0;
        let mut num_errors = 0;
        while 1.0 - sum > accuracy && num_errors <= pmf.block_size() {
            let probability = pmf.pmf(num_errors)?;
            probabilities.push(probability);
            sum += probability;
            cumulative.push(sum);
            num_errors += 1;
        }
        Ok(ProbabilityScale {
            probabilities,
            cumulative,
        })
    }

    /// Returns the PMF values of the scale, indexed by error count.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Returns the cumulative sums of the scale, indexed by error count.
    ///
    /// The sequence is non-decreasing and entry `k` equals the sum of the
    /// first `k + 1` PMF values.
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Returns the number of error counts covered by the scale.
    pub fn num_cases(&self) -> usize {
        self.cumulative.len()
    }

    /// Returns the probability mass covered by the scale.
    pub fn covered(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Returns the uncovered tail mass beyond the last error count.
    ///
    /// This is the probability that a uniform draw falls outside the scale
    /// when sampling.
    pub fn tail(&self) -> f64 {
        1.0 - self.covered()
    }
}
