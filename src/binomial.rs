//! Binomial distribution of bit error counts.
//!
//! This module contains the struct [`BinomialPmf`], which evaluates the
//! probability mass function for the number of bit errors in a block of
//! symbols transmitted over a memoryless channel with a known per-symbol
//! error rate.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use thiserror::Error;

/// Binomial PMF error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The block size is zero, so there are no symbols to count errors in.
    #[error("block size should be greater than zero")]
    BlockSizeZero,
    /// The symbol error rate is NaN or lies outside the interval [0, 1].
    #[error("symbol error rate should be contained in [0, 1]")]
    ErrorRateOutOfRange,
    /// More errors than there are symbols in a block.
    #[error("number of errors should not exceed the block size")]
    TooManyErrors,
}

/// Binomial PMF for the number of bit errors in a block.
///
/// A block of `block_size` symbols crosses a channel that corrupts each
/// symbol independently with probability `symbol_error_rate`, so the number
/// of errors per block is binomially distributed. The factorial of the
/// block size is computed once at construction and reused by every PMF
/// evaluation.
///
/// The struct is immutable after construction, so it can be shared
/// read-only between concurrent callers.
#[derive(Debug, Clone, PartialEq)]
pub struct BinomialPmf {
    block_size: usize,
    symbol_error_rate: f64,
    block_size_factorial: BigUint,
}

impl BinomialPmf {
    /// Creates a new binomial PMF.
    ///
    /// The block size must be positive and the symbol error rate must be
    /// contained in `[0, 1]`. There is no upper bound on the block size;
    /// the factorial terms are evaluated with big integers.
    ///
    /// # Examples
    /// ```
    /// # use block_error_sim::binomial::BinomialPmf;
    /// let pmf = BinomialPmf::new(10, 0.1).unwrap();
    /// assert!((pmf.pmf(0).unwrap() - 0.3487).abs() < 1e-4);
    /// ```
    pub fn new(block_size: usize, symbol_error_rate: f64) -> Result<BinomialPmf, Error> {
        if block_size == 0 {
            return Err(Error::BlockSizeZero);
        }
        if symbol_error_rate.is_nan() || !(0.0..=1.0).contains(&symbol_error_rate) {
            return Err(Error::ErrorRateOutOfRange);
        }
        Ok(BinomialPmf {
            block_size,
            symbol_error_rate,
            block_size_factorial: factorial(block_size),
        })
    }

    /// Returns the number of symbols per block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the per-symbol error probability.
    pub fn symbol_error_rate(&self) -> f64 {
        self.symbol_error_rate
    }

    /// Returns the probability of observing exactly `num_errors` errors in
    /// one block.
    ///
    /// The combinatorial coefficient is formed by exact big-integer
    /// division before any conversion to floating point, so block sizes in
    /// the thousands do not lose precision to intermediate overflow.
    /// Underflow of extreme-tail values towards zero is expected numeric
    /// behavior.
    pub fn pmf(&self, num_errors: usize) -> Result<f64, Error> {
        if num_errors > self.block_size {
            return Err(Error::TooManyErrors);
        }
        let n = self.block_size;
        let k = num_errors;
        let p = self.symbol_error_rate;
        // degenerate channels put all the mass on a single error count
        if p == 0.0 {
            return Ok(if k == 0 { 1.0 } else { 0.0 });
        }
        if p == 1.0 {
            return Ok(if k == n { 1.0 } else { 0.0 });
        }
        let coefficient = &self.block_size_factorial / (factorial(k) * factorial(n - k));
        let ln_pmf = ln_biguint(&coefficient) + k as f64 * p.ln() + (n - k) as f64 * (-p).ln_1p();
        Ok(ln_pmf.exp())
    }
}

/// Computes `n!` as a big integer.
fn factorial(n: usize) -> BigUint {
    let mut acc = BigUint::from(1u32);
    for j in 2..=n as u64 {
        acc *= j;
    }
    acc
}

/// Natural logarithm of a positive big integer.
///
/// The value is read off the top [`f64::MANTISSA_DIGITS`] bits of the
/// integer plus a power-of-two offset for the remaining bits, so integers
/// far beyond `f64::MAX` stay representable in log space.
fn ln_biguint(x: &BigUint) -> f64 {
    let bits = x.bits();
    if bits <= u64::from(f64::MANTISSA_DIGITS) {
        return x.to_f64().map_or(f64::NEG_INFINITY, f64::ln);
    }
    let shift = bits - u64::from(f64::MANTISSA_DIGITS);
    let top = x >> shift;
    top.to_f64().map_or(f64::NEG_INFINITY, f64::ln) + shift as f64 * std::f64::consts::LN_2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() <= tol, "{a} != {b} (tolerance {tol})");
    }

    #[test]
    fn zero_block_size() {
        assert_eq!(BinomialPmf::new(0, 0.1), Err(Error::BlockSizeZero));
    }

    #[test]
    fn invalid_error_rate() {
        for rate in [-0.1, 1.5, f64::NAN] {
            assert_eq!(BinomialPmf::new(10, rate), Err(Error::ErrorRateOutOfRange));
        }
    }

    #[test]
    fn too_many_errors() {
        let pmf = BinomialPmf::new(10, 0.1).unwrap();
        assert_eq!(pmf.pmf(11), Err(Error::TooManyErrors));
        assert!(pmf.pmf(10).is_ok());
    }

    #[test]
    fn small_block() {
        let pmf = BinomialPmf::new(10, 0.1).unwrap();
        assert_close(pmf.pmf(0).unwrap(), 0.3487, 1e-4);
        assert_close(pmf.pmf(1).unwrap(), 0.3874, 1e-4);
        assert_close(pmf.pmf(2).unwrap(), 0.1937, 1e-4);
    }

    #[test]
    fn single_bit_block() {
        let pmf = BinomialPmf::new(1, 0.5).unwrap();
        assert_close(pmf.pmf(0).unwrap(), 0.5, 1e-12);
        assert_close(pmf.pmf(1).unwrap(), 0.5, 1e-12);
    }

    #[test]
    fn sums_to_one() {
        for (n, p) in [(10, 0.1), (100, 0.37), (1000, 0.01), (2500, 0.5)] {
            let pmf = BinomialPmf::new(n, p).unwrap();
            let sum = (0..=n).map(|k| pmf.pmf(k).unwrap()).sum::<f64>();
            assert_close(sum, 1.0, 1e-9);
        }
    }

    #[test]
    fn huge_block() {
        // central value of an even coin-flip block, against the Stirling
        // estimate sqrt(2 / (pi n))
        let pmf = BinomialPmf::new(5000, 0.5).unwrap();
        assert_close(pmf.pmf(2500).unwrap(), 0.0112832, 1e-5);
    }

    #[test]
    fn non_negative_and_unimodal() {
        let pmf = BinomialPmf::new(50, 0.3).unwrap();
        let values = (0..=50).map(|k| pmf.pmf(k).unwrap()).collect::<Vec<_>>();
        assert!(values.iter().all(|&v| v >= 0.0));
        let mode = values
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap()
            .0;
        for k in 1..=mode {
            assert!(values[k] >= values[k - 1]);
        }
        for k in mode + 1..values.len() {
            assert!(values[k] <= values[k - 1]);
        }
    }

    #[test]
    fn degenerate_channels() {
        let pmf = BinomialPmf::new(20, 0.0).unwrap();
        assert_eq!(pmf.pmf(0).unwrap(), 1.0);
        assert_eq!(pmf.pmf(1).unwrap(), 0.0);
        let pmf = BinomialPmf::new(20, 1.0).unwrap();
        assert_eq!(pmf.pmf(20).unwrap(), 1.0);
        assert_eq!(pmf.pmf(19).unwrap(), 0.0);
    }

    #[test]
    fn pmf_is_pure() {
        let pmf = BinomialPmf::new(321, 0.037).unwrap();
        for k in [0, 1, 7, 321] {
            assert_eq!(pmf.pmf(k).unwrap(), pmf.pmf(k).unwrap());
        }
    }

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), BigUint::from(1u32));
        assert_eq!(factorial(1), BigUint::from(1u32));
        assert_eq!(factorial(5), BigUint::from(120u32));
        assert_eq!(factorial(25).to_string(), "15511210043330985984000000");
    }
}
