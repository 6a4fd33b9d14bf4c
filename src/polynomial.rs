//! Polynomials over GF(256), used to derive Reed-Solomon error correction codewords.

use crate::error::Result;
use crate::gf256::{gexp, glog};

/// A polynomial with GF(256) coefficients, highest degree first.
///
/// Leading zero coefficients are stripped on construction, so the first
/// coefficient is non-zero unless the polynomial was built from zeros only.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial {
    coefficients: Vec<u8>,
}

impl Polynomial {
    /// Builds a polynomial from `coefficients` multiplied by x^`shift`.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Coefficients, highest degree first. Leading zeros are dropped.
    /// * `shift` - Number of zero coefficients appended on the right.
    pub fn new(coefficients: &[u8], shift: usize) -> Self {
        let offset = coefficients
            .iter()
            .position(|&c| c != 0)
            .unwrap_or(coefficients.len());
        let mut trimmed = Vec::with_capacity(coefficients.len() - offset + shift);
        trimmed.extend_from_slice(&coefficients[offset..]);
        trimmed.resize(coefficients.len() - offset + shift, 0);
        Self { coefficients: trimmed }
    }

    pub fn get(&self, index: usize) -> u8 {
        self.coefficients[index]
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// Returns the product of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Never fails for well-formed input; zero coefficients are skipped
    /// before they reach the logarithm table.
    pub fn multiply(&self, other: &Polynomial) -> Result<Polynomial> {
        if self.is_empty() || other.is_empty() {
            return Ok(Polynomial { coefficients: Vec::new() });
        }
        let mut product = vec![0u8; self.len() + other.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            if a == 0 {
                continue;
            }
            let loga = glog(a)?;
            for (j, &b) in other.coefficients.iter().enumerate() {
                if b == 0 {
                    continue;
                }
                product[i + j] ^= gexp(loga + glog(b)?);
            }
        }
        Ok(Polynomial::new(&product, 0))
    }

    /// Returns the remainder of dividing `self` by `divisor`.
    ///
    /// # Errors
    ///
    /// Never fails for a divisor with a non-zero leading coefficient, which
    /// every generator polynomial has.
    pub fn modulo(&self, divisor: &Polynomial) -> Result<Polynomial> {
        let mut remainder = self.clone();
        while remainder.len() >= divisor.len() {
            // Only an all-zero dividend keeps a zero lead after trimming.
            let lead = remainder.get(0);
            if lead == 0 || divisor.is_empty() {
                break;
            }
            let ratio = glog(lead)? - glog(divisor.get(0))?;
            let mut coefficients = remainder.coefficients;
            for (c, &d) in coefficients.iter_mut().zip(divisor.coefficients.iter()) {
                if d != 0 {
                    *c ^= gexp(glog(d)? + ratio);
                }
            }
            remainder = Polynomial::new(&coefficients, 0);
        }
        Ok(remainder)
    }
}

/// Generator polynomial (x + α^0)(x + α^1)...(x + α^(n-1)) for `n` EC codewords.
///
/// # Errors
///
/// Propagates [`Polynomial::multiply`], which does not fail in practice.
pub fn error_correct_polynomial(ec_length: usize) -> Result<Polynomial> {
    let mut generator = Polynomial::new(&[1], 0);
    for i in 0..ec_length {
        let root = gexp(i as i32);
        generator = generator.multiply(&Polynomial::new(&[1, root], 0))?;
    }
    Ok(generator)
}
