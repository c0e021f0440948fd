//! Fixed-point encoder: real plaintexts ↔ integers at a fixed multiplier.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::arith::{ratio_to_f64, round_scaled};
use crate::error::{CipherError, Result};

/// Maps `x` to `round(x * precision)` and back.
///
/// The round trip is exact up to `1 / precision`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedPointEncoder {
    precision: BigInt,
}

impl FixedPointEncoder {
    /// Fails with `InvalidParameters` for a zero precision.
    pub fn new(precision: &BigUint) -> Result<Self> {
        if precision.is_zero() {
            return Err(CipherError::InvalidParameters(
                "encode precision must be positive".into(),
            ));
        }
        Ok(Self {
            precision: BigInt::from(precision.clone()),
        })
    }

    /// The fixed-point multiplier.
    pub fn precision(&self) -> &BigInt {
        &self.precision
    }

    /// `round(plaintext * precision)`
    pub fn encode(&self, plaintext: f64) -> Result<BigInt> {
        round_scaled(plaintext, &self.precision)
    }

    /// `encoded / precision`
    pub fn decode(&self, encoded: &BigInt) -> f64 {
        self.decode_ratio(encoded, &BigInt::one())
    }

    /// Decodes `encoded / divisor`, where `divisor` carries extra fixed-point
    /// scaling accumulated outside the encoder.
    pub fn decode_ratio(&self, encoded: &BigInt, divisor: &BigInt) -> f64 {
        ratio_to_f64(encoded, &(divisor * &self.precision))
    }
}
