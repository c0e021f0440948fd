//! Key-generation parameters.

use itertools::Itertools;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{CipherError, Result};

/// Smallest ladder entry that still admits a nonzero multiplier bit length.
const MIN_ROUND_BITS: u64 = 2;

/// Parameters for [`crate::generate_keypair`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyConfig {
    /// Bit size of the final (largest) round modulus.
    pub key_size_bits: u64,
    /// Number of affine rounds.
    pub round_count: usize,
    /// Fixed-point multiplier handed to the encoder.
    pub encode_precision: BigUint,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            key_size_bits: 1024,
            round_count: 5,
            encode_precision: BigUint::one() << 100u32,
        }
    }
}

impl KeyConfig {
    /// Sets the final modulus size.
    pub fn with_key_size_bits(mut self, bits: u64) -> Self {
        self.key_size_bits = bits;
        self
    }

    /// Sets the number of affine rounds.
    pub fn with_round_count(mut self, rounds: usize) -> Self {
        self.round_count = rounds;
        self
    }

    /// Sets the encoder's fixed-point multiplier.
    pub fn with_encode_precision(mut self, precision: impl Into<BigUint>) -> Self {
        self.encode_precision = precision.into();
        self
    }

    /// Round modulus sizes, linearly spaced from `key_size_bits / 2` up to
    /// `key_size_bits` (floored).  A single round uses the lower end.
    pub fn ladder_bits(&self) -> Vec<u64> {
        let start = self.key_size_bits / 2;
        let stop = self.key_size_bits;
        match self.round_count {
            0 => Vec::new(),
            1 => vec![start],
            n => {
                let steps = (n - 1) as u64;
                (0..=steps)
                    .map(|i| start + i * (stop - start) / steps)
                    .collect()
            }
        }
    }

    /// Rejects configurations that cannot yield a usable ladder.
    pub fn validate(&self) -> Result<()> {
        if self.round_count < 1 {
            return Err(CipherError::InvalidParameters(
                "round count must be at least 1".into(),
            ));
        }
        if self.encode_precision.is_zero() {
            return Err(CipherError::InvalidParameters(
                "encode precision must be positive".into(),
            ));
        }
        let ladder = self.ladder_bits();
        if ladder[0] < MIN_ROUND_BITS {
            return Err(CipherError::InvalidParameters(format!(
                "key size {} bits is too small for a nonzero multiplier",
                self.key_size_bits
            )));
        }
        if !ladder.iter().tuple_windows().all(|(a, b)| a < b) {
            return Err(CipherError::InvalidParameters(format!(
                "key size {} bits cannot hold {} strictly increasing rounds",
                self.key_size_bits, self.round_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let cfg = KeyConfig::default();
        assert_eq!(cfg.key_size_bits, 1024);
        assert_eq!(cfg.round_count, 5);
        assert_eq!(cfg.encode_precision, BigUint::one() << 100u32);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_ladder_bits() {
        assert_eq!(KeyConfig::default().ladder_bits(), vec![512, 640, 768, 896, 1024]);
        let cfg = KeyConfig::default().with_key_size_bits(100).with_round_count(3);
        assert_eq!(cfg.ladder_bits(), vec![50, 75, 100]);
        let cfg = KeyConfig::default().with_key_size_bits(101).with_round_count(4);
        assert_eq!(cfg.ladder_bits(), vec![50, 67, 84, 101]);
        let cfg = KeyConfig::default().with_round_count(1);
        assert_eq!(cfg.ladder_bits(), vec![512]);
    }

    #[test]
    fn test_invalid_round_count() {
        let cfg = KeyConfig::default().with_round_count(0);
        assert!(matches!(cfg.validate(), Err(CipherError::InvalidParameters(_))));
    }

    #[test]
    fn test_invalid_key_size() {
        let cfg = KeyConfig::default().with_key_size_bits(3).with_round_count(1);
        assert!(matches!(cfg.validate(), Err(CipherError::InvalidParameters(_))));
        // 8-bit key: ladder 4..8 cannot hold 10 distinct sizes
        let cfg = KeyConfig::default().with_key_size_bits(8).with_round_count(10);
        assert!(matches!(cfg.validate(), Err(CipherError::InvalidParameters(_))));
    }

    #[test]
    fn test_invalid_precision() {
        let cfg = KeyConfig::default().with_encode_precision(0u32);
        assert!(matches!(cfg.validate(), Err(CipherError::InvalidParameters(_))));
    }

    #[test]
    fn test_serde_roundtrip() {
        let cfg = KeyConfig::default().with_round_count(3).with_encode_precision(1u32);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: KeyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
