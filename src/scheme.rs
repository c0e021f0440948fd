//! Encryption & decryption.

use std::fmt;

use itertools::Itertools;
use log::trace;
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{Signed, Zero};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::{
    arith::{centered, mod_inverse, reduce},
    cipher::{Ciphertext, Operand},
    encoder::FixedPointEncoder,
    error::{CipherError, Result},
};

/// Bit size of the ephemeral blinding scalar `y` and of the secret `x`.
pub const BLINDING_BITS: u64 = 160;

/// Secret key: the affine round ladder plus the blinding pair (g, x).
///
/// Round `i` maps `c₂ ↦ aᵢ·c₂ mod nᵢ`.  Moduli are strictly increasing, so
/// every round input already lies below the round modulus and the map is a
/// bijection on it.
#[derive(Clone)]
pub struct CipherKey {
    multipliers: Vec<BigInt>,
    moduli: Vec<BigInt>,
    multiplier_inverses: Vec<BigInt>,
    generator: BigInt,
    secret: BigInt,
    blinding_point: BigInt,
    encoder: FixedPointEncoder,
}

impl CipherKey {
    /// Build a key from explicit ladders.  `moduli[0]` is the smallest round.
    pub fn from_parts(
        multipliers: Vec<BigInt>,
        moduli: Vec<BigInt>,
        generator: BigInt,
        secret: BigInt,
        encode_precision: &BigUint,
    ) -> Result<Self> {
        if multipliers.len() != moduli.len() {
            return Err(CipherError::InvalidParameters(format!(
                "{} multipliers for {} moduli",
                multipliers.len(),
                moduli.len()
            )));
        }
        if moduli.is_empty() {
            return Err(CipherError::InvalidParameters(
                "at least one round is required".into(),
            ));
        }
        if moduli.iter().any(|n| !n.is_positive()) {
            return Err(CipherError::InvalidParameters(
                "round moduli must be positive".into(),
            ));
        }
        if !moduli.iter().tuple_windows().all(|(a, b)| a < b) {
            return Err(CipherError::InvalidParameters(
                "round moduli must be strictly increasing".into(),
            ));
        }

        let multiplier_inverses = multipliers
            .iter()
            .zip(&moduli)
            .enumerate()
            .map(|(i, (a, n))| {
                mod_inverse(a, n).ok_or_else(|| {
                    CipherError::InvalidParameters(format!(
                        "multiplier of round {} is not invertible",
                        i
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let encoder = FixedPointEncoder::new(encode_precision)?;
        let blinding_point = reduce(&(&generator * &secret), &moduli[0]);

        Ok(Self {
            multipliers,
            moduli,
            multiplier_inverses,
            generator,
            secret,
            blinding_point,
            encoder,
        })
    }

    /// Number of affine rounds.
    pub fn round_count(&self) -> usize {
        self.moduli.len()
    }

    /// Round moduli, smallest first.
    pub fn moduli(&self) -> &[BigInt] {
        &self.moduli
    }

    /// Round multipliers, aligned with [`Self::moduli`].
    pub fn multipliers(&self) -> &[BigInt] {
        &self.multipliers
    }

    /// Modulus of the last round; every ciphertext is bound to it.
    pub fn final_modulus(&self) -> &BigInt {
        &self.moduli[self.moduli.len() - 1]
    }

    /// Blinding generator g.
    pub fn generator(&self) -> &BigInt {
        &self.generator
    }

    /// h = g·x mod n₀
    pub fn blinding_point(&self) -> &BigInt {
        &self.blinding_point
    }

    /// Encoder used by [`Self::encrypt`] and [`Self::decrypt`].
    pub fn encoder(&self) -> &FixedPointEncoder {
        &self.encoder
    }

    /// Encrypt a real plaintext with the OS random source.
    pub fn encrypt(&self, plaintext: f64) -> Result<Ciphertext> {
        self.encrypt_with(plaintext, &mut OsRng)
    }

    /// Encrypt a real plaintext drawing the blinding scalar from `rng`.
    pub fn encrypt_with<R: RngCore + CryptoRng>(
        &self,
        plaintext: f64,
        rng: &mut R,
    ) -> Result<Ciphertext> {
        let encoded = self.encoder.encode(plaintext)?;
        Ok(self.raw_encrypt_with(&encoded, rng))
    }

    /// Encrypt an already encoded integer.
    pub fn raw_encrypt(&self, encoded: &BigInt) -> Ciphertext {
        self.raw_encrypt_with(encoded, &mut OsRng)
    }

    /// Encrypt an encoded integer drawing the blinding scalar from `rng`.
    pub fn raw_encrypt_with<R: RngCore + CryptoRng>(
        &self,
        encoded: &BigInt,
        rng: &mut R,
    ) -> Ciphertext {
        let (cipher1, mut cipher2) = self.blind(encoded, rng);
        for (a, n) in self.multipliers.iter().zip(&self.moduli) {
            cipher2 = reduce(&(a * &cipher2), n);
        }
        trace!("encrypted over {} affine rounds", self.round_count());
        Ciphertext::new(cipher1, cipher2, self.final_modulus().clone())
    }

    /// Decrypt a ciphertext, or the literal `0` (which decrypts to `0.0`).
    pub fn decrypt(&self, ciphertext: impl Into<Operand>) -> Result<f64> {
        match ciphertext.into() {
            Operand::Cipher(c) => {
                let value = self.raw_decrypt(&c)?;
                Ok(self.encoder.decode_ratio(&value, &c.scale_divisor()))
            }
            Operand::Int(v) if v.is_zero() => Ok(0.0),
            _ => Err(CipherError::UnsupportedOperandType(
                "decryption takes a ciphertext or the literal zero",
            )),
        }
    }

    /// Undo the rounds and the blinding.  The result is the signed encoded
    /// integer, still multiplied by `ciphertext.scale_divisor()`.
    pub fn raw_decrypt(&self, ciphertext: &Ciphertext) -> Result<BigInt> {
        if ciphertext.final_modulus() != self.final_modulus() {
            return Err(CipherError::ModulusMismatch);
        }

        let mut cipher1 = ciphertext.cipher1().clone();
        let mut cipher2 = ciphertext.cipher2().clone();
        for (n, a_inv) in self.moduli.iter().zip(&self.multiplier_inverses).rev() {
            cipher1 = centered(reduce(&cipher1, n), n);
            cipher2 = centered(reduce(&(a_inv * reduce(&cipher2, n)), n), n);
        }

        Ok(self.unblind(&cipher1, &cipher2))
    }

    /// (y·g, m + y·h) mod n₀ for a fresh ephemeral y.
    fn blind<R: RngCore + CryptoRng>(&self, encoded: &BigInt, rng: &mut R) -> (BigInt, BigInt) {
        let n0 = &self.moduli[0];
        let y = BigInt::from(rng.gen_biguint(BLINDING_BITS));
        (
            reduce(&(&y * &self.generator), n0),
            reduce(&(encoded + &y * &self.blinding_point), n0),
        )
    }

    fn unblind(&self, cipher1: &BigInt, cipher2: &BigInt) -> BigInt {
        let n0 = &self.moduli[0];
        centered(reduce(&(cipher2 - &self.secret * cipher1), n0), n0)
    }
}

impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherKey")
            .field("round_count", &self.round_count())
            .field("moduli", &self.moduli)
            .field("multipliers", &self.multipliers)
            .field("generator", &self.generator)
            .field("secret", &"<redacted>")
            .field("encode_precision", self.encoder.precision())
            .finish()
    }
}
