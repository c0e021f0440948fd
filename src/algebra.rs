//! Homomorphic add / negate / scalar mult.  No key material is needed.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::{
    arith::{reduce, round_scaled},
    cipher::{Ciphertext, Operand},
    error::{CipherError, Result},
};

impl Ciphertext {
    /// Componentwise sum modulo the final modulus.
    ///
    /// Adding the integer literal `0` is the identity.  Operands at different
    /// scale exponents are brought to the larger one first.
    pub fn add(&self, other: impl Into<Operand>) -> Result<Ciphertext> {
        match other.into() {
            Operand::Cipher(other) => self.add_cipher(&other),
            Operand::Int(v) if v.is_zero() => Ok(self.clone()),
            other => Err(CipherError::IncompatibleOperands(format!(
                "cannot add {} {:?}: only ciphertexts and the literal zero",
                other.kind(),
                other
            ))),
        }
    }

    /// `self + (-other)`
    pub fn subtract(&self, other: impl Into<Operand>) -> Result<Ciphertext> {
        match other.into() {
            Operand::Cipher(other) => self.add_cipher(&other.negate()),
            Operand::Int(v) if v.is_zero() => Ok(self.clone()),
            other => Err(CipherError::IncompatibleOperands(format!(
                "cannot subtract {} {:?}: only ciphertexts and the literal zero",
                other.kind(),
                other
            ))),
        }
    }

    /// Multiplication by the integer `-1`.
    pub fn negate(&self) -> Ciphertext {
        self.mul_int(&BigInt::from(-1))
    }

    /// Integers multiply exactly.  Reals are quantized to
    /// `round(k * scale_multiplier)` and bump the scale exponent, so the
    /// division happens at decryption time.
    pub fn scalar_multiply(&self, k: impl Into<Operand>) -> Result<Ciphertext> {
        match k.into() {
            Operand::Int(k) => Ok(self.mul_int(&k)),
            Operand::Real(k) => {
                let quantized = round_scaled(k, &self.scale_multiplier)?;
                let mut out = self.mul_int(&quantized);
                out.scale_exponent += 1;
                Ok(out)
            }
            Operand::Cipher(_) => Err(CipherError::UnsupportedOperandType(
                "scalar multiplication takes an integer or a real, not a ciphertext",
            )),
        }
    }

    /// Sums ciphertexts starting from the literal zero.  `None` when empty.
    pub fn sum<'a, I>(ciphertexts: I) -> Result<Option<Ciphertext>>
    where
        I: IntoIterator<Item = &'a Ciphertext>,
    {
        ciphertexts.into_iter().try_fold(None::<Ciphertext>, |acc, c| match acc {
            None => c.add(0).map(Some),
            Some(acc) => acc.add_cipher(c).map(Some),
        })
    }

    fn add_cipher(&self, other: &Ciphertext) -> Result<Ciphertext> {
        if self.final_modulus != other.final_modulus {
            return Err(CipherError::IncompatibleOperands(
                "addends have different final moduli".into(),
            ));
        }
        if self.scale_multiplier != other.scale_multiplier {
            return Err(CipherError::IncompatibleOperands(
                "addends have different scale multipliers".into(),
            ));
        }

        let (high, low) = if self.scale_exponent >= other.scale_exponent {
            (self, other)
        } else {
            (other, self)
        };
        let diff = high.scale_exponent - low.scale_exponent;
        let factor = num_traits::pow(low.scale_multiplier.clone(), diff as usize);
        let n = &self.final_modulus;

        Ok(Ciphertext {
            cipher1: reduce(&(&high.cipher1 + &low.cipher1 * &factor), n),
            cipher2: reduce(&(&high.cipher2 + &low.cipher2 * &factor), n),
            final_modulus: n.clone(),
            scale_multiplier: high.scale_multiplier.clone(),
            scale_exponent: high.scale_exponent,
        })
    }

    fn mul_int(&self, k: &BigInt) -> Ciphertext {
        let n = &self.final_modulus;
        Ciphertext {
            cipher1: reduce(&(&self.cipher1 * k), n),
            cipher2: reduce(&(&self.cipher2 * k), n),
            final_modulus: n.clone(),
            scale_multiplier: self.scale_multiplier.clone(),
            scale_exponent: self.scale_exponent,
        }
    }
}
