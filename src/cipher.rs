//! Ciphertext container.

use num_bigint::BigInt;
use num_traits::One;

/// Default fixed-point multiplier for real scalar multiplication (2^23).
pub fn default_scale_multiplier() -> BigInt {
    BigInt::one() << 23u32
}

/// (c₁, c₂, n_final, multiplier, exponent)
///
/// `cipher1` is the blinding commitment `y·g`, `cipher2` the masked payload
/// after every affine round.  The decoded value is implicitly divided by
/// `scale_multiplier ^ scale_exponent`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    pub(crate) cipher1: BigInt,
    pub(crate) cipher2: BigInt,
    pub(crate) final_modulus: BigInt,
    pub(crate) scale_multiplier: BigInt,
    pub(crate) scale_exponent: u32,
}

impl Ciphertext {
    /// Fresh ciphertext at the default scale (2^23, exponent 0).
    pub fn new(cipher1: BigInt, cipher2: BigInt, final_modulus: BigInt) -> Self {
        Self::with_scale(cipher1, cipher2, final_modulus, default_scale_multiplier(), 0)
    }

    /// Ciphertext carrying explicit fixed-point scale metadata.
    pub fn with_scale(
        cipher1: BigInt,
        cipher2: BigInt,
        final_modulus: BigInt,
        scale_multiplier: BigInt,
        scale_exponent: u32,
    ) -> Self {
        Self {
            cipher1,
            cipher2,
            final_modulus,
            scale_multiplier,
            scale_exponent,
        }
    }

    /// Blinding commitment.
    pub fn cipher1(&self) -> &BigInt {
        &self.cipher1
    }

    /// Masked, transformed payload.
    pub fn cipher2(&self) -> &BigInt {
        &self.cipher2
    }

    /// Modulus all algebra reduces against.
    pub fn final_modulus(&self) -> &BigInt {
        &self.final_modulus
    }

    /// Base of the implicit fixed-point divisor.
    pub fn scale_multiplier(&self) -> &BigInt {
        &self.scale_multiplier
    }

    /// Number of real scalar multiplications applied so far.
    pub fn scale_exponent(&self) -> u32 {
        self.scale_exponent
    }

    /// `scale_multiplier ^ scale_exponent`
    pub fn scale_divisor(&self) -> BigInt {
        num_traits::pow(self.scale_multiplier.clone(), self.scale_exponent as usize)
    }
}

/// Right-hand side of a ciphertext operation.
///
/// Decryption and addition accept the literal zero, scalar multiplication
/// accepts integers and reals; everything else is rejected at run time.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// A ciphertext.
    Cipher(Ciphertext),
    /// An integer literal.
    Int(BigInt),
    /// A real literal.
    Real(f64),
}

impl Operand {
    /// Short name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Cipher(_) => "ciphertext",
            Operand::Int(_) => "integer",
            Operand::Real(_) => "real",
        }
    }
}

impl From<Ciphertext> for Operand {
    fn from(c: Ciphertext) -> Self {
        Operand::Cipher(c)
    }
}

impl From<&Ciphertext> for Operand {
    fn from(c: &Ciphertext) -> Self {
        Operand::Cipher(c.clone())
    }
}

impl From<BigInt> for Operand {
    fn from(v: BigInt) -> Self {
        Operand::Int(v)
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Int(v.into())
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Int(v.into())
    }
}

impl From<u64> for Operand {
    fn from(v: u64) -> Self {
        Operand::Int(v.into())
    }
}

impl From<f32> for Operand {
    fn from(v: f32) -> Self {
        Operand::Real(v.into())
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Real(v)
    }
}
