//! Modular arithmetic over arbitrary-precision integers.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Float, One, Signed, ToPrimitive, Zero};

use crate::error::{CipherError, Result};

/// Residues above `9/10` of the modulus are read as negative.
///
/// This is a heuristic sign recovery, not an exact one: it assumes that
/// plaintext magnitudes (and sums of them) stay well inside a tenth of the
/// smallest modulus.  Tune it if that assumption changes.
pub const CENTERING_THRESHOLD: (u32, u32) = (9, 10);

/// Guard bits kept when converting a big ratio to `f64`.
const F64_GUARD_BITS: u64 = 66;

/// gcd(a, b) == 1
pub fn is_coprime(a: &BigInt, b: &BigInt) -> bool {
    a.gcd(b).is_one()
}

/// Multiplicative inverse of `a` modulo `m`, or `None` when gcd(a, m) != 1.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Option<BigInt> {
    if !m.is_positive() {
        return None;
    }
    let egcd = reduce(a, m).extended_gcd(m);
    if !egcd.gcd.is_one() {
        return None;
    }
    Some(reduce(&egcd.x, m))
}

/// Least non-negative residue of `a` modulo `m` (`m > 0`).
pub fn reduce(a: &BigInt, m: &BigInt) -> BigInt {
    a.mod_floor(m)
}

/// Maps a residue in `[0, m)` to its signed representative using
/// [`CENTERING_THRESHOLD`].
pub fn centered(value: BigInt, modulus: &BigInt) -> BigInt {
    let (num, den) = CENTERING_THRESHOLD;
    if &value * den > modulus * num {
        value - modulus
    } else {
        value
    }
}

/// `round(x * scale)` computed exactly, halves rounded away from zero.
pub fn round_scaled(x: f64, scale: &BigInt) -> Result<BigInt> {
    if !x.is_finite() {
        return Err(CipherError::NonFiniteValue(x));
    }
    let (mantissa, exponent, sign) = Float::integer_decode(x);
    let magnitude = BigInt::from(mantissa) * scale;
    let magnitude = if exponent >= 0 {
        magnitude << (exponent as usize)
    } else {
        let shift = exponent.unsigned_abs() as usize;
        (magnitude + (BigInt::one() << (shift - 1))) >> shift
    };
    Ok(if sign < 0 { -magnitude } else { magnitude })
}

/// `num / den` as the nearest `f64` we can get cheaply (`den != 0`).
pub fn ratio_to_f64(num: &BigInt, den: &BigInt) -> f64 {
    if num.is_zero() {
        return 0.0;
    }
    let negative = num.is_negative() != den.is_negative();
    let (num, den) = (num.magnitude(), den.magnitude());

    // widen the numerator so the integer quotient keeps full f64 precision
    let shift = (F64_GUARD_BITS + den.bits()).saturating_sub(num.bits());
    let quotient = (num << shift) / den;
    let mut value = quotient.to_f64().unwrap_or(f64::INFINITY);

    let mut remaining = shift;
    while remaining > 0 {
        let step = remaining.min(512);
        value /= 2f64.powi(step as i32);
        remaining -= step;
    }
    if negative {
        -value
    } else {
        value
    }
}
