//! Key generation: the modulus/multiplier ladder and the blinding pair.

use log::debug;
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::One;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

use crate::{
    arith::is_coprime,
    config::KeyConfig,
    error::Result,
    scheme::{CipherKey, BLINDING_BITS},
};

/// Generate a key with the OS random source.
pub fn generate_keypair(config: &KeyConfig) -> Result<CipherKey> {
    generate_keypair_with(config, &mut OsRng)
}

/// Generate a key drawing all randomness from `rng`.
pub fn generate_keypair_with<R: RngCore + CryptoRng>(
    config: &KeyConfig,
    rng: &mut R,
) -> Result<CipherKey> {
    config.validate()?;

    let mut moduli = Vec::with_capacity(config.round_count);
    let mut multipliers = Vec::with_capacity(config.round_count);
    for (round, bits) in config.ladder_bits().into_iter().enumerate() {
        let n = random_modulus(bits, rng);
        let a = random_multiplier(&n, bits, rng);
        debug!(
            "round {}: modulus {} bits, multiplier {} bits",
            round,
            n.bits(),
            a.bits()
        );
        moduli.push(n);
        multipliers.push(a);
    }

    let generator = BigInt::from(rng.gen_biguint_range(&BigUint::one(), moduli[0].magnitude()));
    let secret = BigInt::from(rng.gen_biguint(BLINDING_BITS));

    CipherKey::from_parts(
        multipliers,
        moduli,
        generator,
        secret,
        &config.encode_precision,
    )
}

/// Odd, exactly `bits` long.
fn random_modulus<R: RngCore + CryptoRng>(bits: u64, rng: &mut R) -> BigInt {
    let mut n = rng.gen_biguint(bits);
    n |= BigUint::one() << (bits - 1);
    n |= BigUint::one();
    BigInt::from(n)
}

/// Coprime with `n`, `floor(bits * ratio)` bits for a random ratio in (0, 1).
fn random_multiplier<R: RngCore + CryptoRng>(n: &BigInt, bits: u64, rng: &mut R) -> BigInt {
    let multiplier_bits = loop {
        let ratio: f64 = rng.gen();
        let size = (bits as f64 * ratio).floor() as u64;
        if size > 0 {
            break size;
        }
    };
    loop {
        let a = BigInt::from(rng.gen_biguint(multiplier_bits));
        if is_coprime(&a, n) {
            return a;
        }
    }
}
