//! RIAC ― Randomized Iterative Affine Cipher
//!
//! Secret-key, additively homomorphic encryption over big integers: an
//! ElGamal-style blinding layer followed by a ladder of affine rounds
//! `c ↦ a·c mod n` with growing moduli.  Ciphertexts can be added, negated
//! and multiplied by integer or real scalars without the key.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, missing_docs)]

pub mod arith;
pub mod encoder;
pub mod config;
pub mod error;
pub mod cipher;
pub mod algebra;
pub mod scheme;
pub mod keygen;

pub use cipher::{default_scale_multiplier, Ciphertext, Operand};
pub use config::KeyConfig;
pub use encoder::FixedPointEncoder;
pub use error::{CipherError, Result};
pub use keygen::{generate_keypair, generate_keypair_with};
pub use scheme::CipherKey;
