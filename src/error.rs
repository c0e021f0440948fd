//! Error taxonomy for key generation, encryption and ciphertext algebra.

use thiserror::Error;

/// Errors raised by the cipher.  None of them are transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CipherError {
    /// Key-generation configuration or explicit key material is malformed.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Two ciphertexts (or a ciphertext and a literal) cannot be combined.
    #[error("incompatible operands: {0}")]
    IncompatibleOperands(String),

    /// The operand kind is not accepted by this operation.
    #[error("unsupported operand type: {0}")]
    UnsupportedOperandType(&'static str),

    /// The ciphertext was not produced under this key.
    #[error("ciphertext final modulus does not match the key's last round modulus")]
    ModulusMismatch,

    /// NaN or infinite values have no fixed-point representation.
    #[error("non-finite value {0} cannot be encoded")]
    NonFiniteValue(f64),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CipherError>;
