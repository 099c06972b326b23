//! Sealing capability for comv.
//!
//! The engine never looks inside a sealed value. It threads opaque
//! [`SealScheme::Ciphertext`] handles from the classifier to the evaluator
//! and asks the scheme to combine them. Opening happens only at the process
//! boundary, on final aggregates.
//!
//! ```text
//! u64 ──encode──► Plaintext ──encrypt──► Ciphertext ──add/sub──► Ciphertext
//!  ▲                                                                 │
//!  └──────decode──── Plaintext ◄──────────decrypt────────────────────┘
//! ```
//!
//! Values live in `Z_t` where `t` is [`SealScheme::plain_modulus`]; sums
//! wrap modulo `t`.
//!
//! [`MaskScheme`] is the scheme shipped with the workspace. Any other
//! additive-homomorphic backend plugs in by implementing [`SealScheme`].

mod mask;

pub use mask::{MaskCiphertext, MaskPlaintext, MaskScheme, DEFAULT_PLAIN_MODULUS};

use std::fmt;

/// Failure reported by a sealing backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SealError {
    /// The value is not reduced modulo the plain modulus.
    #[error("value {value} is not below the plain modulus {modulus}")]
    ValueOutOfRange { value: u64, modulus: u64 },
    /// Scheme parameters are unusable.
    #[error("invalid scheme parameters: {0}")]
    InvalidParameters(String),
    /// Two ciphertexts from incompatible contexts were combined.
    #[error("ciphertexts were sealed under different parameters")]
    ParameterMismatch,
    /// Backend-specific failure.
    #[error("sealing backend failed: {0}")]
    Backend(String),
}

/// Additive-homomorphic encryption capability.
///
/// Implementations must be usable from several threads at once when the
/// classifier runs in parallel, hence the `Sync` bound.
pub trait SealScheme: Sync {
    /// Encoded, unsealed value.
    type Plaintext: Clone + fmt::Debug + Send + Sync;
    /// Sealed value. `Default` is only a placeholder for table growth; the
    /// engine never combines a default ciphertext.
    type Ciphertext: Clone + Default + fmt::Debug + Send + Sync;

    /// Modulus `t` of the plaintext domain.
    fn plain_modulus(&self) -> u64;

    fn encode(&self, value: u64) -> Result<Self::Plaintext, SealError>;

    fn decode(&self, plain: &Self::Plaintext) -> Result<u64, SealError>;

    fn encrypt(&self, plain: &Self::Plaintext) -> Result<Self::Ciphertext, SealError>;

    fn decrypt(&self, sealed: &Self::Ciphertext) -> Result<Self::Plaintext, SealError>;

    /// Homomorphic `a + b`.
    fn add(
        &self,
        a: &Self::Ciphertext,
        b: &Self::Ciphertext,
    ) -> Result<Self::Ciphertext, SealError>;

    /// Homomorphic `a - b`.
    fn sub(
        &self,
        a: &Self::Ciphertext,
        b: &Self::Ciphertext,
    ) -> Result<Self::Ciphertext, SealError>;

    /// `encrypt(encode(value))`.
    fn seal(&self, value: u64) -> Result<Self::Ciphertext, SealError> {
        self.encrypt(&self.encode(value)?)
    }

    /// `decode(decrypt(sealed))`.
    fn open(&self, sealed: &Self::Ciphertext) -> Result<u64, SealError> {
        self.decode(&self.decrypt(sealed)?)
    }
}
