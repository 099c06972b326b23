//! Secret-key additive masking over `Z_t`.
//!
//! ```text
//! seal(v)          = (v + r·k mod t, r)       r fresh per ciphertext
//! (a, r) + (b, s)  = (a + b mod t, r + s mod t)
//! open(c, r)       = c − r·k mod t
//! ```
//!
//! The mask is linear in a single secret key `k`, so one known
//! plaintext/ciphertext pair reveals `k`. The scheme exercises the engine
//! end to end; it is not a substitute for a lattice backend.

use std::fmt;

use parking_lot::Mutex;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{SealError, SealScheme};

/// Plain modulus of the reference parameters: the 20-bit batching prime
/// for polynomial degree 8192.
pub const DEFAULT_PLAIN_MODULUS: u64 = 1_032_193;

/// Encoded value, reduced below the plain modulus.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaskPlaintext(u64);

impl MaskPlaintext {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Masked value. `modulus == 0` marks a placeholder that was never sealed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaskCiphertext {
    body: u64,
    mask: u64,
    modulus: u64,
}

/// The reference [`SealScheme`].
pub struct MaskScheme {
    modulus: u64,
    key: u64,
    rng: Mutex<ChaCha20Rng>,
}

impl fmt::Debug for MaskScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskScheme")
            .field("modulus", &self.modulus)
            .finish_non_exhaustive()
    }
}

impl MaskScheme {
    /// Generate a key from operating-system entropy.
    pub fn new(modulus: u64) -> Result<Self, SealError> {
        let rng = ChaCha20Rng::try_from_os_rng().map_err(|e| SealError::Backend(e.to_string()))?;
        Self::with_rng(modulus, rng)
    }

    /// Deterministic key and mask stream, for reproducible runs and tests.
    pub fn from_seed(modulus: u64, seed: u64) -> Result<Self, SealError> {
        Self::with_rng(modulus, ChaCha20Rng::seed_from_u64(seed))
    }

    fn with_rng(modulus: u64, mut rng: ChaCha20Rng) -> Result<Self, SealError> {
        if modulus < 2 {
            return Err(SealError::InvalidParameters(format!(
                "plain modulus must be at least 2, got {modulus}"
            )));
        }
        // k = 0 would leave the value in the clear.
        let key = 1 + sample_below(&mut rng, modulus - 1);
        tracing::debug!(modulus, "generated masking key");
        Ok(MaskScheme {
            modulus,
            key,
            rng: Mutex::new(rng),
        })
    }

    fn check(&self, sealed: &MaskCiphertext) -> Result<(), SealError> {
        if sealed.modulus == self.modulus {
            Ok(())
        } else {
            Err(SealError::ParameterMismatch)
        }
    }

    fn mul(&self, a: u64, b: u64) -> u64 {
        reduce(u128::from(a) * u128::from(b), self.modulus)
    }

    fn plus(&self, a: u64, b: u64) -> u64 {
        reduce(u128::from(a) + u128::from(b), self.modulus)
    }

    fn minus(&self, a: u64, b: u64) -> u64 {
        reduce(
            u128::from(a) + u128::from(self.modulus) - u128::from(b),
            self.modulus,
        )
    }
}

impl SealScheme for MaskScheme {
    type Plaintext = MaskPlaintext;
    type Ciphertext = MaskCiphertext;

    fn plain_modulus(&self) -> u64 {
        self.modulus
    }

    fn encode(&self, value: u64) -> Result<MaskPlaintext, SealError> {
        if value >= self.modulus {
            return Err(SealError::ValueOutOfRange {
                value,
                modulus: self.modulus,
            });
        }
        Ok(MaskPlaintext(value))
    }

    fn decode(&self, plain: &MaskPlaintext) -> Result<u64, SealError> {
        if plain.0 >= self.modulus {
            return Err(SealError::ValueOutOfRange {
                value: plain.0,
                modulus: self.modulus,
            });
        }
        Ok(plain.0)
    }

    fn encrypt(&self, plain: &MaskPlaintext) -> Result<MaskCiphertext, SealError> {
        let value = self.decode(plain)?;
        let mask = sample_below(&mut *self.rng.lock(), self.modulus);
        Ok(MaskCiphertext {
            body: self.plus(value, self.mul(mask, self.key)),
            mask,
            modulus: self.modulus,
        })
    }

    fn decrypt(&self, sealed: &MaskCiphertext) -> Result<MaskPlaintext, SealError> {
        self.check(sealed)?;
        Ok(MaskPlaintext(
            self.minus(sealed.body, self.mul(sealed.mask, self.key)),
        ))
    }

    fn add(&self, a: &MaskCiphertext, b: &MaskCiphertext) -> Result<MaskCiphertext, SealError> {
        self.check(a)?;
        self.check(b)?;
        Ok(MaskCiphertext {
            body: self.plus(a.body, b.body),
            mask: self.plus(a.mask, b.mask),
            modulus: self.modulus,
        })
    }

    fn sub(&self, a: &MaskCiphertext, b: &MaskCiphertext) -> Result<MaskCiphertext, SealError> {
        self.check(a)?;
        self.check(b)?;
        Ok(MaskCiphertext {
            body: self.minus(a.body, b.body),
            mask: self.minus(a.mask, b.mask),
            modulus: self.modulus,
        })
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the remainder is below a u64 modulus"
)]
#[inline]
fn reduce(value: u128, modulus: u64) -> u64 {
    (value % u128::from(modulus)) as u64
}

/// Uniform sample from `0..bound` by rejection. `bound` must be non-zero.
fn sample_below(rng: &mut ChaCha20Rng, bound: u64) -> u64 {
    let zone = (u64::MAX / bound) * bound;
    loop {
        let candidate = rng.next_u64();
        if candidate < zone {
            return candidate % bound;
        }
    }
}
