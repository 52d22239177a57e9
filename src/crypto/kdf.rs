//! PBKDF2-HMAC-SHA256 key derivation
//!
//! Stretches a password and a per-envelope salt into an AES-256 key. The
//! 256-bit PBKDF2 output is used as the key directly.

use crate::crypto::{KEY_SIZE, SALT_SIZE};
use crate::error::{Error, Result};
use ring::pbkdf2::{self, PBKDF2_HMAC_SHA256};
use std::num::NonZeroU32;
use zeroize::Zeroizing;

/// Key derived from a password, wiped from memory on drop
pub struct DerivedKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl DerivedKey {
    /// Get the raw key bytes
    pub fn key(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive an AES-256 key from a password
///
/// # Arguments
/// * `password` - Password bytes, used as-is (no trimming or normalization)
/// * `salt` - Exactly [`SALT_SIZE`] bytes
/// * `iterations` - PBKDF2 iteration count, must be non-zero
///
/// # Returns
/// The derived key, or `InvalidParameter` for a bad salt length or zero iterations
pub fn derive_key(password: &[u8], salt: &[u8], iterations: u32) -> Result<DerivedKey> {
    if salt.len() != SALT_SIZE {
        return Err(Error::InvalidParameter(format!(
            "Invalid salt length: expected {}, got {}",
            SALT_SIZE,
            salt.len()
        )));
    }

    let iterations = NonZeroU32::new(iterations).ok_or_else(|| {
        Error::InvalidParameter("PBKDF2 iteration count must be greater than 0".to_string())
    })?;

    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    pbkdf2_hmac_sha256(password, salt, iterations, &mut key[..]);

    Ok(DerivedKey { key })
}

fn pbkdf2_hmac_sha256(password: &[u8], salt: &[u8], iterations: NonZeroU32, out: &mut [u8]) {
    pbkdf2::derive(PBKDF2_HMAC_SHA256, iterations, salt, password, out);
}
