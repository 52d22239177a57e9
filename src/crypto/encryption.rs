//! AES-256-GCM Encryption Implementation
//!
//! Sealing produces ciphertext with the 16-byte authentication tag appended,
//! exactly as `ring` emits it. No additional authenticated data is bound, so
//! an envelope is not tied to the context it was created for.

use crate::crypto::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::error::{Error, Result};
use ring::aead::{Aad, LessSafeKey, Nonce, UnboundKey, AES_256_GCM};

fn aead_key(key: &[u8; KEY_SIZE]) -> Option<LessSafeKey> {
    UnboundKey::new(&AES_256_GCM, key).ok().map(LessSafeKey::new)
}

/// Encrypt data using AES-256-GCM
///
/// # Arguments
/// * `key` - 256-bit encryption key
/// * `nonce` - 96-bit nonce, must never repeat for the same key
/// * `plaintext` - Data to encrypt
///
/// # Returns
/// Ciphertext with the authentication tag appended
pub fn seal(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], plaintext: &[u8]) -> Result<Vec<u8>> {
    let sealing_key = aead_key(key)
        .ok_or_else(|| Error::Encryption("Failed to create encryption key".to_string()))?;
    let nonce = Nonce::assume_unique_for_key(*nonce);

    // Prepare buffer: plaintext + space for tag
    let mut in_out = Vec::with_capacity(plaintext.len() + TAG_SIZE);
    in_out.extend_from_slice(plaintext);

    sealing_key
        .seal_in_place_append_tag(nonce, Aad::empty(), &mut in_out)
        .map_err(|_| Error::Encryption("Encryption failed".to_string()))?;

    Ok(in_out)
}

/// Decrypt data using AES-256-GCM
///
/// # Arguments
/// * `key` - 256-bit encryption key
/// * `nonce` - Nonce used when sealing
/// * `ciphertext` - Ciphertext with appended authentication tag
///
/// # Returns
/// Decrypted plaintext. Every failure, including input shorter than a tag,
/// is reported as `AuthenticationFailure`.
pub fn open(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() < TAG_SIZE {
        return Err(Error::AuthenticationFailure);
    }

    let opening_key = aead_key(key).ok_or(Error::AuthenticationFailure)?;
    let nonce = Nonce::assume_unique_for_key(*nonce);

    // Decrypt in place
    let mut in_out = ciphertext.to_vec();
    let plaintext_len = opening_key
        .open_in_place(nonce, Aad::empty(), &mut in_out)
        .map_err(|_| Error::AuthenticationFailure)?
        .len();

    in_out.truncate(plaintext_len);
    Ok(in_out)
}
