//! Password-based encrypt/decrypt
//!
//! Every call derives a fresh key from the password and a fresh random salt,
//! seals with AES-256-GCM under a fresh random nonce, and packs the result
//! into an [`Envelope`](crate::crypto::Envelope) string. No state is kept
//! between calls, so all functions here are safe to use from many threads.
//!
//! PBKDF2 dominates the cost. Async callers should use [`encrypt_async`] and
//! [`decrypt_async`], which move the work onto tokio's blocking pool.

use crate::config::CipherConfig;
use crate::crypto::{self, NONCE_SIZE, SALT_SIZE};
use crate::error::{Error, Result};
use rand::RngCore;
use tracing::debug;

/// Encrypt `data` with a key derived from `password`
///
/// `iterations` defaults to [`DEFAULT_PBKDF2_ITERATIONS`](crate::config::DEFAULT_PBKDF2_ITERATIONS).
/// The same count must be passed to [`decrypt`]; it is not stored in the envelope.
pub fn encrypt(data: &str, password: &str, iterations: Option<u32>) -> Result<String> {
    encrypt_with_config(data, password, &CipherConfig::from_iterations(iterations))
}

/// Decrypt an envelope produced by [`encrypt`]
///
/// Fails with `MalformedEnvelope` if the envelope cannot be parsed,
/// `AuthenticationFailure` if the password or iteration count is wrong or
/// the envelope was modified, and `InvalidEncoding` if the plaintext is not UTF-8.
pub fn decrypt(envelope: &str, password: &str, iterations: Option<u32>) -> Result<String> {
    decrypt_with_config(envelope, password, &CipherConfig::from_iterations(iterations))
}

/// [`encrypt`] with an explicit configuration
pub fn encrypt_with_config(data: &str, password: &str, config: &CipherConfig) -> Result<String> {
    let iterations = checked_iterations(config)?;

    let mut rng = rand::thread_rng();
    let mut salt = [0u8; SALT_SIZE];
    rng.fill_bytes(&mut salt);
    let mut nonce = [0u8; NONCE_SIZE];
    rng.fill_bytes(&mut nonce);

    let key = crypto::derive_key(password.as_bytes(), &salt, iterations)?;
    let body = crypto::seal(key.key(), &nonce, data.as_bytes())?;
    drop(key);

    debug!(
        plaintext_len = data.len(),
        body_len = body.len(),
        iterations,
        "Encrypted data"
    );

    Ok(crypto::encode(&salt, &nonce, &body))
}

/// [`decrypt`] with an explicit configuration
pub fn decrypt_with_config(envelope: &str, password: &str, config: &CipherConfig) -> Result<String> {
    let iterations = checked_iterations(config)?;

    let envelope = crypto::decode(envelope)?;
    let key = crypto::derive_key(password.as_bytes(), &envelope.salt, iterations)?;

    let plaintext = crypto::open(key.key(), &envelope.nonce, &envelope.body).map_err(|e| {
        debug!(body_len = envelope.body.len(), iterations, "Envelope failed authentication");
        e
    })?;
    drop(key);

    debug!(plaintext_len = plaintext.len(), iterations, "Decrypted data");

    Ok(String::from_utf8(plaintext)?)
}

/// [`encrypt`] on the tokio blocking pool
///
/// Must be awaited inside a tokio runtime. Dropping the future discards the
/// result; the derived key never leaves the blocking task.
pub async fn encrypt_async(data: String, password: String, iterations: Option<u32>) -> Result<String> {
    tokio::task::spawn_blocking(move || encrypt(&data, &password, iterations)).await?
}

/// [`decrypt`] on the tokio blocking pool
pub async fn decrypt_async(
    envelope: String,
    password: String,
    iterations: Option<u32>,
) -> Result<String> {
    tokio::task::spawn_blocking(move || decrypt(&envelope, &password, iterations)).await?
}

fn checked_iterations(config: &CipherConfig) -> Result<u32> {
    config.validate().map_err(|e| match e {
        Error::InvalidConfig(msg) => Error::InvalidParameter(msg),
        other => other,
    })?;
    Ok(config.pbkdf2_iterations)
}
