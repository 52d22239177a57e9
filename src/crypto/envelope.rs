//! Envelope wire format
//!
//! An envelope is `salt || nonce || ciphertext+tag` rendered as text: every
//! byte as its decimal value, separated by single spaces. This is the format
//! existing stored envelopes use, so it must stay byte-for-byte stable.
//!
//! ```text
//! <salt: 16 bytes> <nonce: 12 bytes> <AEAD ciphertext+tag: N bytes>
//! ```
//!
//! The format carries no version marker and no iteration count.

use crate::crypto::{ENVELOPE_HEADER_SIZE, NONCE_SIZE, SALT_SIZE};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

const SEPARATOR: char = ' ';

/// Parsed envelope: salt, nonce and AEAD output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// PBKDF2 salt
    pub salt: [u8; SALT_SIZE],
    /// AES-GCM nonce
    pub nonce: [u8; NONCE_SIZE],
    /// Ciphertext with appended authentication tag
    pub body: Vec<u8>,
}

impl Envelope {
    pub fn new(salt: [u8; SALT_SIZE], nonce: [u8; NONCE_SIZE], body: Vec<u8>) -> Self {
        Envelope { salt, nonce, body }
    }

    /// Get the total size of the envelope in bytes
    pub fn size(&self) -> usize {
        ENVELOPE_HEADER_SIZE + self.body.len()
    }

    /// Flatten to `salt || nonce || body`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size());
        bytes.extend_from_slice(&self.salt);
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.body);
        bytes
    }

    /// Split a flat byte sequence at the fixed salt and nonce offsets
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < ENVELOPE_HEADER_SIZE {
            return Err(Error::MalformedEnvelope(format!(
                "Envelope too short: expected at least {} bytes, got {}",
                ENVELOPE_HEADER_SIZE,
                bytes.len()
            )));
        }

        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(&bytes[..SALT_SIZE]);

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&bytes[SALT_SIZE..ENVELOPE_HEADER_SIZE]);

        Ok(Envelope {
            salt,
            nonce,
            body: bytes[ENVELOPE_HEADER_SIZE..].to_vec(),
        })
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(&self.salt, &self.nonce, &self.body))
    }
}

impl FromStr for Envelope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

/// Render salt, nonce and body as an envelope string
pub fn encode(salt: &[u8; SALT_SIZE], nonce: &[u8; NONCE_SIZE], body: &[u8]) -> String {
    // Up to three digits plus a separator per byte
    let mut out = String::with_capacity((ENVELOPE_HEADER_SIZE + body.len()) * 4);

    for (i, byte) in salt.iter().chain(nonce.iter()).chain(body.iter()).enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(&byte.to_string());
    }

    out
}

/// Parse an envelope string back into its parts
///
/// Fails with `MalformedEnvelope` if a token is not a decimal byte value or
/// if the envelope holds fewer than salt + nonce bytes.
pub fn decode(envelope: &str) -> Result<Envelope> {
    let bytes = envelope
        .split(SEPARATOR)
        .enumerate()
        .map(|(position, token)| {
            parse_byte(token).ok_or_else(|| {
                Error::MalformedEnvelope(format!("Invalid byte value at position {}", position))
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    Envelope::from_bytes(&bytes)
}

/// Strict decimal byte: 1-3 ASCII digits, value 0-255
fn parse_byte(token: &str) -> Option<u8> {
    if token.is_empty() || token.len() > 3 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
