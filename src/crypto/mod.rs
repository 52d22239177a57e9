//! Cryptography module for passcrypt
//!
//! Provides AES-256-GCM encryption with PBKDF2-HMAC-SHA256 key derivation,
//! and the text envelope that carries salt, nonce and ciphertext together.
//! Primitives come from `ring`; nothing here reimplements them.

mod encryption;
mod envelope;
mod kdf;

pub use encryption::{open, seal};
pub use envelope::{decode, encode, Envelope};
pub use kdf::{derive_key, DerivedKey};

/// Size of AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// Size of GCM nonce in bytes
pub const NONCE_SIZE: usize = 12;

/// Size of GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// Size of salt for key derivation
pub const SALT_SIZE: usize = 16;

/// Salt plus nonce: the shortest byte sequence an envelope can decode to
pub const ENVELOPE_HEADER_SIZE: usize = SALT_SIZE + NONCE_SIZE;
