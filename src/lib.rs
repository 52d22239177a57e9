//! passcrypt - Password-based encryption
//!
//! This library encrypts text with AES-256-GCM under a key derived from a
//! password with PBKDF2-HMAC-SHA256, producing a self-contained text envelope
//! that decrypts with the same password and iteration count.
//!
//! ```no_run
//! let envelope = passcrypt::encrypt("hello world", "correct-horse-battery-staple", None)?;
//! let plaintext = passcrypt::decrypt(&envelope, "correct-horse-battery-staple", None)?;
//! assert_eq!(plaintext, "hello world");
//! # Ok::<(), passcrypt::Error>(())
//! ```

pub mod cipher;
pub mod config;
pub mod crypto;
pub mod error;

pub use cipher::{
    decrypt, decrypt_async, decrypt_with_config, encrypt, encrypt_async, encrypt_with_config,
};
pub use config::{CipherConfig, DEFAULT_PBKDF2_ITERATIONS};
pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::CipherConfig;
    pub use crate::crypto::Envelope;
    pub use crate::error::{Error, Result};
}
