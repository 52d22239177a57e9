//! Configuration for passcrypt
//!
//! The library reads no files or environment variables. [`CipherConfig`] is a
//! plain serde value so applications can embed it in their own config.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default PBKDF2 iteration count.
///
/// This is the floor, not a recommendation: callers should pick the highest
/// count their latency budget tolerates. Envelopes do not record the count,
/// so changing it breaks decryption of envelopes made with the old value.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 10_000;

/// Encryption configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CipherConfig {
    /// PBKDF2-HMAC-SHA256 iteration count, must match between encrypt and decrypt
    #[serde(default = "default_pbkdf2_iterations")]
    pub pbkdf2_iterations: u32,
}

fn default_pbkdf2_iterations() -> u32 {
    DEFAULT_PBKDF2_ITERATIONS
}

impl CipherConfig {
    /// Config with an explicit iteration count
    pub fn with_iterations(pbkdf2_iterations: u32) -> Self {
        CipherConfig { pbkdf2_iterations }
    }

    /// Resolve an optional caller-supplied count against the default
    pub fn from_iterations(iterations: Option<u32>) -> Self {
        iterations.map(Self::with_iterations).unwrap_or_default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.pbkdf2_iterations == 0 {
            return Err(Error::InvalidConfig(
                "PBKDF2 iteration count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CipherConfig {
    fn default() -> Self {
        CipherConfig {
            pbkdf2_iterations: DEFAULT_PBKDF2_ITERATIONS,
        }
    }
}
