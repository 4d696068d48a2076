//! Errors raised by the key schedule.

use thiserror::Error;

/// The key was not 16, 24 or 32 bytes long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid AES key length: {0} bytes (expected 16, 24 or 32)")]
pub struct InvalidKeyLength(pub usize);
