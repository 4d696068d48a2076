//! Error kinds for the mode-of-operation API.

use thiserror::Error;

/// Errors returned by ECB/CBC encryption and decryption.
///
/// All of them are caller contract violations and are deterministic for a
/// given input. When one is returned, the output buffer contents are
/// unspecified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Key was not 16, 24 or 32 bytes.
    #[error(transparent)]
    InvalidKeyLength(#[from] aes_core::InvalidKeyLength),

    /// Input or output buffer length is wrong for the requested mode and padding.
    #[error("invalid data size: {reason} (got {len} bytes)")]
    InvalidDataSize {
        /// Which length rule was broken.
        reason: &'static str,
        /// The offending length.
        len: usize,
    },

    /// Decrypted padding is malformed.
    #[error("invalid padding")]
    InvalidPadding,
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
