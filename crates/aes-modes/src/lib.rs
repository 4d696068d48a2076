//! AES in ECB and CBC modes with optional PKCS#7 padding.
//!
//! The top-level functions take a raw key and expand it on every call. To
//! reuse one key schedule across calls, expand it once with [`expand_key`]
//! and call [`ecb`] / [`cbc`] directly.
//!
//! ```
//! use aes_modes::{decrypt_cbc, encrypt_cbc, encrypted_len, key_from_string, Padding};
//!
//! let key = key_from_string("1234567890123456");
//! let msg = b"attack at dawn";
//! let mut ct = vec![0u8; encrypted_len(msg.len(), Padding::Pkcs7)];
//! encrypt_cbc(msg, &key, None, &mut ct, Padding::Pkcs7).unwrap();
//!
//! let mut pt = vec![0u8; ct.len()];
//! let n = decrypt_cbc(&ct, &key, None, &mut pt, Padding::Pkcs7).unwrap();
//! assert_eq!(&pt[..n], msg);
//! ```
//!
//! Ciphertext is bit-compatible with any standard AES-ECB/AES-CBC
//! implementation using the same key, IV and PKCS#7 convention.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod buffer;
pub mod cbc;
pub mod ecb;
mod error;
mod padding;

pub use aes_core::{
    decrypt_block, encrypt_block, expand_key, xor_in_place, Block, InvalidKeyLength, KeySize,
    RoundKeys, BLOCK_SIZE,
};

pub use crate::cbc::ZERO_IV;
pub use crate::error::{Error, Result};
pub use crate::padding::{encrypted_len, pad_block, padded_len, unpad_len, Padding};

/// Fixed build identifier; changes only when output behaviour changes.
pub const VERSION: u32 = 0x0000_0100;

/// Returns [`VERSION`].
pub fn version() -> u32 {
    VERSION
}

/// Copies the UTF-8 bytes of `text` into a key buffer.
///
/// The caller picks a string of 16, 24 or 32 bytes; nothing is checked here.
pub fn key_from_string(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Encrypts `input` with AES-ECB into `output`.
///
/// `output` must hold at least [`encrypted_len`] bytes.
pub fn encrypt_ecb(input: &[u8], key: &[u8], output: &mut [u8], padding: Padding) -> Result<()> {
    let round_keys = expand_key(key)?;
    ecb::encrypt(&round_keys, input, output, padding)?;
    Ok(())
}

/// Decrypts AES-ECB `input` into `output` and returns the plaintext length.
pub fn decrypt_ecb(input: &[u8], key: &[u8], output: &mut [u8], padding: Padding) -> Result<usize> {
    let round_keys = expand_key(key)?;
    ecb::decrypt(&round_keys, input, output, padding)
}

/// Encrypts `input` with AES-CBC into `output`.
///
/// A missing `iv` means [`ZERO_IV`].
pub fn encrypt_cbc(
    input: &[u8],
    key: &[u8],
    iv: Option<&Block>,
    output: &mut [u8],
    padding: Padding,
) -> Result<()> {
    let round_keys = expand_key(key)?;
    cbc::encrypt(&round_keys, input, iv, output, padding)?;
    Ok(())
}

/// Decrypts AES-CBC `input` into `output` and returns the plaintext length.
pub fn decrypt_cbc(
    input: &[u8],
    key: &[u8],
    iv: Option<&Block>,
    output: &mut [u8],
    padding: Padding,
) -> Result<usize> {
    let round_keys = expand_key(key)?;
    cbc::decrypt(&round_keys, input, iv, output, padding)
}
