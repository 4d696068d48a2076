//! PKCS#7 block padding.

use aes_core::{Block, BLOCK_SIZE};
use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

use crate::error::{Error, Result};

/// Padding policy for a mode call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Padding {
    /// No padding; buffers must already be block aligned.
    None,
    /// PKCS#7: append `k` bytes of value `k`, `1 <= k <= 16`.
    Pkcs7,
}

impl From<bool> for Padding {
    fn from(use_padding: bool) -> Self {
        if use_padding {
            Self::Pkcs7
        } else {
            Self::None
        }
    }
}

/// Length of `len` bytes after PKCS#7 padding. Always adds at least one byte,
/// so aligned input grows by a whole block.
#[inline]
pub fn padded_len(len: usize) -> usize {
    (len / BLOCK_SIZE + 1) * BLOCK_SIZE
}

/// Output size that encrypting `len` bytes with `padding` produces.
#[inline]
pub fn encrypted_len(len: usize, padding: Padding) -> usize {
    match padding {
        Padding::None => len,
        Padding::Pkcs7 => padded_len(len),
    }
}

/// Builds the final padded block from the trailing `len % 16` input bytes.
pub fn pad_block(tail: &[u8]) -> Block {
    debug_assert!(tail.len() < BLOCK_SIZE);
    let pad = (BLOCK_SIZE - tail.len()) as u8;
    let mut block = [pad; BLOCK_SIZE];
    block[..tail.len()].copy_from_slice(tail);
    block
}

/// Validates the padding of the last decrypted block and returns the pad
/// length.
///
/// Every byte of the block is examined regardless of where the first bad
/// byte sits, and all failures map to the same [`Error::InvalidPadding`].
pub fn unpad_len(last_block: &Block) -> Result<usize> {
    let pad = last_block[BLOCK_SIZE - 1];
    let mut valid: Choice = !pad.ct_eq(&0) & !pad.ct_gt(&(BLOCK_SIZE as u8));
    for (offset, byte) in last_block.iter().rev().enumerate() {
        let in_pad = (offset as u8).ct_lt(&pad);
        valid &= !in_pad | byte.ct_eq(&pad);
    }

    if bool::from(valid) {
        Ok(usize::from(pad))
    } else {
        Err(Error::InvalidPadding)
    }
}
