//! Buffer length checks shared by the chaining modes.

use aes_core::{Block, BLOCK_SIZE};

use crate::error::{Error, Result};
use crate::padding::{encrypted_len, Padding};

/// Validates buffers for encryption and returns the number of output bytes
/// that will be written.
pub(crate) fn encrypt_output_len(input: usize, output: usize, padding: Padding) -> Result<usize> {
    if padding == Padding::None && input % BLOCK_SIZE != 0 {
        return Err(Error::InvalidDataSize {
            reason: "input must be a multiple of 16 bytes without padding",
            len: input,
        });
    }
    let needed = encrypted_len(input, padding);
    if output < needed {
        return Err(Error::InvalidDataSize {
            reason: "output buffer is too small",
            len: output,
        });
    }
    Ok(needed)
}

/// Validates buffers for decryption.
pub(crate) fn check_decrypt_sizes(input: usize, output: usize, padding: Padding) -> Result<()> {
    if input % BLOCK_SIZE != 0 {
        return Err(Error::InvalidDataSize {
            reason: "ciphertext must be a multiple of 16 bytes",
            len: input,
        });
    }
    if padding == Padding::Pkcs7 && input == 0 {
        return Err(Error::InvalidDataSize {
            reason: "padded ciphertext must contain at least one block",
            len: input,
        });
    }
    if output < input {
        return Err(Error::InvalidDataSize {
            reason: "output buffer is too small",
            len: output,
        });
    }
    Ok(())
}

/// Splits input into its whole blocks and the trailing partial block.
#[inline]
pub(crate) fn split_tail(input: &[u8]) -> (&[u8], &[u8]) {
    input.split_at(input.len() - input.len() % BLOCK_SIZE)
}

/// Copies a 16-byte chunk into a block.
#[inline]
pub(crate) fn load_block(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(chunk);
    block
}
