//! Electronic Codebook mode.
//!
//! Every block is transformed independently with the same round keys, so a
//! block-aligned buffer may be split and processed in any order.

use aes_core::{decrypt_block, encrypt_block, RoundKeys, BLOCK_SIZE};
use tracing::debug;

use crate::buffer::{check_decrypt_sizes, encrypt_output_len, load_block, split_tail};
use crate::error::Result;
use crate::padding::{pad_block, unpad_len, Padding};

/// Encrypts `input` into `output` and returns the number of bytes written.
///
/// With [`Padding::Pkcs7`] the output is always one pad block longer than the
/// whole blocks of input; without padding `input` must be block aligned.
pub fn encrypt(
    round_keys: &RoundKeys,
    input: &[u8],
    output: &mut [u8],
    padding: Padding,
) -> Result<usize> {
    let written = encrypt_output_len(input.len(), output.len(), padding)?;
    debug!(mode = "ecb", len = input.len(), ?padding, "encrypt");

    let (blocks, tail) = split_tail(input);
    for (src, dst) in blocks
        .chunks_exact(BLOCK_SIZE)
        .zip(output.chunks_exact_mut(BLOCK_SIZE))
    {
        dst.copy_from_slice(&encrypt_block(&load_block(src), round_keys));
    }

    if padding == Padding::Pkcs7 {
        let last = encrypt_block(&pad_block(tail), round_keys);
        output[blocks.len()..written].copy_from_slice(&last);
    }
    Ok(written)
}

/// Decrypts `input` into `output`.
///
/// Returns the plaintext length: `input.len()` without padding, or the
/// length with the PKCS#7 pad stripped.
pub fn decrypt(
    round_keys: &RoundKeys,
    input: &[u8],
    output: &mut [u8],
    padding: Padding,
) -> Result<usize> {
    check_decrypt_sizes(input.len(), output.len(), padding)?;
    debug!(mode = "ecb", len = input.len(), ?padding, "decrypt");

    for (src, dst) in input
        .chunks_exact(BLOCK_SIZE)
        .zip(output.chunks_exact_mut(BLOCK_SIZE))
    {
        dst.copy_from_slice(&decrypt_block(&load_block(src), round_keys));
    }

    strip_padding(&output[..input.len()], padding)
}

/// Returns the unpadded length of a fully decrypted buffer.
pub(crate) fn strip_padding(plaintext: &[u8], padding: Padding) -> Result<usize> {
    match padding {
        Padding::None => Ok(plaintext.len()),
        Padding::Pkcs7 => {
            let last = load_block(&plaintext[plaintext.len() - BLOCK_SIZE..]);
            let pad = unpad_len(&last).map_err(|err| {
                debug!("rejected ciphertext padding");
                err
            })?;
            Ok(plaintext.len() - pad)
        }
    }
}
