//! Cipher Block Chaining mode.
//!
//! Encryption is strictly sequential: each block is XORed with the previous
//! ciphertext block (or the IV) before encryption. Decryption of block `i`
//! only needs ciphertext blocks `i` and `i - 1`.

use core::iter;

use aes_core::{decrypt_block, encrypt_block, xor_in_place, Block, RoundKeys, BLOCK_SIZE};
use tracing::debug;

use crate::buffer::{check_decrypt_sizes, encrypt_output_len, load_block, split_tail};
use crate::ecb::strip_padding;
use crate::error::Result;
use crate::padding::{pad_block, Padding};

/// IV used when the caller does not supply one: sixteen zero bytes.
pub const ZERO_IV: Block = [0u8; BLOCK_SIZE];

/// Encrypts `input` into `output` and returns the number of bytes written.
///
/// `iv` defaults to [`ZERO_IV`].
pub fn encrypt(
    round_keys: &RoundKeys,
    input: &[u8],
    iv: Option<&Block>,
    output: &mut [u8],
    padding: Padding,
) -> Result<usize> {
    let written = encrypt_output_len(input.len(), output.len(), padding)?;
    debug!(
        mode = "cbc",
        len = input.len(),
        ?padding,
        default_iv = iv.is_none(),
        "encrypt"
    );

    let mut chain = *iv.unwrap_or(&ZERO_IV);
    let (blocks, tail) = split_tail(input);
    for (src, dst) in blocks
        .chunks_exact(BLOCK_SIZE)
        .zip(output.chunks_exact_mut(BLOCK_SIZE))
    {
        let mut block = load_block(src);
        xor_in_place(&mut block, &chain);
        chain = encrypt_block(&block, round_keys);
        dst.copy_from_slice(&chain);
    }

    if padding == Padding::Pkcs7 {
        let mut block = pad_block(tail);
        xor_in_place(&mut block, &chain);
        chain = encrypt_block(&block, round_keys);
        output[blocks.len()..written].copy_from_slice(&chain);
    }
    Ok(written)
}

/// Decrypts `input` into `output`.
///
/// `iv` defaults to [`ZERO_IV`]. Returns the plaintext length, with the
/// PKCS#7 pad stripped when `padding` asks for it.
pub fn decrypt(
    round_keys: &RoundKeys,
    input: &[u8],
    iv: Option<&Block>,
    output: &mut [u8],
    padding: Padding,
) -> Result<usize> {
    check_decrypt_sizes(input.len(), output.len(), padding)?;
    debug!(
        mode = "cbc",
        len = input.len(),
        ?padding,
        default_iv = iv.is_none(),
        "decrypt"
    );

    let iv = iv.unwrap_or(&ZERO_IV);
    let previous = iter::once(&iv[..]).chain(input.chunks_exact(BLOCK_SIZE));
    for ((src, prev), dst) in input
        .chunks_exact(BLOCK_SIZE)
        .zip(previous)
        .zip(output.chunks_exact_mut(BLOCK_SIZE))
    {
        let mut block = decrypt_block(&load_block(src), round_keys);
        xor_in_place(&mut block, &load_block(prev));
        dst.copy_from_slice(&block);
    }

    strip_padding(&output[..input.len()], padding)
}
