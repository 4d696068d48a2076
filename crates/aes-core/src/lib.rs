//! AES (Rijndael) block cipher core.
//!
//! This crate follows FIPS-197 and provides:
//! - Key schedule for 128, 192 and 256-bit keys.
//! - The individual round transformations.
//! - Single-block encryption and decryption.
//!
//! Round transforms avoid secret-dependent branches, but SubBytes is a table
//! lookup and so is exposed to cache-timing attacks. Do not treat this crate
//! as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
pub mod round;
mod sbox;

pub use crate::block::{block_from_words, block_to_words, xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, rot_word, sub_word};
pub use crate::error::InvalidKeyLength;
pub use crate::key::{KeySize, RoundKeys};
pub use crate::sbox::{inv_sbox, sbox};
