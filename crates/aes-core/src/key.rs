//! Key sizes and the expanded round-key sequence.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;
use crate::error::InvalidKeyLength;

/// Most round keys any key size needs (AES-256: 14 rounds + 1).
pub(crate) const MAX_ROUND_KEYS: usize = 15;

/// AES variant selected by the key length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 16-byte key, 10 rounds.
    Aes128,
    /// 24-byte key, 12 rounds.
    Aes192,
    /// 32-byte key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Maps a raw key length in bytes to its variant.
    pub fn from_len(len: usize) -> Result<Self, InvalidKeyLength> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(InvalidKeyLength(other)),
        }
    }

    /// Key length in bytes.
    pub fn len(self) -> usize {
        self.key_words() * 4
    }

    /// Key length in 32-bit words (Nk).
    pub fn key_words(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of cipher rounds (Nr).
    pub fn rounds(self) -> usize {
        self.key_words() + 6
    }
}

/// Expanded round keys, `rounds + 1` blocks.
///
/// Produced once by [`expand_key`](crate::expand_key) and read-only afterwards,
/// so one instance can be shared between threads. Key material is wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    keys: [Block; MAX_ROUND_KEYS],
    #[zeroize(skip)]
    size: KeySize,
}

impl RoundKeys {
    pub(crate) fn new(keys: [Block; MAX_ROUND_KEYS], size: KeySize) -> Self {
        Self { keys, size }
    }

    /// Returns the round key at the requested index (`0..=rounds`).
    ///
    /// Panics if `round` is past the last round key.
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        assert!(round <= self.size.rounds(), "round key index out of range");
        &self.keys[round]
    }

    /// Number of cipher rounds (10, 12 or 14).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Number of round keys (`rounds + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.size.rounds() + 1
    }

    /// Round-key sequences are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Key size these round keys were expanded from.
    #[inline]
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Iterates the round keys in order, round 0 first.
    pub fn iter(&self) -> impl Iterator<Item = &Block> + '_ {
        self.keys[..self.len()].iter()
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
