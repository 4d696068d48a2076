//! Block (State) representation helpers.
//!
//! The state is stored column-major: byte `4 * c + r` holds row `r` of column
//! `c`, so each column is four consecutive bytes.

/// AES block (State) of 16 bytes.
pub type Block = [u8; 16];

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Builds a block from four column words packed little-endian
/// (row 0 in the low byte).
pub fn block_from_words(words: [u32; 4]) -> Block {
    let mut block = [0u8; 16];
    for (chunk, word) in block.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    block
}

/// Splits a block into its four little-endian column words.
pub fn block_to_words(block: &Block) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_little_endian_columns() {
        let block = block_from_words([0x04b7ca63, 0x51d05309, 0xe7e060cd, 0x8ce170ba]);
        assert_eq!(&block[..4], &[0x63, 0xca, 0xb7, 0x04]);
        assert_eq!(block[15], 0x8c);
        assert_eq!(
            block_to_words(&block),
            [0x04b7ca63, 0x51d05309, 0xe7e060cd, 0x8ce170ba]
        );
    }

    #[test]
    fn xor_with_self_clears() {
        let mut block: Block = *b"sixteen byte blk";
        let copy = block;
        xor_in_place(&mut block, &copy);
        assert_eq!(block, [0u8; 16]);
    }
}
