//! AES round transformations.
//!
//! Every transform works in place on a column-major [`Block`]. GF(2^8)
//! arithmetic uses masks instead of branches on secret bytes; the S-box is
//! still a table lookup.

use crate::block::{xor_in_place, Block};
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[col * 4 + row] = src[((col + row) % 4) * 4 + row];
        }
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[col * 4 + row] = src[((col + 4 - row) % 4) * 4 + row];
        }
    }
}

/// Multiplies by `x` modulo `x^8 + x^4 + x^3 + x + 1`.
#[inline]
fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ (0x1b & 0u8.wrapping_sub(byte >> 7))
}

fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        product ^= a & 0u8.wrapping_sub(b & 1);
        a = xtime(a);
        b >>= 1;
    }
    product
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

fn inv_mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09);
    col[1] = gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d);
    col[2] = gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b);
    col[3] = gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e);
}

fn for_each_column(state: &mut Block, f: fn(&mut [u8; 4])) {
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        f(&mut column);
        chunk.copy_from_slice(&column);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for_each_column(state, mix_single_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for_each_column(state, inv_mix_single_column);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::block_from_words;
    use rand::RngCore;

    fn state(hex_str: &str) -> Block {
        let mut block = [0u8; 16];
        hex::decode_to_slice(hex_str, &mut block).unwrap();
        block
    }

    // FIPS-197 Appendix B, round 1.
    #[test]
    fn sub_bytes_matches_fips_round_one() {
        let mut s = state("193de3bea0f4e22b9ac68d2ae9f84808");
        sub_bytes(&mut s);
        assert_eq!(s, state("d42711aee0bf98f1b8b45de51e415230"));
        inv_sub_bytes(&mut s);
        assert_eq!(s, state("193de3bea0f4e22b9ac68d2ae9f84808"));
    }

    #[test]
    fn shift_rows_matches_fips_round_one() {
        let mut s = state("d42711aee0bf98f1b8b45de51e415230");
        shift_rows(&mut s);
        assert_eq!(s, state("d4bf5d30e0b452aeb84111f11e2798e5"));
    }

    #[test]
    fn mix_columns_matches_fips_round_one() {
        let mut s = state("d4bf5d30e0b452aeb84111f11e2798e5");
        mix_columns(&mut s);
        assert_eq!(s, state("046681e5e0cb199a48f8d37a2806264c"));
    }

    #[test]
    fn shift_rows_word_vector() {
        let mut s = block_from_words([0x04b7ca63, 0x51d05309, 0xe7e060cd, 0x8ce170ba]);
        shift_rows(&mut s);
        assert_eq!(
            s,
            block_from_words([0x8ce05363, 0x04e16009, 0x51b770cd, 0xe7d0caba])
        );
    }

    #[test]
    fn inv_shift_rows_word_vector() {
        let mut s = block_from_words([0x6822d93b, 0x73fb74fc, 0xe0cb6757, 0x2d0e59c0]);
        inv_shift_rows(&mut s);
        assert_eq!(
            s,
            block_from_words([0x73cb593b, 0xe00ed9fc, 0x2d227457, 0x68fb67c0])
        );
    }

    #[test]
    fn mix_columns_word_vector() {
        let mut s = block_from_words([0xed08cc68, 0xbcd2bb0a, 0x55f52e64, 0x78e84a24]);
        mix_columns(&mut s);
        assert_eq!(
            s,
            block_from_words([0xbd981e7a, 0x14d1b6ac, 0xdd44691a, 0x3e2deb06])
        );
    }

    #[test]
    fn inv_mix_columns_word_vector() {
        let mut s = block_from_words([0x0e93ec88, 0xb6e4e7f5, 0xc9f432cc, 0x1494d206]);
        inv_mix_columns(&mut s);
        assert_eq!(
            s,
            block_from_words([0xccaec75c, 0x1972c8e3, 0x83efe54a, 0xc733a909])
        );
    }

    #[test]
    fn inverse_transforms_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let mut original = [0u8; 16];
            rng.fill_bytes(&mut original);

            let mut s = original;
            shift_rows(&mut s);
            inv_shift_rows(&mut s);
            assert_eq!(s, original);

            mix_columns(&mut s);
            inv_mix_columns(&mut s);
            assert_eq!(s, original);
        }
    }

    #[test]
    fn gmul_agrees_with_xtime() {
        for a in 0..=255u8 {
            assert_eq!(gmul(a, 0x01), a);
            assert_eq!(gmul(a, 0x02), xtime(a));
            assert_eq!(gmul(a, 0x03), xtime(a) ^ a);
        }
        assert_eq!(gmul(0x57, 0x13), 0xfe);
    }
}
