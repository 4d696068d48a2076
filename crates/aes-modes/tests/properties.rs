//! Property-based tests for the ECB/CBC modes and padding.

use aes_modes::{cbc, ecb, encrypted_len, expand_key, Block, Error, Padding, BLOCK_SIZE};
use proptest::prelude::*;

fn any_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![Just(16usize), Just(24), Just(32)]
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

fn any_padding() -> impl Strategy<Value = Padding> {
    prop_oneof![Just(Padding::None), Just(Padding::Pkcs7)]
}

/// Data whose length is block aligned whenever padding is off.
fn data_for(padding: Padding) -> BoxedStrategy<Vec<u8>> {
    match padding {
        Padding::Pkcs7 => prop::collection::vec(any::<u8>(), 0..200).boxed(),
        Padding::None => (0usize..12)
            .prop_flat_map(|blocks| prop::collection::vec(any::<u8>(), blocks * BLOCK_SIZE))
            .boxed(),
    }
}

fn case() -> impl Strategy<Value = (Vec<u8>, Block, Padding, Vec<u8>)> {
    (any_key(), any::<[u8; 16]>(), any_padding())
        .prop_flat_map(|(key, iv, padding)| (Just(key), Just(iv), Just(padding), data_for(padding)))
}

fn cbc_encrypt(key: &[u8], iv: &Block, data: &[u8]) -> Vec<u8> {
    let rks = expand_key(key).unwrap();
    let mut ct = vec![0u8; data.len()];
    cbc::encrypt(&rks, data, Some(iv), &mut ct, Padding::None).unwrap();
    ct
}

proptest! {
    #[test]
    fn ecb_round_trip((key, _iv, padding, data) in case()) {
        let rks = expand_key(&key).unwrap();
        let mut ct = vec![0u8; encrypted_len(data.len(), padding)];
        let written = ecb::encrypt(&rks, &data, &mut ct, padding).unwrap();
        prop_assert_eq!(written, ct.len());

        let mut pt = vec![0u8; ct.len()];
        let n = ecb::decrypt(&rks, &ct, &mut pt, padding).unwrap();
        prop_assert_eq!(&pt[..n], &data[..]);
    }

    #[test]
    fn cbc_round_trip((key, iv, padding, data) in case()) {
        let rks = expand_key(&key).unwrap();
        let mut ct = vec![0u8; encrypted_len(data.len(), padding)];
        cbc::encrypt(&rks, &data, Some(&iv), &mut ct, padding).unwrap();

        let mut pt = vec![0u8; ct.len()];
        let n = cbc::decrypt(&rks, &ct, Some(&iv), &mut pt, padding).unwrap();
        prop_assert_eq!(&pt[..n], &data[..]);
    }

    #[test]
    fn padded_output_always_grows(
        key in any_key(),
        data in prop::collection::vec(any::<u8>(), 0..100),
    ) {
        let rks = expand_key(&key).unwrap();
        let mut ct = vec![0u8; data.len() + BLOCK_SIZE];
        let written = ecb::encrypt(&rks, &data, &mut ct, Padding::Pkcs7).unwrap();
        prop_assert!(written > data.len());
        prop_assert!(written - data.len() <= BLOCK_SIZE);
        prop_assert_eq!(written % BLOCK_SIZE, 0);
    }

    #[test]
    fn ecb_blocks_are_independent(
        key in any_key(),
        block in any::<[u8; 16]>(),
        prefix in 0usize..4,
    ) {
        let rks = expand_key(&key).unwrap();
        let mut data = vec![0u8; prefix * BLOCK_SIZE];
        data.extend_from_slice(&block);
        let mut ct = vec![0u8; data.len()];
        ecb::encrypt(&rks, &data, &mut ct, Padding::None).unwrap();

        let mut alone = [0u8; 16];
        ecb::encrypt(&rks, &block, &mut alone, Padding::None).unwrap();
        prop_assert_eq!(&ct[prefix * BLOCK_SIZE..], &alone[..]);
    }

    #[test]
    fn cbc_plaintext_bit_flip_propagates(
        key in any_key(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 64),
        (block, bit) in (0usize..4, 0u8..8),
    ) {
        let ct = cbc_encrypt(&key, &iv, &data);
        let mut flipped = data.clone();
        flipped[block * BLOCK_SIZE] ^= 1 << bit;
        let ct2 = cbc_encrypt(&key, &iv, &flipped);

        prop_assert_eq!(&ct[..block * BLOCK_SIZE], &ct2[..block * BLOCK_SIZE]);
        for later in block..4 {
            let range = later * BLOCK_SIZE..(later + 1) * BLOCK_SIZE;
            prop_assert_ne!(&ct[range.clone()], &ct2[range]);
        }
    }

    #[test]
    fn cbc_ciphertext_bit_flip_corrupts_two_blocks(
        key in any_key(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 64),
        (block, bit) in (0usize..3, 0u8..8),
    ) {
        let rks = expand_key(&key).unwrap();
        let mut ct = cbc_encrypt(&key, &iv, &data);
        ct[block * BLOCK_SIZE + 5] ^= 1 << bit;

        let mut pt = vec![0u8; 64];
        cbc::decrypt(&rks, &ct, Some(&iv), &mut pt, Padding::None).unwrap();
        for idx in 0..4 {
            let range = idx * BLOCK_SIZE..(idx + 1) * BLOCK_SIZE;
            if idx == block {
                prop_assert_ne!(&pt[range.clone()], &data[range]);
            } else if idx == block + 1 {
                // the flipped bit lands in the same position of the next block
                let mut want = data[range.clone()].to_vec();
                want[5] ^= 1 << bit;
                prop_assert_eq!(&pt[range], &want[..]);
            } else {
                prop_assert_eq!(&pt[range.clone()], &data[range]);
            }
        }
    }

    #[test]
    fn out_of_range_pad_byte_is_rejected(
        key in any_key(),
        mut block in any::<[u8; 16]>(),
        last in prop_oneof![Just(0u8), 17u8..=255],
    ) {
        let rks = expand_key(&key).unwrap();
        block[15] = last;
        let mut ct = [0u8; 16];
        ecb::encrypt(&rks, &block, &mut ct, Padding::None).unwrap();
        let mut pt = [0u8; 16];
        prop_assert_eq!(
            ecb::decrypt(&rks, &ct, &mut pt, Padding::Pkcs7),
            Err(Error::InvalidPadding)
        );
    }
}
