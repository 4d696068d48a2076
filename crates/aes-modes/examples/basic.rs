//! Encrypts a short message with AES-256-CBC and checks it against per-block ECB.

use aes_modes::{cbc, ecb, encrypted_len, expand_key, xor_in_place, Padding};

fn main() {
    let key = [0x42u8; 32];
    let iv = *b"fixed demo iv 16";
    let round_keys = expand_key(&key).expect("32-byte key");

    let message = b"first block heresecond blockhere";
    let mut ciphertext = vec![0u8; encrypted_len(message.len(), Padding::None)];
    cbc::encrypt(&round_keys, message, Some(&iv), &mut ciphertext, Padding::None)
        .expect("aligned message");

    // CBC block 0 is ECB of (P0 ^ IV).
    let mut first = *b"first block here";
    xor_in_place(&mut first, &iv);
    let mut expected_first = [0u8; 16];
    ecb::encrypt(&round_keys, &first, &mut expected_first, Padding::None).expect("one block");
    assert_eq!(&ciphertext[..16], &expected_first);

    let mut plaintext = vec![0u8; ciphertext.len()];
    let n = cbc::decrypt(&round_keys, &ciphertext, Some(&iv), &mut plaintext, Padding::None)
        .expect("aligned ciphertext");
    assert_eq!(&plaintext[..n], message);

    println!("example succeeded; CBC output matches chained ECB");
}
