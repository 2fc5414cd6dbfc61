//! Property tests for the contracts every cipher promises: decrypting an
//! encryption recovers the message, lengths are preserved, and the
//! documented equivalences hold.

use cipherlab_core::{
    mapping, BlumBlumShubCipher, CaesarCipher, Cipher, OneTimePadCipher, RailFenceCipher,
    RsaCryptosystem, SimplifiedDesCipher, VigenereCipher,
};
use proptest::prelude::*;

/// Arbitrary printable-ish messages: letters of both cases, digits,
/// punctuation, and a few code points past ASCII.
fn message() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(prop_oneof![65..91i64, 97..123i64, 32..65i64, 160..256i64], 0..80)
}

fn letter() -> impl Strategy<Value = i64> {
    prop_oneof![65..91i64, 97..123i64]
}

fn bit_message(length: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0..2i64, length)
}

/// Small primes congruent to 3 mod 4, as Blum Blum Shub requires.
const BLUM_PRIMES: &[i64] = &[7, 11, 19, 23, 31, 43, 47, 59];

proptest! {
    #[test]
    fn caesar_round_trips(shift in -100..100i64, plaintext in message()) {
        let mut cipher = CaesarCipher::new(shift);
        let ciphertext = cipher.encrypt(&plaintext).unwrap();
        prop_assert_eq!(ciphertext.len(), plaintext.len());
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn caesar_shift_is_congruent_mod_26(shift in -50..50i64, plaintext in message()) {
        let a = CaesarCipher::new(shift).encrypt(&plaintext).unwrap();
        let b = CaesarCipher::new(shift + 26).encrypt(&plaintext).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn vigenere_round_trips(
        key in prop::collection::vec(letter(), 1..12),
        plaintext in message(),
    ) {
        let mut cipher = VigenereCipher::new(&key).unwrap();
        let ciphertext = cipher.encrypt(&plaintext).unwrap();
        prop_assert_eq!(ciphertext.len(), plaintext.len());
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn single_letter_vigenere_is_caesar(key in letter(), plaintext in message()) {
        let offset = if key >= 97 { key - 97 } else { key - 65 };
        let vigenere = VigenereCipher::new(&[key]).unwrap().encrypt(&plaintext).unwrap();
        let caesar = CaesarCipher::new(offset).encrypt(&plaintext).unwrap();
        prop_assert_eq!(vigenere, caesar);
    }

    #[test]
    fn rail_fence_round_trips(height in 1..10usize, plaintext in message()) {
        let mut cipher = RailFenceCipher::new(height).unwrap();
        let ciphertext = cipher.encrypt(&plaintext).unwrap();
        prop_assert_eq!(ciphertext.len(), plaintext.len());
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn rail_fence_height_one_is_identity(plaintext in message()) {
        let mut cipher = RailFenceCipher::new(1).unwrap();
        prop_assert_eq!(cipher.encrypt(&plaintext).unwrap(), plaintext);
    }

    #[test]
    fn one_time_pad_is_single_use(
        key in prop::collection::vec(letter(), 1..40),
        reuse_attempt in message(),
    ) {
        let mut pad = OneTimePadCipher::new(&key).unwrap();
        let plaintext: Vec<i64> = key.iter().rev().copied().collect();

        let ciphertext = pad.encrypt(&plaintext).unwrap();
        prop_assert_eq!(pad.decrypt(&ciphertext).unwrap(), plaintext);

        let err = pad.encrypt(&reuse_attempt).unwrap_err();
        prop_assert!(
            matches!(
                err,
                cipherlab_core::CipherError::PadAlreadyUsed
                    | cipherlab_core::CipherError::KeyLengthMismatch { .. }
            ),
            "unexpected error variant on pad reuse"
        );
    }

    #[test]
    fn blum_blum_shub_round_trips(
        p in prop::sample::select(BLUM_PRIMES.to_vec()),
        q in prop::sample::select(BLUM_PRIMES.to_vec()),
        seed in 2..1000i64,
        plaintext in bit_message(48),
    ) {
        prop_assume!(p != q);
        let mut cipher = BlumBlumShubCipher::new(p, q, seed);
        let ciphertext = cipher.encrypt(&plaintext).unwrap();
        prop_assert_eq!(ciphertext.len(), plaintext.len());
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn simplified_des_round_trips(key in bit_message(10), block in bit_message(8)) {
        let mut cipher = SimplifiedDesCipher::new(&key).unwrap();
        let ciphertext = cipher.encrypt(&block).unwrap();
        prop_assert_eq!(ciphertext.len(), block.len());
        prop_assert!(cipherlab_core::bits::is_bit_array(&ciphertext));
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), block);
    }

    #[test]
    fn rsa_round_trips_every_message_below_the_modulus(message in 0..3233i64) {
        let rsa = RsaCryptosystem::new(61, 53, 17);
        prop_assert_eq!(rsa.decrypt(rsa.encrypt(message)), message);
    }

    #[test]
    fn rsa_text_mode_round_trips(word in "[a-z]{1,16}") {
        let rsa = RsaCryptosystem::new(5, 11, 3);
        let ciphertext = rsa.encrypt_text(&word).unwrap();
        prop_assert_eq!(rsa.decrypt_text(&ciphertext), word);
    }
}

#[test]
fn codepoint_mapping_is_lossless_for_text() {
    let text = "Pack my box with five dozen liquor jugs.";
    assert_eq!(mapping::to_text(&mapping::to_codepoints(text)), text);
}
