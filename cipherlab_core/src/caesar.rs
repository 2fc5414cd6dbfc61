use crate::alphabet;
use crate::cipher::{Cipher, CipherError};

/// A simple substitution cipher: every letter is replaced by the letter a
/// fixed number of positions down the alphabet.
///
/// Non-alphabetic code points pass through unchanged, and case is
/// preserved. The shift may be any integer; shifts congruent modulo 26
/// produce identical ciphertexts.
#[derive(Clone, Copy, Debug)]
pub struct CaesarCipher {
    shift: i64,
}

impl CaesarCipher {
    pub fn new(shift: i64) -> Self {
        Self { shift }
    }
}

impl Cipher for CaesarCipher {
    fn encrypt(&mut self, plaintext: &[i64]) -> Result<Vec<i64>, CipherError> {
        Ok(plaintext
            .iter()
            .map(|&code_point| alphabet::shift_letter(code_point, self.shift))
            .collect())
    }

    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>, CipherError> {
        Ok(ciphertext
            .iter()
            .map(|&code_point| alphabet::shift_letter(code_point, -self.shift))
            .collect())
    }
}
