use crate::alphabet;
use crate::cipher::{Cipher, CipherError};

/// A polyalphabetic substitution cipher: a series of Caesar shifts selected
/// by cycling through the letters of a keyword.
///
/// The key is normalized at construction to zero-based alphabet offsets
/// (a/A -> 0 ... z/Z -> 25); construction fails if any key element is not a
/// Latin letter. During encryption the key position advances only when a
/// message element is alphabetic; non-letters pass through without
/// consuming a key letter.
#[derive(Clone, Debug)]
pub struct VigenereCipher {
    key: Vec<i64>,
}

impl VigenereCipher {
    /// Builds a cipher from a key given as letter code points.
    pub fn new(key: &[i64]) -> Result<Self, CipherError> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        let key = key
            .iter()
            .map(|&code_point| {
                alphabet::letter_offset(code_point)
                    .ok_or(CipherError::NonAlphabeticKey(code_point))
            })
            .collect::<Result<Vec<i64>, CipherError>>()?;
        Ok(Self { key })
    }

    fn shift_message(&self, message: &[i64], sign: i64) -> Vec<i64> {
        let mut output = Vec::with_capacity(message.len());
        let mut position = 0usize;
        for &code_point in message {
            if alphabet::is_letter(code_point) {
                let amount = sign * self.key[position % self.key.len()];
                output.push(alphabet::shift_letter(code_point, amount));
                position += 1;
            } else {
                output.push(code_point);
            }
        }
        output
    }
}

impl Cipher for VigenereCipher {
    fn encrypt(&mut self, plaintext: &[i64]) -> Result<Vec<i64>, CipherError> {
        Ok(self.shift_message(plaintext, 1))
    }

    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>, CipherError> {
        Ok(self.shift_message(ciphertext, -1))
    }
}
