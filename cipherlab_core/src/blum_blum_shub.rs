use crate::bits;
use crate::cipher::{Cipher, CipherError};
use crate::numeric;

/// A quadratic-residue pseudorandom generator used as a synchronous stream
/// cipher.
///
/// The state iterates `x <- x^2 mod (p*q)` and each step emits the parity
/// of `x`. Both primes must satisfy `p ≡ q ≡ 3 (mod 4)` for the generator
/// to have full period; that property is the caller's responsibility.
/// Encryption XORs the message against a freshly generated keystream, so
/// encrypt and decrypt are the same operation.
#[derive(Clone, Copy, Debug)]
pub struct BlumBlumShubCipher {
    modulus: i64,
    seed: i64,
}

impl BlumBlumShubCipher {
    pub fn new(p: i64, q: i64, seed: i64) -> Self {
        Self {
            modulus: p * q,
            seed,
        }
    }

    /// Generates `length` pseudorandom bits. The seed is squared once
    /// before the emitting loop starts.
    pub fn keystream(&self, length: usize) -> Vec<i64> {
        let mut state = numeric::modular_exponentiation(self.seed, 2, self.modulus);
        let mut sequence = Vec::with_capacity(length);
        for _ in 0..length {
            state = numeric::modular_exponentiation(state, 2, self.modulus);
            sequence.push(state % 2);
        }
        sequence
    }
}

impl Cipher for BlumBlumShubCipher {
    fn encrypt(&mut self, plaintext: &[i64]) -> Result<Vec<i64>, CipherError> {
        Ok(bits::xor(&self.keystream(plaintext.len()), plaintext))
    }

    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>, CipherError> {
        Ok(bits::xor(&self.keystream(ciphertext.len()), ciphertext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keystream_is_deterministic_bits() {
        let cipher = BlumBlumShubCipher::new(11, 23, 3);
        let a = cipher.keystream(64);
        let b = cipher.keystream(64);
        assert_eq!(a, b);
        assert!(bits::is_bit_array(&a));
        // A keystream that never flips a bit would make the cipher a no-op.
        assert!(a.contains(&1));
    }

    #[test]
    fn encrypt_then_decrypt_recovers_the_message() {
        let mut cipher = BlumBlumShubCipher::new(11, 19, 7);
        let message = [1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1];
        let ciphertext = cipher.encrypt(&message).unwrap();
        assert_eq!(ciphertext.len(), message.len());
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), message.to_vec());
    }

    #[test]
    fn known_generator_prefix() {
        // n = 11 * 23 = 253, x = 3: state starts at 3^2 = 9, then
        // 81, 236, 36, 31, 202, ... giving parities 1, 0, 0, 1, 0.
        let cipher = BlumBlumShubCipher::new(11, 23, 3);
        assert_eq!(cipher.keystream(5), vec![1, 0, 0, 1, 0]);
    }
}
