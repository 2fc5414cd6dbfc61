use log::debug;

use crate::cipher::{Cipher, CipherError};
use crate::vigenere::VigenereCipher;

/// A Vigenère cipher with a pad exactly as long as the message and a
/// single-use guarantee.
///
/// Wraps an inner [`VigenereCipher`] rather than inheriting its behavior:
/// the pad adds a length check on every call and a consumed flag around
/// encryption. The first successful `encrypt` marks the pad used; any
/// further `encrypt` fails with [`CipherError::PadAlreadyUsed`] before any
/// work happens. `decrypt` is deliberately unrestricted by the flag so a
/// recipient can always recover a message.
#[derive(Clone, Debug)]
pub struct OneTimePadCipher {
    inner: VigenereCipher,
    pad_length: usize,
    used: bool,
}

impl OneTimePadCipher {
    /// Builds a pad from letter code points; the same key rules as
    /// [`VigenereCipher::new`] apply.
    pub fn new(key: &[i64]) -> Result<Self, CipherError> {
        Ok(Self {
            inner: VigenereCipher::new(key)?,
            pad_length: key.len(),
            used: false,
        })
    }

    /// Whether this pad has already encrypted a message.
    pub fn is_used(&self) -> bool {
        self.used
    }

    fn check_length(&self, message: usize) -> Result<(), CipherError> {
        if self.pad_length != message {
            return Err(CipherError::KeyLengthMismatch {
                key: self.pad_length,
                message,
            });
        }
        Ok(())
    }
}

impl Cipher for OneTimePadCipher {
    fn encrypt(&mut self, plaintext: &[i64]) -> Result<Vec<i64>, CipherError> {
        self.check_length(plaintext.len())?;
        if self.used {
            return Err(CipherError::PadAlreadyUsed);
        }
        self.used = true;
        debug!("one-time pad consumed, length {}", self.pad_length);
        self.inner.encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>, CipherError> {
        self.check_length(ciphertext.len())?;
        self.inner.decrypt(ciphertext)
    }
}
