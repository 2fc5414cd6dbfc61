use thiserror::Error;

/// Errors produced by the cipher and cryptosystem constructors and calls.
///
/// Every failure is detected up front, before any transformation work, and
/// leaves the instance usable for subsequent valid calls. The one exception
/// is [`CipherError::PadAlreadyUsed`]: a consumed one-time pad stays
/// consumed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A text-cipher key contained something other than a Latin letter.
    #[error("key may only contain Latin letters, got code point {0}")]
    NonAlphabeticKey(i64),

    /// A cipher key was empty.
    #[error("key must contain at least one element")]
    EmptyKey,

    /// A one-time pad was called with a message of the wrong length.
    #[error("key length {key} does not match message length {message}")]
    KeyLengthMismatch { key: usize, message: usize },

    /// A one-time pad instance was asked to encrypt a second time.
    #[error("this one-time pad has already been used and must not be reused")]
    PadAlreadyUsed,

    /// A fixed-size block had the wrong number of elements.
    #[error("block must be exactly {expected} bits, got {actual}")]
    BlockLength { expected: usize, actual: usize },

    /// A bit-array argument contained a value other than 0 or 1.
    #[error("bit arrays may only contain 0/1 values")]
    NotABitArray,

    /// A rail-fence cipher was constructed with no rails.
    #[error("rail count must be at least 1")]
    ZeroRails,

    /// RSA text mode only operates on lowercase Latin letters.
    #[error("text-mode RSA only accepts lowercase letters a-z, got {0:?}")]
    OutsideTextAlphabet(char),

    /// A Diffie-Hellman party acted before its private key was set.
    #[error("private key has not been set")]
    PrivateKeyNotSet,
}

/// The common capability implemented by every cipher variant.
///
/// Messages are ordered `i64` sequences: Unicode code points for the text
/// ciphers, single bits for Simplified DES and Blum Blum Shub. `encrypt`
/// takes `&mut self` because the one-time pad consumes internal state on
/// its first successful call; the stateless ciphers simply ignore the
/// mutability. `decrypt` never mutates.
pub trait Cipher {
    /// Encrypts a message, returning the ciphertext.
    fn encrypt(&mut self, plaintext: &[i64]) -> Result<Vec<i64>, CipherError>;

    /// Decrypts a ciphertext, returning the original message.
    fn decrypt(&self, ciphertext: &[i64]) -> Result<Vec<i64>, CipherError>;
}
