//! Core primitives for the cipherlab teaching toolkit.
//!
//! A common [`Cipher`] capability implemented by classical and semi-modern
//! algorithms (Caesar, Vigenère, Rail-Fence, one-time pad, Blum Blum Shub,
//! Simplified DES), two textbook public-key protocols (RSA and
//! Diffie-Hellman), and the numeric/bit-manipulation kernel they share.
//!
//! The implementation intentionally favors clarity over performance and
//! must **not** be used for production security: key material is
//! caller-supplied, nothing is constant-time, and the parameter sizes are
//! toy-scale on purpose.
//!
//! Messages are `i64` sequences (Unicode code points for the text ciphers,
//! single 0/1 bits for the block and stream primitives), so every variant
//! can sit behind the same trait:
//!
//! ```
//! use cipherlab_core::{mapping, CaesarCipher, Cipher};
//!
//! let mut cipher = CaesarCipher::new(3);
//! let plaintext = mapping::to_codepoints("attack at dawn");
//! let ciphertext = cipher.encrypt(&plaintext).unwrap();
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
//! ```

pub mod analysis;
pub mod bits;
pub mod cipher;
pub mod mapping;
pub mod numeric;

mod alphabet;
mod blum_blum_shub;
mod caesar;
mod diffie_hellman;
mod one_time_pad;
mod rail_fence;
mod rsa;
mod simplified_des;
mod vigenere;

pub use crate::blum_blum_shub::BlumBlumShubCipher;
pub use crate::caesar::CaesarCipher;
pub use crate::cipher::{Cipher, CipherError};
pub use crate::diffie_hellman::DiffieHellmanParty;
pub use crate::one_time_pad::OneTimePadCipher;
pub use crate::rail_fence::RailFenceCipher;
pub use crate::rsa::RsaCryptosystem;
pub use crate::simplified_des::SimplifiedDesCipher;
pub use crate::vigenere::VigenereCipher;
