use log::debug;

use crate::alphabet;
use crate::cipher::CipherError;
use crate::mapping;
use crate::numeric;

/// A textbook RSA keypair built from caller-supplied primes.
///
/// Construction computes the modulus `n = p*q`, Euler's totient
/// `phi = (p-1)(q-1)`, and the private exponent as the modular inverse of
/// the public exponent modulo `phi`. The primes must be distinct and the
/// public exponent coprime to `phi`; neither precondition is checked, and
/// violating the latter silently yields a garbage private exponent.
#[derive(Clone, Copy, Debug)]
pub struct RsaCryptosystem {
    modulus: i64,
    public_key: i64,
    private_key: i64,
}

impl RsaCryptosystem {
    pub fn new(p: i64, q: i64, public_key: i64) -> Self {
        let modulus = p * q;
        let phi = (p - 1) * (q - 1);
        let private_key = numeric::modular_multiplicative_inverse(public_key, phi);
        debug!("derived RSA keypair n={modulus} e={public_key} d={private_key}");
        Self {
            modulus,
            public_key,
            private_key,
        }
    }

    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Encrypts a single integer: `m^e mod n`.
    pub fn encrypt(&self, plaintext: i64) -> i64 {
        numeric::modular_exponentiation(plaintext, self.public_key, self.modulus)
    }

    /// Decrypts a single integer: `c^d mod n`.
    pub fn decrypt(&self, ciphertext: i64) -> i64 {
        numeric::modular_exponentiation(ciphertext, self.private_key, self.modulus)
    }

    /// Demonstration-only string mode: each lowercase letter is mapped to
    /// its alphabet offset and encrypted as an independent integer.
    ///
    /// Insecure by construction (a deterministic substitution), and the
    /// ciphertext alphabet is only the 26 letters when the chosen `(e, n)`
    /// happen to keep every encrypted offset below 26; other parameters
    /// produce code points past `'z'`. Kept as a known limitation of the
    /// demonstration mode.
    pub fn encrypt_text(&self, plaintext: &str) -> Result<String, CipherError> {
        let encrypted = plaintext
            .chars()
            .map(|c| {
                if !c.is_ascii_lowercase() {
                    return Err(CipherError::OutsideTextAlphabet(c));
                }
                let offset = c as i64 - alphabet::LOWERCASE_A;
                Ok(self.encrypt(offset) + alphabet::LOWERCASE_A)
            })
            .collect::<Result<Vec<i64>, CipherError>>()?;
        Ok(mapping::to_text(&encrypted))
    }

    /// Inverse of [`encrypt_text`](Self::encrypt_text). Accepts whatever
    /// code points encryption produced.
    pub fn decrypt_text(&self, ciphertext: &str) -> String {
        let decrypted: Vec<i64> = ciphertext
            .chars()
            .map(|c| self.decrypt(c as i64 - alphabet::LOWERCASE_A) + alphabet::LOWERCASE_A)
            .collect();
        mapping::to_text(&decrypted)
    }
}
