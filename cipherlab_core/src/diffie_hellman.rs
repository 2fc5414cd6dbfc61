use log::debug;

use crate::cipher::CipherError;
use crate::numeric;

/// One participant in a Diffie-Hellman key exchange.
///
/// Both parties pre-share `(modulus, base)`. Each party walks the state
/// machine Uninitialized -> PrivateKeySet -> SecretComputed:
/// [`set_private_key`](Self::set_private_key) arms the party,
/// [`send_public_key`](Self::send_public_key) hands `base^private mod
/// modulus` to the peer as a direct in-process call, and
/// [`receive_public_key`](Self::receive_public_key) computes and stores the
/// shared secret. The exchange converges when each party sends exactly once
/// after setting its private key.
#[derive(Clone, Copy, Debug)]
pub struct DiffieHellmanParty {
    modulus: i64,
    base: i64,
    private_key: Option<i64>,
    shared_secret: Option<i64>,
}

impl DiffieHellmanParty {
    pub fn new(modulus: i64, base: i64) -> Self {
        Self {
            modulus,
            base,
            private_key: None,
            shared_secret: None,
        }
    }

    /// Fixes this party's private scalar. Real deployments would generate
    /// this randomly; here it is caller-supplied for reproducible demos.
    pub fn set_private_key(&mut self, private_key: i64) {
        self.private_key = Some(private_key);
    }

    /// This party's public key, `base^private mod modulus`.
    pub fn public_key(&self) -> Result<i64, CipherError> {
        let private_key = self.private_key.ok_or(CipherError::PrivateKeyNotSet)?;
        Ok(numeric::modular_exponentiation(
            self.base,
            private_key,
            self.modulus,
        ))
    }

    /// Sends this party's public key to the peer, which computes its shared
    /// secret on receipt.
    pub fn send_public_key(&self, other: &mut DiffieHellmanParty) -> Result<(), CipherError> {
        other.receive_public_key(self.public_key()?)
    }

    /// Receives the peer's public key and stores
    /// `public^private mod modulus` as the shared secret.
    pub fn receive_public_key(&mut self, public_key: i64) -> Result<(), CipherError> {
        let private_key = self.private_key.ok_or(CipherError::PrivateKeyNotSet)?;
        let secret = numeric::modular_exponentiation(public_key, private_key, self.modulus);
        debug!("computed shared secret from peer public key {public_key}");
        self.shared_secret = Some(secret);
        Ok(())
    }

    /// The shared secret, or `None` before a public key has been received.
    pub fn secret(&self) -> Option<i64> {
        self.shared_secret
    }
}
