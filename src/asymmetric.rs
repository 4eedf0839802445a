//! RSA encryption with OAEP (SHA-1, MGF1-SHA-1) padding, the OpenSSL
//! `RSA_PKCS1_OAEP_PADDING` default, so ciphertexts interoperate with it.

use rsa::rand_core::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use tracing::debug;

use crate::config::OAEP_OVERHEAD;
use crate::error::{Error, Result};
use crate::key::RsaKeyPair;

/// Largest plaintext that fits a single OAEP block under `key`.
#[inline]
pub fn max_plaintext_len(key: &RsaPublicKey) -> usize {
    key.size().saturating_sub(OAEP_OVERHEAD)
}

/// Generates a key pair with public exponent 65537.
pub fn generate_keypair(bits: usize) -> Result<RsaKeyPair> {
    RsaKeyPair::generate(bits)
}

/// Encrypts `plaintext` with the public key.
pub fn encrypt(public_key: &RsaPublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let max = max_plaintext_len(public_key);
    if plaintext.len() > max {
        return Err(Error::MessageTooLong { max, actual: plaintext.len() });
    }

    debug!(bytes = plaintext.len(), modulus = public_key.size(), "rsa encrypting");
    public_key.encrypt(&mut OsRng, Oaep::new::<Sha1>(), plaintext).map_err(|e| Error::Crypto(format!("rsa encryption failed: {e}")))
}

/// Decrypts `ciphertext` with the private key.
pub fn decrypt(private_key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let expected = private_key.size();
    if ciphertext.len() != expected {
        return Err(Error::Crypto(format!("ciphertext must be {expected} bytes for this key, got {}", ciphertext.len())));
    }

    debug!(bytes = ciphertext.len(), "rsa decrypting");
    private_key.decrypt(Oaep::new::<Sha1>(), ciphertext).map_err(|e| Error::Crypto(format!("rsa decryption failed: {e}")))
}
