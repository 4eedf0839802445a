use aes::Aes256;
use aes_gcm::AesGcm;
use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit};

use crate::cipher::{ModeCipher, invalid_length};
use crate::config::GCM_TAG_SIZE;
use crate::error::{Error, Result};
use crate::key::{Iv, SymmetricKey};

/// AES-256-GCM taking the whole 16-byte IV as nonce.
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// AES-256-GCM. The 16-byte tag is appended to the ciphertext and checked on
/// decryption.
pub struct Gcm;

impl ModeCipher for Gcm {
    fn encrypt(key: &SymmetricKey, iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256Gcm16::new_from_slice(key.expose_secret()).map_err(invalid_length)?;
        cipher
            .encrypt(aes_gcm::Nonce::<U16>::from_slice(iv.as_bytes()), plaintext)
            .map_err(|e| Error::Crypto(format!("aes-gcm encryption failed: {e}")))
    }

    fn decrypt(key: &SymmetricKey, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < GCM_TAG_SIZE {
            return Err(Error::Crypto(format!("ciphertext too short: need at least {GCM_TAG_SIZE} bytes, got {}", ciphertext.len())));
        }

        let cipher = Aes256Gcm16::new_from_slice(key.expose_secret()).map_err(invalid_length)?;
        cipher
            .decrypt(aes_gcm::Nonce::<U16>::from_slice(iv.as_bytes()), ciphertext)
            .map_err(|_| Error::Crypto("aes-gcm authentication failed".into()))
    }
}
