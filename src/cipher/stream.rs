use aes::Aes256;
use aes::cipher::{AsyncStreamCipher, KeyIvInit, StreamCipher};

use crate::cipher::{ModeCipher, invalid_length};
use crate::error::Result;
use crate::key::{Iv, SymmetricKey};

type Aes256Ctr = ctr::Ctr128BE<Aes256>;
type Aes256Ofb = ofb::Ofb<Aes256>;

/// AES-256-CTR with a 128-bit big-endian counter starting at the IV.
pub struct Ctr;

/// AES-256-OFB.
pub struct Ofb;

/// AES-256-CFB with full-block (128-bit) feedback.
pub struct Cfb;

/// AES-256-CFB with 8-bit feedback.
pub struct Cfb8;

impl ModeCipher for Ctr {
    fn encrypt(key: &SymmetricKey, iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut cipher = Aes256Ctr::new_from_slices(key.expose_secret(), iv.as_bytes()).map_err(invalid_length)?;
        let mut buf = plaintext.to_vec();
        cipher.apply_keystream(&mut buf);
        Ok(buf)
    }

    #[inline]
    fn decrypt(key: &SymmetricKey, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
        Self::encrypt(key, iv, ciphertext)
    }
}

impl ModeCipher for Ofb {
    fn encrypt(key: &SymmetricKey, iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut cipher = Aes256Ofb::new_from_slices(key.expose_secret(), iv.as_bytes()).map_err(invalid_length)?;
        let mut buf = plaintext.to_vec();
        cipher.apply_keystream(&mut buf);
        Ok(buf)
    }

    #[inline]
    fn decrypt(key: &SymmetricKey, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
        Self::encrypt(key, iv, ciphertext)
    }
}

impl ModeCipher for Cfb {
    fn encrypt(key: &SymmetricKey, iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = cfb_mode::Encryptor::<Aes256>::new_from_slices(key.expose_secret(), iv.as_bytes()).map_err(invalid_length)?;
        let mut buf = plaintext.to_vec();
        AsyncStreamCipher::encrypt(cipher, &mut buf);
        Ok(buf)
    }

    fn decrypt(key: &SymmetricKey, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let cipher = cfb_mode::Decryptor::<Aes256>::new_from_slices(key.expose_secret(), iv.as_bytes()).map_err(invalid_length)?;
        let mut buf = ciphertext.to_vec();
        AsyncStreamCipher::decrypt(cipher, &mut buf);
        Ok(buf)
    }
}

impl ModeCipher for Cfb8 {
    fn encrypt(key: &SymmetricKey, iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = cfb8::Encryptor::<Aes256>::new_from_slices(key.expose_secret(), iv.as_bytes()).map_err(invalid_length)?;
        let mut buf = plaintext.to_vec();
        AsyncStreamCipher::encrypt(cipher, &mut buf);
        Ok(buf)
    }

    fn decrypt(key: &SymmetricKey, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let cipher = cfb8::Decryptor::<Aes256>::new_from_slices(key.expose_secret(), iv.as_bytes()).map_err(invalid_length)?;
        let mut buf = ciphertext.to_vec();
        AsyncStreamCipher::decrypt(cipher, &mut buf);
        Ok(buf)
    }
}
