use aes::Aes256;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use block_padding::Pkcs7;

use crate::cipher::{ModeCipher, invalid_length};
use crate::config::BLOCK_SIZE;
use crate::error::{Error, Result};
use crate::key::{Iv, SymmetricKey};

type Aes256EcbEnc = ecb::Encryptor<Aes256>;
type Aes256EcbDec = ecb::Decryptor<Aes256>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES-256-ECB with PKCS#7 padding. The IV is ignored.
pub struct Ecb;

/// AES-256-CBC with PKCS#7 padding.
pub struct Cbc;

impl ModeCipher for Ecb {
    fn encrypt(key: &SymmetricKey, _iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256EcbEnc::new_from_slice(key.expose_secret()).map_err(invalid_length)?;
        Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt(key: &SymmetricKey, _iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_blocks(ciphertext)?;
        let cipher = Aes256EcbDec::new_from_slice(key.expose_secret()).map_err(invalid_length)?;
        cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext).map_err(|_| bad_padding())
    }
}

impl ModeCipher for Cbc {
    fn encrypt(key: &SymmetricKey, iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256CbcEnc::new_from_slices(key.expose_secret(), iv.as_bytes()).map_err(invalid_length)?;
        Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt(key: &SymmetricKey, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_blocks(ciphertext)?;
        let cipher = Aes256CbcDec::new_from_slices(key.expose_secret(), iv.as_bytes()).map_err(invalid_length)?;
        cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext).map_err(|_| bad_padding())
    }
}

fn check_blocks(ciphertext: &[u8]) -> Result<()> {
    if ciphertext.is_empty() || !ciphertext.len().is_multiple_of(BLOCK_SIZE) {
        return Err(Error::Crypto(format!("ciphertext length {} is not a positive multiple of {BLOCK_SIZE}", ciphertext.len())));
    }
    Ok(())
}

fn bad_padding() -> Error {
    Error::Crypto("decryption failed: bad padding".into())
}
