//! # Symmetric Cipher Module
//!
//! AES-256 over a caller-selected block-cipher mode. Each mode is a marker
//! type implementing [`ModeCipher`]; [`SymmetricCipher`] maps the runtime
//! [`Mode`] onto the right implementation.
//!
//! | mode | padding | ciphertext length |
//! |------|---------|-------------------|
//! | ECB, CBC | PKCS#7 | next multiple of 16 above the plaintext |
//! | CTR, OFB, CFB, CFB1, CFB8 | none | same as plaintext |
//! | GCM | none | plaintext + 16-byte tag |
//!
//! Only GCM authenticates. The other modes either reject tampered data
//! through a padding failure or return garbled plaintext.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::debug;

mod cfb1;
mod gcm;
mod padded;
mod stream;

pub use cfb1::Cfb1;
pub use gcm::Gcm;
pub use padded::{Cbc, Ecb};
pub use stream::{Cfb, Cfb8, Ctr, Ofb};

use crate::error::{Error, Result};
use crate::key::{Iv, SymmetricKey};

/// Block-cipher mode, parsed case-insensitively from its lowercase name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    Ecb,
    Cbc,
    Ctr,
    Ofb,
    Cfb,
    Cfb1,
    Cfb8,
    Gcm,
}

impl Mode {
    /// Parses a mode name, reporting unknown names as [`Error::UnsupportedMode`].
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| Error::UnsupportedMode(name.to_owned()))
    }

    /// Comma-separated list of every mode name, for usage text.
    pub fn names() -> String {
        Self::iter().map(|m| m.to_string()).collect::<Vec<_>>().join(", ")
    }

    /// Whether the mode pads to the block size.
    #[inline]
    pub fn is_padded(self) -> bool {
        matches!(self, Self::Ecb | Self::Cbc)
    }

    /// Whether the mode detects tampering on its own.
    #[inline]
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Gcm)
    }
}

/// Encryption and decryption for one mode.
pub trait ModeCipher {
    fn encrypt(key: &SymmetricKey, iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>>;

    fn decrypt(key: &SymmetricKey, iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// AES-256 bound to a single mode.
#[derive(Clone, Copy, Debug)]
pub struct SymmetricCipher {
    mode: Mode,
}

impl SymmetricCipher {
    #[inline]
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn encrypt(&self, plaintext: &[u8], key: &SymmetricKey, iv: &Iv) -> Result<Vec<u8>> {
        debug!(mode = %self.mode, bytes = plaintext.len(), "encrypting");
        match self.mode {
            Mode::Ecb => Ecb::encrypt(key, iv, plaintext),
            Mode::Cbc => Cbc::encrypt(key, iv, plaintext),
            Mode::Ctr => Ctr::encrypt(key, iv, plaintext),
            Mode::Ofb => Ofb::encrypt(key, iv, plaintext),
            Mode::Cfb => Cfb::encrypt(key, iv, plaintext),
            Mode::Cfb1 => Cfb1::encrypt(key, iv, plaintext),
            Mode::Cfb8 => Cfb8::encrypt(key, iv, plaintext),
            Mode::Gcm => Gcm::encrypt(key, iv, plaintext),
        }
    }

    pub fn decrypt(&self, ciphertext: &[u8], key: &SymmetricKey, iv: &Iv) -> Result<Vec<u8>> {
        debug!(mode = %self.mode, bytes = ciphertext.len(), "decrypting");
        match self.mode {
            Mode::Ecb => Ecb::decrypt(key, iv, ciphertext),
            Mode::Cbc => Cbc::decrypt(key, iv, ciphertext),
            Mode::Ctr => Ctr::decrypt(key, iv, ciphertext),
            Mode::Ofb => Ofb::decrypt(key, iv, ciphertext),
            Mode::Cfb => Cfb::decrypt(key, iv, ciphertext),
            Mode::Cfb1 => Cfb1::decrypt(key, iv, ciphertext),
            Mode::Cfb8 => Cfb8::decrypt(key, iv, ciphertext),
            Mode::Gcm => Gcm::decrypt(key, iv, ciphertext),
        }
    }
}

/// Encrypts `plaintext` under `mode`.
#[inline]
pub fn encrypt(plaintext: &[u8], key: &SymmetricKey, iv: &Iv, mode: Mode) -> Result<Vec<u8>> {
    SymmetricCipher::new(mode).encrypt(plaintext, key, iv)
}

/// Decrypts `ciphertext` under `mode`.
#[inline]
pub fn decrypt(ciphertext: &[u8], key: &SymmetricKey, iv: &Iv, mode: Mode) -> Result<Vec<u8>> {
    SymmetricCipher::new(mode).decrypt(ciphertext, key, iv)
}

fn invalid_length(_: aes::cipher::InvalidLength) -> Error {
    Error::Crypto("cipher rejected key or iv length".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IV_SIZE, KEY_SIZE};

    const NIST_KEY: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
    const NIST_IV: &str = "000102030405060708090a0b0c0d0e0f";
    const NIST_CTR_IV: &str = "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff";
    const NIST_PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172a";

    fn nist_key() -> SymmetricKey {
        SymmetricKey::from_slice(&hex::decode(NIST_KEY).unwrap()).unwrap()
    }

    fn nist_iv(iv: &str) -> Iv {
        Iv::from_slice(&hex::decode(iv).unwrap()).unwrap()
    }

    fn fixture() -> (SymmetricKey, Iv) {
        (SymmetricKey::new([0x42; KEY_SIZE]), Iv::new([0x24; IV_SIZE]))
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse("cbc").unwrap(), Mode::Cbc);
        assert_eq!(Mode::parse("CFB8").unwrap(), Mode::Cfb8);
        assert_eq!(Mode::parse("cfb1").unwrap(), Mode::Cfb1);
        assert!(matches!(Mode::parse("xts"), Err(Error::UnsupportedMode(name)) if name == "xts"));
        assert!(Mode::parse("").is_err());
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(Mode::names(), "ecb, cbc, ctr, ofb, cfb, cfb1, cfb8, gcm");
        assert_eq!(Mode::Cfb1.to_string(), "cfb1");
    }

    #[test]
    fn test_roundtrip_all_modes() {
        let (key, iv) = fixture();
        let plaintext = b"The quick brown fox jumps over the lazy dog, twice over.";

        for mode in Mode::iter() {
            let ciphertext = encrypt(plaintext, &key, &iv, mode).unwrap();
            assert_ne!(&ciphertext[..plaintext.len().min(ciphertext.len())], &plaintext[..], "{mode}");
            assert_eq!(decrypt(&ciphertext, &key, &iv, mode).unwrap(), plaintext, "{mode}");
        }
    }

    #[test]
    fn test_roundtrip_empty_plaintext() {
        let (key, iv) = fixture();

        for mode in Mode::iter() {
            let ciphertext = encrypt(b"", &key, &iv, mode).unwrap();
            assert!(decrypt(&ciphertext, &key, &iv, mode).unwrap().is_empty(), "{mode}");
        }
    }

    #[test]
    fn test_ciphertext_lengths() {
        let (key, iv) = fixture();

        for mode in Mode::iter() {
            for len in [0usize, 1, 15, 16, 17, 33] {
                let plaintext = vec![0x5A; len];
                let ciphertext = encrypt(&plaintext, &key, &iv, mode).unwrap();
                let expected = if mode.is_padded() {
                    (len / 16 + 1) * 16
                } else if mode.is_authenticated() {
                    len + 16
                } else {
                    len
                };
                assert_eq!(ciphertext.len(), expected, "{mode} len {len}");
            }
        }
    }

    #[test]
    fn test_cbc_five_bytes() {
        let (key, iv) = fixture();
        let ciphertext = encrypt(b"hello", &key, &iv, Mode::Cbc).unwrap();
        assert_eq!(ciphertext.len(), 16);
        assert_eq!(decrypt(&ciphertext, &key, &iv, Mode::Cbc).unwrap(), b"hello");
    }

    #[test]
    fn test_nist_vectors() {
        let key = nist_key();
        let iv = nist_iv(NIST_IV);
        let plaintext = hex::decode(NIST_PLAINTEXT).unwrap();

        let ecb = encrypt(&plaintext, &key, &iv, Mode::Ecb).unwrap();
        assert_eq!(hex::encode(&ecb[..16]), "f3eed1bdb5d2a03c064b5a7e3db181f8");

        let cbc = encrypt(&plaintext, &key, &iv, Mode::Cbc).unwrap();
        assert_eq!(hex::encode(&cbc[..16]), "f58c4c04d6e5f1ba779eabfb5f7bfbd6");

        let cfb = encrypt(&plaintext, &key, &iv, Mode::Cfb).unwrap();
        assert_eq!(hex::encode(&cfb), "dc7e84bfda79164b7ecd8486985d3860");

        let ofb = encrypt(&plaintext, &key, &iv, Mode::Ofb).unwrap();
        assert_eq!(hex::encode(&ofb), "dc7e84bfda79164b7ecd8486985d3860");

        let ctr = encrypt(&plaintext, &key, &nist_iv(NIST_CTR_IV), Mode::Ctr).unwrap();
        assert_eq!(hex::encode(&ctr), "601ec313775789a5b7a7f504bbf3d228");
    }

    #[test]
    fn test_cfb_variants_share_first_keystream_bits() {
        let key = nist_key();
        let iv = nist_iv(NIST_IV);
        let plaintext = hex::decode(NIST_PLAINTEXT).unwrap();

        let cfb = encrypt(&plaintext, &key, &iv, Mode::Cfb).unwrap();
        let cfb8 = encrypt(&plaintext, &key, &iv, Mode::Cfb8).unwrap();
        let cfb1 = encrypt(&plaintext, &key, &iv, Mode::Cfb1).unwrap();

        assert_eq!(cfb8[0], cfb[0]);
        assert_eq!(cfb1[0] & 0x80, cfb[0] & 0x80);
    }

    #[test]
    fn test_cfb8_nist_vector() {
        let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172aae2d").unwrap();
        let ciphertext = encrypt(&plaintext, &nist_key(), &nist_iv(NIST_IV), Mode::Cfb8).unwrap();
        assert_eq!(hex::encode(&ciphertext), "dc1f1a8520a64db55fcc8ac554844e889700");
        assert_eq!(decrypt(&ciphertext, &nist_key(), &nist_iv(NIST_IV), Mode::Cfb8).unwrap(), plaintext);
    }

    #[test]
    fn test_cfb1_nist_vector() {
        // 16 one-bit segments: 0110101111000001 -> 1001000000101001
        let ciphertext = encrypt(&[0x6B, 0xC1], &nist_key(), &nist_iv(NIST_IV), Mode::Cfb1).unwrap();
        assert_eq!(ciphertext, [0x90, 0x29]);
        assert_eq!(decrypt(&ciphertext, &nist_key(), &nist_iv(NIST_IV), Mode::Cfb1).unwrap(), [0x6B, 0xC1]);
    }

    #[test]
    fn test_ecb_ignores_iv() {
        let (key, iv) = fixture();
        let other_iv = Iv::new([0x99; IV_SIZE]);

        let a = encrypt(b"same input", &key, &iv, Mode::Ecb).unwrap();
        let b = encrypt(b"same input", &key, &other_iv, Mode::Ecb).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_iv_changes_output() {
        let (key, iv) = fixture();
        let other_iv = Iv::new([0x99; IV_SIZE]);

        for mode in Mode::iter().filter(|m| *m != Mode::Ecb) {
            let a = encrypt(b"same input", &key, &iv, mode).unwrap();
            let b = encrypt(b"same input", &key, &other_iv, mode).unwrap();
            assert_ne!(a, b, "{mode}");
        }
    }

    #[test]
    fn test_tampered_ciphertext_never_yields_plaintext() {
        let (key, iv) = fixture();
        let plaintext = b"attack at dawn, bring snacks";

        for mode in Mode::iter() {
            let mut ciphertext = encrypt(plaintext, &key, &iv, mode).unwrap();
            ciphertext[0] ^= 0x01;

            match decrypt(&ciphertext, &key, &iv, mode) {
                Ok(recovered) => {
                    assert!(!mode.is_authenticated(), "{mode} accepted tampered data");
                    assert_ne!(recovered, plaintext, "{mode}");
                }
                Err(err) => assert!(matches!(err, Error::Crypto(_)), "{mode}: {err}"),
            }
        }
    }

    #[test]
    fn test_gcm_rejects_tampered_tag() {
        let (key, iv) = fixture();
        let mut ciphertext = encrypt(b"payload", &key, &iv, Mode::Gcm).unwrap();
        let last = ciphertext.len() - 1;
        ciphertext[last] ^= 0x80;

        let err = decrypt(&ciphertext, &key, &iv, Mode::Gcm).unwrap_err();
        assert!(err.to_string().contains("authentication failed"));
    }

    #[test]
    fn test_gcm_rejects_short_input() {
        let (key, iv) = fixture();
        assert!(matches!(decrypt(&[0u8; 15], &key, &iv, Mode::Gcm), Err(Error::Crypto(_))));
    }

    #[test]
    fn test_padded_modes_reject_partial_blocks() {
        let (key, iv) = fixture();
        for mode in [Mode::Ecb, Mode::Cbc] {
            assert!(matches!(decrypt(&[0u8; 17], &key, &iv, mode), Err(Error::Crypto(_))), "{mode}");
            assert!(matches!(decrypt(&[], &key, &iv, mode), Err(Error::Crypto(_))), "{mode}");
        }
    }

    #[test]
    fn test_wrong_key_fails_or_garbles() {
        let (key, iv) = fixture();
        let other_key = SymmetricKey::new([0x43; KEY_SIZE]);
        let plaintext = b"0123456789abcdef0123";

        for mode in Mode::iter() {
            let ciphertext = encrypt(plaintext, &key, &iv, mode).unwrap();
            if let Ok(recovered) = decrypt(&ciphertext, &other_key, &iv, mode) {
                assert!(!mode.is_authenticated(), "{mode}");
                assert_ne!(recovered, plaintext, "{mode}");
            }
        }
    }
}
