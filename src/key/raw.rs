//! Key and IV file adapters.
//!
//! Files hold the raw bytes. On read, a file whose length does not match the
//! raw size is also tried as hex text, so values copied from `genkey` output
//! can be pasted into a file directly.

use std::path::Path;

use secrecy::zeroize::Zeroizing;

use crate::config::{IV_SIZE, KEY_SIZE};
use crate::encoding;
use crate::error::Result;
use crate::file;
use crate::key::{Iv, SymmetricKey};

pub fn read_key(path: impl AsRef<Path>) -> Result<SymmetricKey> {
    let data = Zeroizing::new(file::read(path)?);
    let material = Zeroizing::new(raw_or_hex(&data, KEY_SIZE));
    SymmetricKey::from_slice(&material)
}

pub fn read_iv(path: impl AsRef<Path>) -> Result<Iv> {
    let data = file::read(path)?;
    Iv::from_slice(&raw_or_hex(&data, IV_SIZE))
}

pub fn write_key(path: impl AsRef<Path>, key: &SymmetricKey) -> Result<()> {
    file::write(path, key.expose_secret())
}

pub fn write_iv(path: impl AsRef<Path>, iv: &Iv) -> Result<()> {
    file::write(path, iv.as_bytes())
}

fn raw_or_hex(data: &[u8], expected: usize) -> Vec<u8> {
    if data.len() == expected {
        return data.to_vec();
    }

    std::str::from_utf8(data).ok().and_then(|text| encoding::decode(text).ok()).unwrap_or_else(|| data.to_vec())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_raw_roundtrip() {
        let dir = tempdir().unwrap();
        let key_path = dir.path().join("key.bin");
        let iv_path = dir.path().join("iv.bin");
        let key = SymmetricKey::generate().unwrap();
        let iv = Iv::generate().unwrap();

        write_key(&key_path, &key).unwrap();
        write_iv(&iv_path, &iv).unwrap();

        assert_eq!(file::read(&key_path).unwrap().len(), KEY_SIZE);
        assert_eq!(read_key(&key_path).unwrap().expose_secret(), key.expose_secret());
        assert_eq!(read_iv(&iv_path).unwrap(), iv);
    }

    #[test]
    fn test_reads_hex_text() {
        let dir = tempdir().unwrap();
        let key_path = dir.path().join("key.hex");
        let iv_path = dir.path().join("iv.hex");

        file::write(&key_path, format!("{}\n", "11".repeat(KEY_SIZE)).as_bytes()).unwrap();
        file::write(&iv_path, "AA".repeat(IV_SIZE).as_bytes()).unwrap();

        assert_eq!(read_key(&key_path).unwrap().expose_secret(), &[0x11; KEY_SIZE]);
        assert_eq!(read_iv(&iv_path).unwrap().as_bytes(), &[0xAA; IV_SIZE]);
    }

    #[test]
    fn test_raw_hex_lookalike_is_taken_verbatim() {
        let dir = tempdir().unwrap();
        let iv_path = dir.path().join("iv.bin");
        file::write(&iv_path, b"0123456789abcdef").unwrap();

        assert_eq!(read_iv(&iv_path).unwrap().as_bytes(), b"0123456789abcdef");
    }

    #[test]
    fn test_wrong_length_reports_actual_size() {
        let dir = tempdir().unwrap();
        let key_path = dir.path().join("short.bin");
        file::write(&key_path, b"too short").unwrap();

        assert!(matches!(read_key(&key_path), Err(Error::InvalidKeyLength { expected: 32, actual: 9 })));
    }

    #[test]
    fn test_hex_of_wrong_length() {
        let dir = tempdir().unwrap();
        let iv_path = dir.path().join("iv.hex");
        file::write(&iv_path, "ab".repeat(12).as_bytes()).unwrap();

        assert!(matches!(read_iv(&iv_path), Err(Error::InvalidIvLength { expected: 16, actual: 12 })));
    }
}
