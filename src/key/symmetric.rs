use rand::rand_core::{OsRng, TryRngCore};
use secrecy::{ExposeSecret, SecretBox};

use crate::config::{IV_SIZE, KEY_SIZE};
use crate::error::{Error, Result};

/// AES-256 key. Zeroized on drop and redacted from `Debug` output.
pub struct SymmetricKey {
    inner: SecretBox<[u8; KEY_SIZE]>,
}

impl SymmetricKey {
    /// Generates a fresh key from the operating system RNG.
    pub fn generate() -> Result<Self> {
        Ok(Self::new(random_bytes::<KEY_SIZE>()?))
    }

    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self { inner: SecretBox::new(Box::new(bytes)) }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| Error::InvalidKeyLength { expected: KEY_SIZE, actual: bytes.len() })?;
        Ok(Self::new(bytes))
    }

    #[inline]
    pub fn expose_secret(&self) -> &[u8; KEY_SIZE] {
        self.inner.expose_secret()
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymmetricKey([... {KEY_SIZE} bytes ...])")
    }
}

/// Initialization vector, one AES block.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Iv([u8; IV_SIZE]);

impl Iv {
    pub fn generate() -> Result<Self> {
        Ok(Self(random_bytes::<IV_SIZE>()?))
    }

    pub fn new(bytes: [u8; IV_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; IV_SIZE] = bytes.try_into().map_err(|_| Error::InvalidIvLength { expected: IV_SIZE, actual: bytes.len() })?;
        Ok(Self(bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; IV_SIZE] {
        &self.0
    }
}

fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    OsRng.try_fill_bytes(&mut bytes).map_err(|e| Error::Provider(format!("rng failed: {e}")))?;
    Ok(bytes)
}
