use rsa::rand_core::OsRng;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use tracing::debug;

use crate::config::{RSA_MAX_BITS, RSA_MIN_BITS, RSA_PUBLIC_EXPONENT};
use crate::error::{Error, Result};

/// An RSA private key together with its public half.
#[derive(Clone)]
pub struct RsaKeyPair {
    private: RsaPrivateKey,
    public: RsaPublicKey,
}

impl RsaKeyPair {
    /// Generates a key pair of `bits` with public exponent 65537.
    pub fn generate(bits: usize) -> Result<Self> {
        if !(RSA_MIN_BITS..=RSA_MAX_BITS).contains(&bits) {
            return Err(Error::InvalidArgument(format!("rsa key size must be between {RSA_MIN_BITS} and {RSA_MAX_BITS} bits, got {bits}")));
        }

        debug!(bits, "generating rsa key pair");
        let exponent = BigUint::from(RSA_PUBLIC_EXPONENT);
        let private = RsaPrivateKey::new_with_exp(&mut OsRng, bits, &exponent).map_err(|e| Error::Provider(format!("rsa key generation failed: {e}")))?;

        Ok(Self::from_private(private))
    }

    pub fn from_private(private: RsaPrivateKey) -> Self {
        let public = RsaPublicKey::from(&private);
        Self { private, public }
    }

    #[inline]
    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private
    }

    #[inline]
    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public
    }
}
