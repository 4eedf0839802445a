//! PEM adapters for RSA keys.
//!
//! Public keys are written as SubjectPublicKeyInfo (`BEGIN PUBLIC KEY`) and
//! private keys as PKCS#1 (`BEGIN RSA PRIVATE KEY`), the layout OpenSSL's
//! classic RSA writers produce. Both PKCS#1 and PKCS#8/SPKI are accepted
//! on read.

use std::path::Path;

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};
use secrecy::zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::file;

pub fn encode_public(key: &RsaPublicKey) -> Result<String> {
    key.to_public_key_pem(LineEnding::LF).map_err(|e| Error::KeyFormat(format!("cannot encode public key: {e}")))
}

pub fn encode_private(key: &RsaPrivateKey) -> Result<Zeroizing<String>> {
    key.to_pkcs1_pem(LineEnding::LF).map_err(|e| Error::KeyFormat(format!("cannot encode private key: {e}")))
}

pub fn decode_public(pem: &str) -> Result<RsaPublicKey> {
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| Error::KeyFormat(format!("not an rsa public key: {e}")))
}

pub fn decode_private(pem: &str) -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs1_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
        .map_err(|e| Error::KeyFormat(format!("not an rsa private key: {e}")))
}

pub fn write_public(path: impl AsRef<Path>, key: &RsaPublicKey) -> Result<()> {
    file::write(path, encode_public(key)?.as_bytes())
}

pub fn write_private(path: impl AsRef<Path>, key: &RsaPrivateKey) -> Result<()> {
    file::write(path, encode_private(key)?.as_bytes())
}

pub fn read_public(path: impl AsRef<Path>) -> Result<RsaPublicKey> {
    decode_public(&read_text(path.as_ref())?)
}

pub fn read_private(path: impl AsRef<Path>) -> Result<RsaPrivateKey> {
    let text = Zeroizing::new(read_text(path.as_ref())?);
    decode_private(&text)
}

fn read_text(path: &Path) -> Result<String> {
    String::from_utf8(file::read(path)?).map_err(|_| Error::KeyFormat(format!("{} is not a PEM file", path.display())))
}
