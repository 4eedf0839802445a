//! Key material: symmetric keys and IVs, RSA key pairs, and the file
//! adapters that load and persist them.
//!
//! Cipher code only ever sees the typed values; paths stop at the adapters
//! in [`raw`] and [`pem`].

mod keypair;
pub mod pem;
pub mod raw;
mod symmetric;

pub use keypair::RsaKeyPair;
pub use symmetric::{Iv, SymmetricKey};
