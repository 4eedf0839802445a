//! filecipher - AES-256 and RSA-OAEP file encryption.
//!
//! The library behind two small tools:
//! - `aes-cli`: AES-256 in ECB, CBC, CTR, OFB, CFB, CFB1, CFB8 or GCM mode
//! - `rsa-cli`: RSA key generation and OAEP (SHA-1) encryption
//!
//! The RSA operations are also exported with a C ABI (see [`ffi`]) when the
//! crate is built as a `cdylib`.

pub mod app;
pub mod asymmetric;
pub mod cipher;
pub mod config;
pub mod encoding;
pub mod error;
pub mod ffi;
pub mod file;
pub mod key;
pub mod processor;
pub mod types;
pub mod ui;

pub use error::{Error, ErrorKind, Result};
