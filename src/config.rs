//! Global Configuration Constants
//!
//! Fixed parameters shared by the symmetric and asymmetric tools. None of
//! these are runtime-configurable: the command line carries the per-run
//! inputs and `RUST_LOG` controls diagnostics.

// === Symmetric Parameters ===

/// Size of AES-256 keys in bytes
pub const KEY_SIZE: usize = 32;

/// Size of the initialization vector in bytes
///
/// Every supported mode takes a full AES block. ECB ignores it, GCM uses
/// all 16 bytes as its nonce.
pub const IV_SIZE: usize = 16;

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// Size of the GCM authentication tag appended to the ciphertext
pub const GCM_TAG_SIZE: usize = 16;

// === Asymmetric Parameters ===

/// RSA public exponent (F4)
pub const RSA_PUBLIC_EXPONENT: u64 = 65_537;

/// Smallest accepted RSA modulus in bits
pub const RSA_MIN_BITS: usize = 1024;

/// Largest accepted RSA modulus in bits
pub const RSA_MAX_BITS: usize = 16_384;

/// Length of the OAEP digest (SHA-1) in bytes
pub const OAEP_HASH_SIZE: usize = 20;

/// Bytes of every RSA block consumed by OAEP padding
pub const OAEP_OVERHEAD: usize = 2 * OAEP_HASH_SIZE + 2;

// === File I/O ===

/// Chunk size used when reading input files
pub const READ_CHUNK_SIZE: usize = 1024;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
