//! Whole-file reads and writes.
//!
//! Inputs are read through a buffered reader in fixed chunks and accumulated
//! into a single buffer; outputs are written in one go with overwrite
//! semantics. Callers finish all cryptographic work before calling
//! [`write`], so a failed run never leaves a partial output behind.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::config::READ_CHUNK_SIZE;
use crate::error::{Error, Result};

/// Reads the whole file at `path`.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = BufReader::new(file);

    let mut data = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => data.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(Error::io(path, e)),
        }
    }

    debug!(path = %path.display(), bytes = data.len(), "read file");
    Ok(data)
}

/// Writes `data` to `path`, creating parent directories and truncating any
/// existing file.
pub fn write(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let file = OpenOptions::new().write(true).create(true).truncate(true).open(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(data).map_err(|e| Error::io(path, e))?;
    writer.flush().map_err(|e| Error::io(path, e))?;

    debug!(path = %path.display(), bytes = data.len(), "wrote file");
    Ok(())
}
