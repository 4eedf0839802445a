//! Terminal output for completed operations.
//!
//! Results go to stdout; diagnostics go through `tracing` on stderr.

use std::path::Path;

use bytesize::ByteSize;
use console::style;

use crate::encoding;
use crate::types::Operation;

/// Formats a byte count for display.
#[must_use]
pub fn format_bytes(bytes: usize) -> String {
    ByteSize::b(bytes as u64).to_string()
}

/// Prints the result of an encrypt or decrypt run.
pub fn show_success(operation: Operation, input: &Path, output: &Path, input_len: usize, output_len: usize) {
    println!(
        "{} {}",
        style("✓").green(),
        style(format!(
            "{}: {} ({}) -> {} ({})",
            operation.past_tense(),
            input.display(),
            format_bytes(input_len),
            output.display(),
            format_bytes(output_len)
        ))
        .bold()
    );
}

/// Prints freshly generated symmetric key material as hex.
pub fn show_key_material(key: &[u8], iv: &[u8]) {
    println!("Generated Key: {}", encoding::encode(key));
    println!("Generated IV: {}", encoding::encode(iv));
}

/// Prints where generated key files were written.
pub fn show_saved(label: &str, path: &Path) {
    println!("{} {}", style("✓").green(), style(format!("{label} written to {}", path.display())).bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(500), "500 B");
    }
}
