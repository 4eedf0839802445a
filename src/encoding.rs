//! Hex encoding for key material shown to or typed by humans.

use crate::error::Result;

/// Encodes bytes as lowercase hex.
#[inline]
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes a hex string, ignoring surrounding whitespace.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_encode_lowercase() {
        assert_eq!(encode(&[0xDE, 0xAD, 0xBE, 0xEF]), "deadbeef");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_decode_mixed_case_and_whitespace() {
        assert_eq!(decode("  DeadBEEF\n").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_decode_odd_length() {
        assert!(matches!(decode("abc"), Err(Error::Encoding(_))));
    }

    #[test]
    fn test_decode_invalid_character() {
        assert!(matches!(decode("zz"), Err(Error::Encoding(_))));
    }
}
