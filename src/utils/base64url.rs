//! Base64URL encoding/decoding per RFC 4648
//!
//! URL-safe alphabet, no padding. A thin wrapper around the `base64` crate that
//! rejects padded input and non-canonical trailing bits.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use thiserror::Error;

/// Input was not valid padding-free Base64URL
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DecodeError(String);

impl DecodeError {
    /// Human readable reason
    pub fn reason(&self) -> &str {
        &self.0
    }
}

/// Encode bytes to Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode Base64URL string to bytes
pub fn decode_bytes(input: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| DecodeError(e.to_string()))
}

/// Decode Base64URL string to UTF-8 string
pub fn decode(input: &str) -> Result<String, DecodeError> {
    let bytes = decode_bytes(input)?;
    String::from_utf8(bytes).map_err(|e| DecodeError(format!("Invalid UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let tests = vec![
            "",
            "f",
            "fo",
            "foo",
            "foob",
            "fooba",
            "foobar",
            "Hello, World!",
            "The quick brown fox jumps over the lazy dog",
        ];

        for test in tests {
            let encoded = encode(test);
            let decoded = decode(&encoded).unwrap();
            assert_eq!(test, decoded, "Roundtrip failed for: {}", test);
        }
    }

    #[test]
    fn test_encode_bytes() {
        assert_eq!(encode_bytes(b""), "");
        assert_eq!(encode_bytes(b"f"), "Zg");
        assert_eq!(encode_bytes(b"fo"), "Zm8");
        assert_eq!(encode_bytes(b"foo"), "Zm9v");
        assert_eq!(encode_bytes(b"foob"), "Zm9vYg");
        assert_eq!(encode_bytes(b"fooba"), "Zm9vYmE");
        assert_eq!(encode_bytes(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_binary_roundtrip() {
        let bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(decode_bytes(&encode_bytes(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_decode_invalid() {
        assert!(decode_bytes("!!!").is_err());
        assert!(decode_bytes("A").is_err()); // Incomplete
        assert!(decode_bytes("Zm9v+g").is_err()); // Standard alphabet
        assert!(decode_bytes("Zg==").is_err()); // Padding
        assert!(decode_bytes("Zh").is_err()); // Non-canonical trailing bits
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let encoded = encode_bytes(&[0xff, 0xfe]);
        assert!(decode_bytes(&encoded).is_ok());
        let err = decode(&encoded).unwrap_err();
        assert!(err.reason().starts_with("Invalid UTF-8"));
    }

    #[test]
    fn test_url_safe_characters() {
        // Base64URL uses - and _ instead of + and /
        let bytes = vec![0xfb, 0xff];
        let encoded = encode_bytes(&bytes);
        assert!(encoded.contains('-') || encoded.contains('_'));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
    }
}
