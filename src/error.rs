//! Errors for hsjwt

use thiserror::Error;

/// Token segment, used to point format errors at the part that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// First segment (`alg` / `typ` JSON)
    Header,
    /// Second segment (claims JSON)
    Claims,
    /// Third segment (HMAC tag)
    Signature,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Header => write!(f, "header"),
            Segment::Claims => write!(f, "claims"),
            Segment::Signature => write!(f, "signature"),
        }
    }
}

/// hsjwt Errors
///
/// Every failure is reported with its own variant. Nothing is retried or
/// logged internally; a token is either accepted or rejected as a whole.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Signing Errors
    // ============================================================================
    #[error("Secret must not be empty")]
    EmptySecret,

    #[error("Claims serialization failed: {0}")]
    Serialization(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Signed token would be {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Malformed token: {0}")]
    MalformedToken(FormatError),

    // ============================================================================
    // Header Errors
    // ============================================================================
    #[error("Unsupported token type or algorithm: alg '{alg}', typ '{typ}' (expected HS256 / JWT)")]
    UnsupportedAlgorithm { alg: String, typ: String },

    // ============================================================================
    // Claim Errors
    // ============================================================================
    #[error("Claim '{claim}' must be a numeric Unix timestamp")]
    ClaimType { claim: String },

    #[error("Token expired at {expired_at} (now: {now})")]
    TokenExpired { expired_at: i64, now: i64 },

    #[error("Token used before issue time {issued_at} (now: {now})")]
    TokenNotYetValid { issued_at: i64, now: i64 },

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureMismatch,
}

/// Structural problems found while parsing the wire form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("token too large: {size} bytes (maximum: {max} bytes)")]
    TooLarge { size: usize, max: usize },

    #[error("expected three parts separated by '.', found {0}")]
    SegmentCount(usize),

    #[error("{0} segment is empty")]
    EmptySegment(Segment),

    #[error("invalid {segment} encoding: {reason}")]
    Base64 { segment: Segment, reason: String },

    #[error("invalid {segment} JSON: {reason}")]
    Json { segment: Segment, reason: String },
}

impl From<FormatError> for Error {
    fn from(err: FormatError) -> Self {
        Error::MalformedToken(err)
    }
}

/// Result type alias for hsjwt operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_converts_to_malformed() {
        let err: Error = FormatError::SegmentCount(4).into();
        assert!(matches!(
            err,
            Error::MalformedToken(FormatError::SegmentCount(4))
        ));
    }

    #[test]
    fn test_messages_name_the_segment() {
        let err = Error::from(FormatError::Base64 {
            segment: Segment::Claims,
            reason: "Invalid byte 33, offset 0.".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Malformed token: invalid claims encoding: Invalid byte 33, offset 0."
        );

        let err = Error::from(FormatError::EmptySegment(Segment::Signature));
        assert_eq!(err.to_string(), "Malformed token: signature segment is empty");
    }

    #[test]
    fn test_oversized_signing_message() {
        let err = Error::TokenTooLarge {
            size: 66_808,
            max: 65_536,
        };
        assert_eq!(
            err.to_string(),
            "Signed token would be 66808 bytes (maximum: 65536 bytes)"
        );
    }

    #[test]
    fn test_temporal_messages() {
        let err = Error::TokenExpired {
            expired_at: 100,
            now: 101,
        };
        assert_eq!(err.to_string(), "Token expired at 100 (now: 101)");

        let err = Error::ClaimType {
            claim: "exp".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Claim 'exp' must be a numeric Unix timestamp"
        );
    }
}
