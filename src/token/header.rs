use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The only token type this crate issues or accepts
pub const TOKEN_TYPE: &str = "JWT";

/// Token header structure
///
/// Missing fields deserialize as empty strings so that a header like
/// `{"alg":"HS256"}` parses and is then rejected by [`validate_header`] rather
/// than reported as malformed. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    /// Algorithm used for signing
    #[serde(rename = "alg", default)]
    pub algorithm: String,

    /// Token type
    #[serde(rename = "typ", default)]
    pub token_type: String,
}

impl TokenHeader {
    /// Header for a freshly signed HS256 token
    pub fn hs256() -> Self {
        Self {
            algorithm: AlgorithmId::HS256.as_str().to_string(),
            token_type: TOKEN_TYPE.to_string(),
        }
    }

    /// Get algorithm as string
    pub fn algorithm_str(&self) -> &str {
        &self.algorithm
    }

    /// Get token type as string
    pub fn token_type_str(&self) -> &str {
        &self.token_type
    }
}

/// Check that the header declares exactly HS256 / JWT (case-sensitive)
pub fn validate_header(header: &TokenHeader) -> Result<AlgorithmId> {
    match AlgorithmId::from_name(&header.algorithm) {
        Some(algorithm) if header.token_type == TOKEN_TYPE => Ok(algorithm),
        _ => Err(Error::UnsupportedAlgorithm {
            alg: header.algorithm.clone(),
            typ: header.token_type.clone(),
        }),
    }
}
