use crate::algorithm::AlgorithmId;
use crate::claims::{Claims, validate_claims};
use crate::error::Result;
use crate::token::{ClaimsCheckedToken, ParsedToken, TokenHeader};

/// A token whose header declares the supported algorithm and type
///
/// This is the second stage in the verification pipeline.
/// At this stage:
/// - The token has been parsed
/// - The header is exactly `HS256` / `JWT`
///
/// Next step: ClaimsCheckedToken (after temporal validation)
#[derive(Debug, Clone)]
pub struct HeaderCheckedToken {
    parsed: ParsedToken,
    algorithm: AlgorithmId,
}

impl HeaderCheckedToken {
    pub(crate) fn new(parsed: ParsedToken, algorithm: AlgorithmId) -> Self {
        Self { parsed, algorithm }
    }

    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        self.parsed.header()
    }

    /// Get the algorithm
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Get the claims (before verification)
    ///
    /// Note: You should not trust this data until after signature verification!
    pub fn claims(&self) -> &Claims {
        self.parsed.claims()
    }

    /// Validate `exp` / `iat` against `now` and move to ClaimsCheckedToken state
    ///
    /// The claims are still unauthenticated at this point: the signature is
    /// only checked in the next stage.
    pub fn check_claims(self, now: i64) -> Result<ClaimsCheckedToken> {
        validate_claims(self.parsed.claims(), now)?;
        tracing::trace!(now, "token claims checked");
        Ok(ClaimsCheckedToken::new(self.parsed, self.algorithm))
    }
}
