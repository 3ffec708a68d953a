use crate::algorithm::AlgorithmId;
use crate::claims::Claims;
use crate::token::TokenHeader;

/// A token that passed every check
///
/// This is the final stage in the verification pipeline.
/// At this stage:
/// - The token has been parsed
/// - The header is exactly `HS256` / `JWT`
/// - All time-based claims have been validated (exp, iat)
/// - The signature has been cryptographically verified
///
/// The claims are now trusted and safe to use.
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    header: TokenHeader,
    algorithm: AlgorithmId,
    claims: Claims,
}

impl VerifiedToken {
    pub(crate) fn new(header: TokenHeader, algorithm: AlgorithmId, claims: Claims) -> Self {
        Self {
            header,
            algorithm,
            claims,
        }
    }

    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Get the algorithm
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Get the verified claims
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Accept the token, yielding its claims
    pub fn into_claims(self) -> Claims {
        self.claims
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verified_token_getters() {
        let claims: Claims = [("sub", json!("user123")), ("exp", json!(1_234_567_890))]
            .into_iter()
            .collect();

        let token = VerifiedToken::new(TokenHeader::hs256(), AlgorithmId::HS256, claims.clone());

        assert_eq!(token.header(), &TokenHeader::hs256());
        assert_eq!(token.algorithm(), AlgorithmId::HS256);
        assert_eq!(token.claims(), &claims);
        assert_eq!(token.into_claims(), claims);
    }
}
