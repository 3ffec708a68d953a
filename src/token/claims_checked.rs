use crate::algorithm::{AlgorithmId, get_algorithm};
use crate::claims::Claims;
use crate::error::Result;
use crate::keys::SymmetricKey;
use crate::token::{ParsedToken, TokenHeader, VerifiedToken};

/// A token whose temporal claims are within bounds
///
/// This is the third stage in the verification pipeline.
/// At this stage:
/// - The token has been parsed
/// - The header is exactly `HS256` / `JWT`
/// - `exp` / `iat`, if present, are numeric and hold for the checked time
///
/// The claims were inspected before their authenticity was established.
///
/// Next step: VerifiedToken (after signature verification)
#[derive(Debug, Clone)]
pub struct ClaimsCheckedToken {
    parsed: ParsedToken,
    algorithm: AlgorithmId,
}

impl ClaimsCheckedToken {
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

    /// Verify the signature and move to VerifiedToken state
    ///
    /// The tag over the original `header.payload` text is recomputed with
    /// `key` and compared with the decoded signature segment in constant time.
    /// A segment that is not base64url is reported as `MalformedToken`.
    ///
    /// # Example
    /// ```ignore
    /// let key = SymmetricKey::from("your-secret");
    /// let verified = checked.verify_signature(&key)?;
    /// ```
    pub fn verify_signature(self, key: &SymmetricKey) -> Result<VerifiedToken> {
        let verifier = get_algorithm(&self.algorithm);
        verifier.verify(&self.parsed.signing_input(), self.parsed.signature(), key)?;
        tracing::trace!(algorithm = verifier.name(), "token signature checked");

        let (header, claims) = self.parsed.into_parts();
        Ok(VerifiedToken::new(header, self.algorithm, claims))
    }
}
