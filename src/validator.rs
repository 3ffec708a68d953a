//! Token verification
//!
//! [`TokenValidator`] drives a token through the pipeline stages in a fixed
//! order:
//!
//! ```text
//! ParsedToken           (three segments decoded, header and claims parsed)
//!     │ .check_header()
//!     ▼
//! HeaderCheckedToken    (alg/typ are exactly HS256/JWT)
//!     │ .check_claims(now)
//!     ▼
//! ClaimsCheckedToken    (exp/iat numeric and within bounds)
//!     │ .verify_signature(key)
//!     ▼
//! VerifiedToken         (tag recomputed and compared in constant time)
//!     │ .into_claims()
//!     ▼
//! Claims
//! ```
//!
//! The first failing stage decides the error. Temporal claims are checked
//! before the signature, so an expired token with a forged signature reports
//! `TokenExpired`, not `SignatureMismatch`.

use crate::claims::Claims;
use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::keys::SymmetricKey;
use crate::token::{ParsedToken, VerifiedToken};
use std::sync::Arc;

/// HS256 token validator
///
/// The validator is configured once and can be reused for multiple token
/// verifications. The current time is read once per call.
///
/// # Example
///
/// ```
/// use hsjwt::{Claims, TokenIssuer, TokenValidator};
///
/// let token = TokenIssuer::new("secret").sign(&Claims::new()).unwrap();
/// let claims = TokenValidator::new("secret").verify(&token).unwrap();
/// assert!(claims.contains_key("exp"));
/// ```
#[derive(Clone)]
pub struct TokenValidator {
    key: SymmetricKey,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TokenValidator {
    /// Create a validator using the system clock
    ///
    /// An empty secret is not rejected here; tokens simply fail the signature
    /// check.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            key: SymmetricKey::new(secret.as_ref()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Set the clock used for `exp` / `iat` checks
    pub fn clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Verify a token string, returning its claims
    pub fn verify(&self, token: &str) -> Result<Claims> {
        self.verify_token(token).map(VerifiedToken::into_claims)
    }

    /// Verify a token string, returning the verified token with its header
    pub fn verify_token(&self, token: &str) -> Result<VerifiedToken> {
        let now = self.clock.now();

        let verified = ParsedToken::from_string(token)?
            .check_header()?
            .check_claims(now)?
            .verify_signature(&self.key)?;

        tracing::debug!(claims = verified.claims().len(), "token accepted");
        Ok(verified)
    }
}
