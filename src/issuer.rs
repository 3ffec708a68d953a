//! Token issuance
//!
//! [`TokenIssuer`] turns a claim set into a signed three-part token. The
//! outbound claims are built in two explicit phases: first the defaults
//! (`iat = now`, `exp = now + ttl`), then every caller claim except `iat`.
//! A caller `exp` replaces the default; a caller `iat` is dropped, so the issue
//! time is always the issuer's own clock and cannot be backdated.

use crate::algorithm::{AlgorithmId, get_algorithm};
use crate::claims::{Claims, EXPIRATION, ISSUED_AT};
use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::keys::SymmetricKey;
use crate::limits::{DEFAULT_TTL_SECONDS, MAX_TOKEN_LENGTH};
use crate::token::TokenHeader;
use crate::utils::base64url;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Signs claim sets into HS256 tokens
///
/// The issuer is configured once and can be reused (and shared across threads)
/// for any number of tokens.
///
/// # Example
///
/// ```
/// use hsjwt::{Claims, FixedClock, TokenIssuer};
/// use std::time::Duration;
///
/// let issuer = TokenIssuer::new("my-top-secret-is-here")
///     .ttl(Duration::from_secs(3600))
///     .clock(FixedClock(1_758_714_780));
///
/// let mut claims = Claims::new();
/// claims.insert("sub", "peekabo");
///
/// let token = issuer.sign(&claims).unwrap();
/// assert_eq!(token.split('.').count(), 3);
/// ```
#[derive(Clone)]
pub struct TokenIssuer {
    key: SymmetricKey,
    ttl_seconds: u64,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TokenIssuer {
    /// Create an issuer with a 10 minute default lifetime and the system clock
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            key: SymmetricKey::new(secret.as_ref()),
            ttl_seconds: DEFAULT_TTL_SECONDS,
            clock: Arc::new(SystemClock),
        }
    }

    /// Set the lifetime used when the caller supplies no `exp`
    ///
    /// Sub-second parts are ignored.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl_seconds = ttl.as_secs();
        self
    }

    /// Set the clock used to stamp `iat` and the default `exp`
    pub fn clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Sign a claim set
    ///
    /// Fails with [`Error::EmptySecret`] when the issuer has no key material,
    /// with [`Error::Serialization`] if the claims cannot be written as JSON,
    /// and with [`Error::TokenTooLarge`] if the token would exceed
    /// [`MAX_TOKEN_LENGTH`] and so could never be verified.
    pub fn sign(&self, claims: &Claims) -> Result<String> {
        if self.key.is_empty() {
            return Err(Error::EmptySecret);
        }

        let header = TokenHeader::hs256();
        let payload = self.outbound_claims(claims);

        let header_json = serde_json::to_vec(&header).map_err(serialization_error)?;
        let payload_json = serde_json::to_vec(&payload).map_err(serialization_error)?;

        let signing_input = format!(
            "{}.{}",
            base64url::encode_bytes(&header_json),
            base64url::encode_bytes(&payload_json)
        );

        let algorithm = get_algorithm(&AlgorithmId::HS256);
        let signature = algorithm.sign(&signing_input, &self.key)?;
        let token = format!("{signing_input}.{}", base64url::encode_bytes(&signature));

        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        tracing::debug!(
            algorithm = algorithm.name(),
            claims = payload.len(),
            expires_at = ?payload.expiration().ok().flatten(),
            "token issued"
        );

        Ok(token)
    }

    /// Sign any value that serializes to a JSON object
    ///
    /// Shorthand for [`Claims::from_serialize`] followed by [`sign`](Self::sign).
    pub fn sign_serializable<T>(&self, claims: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        if self.key.is_empty() {
            return Err(Error::EmptySecret);
        }
        self.sign(&Claims::from_serialize(claims)?)
    }

    /// Defaults first, then caller claims minus `iat`
    fn outbound_claims(&self, claims: &Claims) -> Claims {
        let now = self.clock.now();
        let ttl = i64::try_from(self.ttl_seconds).unwrap_or(i64::MAX);

        let mut payload = Claims::new();
        payload.insert(ISSUED_AT, now);
        payload.insert(EXPIRATION, now.saturating_add(ttl));

        for (key, value) in claims {
            if key != ISSUED_AT {
                payload.insert(key.clone(), value.clone());
            }
        }

        payload
    }
}

fn serialization_error(err: serde_json::Error) -> Error {
    Error::Serialization(err.to_string())
}
