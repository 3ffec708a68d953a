//! # hsjwt - Minimal HS256 JSON Web Tokens
//!
//! > Sign and verify compact HS256 JSON Web Tokens with a shared secret.
//!
//! **hsjwt** issues and checks three-part JWTs (`header.claims.signature`) signed
//! with HMAC-SHA256. It supports exactly one algorithm and one token type, so there
//! is nothing to configure on the verification side beyond the secret.
//!
//! ## Quick Start
//!
//! ```
//! use hsjwt::Claims;
//!
//! let mut claims = Claims::new();
//! claims.insert("role", "admin");
//! claims.insert("sub", "peekabo");
//!
//! let token = hsjwt::sign(&claims, "my-top-secret-is-here")?;
//! let verified = hsjwt::verify(&token, "my-top-secret-is-here")?;
//!
//! assert_eq!(verified.get("role"), claims.get("role"));
//! assert!(verified.expiration()?.is_some());
//! # Ok::<(), hsjwt::Error>(())
//! ```
//!
//! ## Issuing
//!
//! [`sign`] stamps `iat` with the current time and defaults `exp` to ten minutes
//! later. A caller-supplied `exp` wins; a caller-supplied `iat` is ignored. Use
//! [`TokenIssuer`] to change the lifetime or the clock.
//!
//! ## Verification Flow
//!
//! [`verify`] runs the token through a fixed sequence of typed stages:
//!
//! ```text
//! ParsedToken (three segments decoded, JSON parsed)
//!     │ .check_header()
//!     ▼
//! HeaderCheckedToken (alg/typ are exactly HS256/JWT)
//!     │ .check_claims(now)
//!     ▼
//! ClaimsCheckedToken (exp/iat within bounds)
//!     │ .verify_signature(key)
//!     ▼
//! VerifiedToken (signature matches)
//! ```
//!
//! Each stage consumes the previous one, so a stage cannot be skipped. The
//! first failure decides the returned [`Error`].
//!
//! Temporal claims are checked before the signature. A forged token can
//! therefore learn whether its claims are in range (it sees `TokenExpired` or
//! `ClaimType` instead of `SignatureMismatch`), but never gets its claims
//! accepted.
//!
//! ## Security
//!
//! ### Algorithm Pinning
//!
//! The header must declare exactly `"alg":"HS256"` and `"typ":"JWT"`. `none`,
//! other HMAC sizes and asymmetric algorithms are rejected before any key is used.
//!
//! ### Timing Attack Protection
//!
//! The expected signature is compared with the presented one using
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq).
//!
//! ### Unverified Decoding
//!
//! [`decode`] returns the claims of a structurally valid token without checking
//! the header, the timestamps or the signature. Its output is for display and
//! debugging only.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) - JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) - JSON Web Token (JWT)
//! - [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725) - JSON Web Token Best Current Practices

// Core modules
pub mod error;
pub mod limits;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Claims and time
pub mod claims;
pub mod clock;

// Token types
pub mod token;

// Issuing and verification
pub mod issuer;
pub mod validator;

pub use algorithm::AlgorithmId;
pub use claims::Claims;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, FormatError, Result, Segment};
pub use issuer::TokenIssuer;
pub use keys::SymmetricKey;
pub use token::{ParsedToken, TokenHeader, VerifiedToken};
pub use validator::TokenValidator;

/// Sign `claims` with `secret`, using the system clock and a 10 minute lifetime
///
/// Fails with [`Error::EmptySecret`] if `secret` is empty.
pub fn sign(claims: &Claims, secret: impl AsRef<[u8]>) -> Result<String> {
    TokenIssuer::new(secret).sign(claims)
}

/// Verify `token` against `secret` using the system clock
///
/// Returns the claims only when the header, the temporal claims and the
/// signature all check out.
pub fn verify(token: &str, secret: impl AsRef<[u8]>) -> Result<Claims> {
    TokenValidator::new(secret).verify(token)
}

/// Read the claims of a token **without verifying it**
///
/// Only the structure is checked: three non-empty segments, the first two
/// Base64URL-encoded JSON. The algorithm, the timestamps and the signature
/// segment are not looked at.
pub fn decode(token: &str) -> Result<Claims> {
    ParsedToken::from_string(token).map(ParsedToken::into_unverified_claims)
}
