use crate::claims::{Claims, EXPIRATION, ISSUED_AT};
use crate::error::{Error, Result};
use serde_json::Value;

/// Validate the temporal claims against `now` (Unix seconds)
///
/// - `exp` present: must be numeric; rejected when `now` is strictly after it.
/// - `iat` present: must be numeric; rejected when `now` is strictly before it.
///
/// `exp` is checked first. A missing claim imposes no constraint, so a token
/// without `exp` never expires here; callers that need a mandatory expiry must
/// check for it themselves.
pub fn validate_claims(claims: &Claims, now: i64) -> Result<()> {
    if let Some(exp) = claims.get(EXPIRATION) {
        let expired_at = timestamp_from_value(EXPIRATION, exp)?;
        if now > expired_at {
            return Err(Error::TokenExpired { expired_at, now });
        }
    }

    if let Some(iat) = claims.get(ISSUED_AT) {
        let issued_at = timestamp_from_value(ISSUED_AT, iat)?;
        if now < issued_at {
            return Err(Error::TokenNotYetValid { issued_at, now });
        }
    }

    Ok(())
}

/// Coerce a JSON number into whole Unix seconds
///
/// Integers are taken as-is (unsigned values beyond `i64::MAX` saturate),
/// floats are truncated toward zero. Anything else is a [`Error::ClaimType`].
pub(crate) fn timestamp_from_value(claim: &str, value: &Value) -> Result<i64> {
    let type_error = || Error::ClaimType {
        claim: claim.to_string(),
    };

    let Value::Number(number) = value else {
        return Err(type_error());
    };

    if let Some(seconds) = number.as_i64() {
        Ok(seconds)
    } else if let Some(seconds) = number.as_u64() {
        Ok(i64::try_from(seconds).unwrap_or(i64::MAX))
    } else {
        number.as_f64().map(|f| f.trunc() as i64).ok_or_else(type_error)
    }
}
