use crate::algorithm::Algorithm;
use crate::error::{Error, FormatError, Result, Segment};
use crate::keys::SymmetricKey;
use crate::limits::HS256_TAG_LENGTH;
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

impl Algorithm for HS256 {
    fn name(&self) -> &'static str {
        "HS256"
    }

    fn sign(&self, signing_input: &str, key: &SymmetricKey) -> Result<Vec<u8>> {
        sign_hs256(signing_input, key.as_bytes())
    }

    fn verify(&self, signing_input: &str, signature: &str, key: &SymmetricKey) -> Result<()> {
        verify_hs256(signing_input, signature, key.as_bytes())
    }
}

/// Compute the HMAC-SHA256 tag over the UTF-8 bytes of `message`
fn sign_hs256(message: &str, secret: &[u8]) -> Result<Vec<u8>> {
    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|e| Error::InvalidKey(e.to_string()))?;
    mac.update(message.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Verify HS256 signature with constant-time comparison
///
/// The signature segment must be padding-free base64url; anything else is
/// `MalformedToken`. A decoded tag of the wrong length cannot match and is
/// rejected before any MAC is computed.
fn verify_hs256(signing_input: &str, signature: &str, secret: &[u8]) -> Result<()> {
    let tag = base64url::decode_bytes(signature).map_err(|e| FormatError::Base64 {
        segment: Segment::Signature,
        reason: e.reason().to_string(),
    })?;

    if tag.len() != HS256_TAG_LENGTH {
        return Err(Error::SignatureMismatch);
    }

    let expected_tag = sign_hs256(signing_input, secret)?;

    if constant_time_eq(&expected_tag, &tag) {
        Ok(())
    } else {
        Err(Error::SignatureMismatch)
    }
}
