use crate::claims::Claims;
use crate::error::{Error, FormatError, Result, Segment};
use crate::limits::MAX_TOKEN_LENGTH;
use crate::token::{HeaderCheckedToken, TokenHeader, validate_header};
use crate::utils::base64url;
use serde::Deserialize;
use serde_json::Value;

/// A token that has been parsed but not yet validated
///
/// This is the first stage in the verification pipeline.
/// At this stage, we have:
/// - Split the token into three non-empty parts (header, payload, signature)
/// - Decoded and parsed the header JSON
/// - Decoded and parsed the claims JSON
///
/// The signature part is kept as opaque text; its encoding is only examined
/// when the signature is verified. Nothing here is authenticated yet.
///
/// Next step: HeaderCheckedToken (after the alg/typ check)
#[derive(Debug, Clone)]
pub struct ParsedToken {
    header: TokenHeader,
    claims: Claims,
    header_b64: String,
    payload_b64: String,
    signature_b64: String,
}

impl ParsedToken {
    /// Parse a token from a string
    ///
    /// # Arguments
    /// * `token` - The token string in format "header.payload.signature"
    ///
    /// # Example
    /// ```
    /// use hsjwt::{Error, ParsedToken};
    ///
    /// let result = ParsedToken::from_string("onlyonepart");
    /// assert!(matches!(result, Err(Error::MalformedToken(_))));
    /// ```
    pub fn from_string(token: &str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(FormatError::TooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            }
            .into());
        }

        // Split into three parts
        let parts: Vec<&str> = token.split('.').collect();
        let [header_b64, payload_b64, signature_b64] = parts[..] else {
            return Err(FormatError::SegmentCount(parts.len()).into());
        };

        for (segment, part) in [
            (Segment::Header, header_b64),
            (Segment::Claims, payload_b64),
            (Segment::Signature, signature_b64),
        ] {
            if part.is_empty() {
                return Err(FormatError::EmptySegment(segment).into());
            }
        }

        // Decode and parse header
        let header_json = decode_segment(Segment::Header, header_b64)?;
        let header = parse_header(&header_json)?;

        // Decode and parse claims; a literal `null` payload is an empty claim set
        let payload_json = decode_segment(Segment::Claims, payload_b64)?;
        let claims: Option<Claims> =
            serde_json::from_slice(&payload_json).map_err(|e| json_error(Segment::Claims, e))?;

        Ok(Self {
            header,
            claims: claims.unwrap_or_default(),
            header_b64: header_b64.to_string(),
            payload_b64: payload_b64.to_string(),
            signature_b64: signature_b64.to_string(),
        })
    }

    /// Get the token header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Get the claims (before verification)
    ///
    /// Note: You should not trust this data until after signature verification!
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Get the signing input (header.payload), exactly as it appeared on the wire
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header_b64, self.payload_b64)
    }

    /// Get the encoded signature segment
    pub fn signature(&self) -> &str {
        &self.signature_b64
    }

    /// Give up on verification and take the claims as they are
    ///
    /// No header, temporal or signature check has happened. Use this for
    /// inspection and display only, never for trust decisions.
    pub fn into_unverified_claims(self) -> Claims {
        self.claims
    }

    /// Check the header and move to HeaderCheckedToken state
    ///
    /// Fails with [`Error::UnsupportedAlgorithm`] unless the header declares
    /// exactly `HS256` / `JWT`.
    pub fn check_header(self) -> Result<HeaderCheckedToken> {
        let algorithm = validate_header(&self.header)?;
        tracing::trace!(%algorithm, "token header checked");
        Ok(HeaderCheckedToken::new(self, algorithm))
    }

    pub(crate) fn into_parts(self) -> (TokenHeader, Claims) {
        (self.header, self.claims)
    }
}

fn decode_segment(segment: Segment, input: &str) -> Result<Vec<u8>> {
    base64url::decode_bytes(input).map_err(|e| {
        Error::MalformedToken(FormatError::Base64 {
            segment,
            reason: e.reason().to_string(),
        })
    })
}

/// Parse the header, which must be a JSON object (not a positional array)
///
/// A literal `null` is an empty header, the same as `{}`.
fn parse_header(json: &[u8]) -> Result<TokenHeader> {
    let value: Value = serde_json::from_slice(json).map_err(|e| json_error(Segment::Header, e))?;
    match value {
        Value::Null => Ok(TokenHeader::default()),
        Value::Object(_) => {
            TokenHeader::deserialize(value).map_err(|e| json_error(Segment::Header, e))
        }
        _ => Err(Error::MalformedToken(FormatError::Json {
            segment: Segment::Header,
            reason: "expected a JSON object".to_string(),
        })),
    }
}

fn json_error(segment: Segment, err: serde_json::Error) -> Error {
    Error::MalformedToken(FormatError::Json {
        segment,
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_from(header: &str, payload: &str, signature: &[u8]) -> String {
        format!(
            "{}.{}.{}",
            base64url::encode(header),
            base64url::encode(payload),
            base64url::encode_bytes(signature)
        )
    }

    #[test]
    fn test_parse_valid_token() {
        let token_str = token_from(
            r#"{"alg":"HS256","typ":"JWT"}"#,
            r#"{"iss":"test","sub":"user","exp":1758715380}"#,
            b"signature",
        );
        let token = ParsedToken::from_string(&token_str).unwrap();

        assert_eq!(token.header().algorithm_str(), "HS256");
        assert_eq!(token.header().token_type_str(), "JWT");
        assert_eq!(token.claims().get("sub"), Some(&json!("user")));
        assert_eq!(token.claims().expiration().unwrap(), Some(1_758_715_380));
        assert_eq!(token.signature(), base64url::encode("signature"));

        let (header_b64, rest) = token_str.split_once('.').unwrap();
        let (payload_b64, _) = rest.split_once('.').unwrap();
        assert_eq!(token.signing_input(), format!("{header_b64}.{payload_b64}"));
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(matches!(
            ParsedToken::from_string("not.enough"),
            Err(Error::MalformedToken(FormatError::SegmentCount(2)))
        ));
        assert!(matches!(
            ParsedToken::from_string("too.many.parts.here"),
            Err(Error::MalformedToken(FormatError::SegmentCount(4)))
        ));
        assert!(matches!(
            ParsedToken::from_string("onlyonepart"),
            Err(Error::MalformedToken(FormatError::SegmentCount(1)))
        ));
    }

    #[test]
    fn test_parse_empty_segments() {
        let header = base64url::encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = base64url::encode("{}");

        assert!(matches!(
            ParsedToken::from_string(&format!(".{payload}.c2ln")),
            Err(Error::MalformedToken(FormatError::EmptySegment(
                Segment::Header
            )))
        ));
        assert!(matches!(
            ParsedToken::from_string(&format!("{header}..c2ln")),
            Err(Error::MalformedToken(FormatError::EmptySegment(
                Segment::Claims
            )))
        ));
        assert!(matches!(
            ParsedToken::from_string(&format!("{header}.{payload}.")),
            Err(Error::MalformedToken(FormatError::EmptySegment(
                Segment::Signature
            )))
        ));
    }

    #[test]
    fn test_parse_invalid_base64() {
        let result = ParsedToken::from_string("!!!.abc.def");
        assert!(matches!(
            result,
            Err(Error::MalformedToken(FormatError::Base64 {
                segment: Segment::Header,
                ..
            }))
        ));
    }

    #[test]
    fn test_signature_segment_is_opaque() {
        let header = base64url::encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = base64url::encode(r#"{"sub":"user"}"#);

        for signature in ["a+b", "sig+nature", "c2ln=", "not base64"] {
            let token = ParsedToken::from_string(&format!("{header}.{payload}.{signature}"))
                .unwrap();
            assert_eq!(token.signature(), signature);
            assert_eq!(token.claims().get("sub"), Some(&json!("user")));
        }
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = ParsedToken::from_string(&token_from("not json", r#"{"iss":"test"}"#, b"sig"));
        assert!(matches!(
            result,
            Err(Error::MalformedToken(FormatError::Json {
                segment: Segment::Header,
                ..
            }))
        ));

        let result = ParsedToken::from_string(&token_from(
            r#"{"alg":"HS256","typ":"JWT"}"#,
            r#"["not","an","object"]"#,
            b"sig",
        ));
        assert!(matches!(
            result,
            Err(Error::MalformedToken(FormatError::Json {
                segment: Segment::Claims,
                ..
            }))
        ));
    }

    #[test]
    fn test_parse_header_field_of_wrong_type() {
        let result =
            ParsedToken::from_string(&token_from(r#"{"alg":256,"typ":"JWT"}"#, "{}", b"sig"));
        assert!(matches!(
            result,
            Err(Error::MalformedToken(FormatError::Json { .. }))
        ));
    }

    #[test]
    fn test_header_must_be_object() {
        let result = ParsedToken::from_string(&token_from(r#"["HS256","JWT"]"#, "{}", b"sig"));
        assert!(matches!(
            result,
            Err(Error::MalformedToken(FormatError::Json {
                segment: Segment::Header,
                ..
            }))
        ));
    }

    #[test]
    fn test_null_header_is_empty_header() {
        let token = ParsedToken::from_string(&token_from("null", "{}", b"sig")).unwrap();
        assert_eq!(token.header(), &TokenHeader::default());
        assert!(matches!(
            token.check_header(),
            Err(Error::UnsupportedAlgorithm { alg, typ }) if alg.is_empty() && typ.is_empty()
        ));
    }

    #[test]
    fn test_null_payload_is_empty_claims() {
        let token =
            ParsedToken::from_string(&token_from(r#"{"alg":"HS256","typ":"JWT"}"#, "null", b"sig"))
                .unwrap();
        assert!(token.claims().is_empty());
    }

    #[test]
    fn test_token_too_large() {
        let huge = "a".repeat(MAX_TOKEN_LENGTH + 1);
        assert!(matches!(
            ParsedToken::from_string(&huge),
            Err(Error::MalformedToken(FormatError::TooLarge { .. }))
        ));
    }

    #[test]
    fn test_check_header_rejects_none() {
        let parsed =
            ParsedToken::from_string(&token_from(r#"{"alg":"none","typ":"JWT"}"#, "{}", b"sig"))
                .unwrap();
        assert!(matches!(
            parsed.check_header(),
            Err(Error::UnsupportedAlgorithm { alg, .. }) if alg == "none"
        ));
    }
}
