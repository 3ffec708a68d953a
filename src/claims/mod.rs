//! Claim sets carried in the token payload
//!
//! Claims are an open mapping from string keys to any JSON value. Only `iat`
//! and `exp` have meaning to this crate; everything else is carried verbatim.

mod validator;

pub use validator::validate_claims;
pub(crate) use validator::timestamp_from_value;

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Issued-at claim name
pub const ISSUED_AT: &str = "iat";

/// Expiration claim name
pub const EXPIRATION: &str = "exp";

/// A set of claims: string keys mapped to dynamically typed JSON values
///
/// # Examples
///
/// ```
/// use hsjwt::Claims;
///
/// let mut claims = Claims::new();
/// claims.insert("sub", "peekabo");
/// claims.insert("role", "admin");
/// claims.insert("admin", true);
///
/// assert_eq!(claims.get("role").and_then(|v| v.as_str()), Some("admin"));
/// assert_eq!(claims.expiration().unwrap(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Create an empty claim set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build claims from any value that serializes to a JSON object
    ///
    /// A value serializing to `null` yields an empty claim set. Anything that
    /// is not an object, or cannot be serialized at all, is a
    /// [`Error::Serialization`].
    pub fn from_serialize<T>(value: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(value).map_err(|e| Error::Serialization(e.to_string()))? {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(Error::Serialization(format!(
                "claims must serialize to a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Deserialize the claim set into a typed structure
    pub fn deserialize_into<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Insert a claim, returning the previous value for that key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Get a claim by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Remove a claim by key
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Whether a claim with this key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of claims
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no claims
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all claims
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    /// Issued-at (iat) as a Unix timestamp
    ///
    /// `Ok(None)` when absent, [`Error::ClaimType`] when present but not a number.
    pub fn issued_at(&self) -> Result<Option<i64>> {
        self.timestamp(ISSUED_AT)
    }

    /// Expiration (exp) as a Unix timestamp
    ///
    /// `Ok(None)` when absent, [`Error::ClaimType`] when present but not a number.
    pub fn expiration(&self) -> Result<Option<i64>> {
        self.timestamp(EXPIRATION)
    }

    fn timestamp(&self, claim: &str) -> Result<Option<i64>> {
        self.0
            .get(claim)
            .map(|value| timestamp_from_value(claim, value))
            .transpose()
    }

    /// Borrow the underlying JSON map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Take the underlying JSON map
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Claims> for Map<String, Value> {
    fn from(claims: Claims) -> Self {
        claims.0
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Claims {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Claims {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Claims {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
