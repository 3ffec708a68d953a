mod traits;

pub mod hmac;

pub use traits::{Algorithm, SignatureAlgorithm, get_algorithm};

/// Algorithm identifier from the token header
///
/// Exactly one algorithm is implemented. There is no negotiation: a header
/// naming anything else, including `"none"`, is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,
}

impl AlgorithmId {
    /// Parse the `alg` header value (case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "HS256" => Some(AlgorithmId::HS256),
            _ => None,
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
        }
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(AlgorithmId::from_name("HS256"), Some(AlgorithmId::HS256));
        assert_eq!(AlgorithmId::from_name("hs256"), None);
        assert_eq!(AlgorithmId::from_name("none"), None);
        assert_eq!(AlgorithmId::from_name("HS512"), None);
        assert_eq!(AlgorithmId::from_name("RS256"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(AlgorithmId::HS256.to_string(), "HS256");
    }
}
