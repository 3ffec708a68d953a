use crate::algorithm::AlgorithmId;
use crate::error::Result;
use crate::keys::SymmetricKey;

/// Core algorithm trait for token signature algorithms
///
/// Signing and verification both operate on the signing input, the literal
/// `header_b64.payload_b64` text.
pub trait Algorithm {
    /// The algorithm identifier written to the `alg` header
    fn name(&self) -> &'static str;

    /// Compute the raw authentication tag over `signing_input`
    fn sign(&self, signing_input: &str, key: &SymmetricKey) -> Result<Vec<u8>>;

    /// Verify a signature
    ///
    /// # Arguments
    /// * `signing_input` - The data that was signed (header.payload)
    /// * `signature` - The Base64URL-encoded signature segment
    /// * `key` - The key to use for verification
    fn verify(&self, signing_input: &str, signature: &str, key: &SymmetricKey) -> Result<()>;
}

/// Type alias for boxed algorithm trait objects
pub type SignatureAlgorithm = Box<dyn Algorithm + Send + Sync>;

/// Get the implementation for the given algorithm ID
pub fn get_algorithm(algorithm: &AlgorithmId) -> SignatureAlgorithm {
    match algorithm {
        AlgorithmId::HS256 => Box::new(super::hmac::HS256),
    }
}
