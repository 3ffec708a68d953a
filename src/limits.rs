//! Size limits and defaults

/// Maximum length for a token string (64KB)
pub const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Lifetime of a token whose caller did not supply `exp` (10 minutes)
pub const DEFAULT_TTL_SECONDS: u64 = 10 * 60;

/// Length of an HMAC-SHA256 tag in bytes
pub const HS256_TAG_LENGTH: usize = 32;
