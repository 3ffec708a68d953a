pub mod base64url;

pub use base64url::{DecodeError, decode, decode_bytes, encode, encode_bytes};
