// Pipeline stages, in order
mod parsed;
mod header_checked;
mod claims_checked;
mod verified;

mod header;

pub use claims_checked::ClaimsCheckedToken;
pub use header::{TOKEN_TYPE, TokenHeader, validate_header};
pub use header_checked::HeaderCheckedToken;
pub use parsed::ParsedToken;
pub use verified::VerifiedToken;
