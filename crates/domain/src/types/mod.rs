//! Shared vocabulary types.

mod response_codes;

pub use response_codes::{CharCreateCode, CharDeleteCode};
