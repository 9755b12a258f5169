//! Convert files to their base64 text representation and back.
//!
//! The [`Base64Converter`] remembers the last encoded text and the last file
//! path it touched, so interactive callers can encode once and decode later
//! without re-supplying either.

pub mod converter;
pub mod error;
pub mod util;

pub use converter::Base64Converter;
pub use error::ConvertError;
