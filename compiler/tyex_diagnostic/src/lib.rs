//! Diagnostic system for expression errors.
//!
//! - Error codes for searchability (`tyex explain E2001`)
//! - Clear messages (what went wrong)
//! - Notes (why it's wrong)
//! - Suggestions (how to fix)

mod diagnostic;
mod error_code;
pub mod errors;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
