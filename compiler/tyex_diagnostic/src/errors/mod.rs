//! Embedded error documentation for `tyex explain`.
//!
//! Each error code has a markdown file in this directory, embedded at
//! compile time. To document a new code, add `EXXXX.md` here and an entry
//! to `DOCS`.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Type errors (E2xxx)
    (ErrorCode::E2001, include_str!("E2001.md")),
    (ErrorCode::E2002, include_str!("E2002.md")),
    // Runtime errors (E6xxx)
    (ErrorCode::E6001, include_str!("E6001.md")),
    (ErrorCode::E6002, include_str!("E6002.md")),
    (ErrorCode::E6003, include_str!("E6003.md")),
];
