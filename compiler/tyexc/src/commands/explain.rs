//! The `explain` command: documentation for error codes.

use tyex_diagnostic::{ErrorCode, ErrorDocs};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExplainError {
    #[error("Unknown error code: {0}\n\nCodes have the format EXXXX where X is a digit.\nExamples: E2001, E6001")]
    UnknownCode(String),
    #[error("No documentation available for {0}")]
    Undocumented(ErrorCode),
}

/// Look up the markdown documentation for a code string like `"E2001"`.
pub fn explain_error(code_str: &str) -> Result<&'static str, ExplainError> {
    let code = code_str
        .parse::<ErrorCode>()
        .map_err(|()| ExplainError::UnknownCode(code_str.to_owned()))?;
    ErrorDocs::get(code).ok_or(ExplainError::Undocumented(code))
}
