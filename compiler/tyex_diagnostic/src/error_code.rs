//! Error codes for all expression diagnostics.

use std::fmt;

/// Error codes for all expression diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E2xxx: Type errors (found by `type_check`, `ty`, or a variable lookup)
/// - E6xxx: Runtime / eval errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Type Errors (E2xxx)
    /// Operands of `+` have different types
    E2001,
    /// Bound value does not have the variable's declared type
    E2002,

    // Runtime Errors (E6xxx)
    /// Variable has no binding in the environment
    E6001,
    /// Values cannot be combined with `+`
    E6002,
    /// Integer overflow in addition
    E6003,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
        }
    }

    /// Check if this is a type error (E2xxx range).
    pub fn is_type_error(&self) -> bool {
        matches!(self, ErrorCode::E2001 | ErrorCode::E2002)
    }

    /// Check if this is a runtime error (E6xxx range).
    pub fn is_eval_error(&self) -> bool {
        matches!(self, ErrorCode::E6001 | ErrorCode::E6002 | ErrorCode::E6003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
