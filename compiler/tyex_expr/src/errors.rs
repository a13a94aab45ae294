//! Errors raised by type checking and evaluation.
//!
//! All four kinds propagate unchanged from the node that detects them to the
//! caller. Nothing in this crate recovers from or rewrites an error.

use tyex_diagnostic::{Diagnostic, ErrorCode};
use tyex_ir::{TypeTag, Value};

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, ExprError>;

/// Result of asking an expression for its static type.
pub type TypeResult = Result<TypeTag, ExprError>;

/// Where two types that had to agree were found to differ.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MismatchSite {
    /// The value bound to a variable does not have its declared type.
    Binding { name: String },
    /// The two operands of an addition have different static types.
    Operands,
}

impl std::fmt::Display for MismatchSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MismatchSite::Binding { name } => write!(f, "binding of `{name}`"),
            MismatchSite::Operands => f.write_str("operands of `+`"),
        }
    }
}

/// Failure of `type_check`, `ty` or `evaluate`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    /// Two types that must be identical are not.
    #[error("type mismatch in {site}: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        expected: TypeTag,
        found: TypeTag,
        site: MismatchSite,
    },

    /// The environment has no binding for a variable.
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String },

    /// Two runtime values cannot be combined with `+`.
    #[error("operator `+` cannot be applied to `{left}` and `{right}`")]
    InvalidOperand { left: TypeTag, right: TypeTag },

    #[error("integer overflow in addition")]
    IntegerOverflow,
}

impl ExprError {
    /// The `TypeError` family: a declared or static type disagreed.
    pub fn is_type_error(&self) -> bool {
        matches!(self, ExprError::TypeMismatch { .. })
    }

    /// The `LookupError` family: a name had no binding.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, ExprError::UnboundVariable { .. })
    }

    /// Stable code for `tyex explain`.
    pub fn code(&self) -> ErrorCode {
        match self {
            ExprError::TypeMismatch {
                site: MismatchSite::Operands,
                ..
            } => ErrorCode::E2001,
            ExprError::TypeMismatch {
                site: MismatchSite::Binding { .. },
                ..
            } => ErrorCode::E2002,
            ExprError::UnboundVariable { .. } => ErrorCode::E6001,
            ExprError::InvalidOperand { .. } => ErrorCode::E6002,
            ExprError::IntegerOverflow => ErrorCode::E6003,
        }
    }

    /// Render as a diagnostic with a note and a fix hint.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ExprError::TypeMismatch {
                site: MismatchSite::Operands,
                ..
            } => diag
                .with_note("both operands of `+` must have exactly the same type")
                .with_suggestion("add values of one type only"),
            ExprError::TypeMismatch {
                expected,
                site: MismatchSite::Binding { name },
                ..
            } => diag.with_suggestion(format!("bind `{name}` to a `{expected}` value")),
            ExprError::UnboundVariable { name } => {
                diag.with_suggestion(format!("add a binding for `{name}` to the environment"))
            }
            ExprError::InvalidOperand { left, right } if left == right => {
                diag.with_note(format!("`{left}` values have no addition"))
            }
            ExprError::InvalidOperand { .. } => diag
                .with_note("evaluation does not re-run the type checker")
                .with_suggestion("call `type_check` before `evaluate`"),
            ExprError::IntegerOverflow => {
                diag.with_note("`int` is a 64-bit signed integer")
            }
        }
    }
}

// Factory functions

/// A variable's bound value has the wrong runtime type.
#[cold]
pub fn binding_type_mismatch(name: &str, declared: TypeTag, found: TypeTag) -> ExprError {
    ExprError::TypeMismatch {
        expected: declared,
        found,
        site: MismatchSite::Binding {
            name: name.to_owned(),
        },
    }
}

/// The operands of an addition have different static types.
#[cold]
pub fn operand_type_mismatch(left: TypeTag, right: TypeTag) -> ExprError {
    ExprError::TypeMismatch {
        expected: left,
        found: right,
        site: MismatchSite::Operands,
    }
}

#[cold]
pub fn unbound_variable(name: &str) -> ExprError {
    ExprError::UnboundVariable {
        name: name.to_owned(),
    }
}

#[cold]
pub fn invalid_operand(left: TypeTag, right: TypeTag) -> ExprError {
    ExprError::InvalidOperand { left, right }
}
