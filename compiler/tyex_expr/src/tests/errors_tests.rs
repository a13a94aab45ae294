use pretty_assertions::assert_eq;
use tyex_diagnostic::ErrorCode;

use crate::errors::{binding_type_mismatch, invalid_operand, operand_type_mismatch, unbound_variable};
use crate::{ExprError, TypeTag};

#[test]
fn test_messages() {
    assert_eq!(
        operand_type_mismatch(TypeTag::Int, TypeTag::Str).to_string(),
        "type mismatch in operands of `+`: expected `int`, found `str`"
    );
    assert_eq!(
        binding_type_mismatch("x", TypeTag::Int, TypeTag::Float).to_string(),
        "type mismatch in binding of `x`: expected `int`, found `float`"
    );
    assert_eq!(unbound_variable("y").to_string(), "unbound variable `y`");
    assert_eq!(
        invalid_operand(TypeTag::Bool, TypeTag::Bool).to_string(),
        "operator `+` cannot be applied to `bool` and `bool`"
    );
    assert_eq!(
        ExprError::IntegerOverflow.to_string(),
        "integer overflow in addition"
    );
}

#[test]
fn test_codes() {
    assert_eq!(operand_type_mismatch(TypeTag::Int, TypeTag::Str).code(), ErrorCode::E2001);
    assert_eq!(binding_type_mismatch("x", TypeTag::Int, TypeTag::Str).code(), ErrorCode::E2002);
    assert_eq!(unbound_variable("x").code(), ErrorCode::E6001);
    assert_eq!(invalid_operand(TypeTag::Int, TypeTag::Str).code(), ErrorCode::E6002);
    assert_eq!(ExprError::IntegerOverflow.code(), ErrorCode::E6003);
}

#[test]
fn test_kind_predicates_agree_with_codes() {
    let errors = [
        operand_type_mismatch(TypeTag::Int, TypeTag::Str),
        binding_type_mismatch("x", TypeTag::Int, TypeTag::Str),
        unbound_variable("x"),
        invalid_operand(TypeTag::Int, TypeTag::Str),
        ExprError::IntegerOverflow,
    ];
    for err in errors {
        assert_eq!(err.is_type_error(), err.code().is_type_error(), "{err}");
        if err.is_lookup_error() {
            assert_eq!(err.code(), ErrorCode::E6001);
        }
    }
}

#[test]
fn test_operand_mismatch_diagnostic() {
    let diag = operand_type_mismatch(TypeTag::Int, TypeTag::Str).to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(
        diag.to_string(),
        "error [E2001]: type mismatch in operands of `+`: expected `int`, found `str`\n  \
         = note: both operands of `+` must have exactly the same type\n  \
         = help: add values of one type only"
    );
}

#[test]
fn test_unbound_diagnostic_suggests_binding() {
    let diag = unbound_variable("y").to_diagnostic();
    assert_eq!(diag.suggestions, vec!["add a binding for `y` to the environment"]);
}

#[test]
fn test_invalid_operand_diagnostic_notes_differ_by_cause() {
    let same = invalid_operand(TypeTag::Bool, TypeTag::Bool).to_diagnostic();
    assert_eq!(same.notes, vec!["`bool` values have no addition"]);

    let mixed = invalid_operand(TypeTag::Int, TypeTag::Str).to_diagnostic();
    assert_eq!(mixed.suggestions, vec!["call `type_check` before `evaluate`"]);
}
