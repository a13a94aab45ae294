//! The `+` operator on runtime values.
//!
//! The value set is closed, so dispatch is a direct `match` on both operands.
//! Only values of the same runtime type combine, and only when that type
//! [supports addition](tyex_ir::TypeTag::supports_addition). Everything else
//! is an [`ExprError::InvalidOperand`], which is a runtime failure and not a
//! type error.

use tyex_ir::Value;

use crate::errors::{invalid_operand, EvalResult, ExprError};

/// Add two evaluated operands.
///
/// - `int + int`: checked sum
/// - `float + float`: IEEE 754 sum
/// - `str + str`: concatenation, left first, reusing the left buffer
pub fn evaluate_addition(left: Value, right: Value) -> EvalResult {
    let (left_ty, right_ty) = (left.type_tag(), right.type_tag());
    if left_ty != right_ty || !left_ty.supports_addition() {
        return Err(invalid_operand(left_ty, right_ty));
    }

    match (left, right) {
        (Value::Int(a), Value::Int(b)) => a
            .checked_add(b)
            .map(Value::Int)
            .ok_or(ExprError::IntegerOverflow),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
        (Value::Str(mut a), Value::Str(b)) => {
            a.push_str(&b);
            Ok(Value::Str(a))
        }
        // Excluded by the `supports_addition` gate above.
        _ => Err(invalid_operand(left_ty, right_ty)),
    }
}
