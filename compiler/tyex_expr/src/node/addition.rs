use std::fmt;
use std::mem;

use tyex_ir::TypeTag;
use tyex_stack::ensure_sufficient_stack;

use super::{Expr, Variable};
use crate::environment::Environment;
use crate::errors::{operand_type_mismatch, EvalResult, ExprError, TypeResult};
use crate::operators::evaluate_addition;

/// The sum of two owned subexpressions.
///
/// Construction never checks that the operands agree.
///
/// `Clone`, `PartialEq` and `Debug` are written by hand so that each level
/// goes through `ensure_sufficient_stack`, like the other tree walks.
pub struct Addition {
    left: Box<Expr>,
    right: Box<Expr>,
}

impl Addition {
    pub fn new(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Addition {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    #[inline]
    pub fn left(&self) -> &Expr {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &Expr {
        &self.right
    }

    /// Both operands' types, which must be identical; that type is the
    /// result.
    ///
    /// Asking each child for its type checks the child's own subtree, so a
    /// mismatch anywhere below is reported before this node's own.
    pub fn ty(&self) -> TypeResult {
        let left = self.left.ty()?;
        let right = self.right.ty()?;
        if left != right {
            tracing::debug!(%left, %right, "operand types differ");
            return Err(operand_type_mismatch(left, right));
        }
        Ok(left)
    }

    pub fn type_check(&self) -> Result<(), ExprError> {
        self.ty().map(|_| ())
    }

    /// Evaluate left, then right, under the same environment and add.
    ///
    /// Does not re-run the type checker.
    pub fn evaluate(&self, env: &Environment) -> EvalResult {
        let left = self.left.evaluate(env)?;
        let right = self.right.evaluate(env)?;
        evaluate_addition(left, right)
    }
}

impl fmt::Display for Addition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.left, self.right)
    }
}

impl Clone for Addition {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Addition {
            left: self.left.clone(),
            right: self.right.clone(),
        })
    }
}

impl PartialEq for Addition {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.left == other.left && self.right == other.right)
    }
}

impl fmt::Debug for Addition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("Addition")
                .field("left", &self.left)
                .field("right", &self.right)
                .finish()
        })
    }
}

/// Drops nested additions from a heap worklist instead of the call stack.
impl Drop for Addition {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_additions(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            if let Expr::Addition(add) = &mut expr {
                detach_additions(add, &mut pending);
            }
        }
    }
}

/// Move `add`'s addition children into `pending`, leaving cheap leaves behind.
fn detach_additions(add: &mut Addition, pending: &mut Vec<Expr>) {
    for child in [&mut *add.left, &mut *add.right] {
        if matches!(child, Expr::Addition(_)) {
            pending.push(mem::replace(child, hollow()));
        }
    }
}

/// Stand-in leaf for a detached child. Never observed: only written into
/// nodes that are being dropped.
fn hollow() -> Expr {
    Expr::Variable(Variable::new(String::new(), TypeTag::Bool))
}
