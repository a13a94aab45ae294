//! Expression nodes.
//!
//! The node set is fixed, so [`Expr`] is an enum and every operation is a
//! `match` over its two variants. Each variant checks only its own immediate
//! structure and asks its children about theirs, which makes type checking
//! a plain recursive descent with no separate pass.

mod addition;
mod variable;

use std::fmt;
use std::ops;

use tyex_ir::TypeTag;
use tyex_stack::ensure_sufficient_stack;

use crate::environment::Environment;
use crate::errors::{EvalResult, ExprError, TypeResult};

pub use addition::Addition;
pub use variable::Variable;

/// An expression tree.
///
/// Trees are immutable once built. An [`Addition`] exclusively owns its
/// children, so there is no sharing and no cycles; recursion depth is the
/// height of the tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Variable(Variable),
    Addition(Addition),
}

impl Expr {
    /// Build a variable reference.
    pub fn variable(name: impl Into<String>, declared_type: TypeTag) -> Self {
        Expr::Variable(Variable::new(name, declared_type))
    }

    /// Build an addition. Nothing is checked until the type is asked for.
    pub fn addition(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Addition(Addition::new(left, right))
    }

    /// Compute this expression's value under `env`.
    ///
    /// Does not run [`Expr::type_check`] first.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = self.kind_name()))]
    pub fn evaluate(&self, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| match self {
            Expr::Variable(var) => var.evaluate(env),
            Expr::Addition(add) => add.evaluate(env),
        })
    }

    /// The static type of this expression.
    ///
    /// For an addition this checks the whole subtree first and fails the
    /// same way [`Expr::type_check`] does.
    pub fn ty(&self) -> TypeResult {
        ensure_sufficient_stack(|| match self {
            Expr::Variable(var) => Ok(var.ty()),
            Expr::Addition(add) => add.ty(),
        })
    }

    /// Verify that every addition in the subtree has operands of one type.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = self.kind_name()))]
    pub fn type_check(&self) -> Result<(), ExprError> {
        match self {
            Expr::Variable(var) => var.type_check(),
            Expr::Addition(add) => add.type_check(),
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Expr::Variable(var) => Some(var),
            Expr::Addition(_) => None,
        }
    }

    pub fn as_addition(&self) -> Option<&Addition> {
        match self {
            Expr::Addition(add) => Some(add),
            Expr::Variable(_) => None,
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Expr::Variable(_) => "variable",
            Expr::Addition(_) => "addition",
        }
    }
}

/// Build an addition of two expressions.
///
/// Same as `left + right` on nodes.
pub fn add(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    Expr::addition(left, right)
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Expr::Variable(var)
    }
}

impl From<Addition> for Expr {
    fn from(add: Addition) -> Self {
        Expr::Addition(add)
    }
}

// `a + b` on any node builds `Addition(a, b)`. Chains associate to the left.
macro_rules! impl_add_for_node {
    ($($node:ty),*) => {
        $(
            impl<R: Into<Expr>> ops::Add<R> for $node {
                type Output = Expr;

                fn add(self, rhs: R) -> Expr {
                    Expr::addition(self, rhs)
                }
            }
        )*
    };
}

impl_add_for_node!(Expr, Variable, Addition);

/// Infix rendering of the subtree. Not meant to be parsed back.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Variable(var) => fmt::Display::fmt(var, f),
            Expr::Addition(add) => fmt::Display::fmt(add, f),
        })
    }
}
