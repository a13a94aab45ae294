#![deny(clippy::arithmetic_side_effects)]
//! Tyex Expr - typed expression trees.
//!
//! An expression is a closed set of node kinds:
//! - [`Variable`]: a name with a declared [`TypeTag`], resolved against an
//!   [`Environment`] at evaluation time
//! - [`Addition`]: two owned child expressions combined with `+`
//!
//! Every [`Expr`] can report its static type ([`Expr::ty`]), check the
//! consistency of its subtree ([`Expr::type_check`]) and evaluate to a
//! [`Value`] ([`Expr::evaluate`]).
//!
//! # Laziness
//!
//! Building a tree never checks it. `x + b` is a valid tree even when `x`
//! is an `int` and `b` is a `str`; the mismatch is reported the first time
//! the tree's type is asked for. Evaluation does not type-check either, it
//! trusts the bindings it finds and fails only on what it cannot compute.
//!
//! # Example
//!
//! ```
//! use tyex_expr::{Environment, Expr, TypeTag, Value};
//!
//! let x = Expr::variable("x", TypeTag::Int);
//! let y = Expr::variable("y", TypeTag::Int);
//! let z = Expr::variable("z", TypeTag::Int);
//! let sum = x + y + z;
//!
//! assert_eq!(sum.to_string(), "x + y + z");
//! assert_eq!(sum.ty(), Ok(TypeTag::Int));
//!
//! let env: Environment = [("x", 5), ("y", 2), ("z", 3)]
//!     .into_iter()
//!     .map(|(name, n)| (name, Value::int(n)))
//!     .collect();
//! assert_eq!(sum.evaluate(&env), Ok(Value::int(10)));
//! ```

mod environment;
pub mod errors;
mod node;
mod operators;
mod parallel;

pub use tyex_ir::{TypeTag, Value};

pub use environment::Environment;
pub use errors::{EvalResult, ExprError, MismatchSite, TypeResult};
pub use node::{add, Addition, Expr, Variable};
pub use operators::evaluate_addition;
pub use parallel::{evaluate_each, EvalConfig};

#[cfg(test)]
mod tests;
