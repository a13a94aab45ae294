//! Property-based tests for the node contract.
//!
//! Trees are generated over a small pool of variable names, each name with a
//! fixed declared type, so generated environments can always satisfy every
//! binding.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use tyex_expr::{Environment, Expr, ExprError, MismatchSite, TypeTag, Value};

// -- Strategies --

/// Variable names double as their type: `i*` are ints, `s*` are strings.
fn int_var() -> impl Strategy<Value = Expr> {
    (0..4_u8).prop_map(|n| Expr::variable(format!("i{n}"), TypeTag::Int))
}

fn str_var() -> impl Strategy<Value = Expr> {
    (0..4_u8).prop_map(|n| Expr::variable(format!("s{n}"), TypeTag::Str))
}

/// A well-typed tree whose leaves all come from `leaf`.
fn tree(leaf: impl Strategy<Value = Expr> + 'static) -> impl Strategy<Value = Expr> {
    leaf.prop_recursive(6, 64, 2, |inner| {
        (inner.clone(), inner).prop_map(|(left, right)| left + right)
    })
}

/// Small ints so that sums over at most 64 leaves cannot overflow.
fn environment() -> impl Strategy<Value = Environment> {
    (
        prop::array::uniform4(-1_000_i64..1_000),
        prop::array::uniform4("[a-z ]{0,4}"),
    )
        .prop_map(|(ints, strs)| {
            let mut env = Environment::new();
            for (n, value) in ints.into_iter().enumerate() {
                env.bind(format!("i{n}"), value);
            }
            for (n, value) in strs.into_iter().enumerate() {
                env.bind(format!("s{n}"), value);
            }
            env
        })
}

// -- Reference model --

fn leaves(expr: &Expr) -> Vec<&str> {
    match expr {
        Expr::Variable(var) => vec![var.name()],
        Expr::Addition(add) => {
            let mut names = leaves(add.left());
            names.extend(leaves(add.right()));
            names
        }
    }
}

proptest! {
    #[test]
    fn int_trees_sum_their_leaves(expr in tree(int_var()), env in environment()) {
        let expected: i64 = leaves(&expr)
            .into_iter()
            .map(|name| env.lookup(name).and_then(Value::as_int).unwrap())
            .sum();
        prop_assert_eq!(expr.evaluate(&env), Ok(Value::int(expected)));
        prop_assert_eq!(expr.ty(), Ok(TypeTag::Int));
    }

    #[test]
    fn str_trees_concatenate_leaves_in_order(expr in tree(str_var()), env in environment()) {
        let expected: String = leaves(&expr)
            .into_iter()
            .map(|name| env.lookup(name).and_then(Value::as_str).unwrap())
            .collect();
        prop_assert_eq!(expr.evaluate(&env), Ok(Value::string(expected)));
    }

    #[test]
    fn rendering_joins_leaves_with_plus(expr in tree(int_var())) {
        prop_assert_eq!(expr.to_string(), leaves(&expr).join(" + "));
    }

    #[test]
    fn same_type_operands_check(a in tree(str_var()), b in tree(str_var())) {
        let a_ty = a.ty().unwrap();
        let sum = a + b;
        prop_assert_eq!(sum.type_check(), Ok(()));
        prop_assert_eq!(sum.ty(), Ok(a_ty));
    }

    #[test]
    fn different_type_operands_fail(a in tree(int_var()), b in tree(str_var())) {
        let expected = ExprError::TypeMismatch {
            expected: TypeTag::Int,
            found: TypeTag::Str,
            site: MismatchSite::Operands,
        };
        let sum = a + b;
        prop_assert_eq!(sum.type_check(), Err(expected.clone()));
        prop_assert_eq!(sum.ty(), Err(expected));
    }

    #[test]
    fn variable_rejects_other_runtime_types(n in any::<i64>()) {
        let var = Expr::variable("v", TypeTag::Str);
        let env = Environment::new().with("v", n);
        let err = var.evaluate(&env).unwrap_err();
        prop_assert!(err.is_type_error());
    }

    #[test]
    fn plus_chains_associate_left(names in prop::collection::vec("[a-z]{1,3}", 2..8)) {
        let mut vars = names.iter().map(|name| Expr::variable(name.as_str(), TypeTag::Int));
        let first = vars.next().unwrap();
        let chained = vars.fold(first, |acc, var| acc + var);

        // Root's right child is always the last name.
        let root = chained.as_addition().unwrap();
        prop_assert_eq!(
            root.right().as_variable().map(|var| var.name()),
            names.last().map(String::as_str)
        );
        prop_assert_eq!(chained.to_string(), names.join(" + "));
    }
}
