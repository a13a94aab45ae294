//! The `demo` command: build a few trees, check them, and evaluate them.

use std::io::{self, Write};

use tyex_expr::{Environment, Expr, TypeTag};

/// Run the demonstration, writing results to `out`.
///
/// Expression failures are reported as diagnostics in the output; only I/O
/// failures are returned.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_demo<W: Write>(out: &mut W) -> io::Result<()> {
    let x = Expr::variable("x", TypeTag::Int);
    let y = Expr::variable("y", TypeTag::Int);
    let z = Expr::variable("z", TypeTag::Int);

    let expr1 = x + y + z;
    let env1: Environment = [("x", 5_i64), ("y", 2), ("z", 3)].into_iter().collect();
    show(out, "expr1", &expr1, &env1)?;
    writeln!(out)?;

    let a = Expr::variable("a", TypeTag::Str);
    let b = Expr::variable("b", TypeTag::Str);
    let c = Expr::variable("c", TypeTag::Str);

    let expr2 = a + b.clone() + c;
    let env2: Environment = [("a", "my "), ("b", "little"), ("c", " pony")]
        .into_iter()
        .collect();
    show(out, "expr2", &expr2, &env2)?;
    writeln!(out)?;

    let expr3 = expr1 + b;
    match expr3.type_check() {
        Err(err) if err.is_type_error() => {
            writeln!(out, "Type error in expression {expr3}")?;
            writeln!(out, "{}", err.to_diagnostic())
        }
        Err(err) => writeln!(out, "{}", err.to_diagnostic()),
        Ok(()) => writeln!(out, "{expr3} type-checks"),
    }
}

/// Print the tree, its type, and its value under `env`.
fn show<W: Write>(out: &mut W, label: &str, expr: &Expr, env: &Environment) -> io::Result<()> {
    writeln!(out, "{expr}")?;

    let ty = match expr.ty() {
        Ok(ty) => ty,
        Err(err) => return writeln!(out, "{}", err.to_diagnostic()),
    };
    writeln!(out, "{label} has type {ty}")?;

    match expr.evaluate(env) {
        Ok(value) => writeln!(out, "{value}"),
        Err(err) => writeln!(out, "{}", err.to_diagnostic()),
    }
}
