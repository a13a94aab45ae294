use std::fmt;

use tyex_ir::TypeTag;

use crate::environment::Environment;
use crate::errors::{binding_type_mismatch, unbound_variable, EvalResult, ExprError};

/// A reference to a named value with a declared type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
    declared_type: TypeTag,
}

impl Variable {
    pub fn new(name: impl Into<String>, declared_type: TypeTag) -> Self {
        Variable {
            name: name.into(),
            declared_type,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn declared_type(&self) -> TypeTag {
        self.declared_type
    }

    /// A lone variable is always well-typed: its type is its declaration.
    #[inline]
    pub fn ty(&self) -> TypeTag {
        self.declared_type
    }

    /// Always succeeds; there is no structure to check.
    pub fn type_check(&self) -> Result<(), ExprError> {
        Ok(())
    }

    /// Look the name up and return the bound value unchanged.
    ///
    /// Fails with `UnboundVariable` if `env` has no binding, and with
    /// `TypeMismatch` if the bound value's runtime type is not the
    /// declared type.
    pub fn evaluate(&self, env: &Environment) -> EvalResult {
        let Some(value) = env.lookup(&self.name) else {
            tracing::debug!(name = %self.name, "unbound variable");
            return Err(unbound_variable(&self.name));
        };

        let found = value.type_tag();
        if found != self.declared_type {
            tracing::debug!(
                name = %self.name,
                declared = %self.declared_type,
                %found,
                "bound value has the wrong type"
            );
            return Err(binding_type_mismatch(&self.name, self.declared_type, found));
        }

        Ok(value.clone())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
