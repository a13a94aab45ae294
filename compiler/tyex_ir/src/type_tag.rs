//! Primitive type identification.
//!
//! `TypeTag` is a bridge between:
//! - declared types (fixed when a variable node is built)
//! - runtime types (carried by each [`Value`](crate::Value))
//! - string names (used in error messages and `Display`)

use std::fmt;

/// Enum representing every type an expression can have.
///
/// The set is closed per build. Adding a tag means adding an arm to every
/// exhaustive `match`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeTag {
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point (IEEE 754)
    Float,
    /// Boolean
    Bool,
    /// UTF-8 string
    Str,
}

impl TypeTag {
    /// All type tags, in declaration order.
    pub const ALL: [TypeTag; 4] = [Self::Int, Self::Float, Self::Bool, Self::Str];

    /// Get the display name for this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "str",
        }
    }

    /// Whether two values of this type can be combined with `+`.
    ///
    /// Numbers sum and strings concatenate; booleans have no addition.
    /// Runtime addition dispatch checks this before combining values.
    #[must_use]
    pub const fn supports_addition(self) -> bool {
        !matches!(self, Self::Bool)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_names_are_distinct() {
        let mut names: Vec<_> = TypeTag::ALL.iter().map(|tag| tag.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TypeTag::ALL.len());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(TypeTag::Int.to_string(), "int");
        assert_eq!(TypeTag::Str.to_string(), "str");
    }

    #[test]
    fn test_only_bool_lacks_addition() {
        assert!(TypeTag::Int.supports_addition());
        assert!(TypeTag::Float.supports_addition());
        assert!(TypeTag::Str.supports_addition());
        assert!(!TypeTag::Bool.supports_addition());
    }
}
