//! Tyex IR - shared vocabulary for expression trees.
//!
//! This crate holds the two types every other phase agrees on:
//! - [`TypeTag`]: the closed set of primitive types, used both for the
//!   declared type of a variable and the runtime type of a value
//! - [`Value`]: a runtime value tagged with its own [`TypeTag`]
//!
//! Type tags compare by exact equality. There is no subtyping and no
//! implicit conversion between tags.

mod type_tag;
mod value;

pub use type_tag::TypeTag;
pub use value::Value;
