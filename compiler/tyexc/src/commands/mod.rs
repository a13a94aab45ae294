//! Driver commands.

mod demo;
mod explain;

pub use demo::run_demo;
pub use explain::{explain_error, ExplainError};
