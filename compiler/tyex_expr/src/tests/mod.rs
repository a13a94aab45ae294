//! Unit tests for the node contract, environment, errors and batch
//! evaluation.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::arithmetic_side_effects,
    reason = "Tests build trees with `+` and compute expected sums from small constants"
)]

mod environment_tests;
mod errors_tests;
