//! Evaluating one tree against many environments.
//!
//! Trees are immutable and environments are only read, so a single tree can
//! be shared across worker threads without locking.

use rayon::prelude::*;

use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::node::Expr;

/// Worker pool settings for [`evaluate_each`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Stack size of each worker thread, in bytes.
    pub stack_size: usize,
    /// Number of worker threads. `None` lets rayon decide.
    pub num_threads: Option<usize>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            // 32 MiB: unoptimized frames on deep trees before stacker kicks in
            stack_size: 32 * 1024 * 1024,
            num_threads: None,
        }
    }
}

impl EvalConfig {
    #[must_use]
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }
}

/// Evaluate `expr` once per environment, in parallel.
///
/// Results are in the same order as `envs` and identical to calling
/// [`Expr::evaluate`] on each. Runs on a scoped pool so no global rayon
/// state outlives the call; if the pool cannot be built, falls back to
/// evaluating sequentially.
#[tracing::instrument(level = "debug", skip_all, fields(count = envs.len()))]
pub fn evaluate_each(expr: &Expr, envs: &[Environment], config: &EvalConfig) -> Vec<EvalResult> {
    let mut builder = rayon::ThreadPoolBuilder::new().stack_size(config.stack_size);
    if let Some(num_threads) = config.num_threads {
        builder = builder.num_threads(num_threads);
    }

    builder
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| envs.par_iter().map(|env| expr.evaluate(env)).collect())
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), evaluating sequentially");
            evaluate_sequentially(expr, envs)
        })
}

/// Fallback for [`evaluate_each`] when no pool can be built.
///
/// Pool construction only fails when the OS refuses to spawn threads, which
/// tests cannot provoke without fault injection, so the fallback is kept as
/// its own function and tested directly.
pub(crate) fn evaluate_sequentially(expr: &Expr, envs: &[Environment]) -> Vec<EvalResult> {
    envs.iter().map(|env| expr.evaluate(env)).collect()
}
