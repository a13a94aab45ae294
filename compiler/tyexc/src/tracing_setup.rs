//! Logging configuration from the environment.
//!
//! - `RUST_LOG`: standard `EnvFilter` directives. Unset means no subscriber
//!   is installed at all.
//! - `TYEX_LOG_TREE`: when set, render spans as an indented tree
//!   (`tracing-tree`) instead of flat `fmt` lines.
//!
//! Log output always goes to stderr so it never mixes with command output.

use std::ffi::OsString;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Which subscriber, if any, to install.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Install a subscriber (`RUST_LOG` is set).
    pub enabled: bool,
    /// Use the hierarchical layer (`TYEX_LOG_TREE` is set).
    pub tree: bool,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        LogConfig {
            enabled: lookup("RUST_LOG").is_some(),
            tree: lookup("TYEX_LOG_TREE").is_some(),
        }
    }
}

/// Install the global subscriber described by `config`.
///
/// Safe to call multiple times; only the first call has any effect.
pub fn init_tracing(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let tree = config.tree;

    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        if tree {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
