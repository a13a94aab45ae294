//! Variable bindings consulted during evaluation.
//!
//! An environment is supplied per `evaluate` call. Nodes borrow it for the
//! duration of the call and never retain it.

use rustc_hash::FxHashMap;
use std::fmt;

use tyex_ir::Value;

/// Mapping from variable name to a runtime value.
///
/// Each value carries its own type tag; the environment itself knows nothing
/// about declared types.
#[derive(Clone, Default, PartialEq)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Environment {
            bindings: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Bind `name` to `value`, returning the value it replaced.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.bindings.insert(name.into(), value.into())
    }

    /// Builder form of [`Environment::bind`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.bind(name, value);
        self
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Environment::new();
        env.extend(iter);
        env
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Environment {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.bind(name, value);
        }
    }
}

/// Sorted by name so output is stable.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|(name, _)| *name);
        f.debug_map().entries(entries).finish()
    }
}
