//! Spec type to C type translation.

use std::collections::HashMap;

/// Maps spec-internal type tokens (`ClearBufferMask`, `Int32`) to C types.
///
/// Lookups that miss return the token unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMap {
    entries: HashMap<String, String>,
}

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mapping. Repeated source types keep the last target.
    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(source.into(), target.into());
    }

    /// Exact lookup without pass-through.
    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(|s| s.as_str())
    }

    /// Translate `source`, passing it through when it is not mapped.
    pub fn translate<'a>(&'a self, source: &'a str) -> &'a str {
        self.get(source).unwrap_or(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
