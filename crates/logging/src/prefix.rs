//! crates/logging/src/prefix.rs
//! Composition and memoisation of line prefixes.

use std::collections::HashMap;

use crate::level::LevelSet;
use crate::registry::LevelRegistry;

/// Builds the prefix written in front of a message tagged with `message`.
///
/// The prefix lists, in byte order, the names of every registered level whose
/// bit is present in both `enabled` and `message`, joined by `|` inside one
/// bracket. A non-empty `label` follows in its own bracket and the whole
/// prefix ends with a single space. An empty return value means the line is
/// suppressed, regardless of `label`.
///
/// ```
/// use bitlog::{LevelRegistry, LevelSet, compose_prefix};
///
/// let registry = LevelRegistry::with_defaults();
/// let enabled = LevelSet::DEBUG | LevelSet::INFO;
///
/// assert_eq!(compose_prefix(&registry, enabled, LevelSet::INFO | LevelSet::DEBUG, ""), "[DEBUG|INFO] ");
/// assert_eq!(compose_prefix(&registry, enabled, LevelSet::DEBUG, "K8s"), "[DEBUG][K8s] ");
/// assert_eq!(compose_prefix(&registry, enabled, LevelSet::ERROR, "K8s"), "");
/// ```
#[must_use]
pub fn compose_prefix(
    registry: &LevelRegistry,
    enabled: LevelSet,
    message: LevelSet,
    label: &str,
) -> String {
    let mut names: Vec<&str> = registry.names_matching(enabled & message).collect();
    if names.is_empty() {
        return String::new();
    }
    names.sort_unstable();

    let mut prefix = format!("[{}]", names.join("|"));
    if !label.is_empty() {
        prefix.push('[');
        prefix.push_str(label);
        prefix.push(']');
    }
    prefix.push(' ');
    prefix
}

/// Memo of composed prefixes keyed by message level.
///
/// The cache stores suppressed lookups as empty strings so repeated calls at a
/// disabled level skip the registry scan. Owners must call
/// [`invalidate`](Self::invalidate) whenever the registry, the enabled mask or
/// the label changes.
///
/// The cache is unbounded: every distinct message level looked up adds one
/// entry, kept until the next invalidation. Callers that log at many ad-hoc
/// level combinations grow it accordingly.
#[derive(Clone, Debug, Default)]
pub struct PrefixCache {
    entries: HashMap<LevelSet, String>,
}

impl PrefixCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the prefix for `message`, composing and storing it on a miss.
    pub fn lookup(
        &mut self,
        registry: &LevelRegistry,
        enabled: LevelSet,
        message: LevelSet,
        label: &str,
    ) -> &str {
        self.entries
            .entry(message)
            .or_insert_with(|| compose_prefix(registry, enabled, message, label))
    }

    /// Drops every memoised prefix.
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    /// Number of memoised message levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is memoised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
