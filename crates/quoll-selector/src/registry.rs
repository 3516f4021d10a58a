//! Memoizing selector registry.
//!
//! The registry owns every [`Selector`] in the process: lookups go through
//! one get-or-create operation keyed on the trimmed source text, entries are
//! never evicted or updated, and failed constructions leave no trace. The
//! registry is an explicitly owned value — create one at application start
//! and pass it by reference — so tests get isolation by constructing a fresh
//! one.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ConstructionError;
use crate::selector::Selector;

/// Cache mapping trimmed selector text to its shared parsed form.
///
/// The `&mut self` receiver on [`get`](Self::get) makes the whole
/// check → construct → insert sequence a critical section at compile time,
/// so each distinct source is constructed at most once per registry. The
/// stored `Arc` handles stay usable across threads once handed out.
#[derive(Debug)]
pub struct SelectorRegistry {
    /// All constructed selectors, keyed by trimmed source text.
    cache: HashMap<String, Arc<Selector>>,
}

impl SelectorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Get the selector for `text`, constructing and caching it on first
    /// request.
    ///
    /// `text` is trimmed of leading/trailing whitespace and the trimmed form
    /// is the cache key, so `get("  .foo ")` and `get(".foo")` share one
    /// entry. A cache hit returns the stored selector itself (same
    /// allocation), not a copy.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] when the text cannot be tokenized. The
    /// failure is not cached: a later call with the same malformed text
    /// re-runs tokenization and fails identically.
    pub fn get(&mut self, text: &str) -> Result<Arc<Selector>, ConstructionError> {
        let key = text.trim();
        if let Some(selector) = self.cache.get(key) {
            return Ok(Arc::clone(selector));
        }

        let selector = Selector::parse(key).map_err(|cause| ConstructionError {
            source_text: key.to_string(),
            cause,
        })?;
        let selector = Arc::new(selector);
        let _ = self.cache.insert(key.to_string(), Arc::clone(&selector));
        Ok(selector)
    }

    /// The number of distinct selectors constructed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether no selector has been constructed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Whether a selector for this text (after trimming) is already cached.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains_key(text.trim())
    }
}

impl Default for SelectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
