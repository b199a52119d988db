//! Registry-backed in-page search.
//!
//! DESIGN
//! ======
//! Pages register the text they render as `{id, text, category}` entries;
//! the navbar queries the registry instead of walking the DOM. Entry ids
//! double as element ids so an activated result can be scrolled to and
//! highlighted without the search itself touching the rendering engine.

#[cfg(test)]
#[path = "content_index_test.rs"]
mod content_index_test;

/// Queries shorter than this never execute and close any open result surface.
pub const MIN_QUERY_CHARS: usize = 3;
/// Upper bound on returned matches.
pub const MAX_RESULTS: usize = 10;

const CONTEXT_BEFORE: usize = 20;
const CONTEXT_AFTER: usize = 50;

/// One searchable piece of rendered content.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexEntry {
    /// Stable id, also used as the DOM element id for scroll/highlight.
    pub id: String,
    pub text: String,
    /// Semantic grouping label shown next to the match; `None` falls back
    /// to a generic label at query time.
    pub category: Option<String>,
}

impl IndexEntry {
    pub fn new(id: impl Into<String>, text: impl Into<String>, category: Option<&str>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category: category.map(str::to_owned),
        }
    }
}

/// A single search hit with display context.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchMatch {
    pub entry_id: String,
    pub context: String,
    pub category: String,
}

/// Registry of searchable content for the currently mounted pages.
#[derive(Clone, Debug, Default)]
pub struct ContentIndex {
    entries: Vec<IndexEntry>,
}

impl ContentIndex {
    /// Register an entry. A second registration with the same id replaces
    /// the first, so re-rendering pages stay idempotent.
    pub fn register(&mut self, entry: IndexEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == entry.id) {
            *existing = entry;
        } else {
            self.entries.push(entry);
        }
    }

    /// Drop every entry whose id starts with `prefix`. Pages unregister
    /// their content on cleanup with their own id prefix.
    pub fn unregister_prefix(&mut self, prefix: &str) {
        self.entries.retain(|e| !e.id.starts_with(prefix));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring search over registered entries.
    ///
    /// Returns at most [`MAX_RESULTS`] matches, one per entry, in
    /// registration order. Queries shorter than [`MIN_QUERY_CHARS`] yield
    /// nothing; an empty registry yields nothing rather than failing.
    pub fn query(&self, raw_query: &str) -> Vec<SearchMatch> {
        let needle = raw_query.trim().to_lowercase();
        if needle.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let mut matches = Vec::new();
        for entry in &self.entries {
            let haystack = entry.text.to_lowercase();
            let Some(at) = haystack.find(&needle) else {
                continue;
            };
            matches.push(SearchMatch {
                entry_id: entry.id.clone(),
                context: context_window(&entry.text, &haystack, at, needle.len()),
                category: entry
                    .category
                    .clone()
                    .unwrap_or_else(|| "Page Content".to_owned()),
            });
            if matches.len() == MAX_RESULTS {
                break;
            }
        }
        matches
    }
}

/// Cut a context window around a match, ellipsis-marked where truncated.
///
/// Byte offsets come from the lowercased haystack; the original text is used
/// for display when lowercasing preserved byte positions, otherwise the
/// lowercased text is shown as-is.
fn context_window(original: &str, lowered: &str, at: usize, needle_len: usize) -> String {
    let source = if original.len() == lowered.len() {
        original
    } else {
        lowered
    };

    let mut start = at.saturating_sub(CONTEXT_BEFORE);
    while start > 0 && !source.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (at + needle_len + CONTEXT_AFTER).min(source.len());
    while end < source.len() && !source.is_char_boundary(end) {
        end += 1;
    }

    let mut context = String::new();
    if start > 0 {
        context.push_str("...");
    }
    context.push_str(&source[start..end]);
    if end < source.len() {
        context.push_str("...");
    }
    context
}
