use super::*;
use crate::util::content_index::{ContentIndex, IndexEntry};

#[test]
fn queries_of_two_or_fewer_chars_do_not_search() {
    assert!(!should_search(""));
    assert!(!should_search("ab"));
    assert!(!should_search("  ab  "));
    assert!(should_search("abc"));
}

#[test]
fn search_surface_stays_closed_for_short_queries_even_with_matches() {
    let mut index = ContentIndex::default();
    index.register(IndexEntry::new("a", "ab appears here", None));
    // The index itself also refuses short queries, so both gates agree.
    assert!(index.query("ab").is_empty());
}
