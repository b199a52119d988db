use super::*;

fn index_with(entries: &[(&str, &str, Option<&str>)]) -> ContentIndex {
    let mut index = ContentIndex::default();
    for (id, text, category) in entries {
        index.register(IndexEntry::new(*id, *text, *category));
    }
    index
}

#[test]
fn short_queries_return_nothing() {
    let index = index_with(&[("a", "Smith v. Jones hearing", Some("Hearings"))]);
    assert!(index.query("").is_empty());
    assert!(index.query("sm").is_empty());
    assert!(index.query("  s  ").is_empty());
}

#[test]
fn empty_registry_returns_empty_not_error() {
    let index = ContentIndex::default();
    assert!(index.query("smith").is_empty());
}

#[test]
fn matching_is_case_insensitive_substring() {
    let index = index_with(&[("a", "Williams v. Anderson Corp", Some("Cases"))]);
    let hits = index.query("ANDERSON");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entry_id, "a");
    assert_eq!(hits[0].category, "Cases");
}

#[test]
fn category_falls_back_to_generic_label() {
    let index = index_with(&[("a", "deposition transcripts", None)]);
    let hits = index.query("deposition");
    assert_eq!(hits[0].category, "Page Content");
}

#[test]
fn single_leaf_match_yields_exactly_one_result() {
    let index = index_with(&[
        ("a", "Upcoming hearing tomorrow", Some("Hearings")),
        ("b", "Client billing overview", Some("Billing")),
    ]);
    let hits = index.query("billing");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entry_id, "b");
}

#[test]
fn duplicate_registration_replaces_instead_of_duplicating() {
    let mut index = ContentIndex::default();
    index.register(IndexEntry::new("a", "old text", None));
    index.register(IndexEntry::new("a", "new text", None));
    assert_eq!(index.len(), 1);
    assert_eq!(index.query("text").len(), 1);
    assert!(index.query("new").len() == 1);
    assert!(index.query("old").is_empty());
}

#[test]
fn results_are_capped() {
    let mut index = ContentIndex::default();
    for i in 0..25 {
        index.register(IndexEntry::new(format!("e{i}"), "repeated clause", None));
    }
    assert_eq!(index.query("clause").len(), MAX_RESULTS);
}

#[test]
fn context_window_is_ellipsis_truncated() {
    let long = "a".repeat(40) + "needle" + &"b".repeat(80);
    let index = index_with(&[("a", &long, None)]);
    let hits = index.query("needle");
    let context = &hits[0].context;
    assert!(context.starts_with("..."));
    assert!(context.ends_with("..."));
    assert!(context.contains("needle"));
    // 20 before + needle + 50 after, plus ellipses.
    assert_eq!(context.len(), 3 + 20 + 6 + 50 + 3);
}

#[test]
fn context_window_is_not_truncated_for_short_text() {
    let index = index_with(&[("a", "short needle text", None)]);
    let hits = index.query("needle");
    assert_eq!(hits[0].context, "short needle text");
}

#[test]
fn unregister_prefix_drops_page_entries() {
    let mut index = index_with(&[
        ("analytics-1", "case one", None),
        ("analytics-2", "case two", None),
        ("clients-1", "client one", None),
    ]);
    index.unregister_prefix("analytics-");
    assert_eq!(index.len(), 1);
    assert!(index.query("case").is_empty());
    assert_eq!(index.query("client").len(), 1);
}
