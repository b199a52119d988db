use super::*;

#[test]
fn index_entries_cover_every_case_law_result() {
    let results = seed_case_law();
    let entries = index_entries(&results);
    assert_eq!(entries.len(), results.len());
    assert!(entries.iter().all(|e| e.id.starts_with("research-case-")));
    assert!(entries.iter().any(|e| e.text.contains("AIR 1973 SC 1461")));
}
