use super::*;

#[test]
fn hearings_cover_the_three_seeded_cases() {
    let hearings = upcoming_hearings();
    let names: Vec<_> = hearings.iter().map(|h| h.case_name).collect();
    assert_eq!(names, ["Smith v. Jones", "Williams v. Anderson Corp", "State v. Peterson"]);
}

#[test]
fn activity_feed_has_three_entries_with_case_numbers() {
    let activity = recent_activity();
    assert_eq!(activity.len(), 3);
    assert!(activity.iter().all(|a| a.case_no.starts_with("Case #C-2023-")));
}

#[test]
fn index_entries_carry_semantic_categories_and_page_prefix() {
    let entries = index_entries();
    assert_eq!(entries.len(), 6);
    assert!(entries.iter().all(|e| e.id.starts_with("overview-")));
    assert!(entries.iter().any(|e| e.category.as_deref() == Some("Upcoming Hearings")));
    assert!(entries.iter().any(|e| e.category.as_deref() == Some("Recent Activity")));
}
