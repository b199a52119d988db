use super::*;

#[test]
fn case_law_seed_is_three_landmark_results() {
    let results = seed_case_law();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.importance == "Landmark"));
    assert!(results.iter().all(|r| !r.tags.is_empty()));
}

#[test]
fn evolution_timeline_is_chronological() {
    let milestones = seed_evolution();
    assert_eq!(milestones.len(), 5);
    let years: Vec<i32> = milestones.iter().map(|m| m.year.parse().unwrap()).collect();
    assert!(years.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn cause_list_entries_are_all_upcoming() {
    let entries = seed_cause_list();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e.status == "Upcoming"));
}
