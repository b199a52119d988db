use super::*;

#[test]
fn seeded_profile_matches_dashboard_stats() {
    let profile = advocate_profile_seed();
    assert_eq!(profile.name, "Sarah Johnson");
    assert_eq!(profile.role, "Senior Advocate");
    assert_eq!(profile.cases, 18);
    assert_eq!(profile.upcoming_hearings, 3);
    assert_eq!(profile.recent_documents, 5);
    assert_eq!(profile.performance_score, 92);
}

#[test]
fn session_starts_loading_without_profile() {
    let session = SessionState::loading();
    assert!(session.loading);
    assert!(session.profile.is_none());
}

#[test]
fn avatar_initial_falls_back_without_profile() {
    assert_eq!(avatar_initial(None), "U");
    let profile = advocate_profile_seed();
    assert_eq!(avatar_initial(Some(&profile)), "S");
}
