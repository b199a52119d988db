//! Session identity for the signed-in advocate.
//!
//! There is no real authentication; the profile is seeded after a short
//! simulated fetch delay on mount so loading states render realistically.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Simulated profile-fetch latency.
pub const PROFILE_FETCH_DELAY_MS: u64 = 500;

/// The signed-in advocate's profile and headline counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvocateProfile {
    pub name: String,
    pub role: String,
    pub cases: u32,
    pub upcoming_hearings: u32,
    pub recent_documents: u32,
    pub performance_score: u32,
    pub notifications: u32,
    pub messages: u32,
}

/// Session state tracking the current profile and loading status.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub profile: Option<AdvocateProfile>,
    pub loading: bool,
}

impl SessionState {
    pub fn loading() -> Self {
        Self {
            profile: None,
            loading: true,
        }
    }
}

/// Seed profile, created once after the simulated delay and never mutated.
pub fn advocate_profile_seed() -> AdvocateProfile {
    AdvocateProfile {
        name: "Sarah Johnson".to_owned(),
        role: "Senior Advocate".to_owned(),
        cases: 18,
        upcoming_hearings: 3,
        recent_documents: 5,
        performance_score: 92,
        notifications: 4,
        messages: 2,
    }
}

/// First letter of the profile name for the avatar badge.
pub fn avatar_initial(profile: Option<&AdvocateProfile>) -> String {
    profile
        .and_then(|p| p.name.chars().next())
        .unwrap_or('U')
        .to_string()
}
