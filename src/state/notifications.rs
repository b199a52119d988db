//! Navbar notification feed.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// A single notification row in the navbar dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    /// Human-friendly relative label, seeded as-is.
    pub time: String,
    pub read: bool,
}

/// Seed notifications shown in the navbar dropdown.
pub fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            text: "Hearing reminder for Case #C-2023-4582".to_owned(),
            time: "10 mins ago".to_owned(),
            read: false,
        },
        Notification {
            id: 2,
            text: "New document uploaded by client".to_owned(),
            time: "45 mins ago".to_owned(),
            read: false,
        },
        Notification {
            id: 3,
            text: "Court date changed for Smith v. Jones".to_owned(),
            time: "2 hours ago".to_owned(),
            read: true,
        },
        Notification {
            id: 4,
            text: "Client Johnson signed the agreement".to_owned(),
            time: "5 hours ago".to_owned(),
            read: true,
        },
    ]
}

/// Unread count for the navbar badge.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
