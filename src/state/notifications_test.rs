use super::*;

#[test]
fn seed_has_four_entries_two_unread() {
    let notifications = seed_notifications();
    assert_eq!(notifications.len(), 4);
    assert_eq!(unread_count(&notifications), 2);
}

#[test]
fn unread_count_tracks_read_flags() {
    let mut notifications = seed_notifications();
    for n in &mut notifications {
        n.read = true;
    }
    assert_eq!(unread_count(&notifications), 0);
}
