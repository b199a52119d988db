use super::*;

#[test]
fn seed_has_four_clients() {
    assert_eq!(seed_clients().len(), 4);
}

#[test]
fn search_matches_name_email_and_company() {
    let clients = seed_clients();
    assert_eq!(filter_clients(&clients, "chen").len(), 1);
    assert_eq!(filter_clients(&clients, "emma@example").len(), 1);
    assert_eq!(filter_clients(&clients, "studios").len(), 1);
}

#[test]
fn search_is_case_insensitive_and_trims() {
    let clients = seed_clients();
    assert_eq!(filter_clients(&clients, "  RODRIGUEZ ").len(), 1);
}

#[test]
fn empty_query_keeps_everyone() {
    let clients = seed_clients();
    assert_eq!(filter_clients(&clients, ""), clients);
    assert_eq!(filter_clients(&clients, "   "), clients);
}

#[test]
fn filtered_clients_are_a_subset_and_filtering_is_idempotent() {
    let clients = seed_clients();
    let once = filter_clients(&clients, "example.com");
    let twice = filter_clients(&once, "example.com");
    assert!(once.iter().all(|c| clients.contains(c)));
    assert_eq!(once, twice);
}

#[test]
fn contact_channel_labels_round_trip() {
    for channel in ContactChannel::ALL {
        assert_eq!(ContactChannel::from_label(channel.label()), Some(channel));
    }
    assert_eq!(ContactChannel::from_label("fax"), None);
}
