use super::*;

#[test]
fn sending_an_empty_update_is_rejected_locally() {
    let client = &seed_clients()[0];
    let outcome = send_update_status(client, ContactChannel::Email, "   ");
    assert!(outcome.is_err());
}

#[test]
fn sending_names_the_channel_and_client() {
    let client = &seed_clients()[1];
    let line = send_update_status(client, ContactChannel::WhatsApp, "Hearing moved to Friday").unwrap();
    assert_eq!(line, "WhatsApp update sent to Michael Chen.");
}

#[test]
fn index_entries_cover_every_client() {
    let clients = seed_clients();
    let entries = index_entries(&clients);
    assert_eq!(entries.len(), clients.len());
    assert!(entries.iter().all(|e| e.id.starts_with("clients-")));
    assert!(entries.iter().any(|e| e.text.contains("Rodriguez Family Office")));
}
