use super::*;

#[test]
fn seed_is_six_disconnected_integrations() {
    let integrations = seed_integrations();
    assert_eq!(integrations.len(), 6);
    assert!(integrations.iter().all(|i| !i.connected && !i.loading));
    assert!(find(&integrations, CALENDAR_SYNC_ID).is_some());
}

#[test]
fn begin_toggle_sets_loading_immediately() {
    let mut integrations = seed_integrations();
    assert!(begin_toggle(&mut integrations, "patta"));
    let patta = find(&integrations, "patta").unwrap();
    assert!(patta.loading);
    assert!(!patta.connected);
}

#[test]
fn begin_toggle_rejects_unknown_and_in_flight_ids() {
    let mut integrations = seed_integrations();
    assert!(!begin_toggle(&mut integrations, "nope"));
    assert!(begin_toggle(&mut integrations, "e-filing"));
    assert!(!begin_toggle(&mut integrations, "e-filing"));
}

#[test]
fn finish_toggle_flips_connection_and_clears_loading() {
    let mut integrations = seed_integrations();
    begin_toggle(&mut integrations, "ec-portal");
    finish_toggle(&mut integrations, "ec-portal");
    let portal = find(&integrations, "ec-portal").unwrap();
    assert!(portal.connected);
    assert!(!portal.loading);

    begin_toggle(&mut integrations, "ec-portal");
    finish_toggle(&mut integrations, "ec-portal");
    let portal = find(&integrations, "ec-portal").unwrap();
    assert!(!portal.connected);
    assert!(!portal.loading);
}

#[test]
fn calendar_defaults_sync_three_court_types_daily() {
    let settings = CalendarSettings::default();
    assert_eq!(settings.sync_frequency, "daily");
    assert_eq!(settings.notify_before, "1 day");
    assert!(settings.syncs_court_type("high"));
    assert!(settings.syncs_court_type("district"));
    assert!(settings.syncs_court_type("supreme"));
    assert!(!settings.syncs_court_type("tribunal"));
}

#[test]
fn toggling_a_court_type_adds_then_removes_it() {
    let mut settings = CalendarSettings::default();
    settings.toggle_court_type("tribunal");
    assert!(settings.syncs_court_type("tribunal"));
    settings.toggle_court_type("tribunal");
    assert!(!settings.syncs_court_type("tribunal"));
}
