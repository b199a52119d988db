use super::*;

#[test]
fn profile_defaults_match_the_seed_advocate() {
    let profile = ProfileSettings::default();
    assert_eq!(profile.name, "Sarah Johnson");
    assert_eq!(profile.bar_registration, "CA-2020-18935");
    assert!(SPECIALIZATIONS.contains(&profile.specialization.as_str()));
}

#[test]
fn profile_validation_requires_name_and_email() {
    let mut profile = ProfileSettings::default();
    assert!(validate_profile(&profile).is_ok());

    profile.name = "   ".to_owned();
    assert!(validate_profile(&profile).is_err());

    profile.name = "Sarah Johnson".to_owned();
    profile.email = "not-an-email".to_owned();
    assert!(validate_profile(&profile).is_err());
}

#[test]
fn email_shape_check_accepts_and_rejects() {
    assert!(is_valid_email("s.johnson@lawfirm.com"));
    assert!(is_valid_email("  a@b.co  "));
    assert!(!is_valid_email("missing-at.com"));
    assert!(!is_valid_email("@lawfirm.com"));
    assert!(!is_valid_email("user@nodot"));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@domain."));
}

#[test]
fn notification_defaults_opt_out_of_marketing_only() {
    let prefs = NotificationPrefs::default();
    assert!(prefs.email_notifications);
    assert!(prefs.case_updates);
    assert!(prefs.court_deadlines);
    assert!(prefs.new_messages);
    assert!(!prefs.marketing_emails);
}

#[test]
fn theme_mode_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ThemeMode::Auto).unwrap(), "\"auto\"");
    let parsed: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(parsed, ThemeMode::Dark);
}

#[test]
fn theme_mode_values_round_trip() {
    for mode in ThemeMode::ALL {
        assert_eq!(ThemeMode::from_value(mode.value()), Some(mode));
    }
    assert_eq!(ThemeMode::from_value("sepia"), None);
}

#[test]
fn records_tolerate_missing_fields_when_deserializing() {
    let workspace: WorkspaceSettings = serde_json::from_str("{\"default_view\":\"clients\"}").unwrap();
    assert_eq!(workspace.default_view, "clients");
    assert_eq!(workspace.backup_frequency, "daily");
    assert!(workspace.document_auto_save);
}
