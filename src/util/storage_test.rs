use super::*;
use crate::state::settings::{NotificationPrefs, ProfileSettings, ThemeSettings, WorkspaceSettings};

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::default();
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.clear("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn load_record_defaults_when_key_missing() {
    let store = MemoryStore::default();
    let profile: ProfileSettings = load_record(&store, PROFILE_KEY);
    assert_eq!(profile, ProfileSettings::default());
}

#[test]
fn load_record_defaults_when_value_is_garbage() {
    let store = MemoryStore::default();
    store.set(THEME_KEY, "{not json");
    let theme: ThemeSettings = load_record(&store, THEME_KEY);
    assert_eq!(theme, ThemeSettings::default());
}

#[test]
fn save_then_load_preserves_every_field() {
    let store = MemoryStore::default();

    let mut profile = ProfileSettings::default();
    profile.name = "Dana Reyes".to_owned();
    profile.email = "d.reyes@lawfirm.com".to_owned();
    profile.bar_registration = "NY-2018-44102".to_owned();
    save_record(&store, PROFILE_KEY, &profile);
    assert_eq!(load_record::<ProfileSettings>(&store, PROFILE_KEY), profile);

    let mut prefs = NotificationPrefs::default();
    prefs.marketing_emails = true;
    prefs.new_messages = false;
    save_record(&store, NOTIFICATIONS_KEY, &prefs);
    assert_eq!(load_record::<NotificationPrefs>(&store, NOTIFICATIONS_KEY), prefs);

    let mut workspace = WorkspaceSettings::default();
    workspace.backup_frequency = "weekly".to_owned();
    workspace.document_auto_save = false;
    save_record(&store, WORKSPACE_KEY, &workspace);
    assert_eq!(load_record::<WorkspaceSettings>(&store, WORKSPACE_KEY), workspace);
}

#[test]
fn records_are_stored_under_independent_keys() {
    let store = MemoryStore::default();
    save_record(&store, PROFILE_KEY, &ProfileSettings::default());
    save_record(&store, THEME_KEY, &ThemeSettings::default());
    store.clear(PROFILE_KEY);
    assert!(store.get(PROFILE_KEY).is_none());
    assert!(store.get(THEME_KEY).is_some());
}
