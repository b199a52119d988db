use super::*;
use crate::util::storage::{MemoryStore, SettingsStore};

#[test]
fn valid_profile_saves_through_the_store() {
    let store = MemoryStore::default();
    let record = ProfileSettings::default();
    assert!(validate_profile(&record).is_ok());
    save_record(&store, PROFILE_KEY, &record);
    assert_eq!(load_record::<ProfileSettings>(&store, PROFILE_KEY), record);
}

#[test]
fn invalid_email_never_reaches_the_store() {
    let store = MemoryStore::default();
    let mut record = ProfileSettings::default();
    record.email = "broken".to_owned();
    // The page refuses to save before touching the store.
    assert!(validate_profile(&record).is_err());
    assert!(store.get(PROFILE_KEY).is_none());
}

#[test]
fn each_card_saves_wholesale_under_its_own_key() {
    let store = MemoryStore::default();
    let mut theme_record = ThemeSettings::default();
    theme_record.mode = ThemeMode::Dark;
    save_record(&store, THEME_KEY, &theme_record);

    let mut workspace_record = WorkspaceSettings::default();
    workspace_record.matter_sorting = "alphabetical".to_owned();
    save_record(&store, WORKSPACE_KEY, &workspace_record);

    assert_eq!(load_record::<ThemeSettings>(&store, THEME_KEY).mode, ThemeMode::Dark);
    assert_eq!(
        load_record::<WorkspaceSettings>(&store, WORKSPACE_KEY).matter_sorting,
        "alphabetical"
    );
    // Untouched records still load as defaults.
    assert_eq!(
        load_record::<NotificationPrefs>(&store, NOTIFICATIONS_KEY),
        NotificationPrefs::default()
    );
}
