//! Settings & workspace: profile, theme, notifications, workspace records.
//!
//! Each card edits one record, validates locally, and saves wholesale
//! through the injected key-value store. Records load once at mount.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::state::settings::{
    NotificationPrefs, ProfileSettings, SPECIALIZATIONS, ThemeMode, ThemeSettings,
    WorkspaceSettings, validate_profile,
};
use crate::util::storage::{
    NOTIFICATIONS_KEY, PROFILE_KEY, StoreHandle, THEME_KEY, WORKSPACE_KEY, load_record,
    save_record,
};
use crate::util::theme;

/// Outcome line under a card's save button.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SaveState {
    Saved,
    Invalid(String),
}

/// Settings page.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = expect_context::<StoreHandle>();

    let profile = RwSignal::new(load_record::<ProfileSettings>(&*store, PROFILE_KEY));
    let prefs = RwSignal::new(load_record::<NotificationPrefs>(&*store, NOTIFICATIONS_KEY));
    let theme_settings = RwSignal::new(load_record::<ThemeSettings>(&*store, THEME_KEY));
    let workspace = RwSignal::new(load_record::<WorkspaceSettings>(&*store, WORKSPACE_KEY));

    let profile_state = RwSignal::new(None::<SaveState>);
    let prefs_state = RwSignal::new(None::<SaveState>);
    let theme_state = RwSignal::new(None::<SaveState>);
    let workspace_state = RwSignal::new(None::<SaveState>);

    let save_profile = {
        let store = store.clone();
        move |_| {
            let record = profile.get_untracked();
            match validate_profile(&record) {
                Ok(()) => {
                    save_record(&*store, PROFILE_KEY, &record);
                    profile_state.set(Some(SaveState::Saved));
                }
                Err(message) => profile_state.set(Some(SaveState::Invalid(message))),
            }
        }
    };

    let save_prefs = {
        let store = store.clone();
        move |_| {
            save_record(&*store, NOTIFICATIONS_KEY, &prefs.get_untracked());
            prefs_state.set(Some(SaveState::Saved));
        }
    };

    let save_theme = {
        let store = store.clone();
        move |_| {
            let record = theme_settings.get_untracked();
            save_record(&*store, THEME_KEY, &record);
            theme::apply(record.mode);
            theme_state.set(Some(SaveState::Saved));
        }
    };

    let save_workspace = {
        let store = store.clone();
        move |_| {
            save_record(&*store, WORKSPACE_KEY, &workspace.get_untracked());
            workspace_state.set(Some(SaveState::Saved));
        }
    };

    let state_line = |state: RwSignal<Option<SaveState>>| {
        move || {
            state.get().map(|s| {
                let (class, message) = match s {
                    SaveState::Saved => ("settings__saved", "Saved.".to_owned()),
                    SaveState::Invalid(message) => ("settings__invalid", message),
                };
                view! { <p class=class>{message}</p> }
            })
        }
    };

    view! {
        <div class="settings">
            <h2>"⚙️ Settings & Workspace"</h2>

            <div class="settings__cards">
                <section class="card" aria-label="Advocate Profile">
                    <h3>"Advocate Profile"</h3>
                    <div class="settings__grid">
                        <label class="settings__field">
                            "Full Name"
                            <input
                                type="text"
                                prop:value=move || profile.get().name
                                on:input=move |ev| profile.update(|p| p.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="settings__field">
                            "Specialization"
                            <select on:change=move |ev| {
                                profile.update(|p| p.specialization = event_target_value(&ev));
                            }>
                                {SPECIALIZATIONS
                                    .into_iter()
                                    .map(|s| {
                                        view! {
                                            <option
                                                value=s
                                                selected=move || profile.get().specialization == s
                                            >
                                                {s}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="settings__field">
                            "Bar Registration Number"
                            <input
                                type="text"
                                prop:value=move || profile.get().bar_registration
                                on:input=move |ev| {
                                    profile.update(|p| p.bar_registration = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="settings__field">
                            "Email Address"
                            <input
                                type="email"
                                prop:value=move || profile.get().email
                                on:input=move |ev| profile.update(|p| p.email = event_target_value(&ev))
                            />
                        </label>
                        <label class="settings__field settings__field--wide">
                            "Professional Bio"
                            <textarea
                                rows="3"
                                prop:value=move || profile.get().bio
                                on:input=move |ev| profile.update(|p| p.bio = event_target_value(&ev))
                            ></textarea>
                        </label>
                    </div>
                    <div class="settings__actions">
                        <button class="btn btn--primary" on:click=save_profile>
                            "Save Profile"
                        </button>
                    </div>
                    {state_line(profile_state)}
                </section>

                <section class="card" aria-label="Theme and Appearance">
                    <h3>"Theme & Appearance"</h3>
                    <fieldset class="settings__field">
                        <legend>"Theme Mode"</legend>
                        {ThemeMode::ALL
                            .into_iter()
                            .map(|mode| {
                                view! {
                                    <label class="settings__radio">
                                        <input
                                            type="radio"
                                            name="mode"
                                            value=mode.value()
                                            prop:checked=move || theme_settings.get().mode == mode
                                            on:change=move |_| {
                                                theme_settings.update(|t| t.mode = mode);
                                            }
                                        />
                                        {mode.label()}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </fieldset>
                    <label class="settings__field">
                        "Font Size"
                        <select on:change=move |ev| {
                            theme_settings.update(|t| t.font_size = event_target_value(&ev));
                        }>
                            {["small", "medium", "large", "x-large"]
                                .into_iter()
                                .map(|size| {
                                    view! {
                                        <option
                                            value=size
                                            selected=move || theme_settings.get().font_size == size
                                        >
                                            {size}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="settings__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || theme_settings.get().high_contrast
                            on:change=move |_| {
                                theme_settings.update(|t| t.high_contrast = !t.high_contrast);
                            }
                        />
                        "High Contrast Mode"
                    </label>
                    <div class="settings__actions">
                        <button class="btn btn--primary" on:click=save_theme>
                            "Apply Theme"
                        </button>
                    </div>
                    {state_line(theme_state)}
                </section>

                <section class="card" aria-label="Notification Preferences">
                    <h3>"Notification Preferences"</h3>
                    <label class="settings__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || prefs.get().email_notifications
                            on:change=move |_| {
                                prefs.update(|p| p.email_notifications = !p.email_notifications);
                            }
                        />
                        "Enable Email Notifications"
                    </label>
                    <label class="settings__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || prefs.get().case_updates
                            on:change=move |_| prefs.update(|p| p.case_updates = !p.case_updates)
                        />
                        "Case Updates"
                    </label>
                    <label class="settings__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || prefs.get().court_deadlines
                            on:change=move |_| {
                                prefs.update(|p| p.court_deadlines = !p.court_deadlines);
                            }
                        />
                        "Court Deadlines"
                    </label>
                    <label class="settings__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || prefs.get().new_messages
                            on:change=move |_| prefs.update(|p| p.new_messages = !p.new_messages)
                        />
                        "New Messages"
                    </label>
                    <label class="settings__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || prefs.get().marketing_emails
                            on:change=move |_| {
                                prefs.update(|p| p.marketing_emails = !p.marketing_emails);
                            }
                        />
                        "Marketing Emails"
                    </label>
                    <div class="settings__actions">
                        <button class="btn btn--primary" on:click=save_prefs>
                            "Save Preferences"
                        </button>
                    </div>
                    {state_line(prefs_state)}
                </section>

                <section class="card" aria-label="Workspace Setup">
                    <h3>"Workspace Setup"</h3>
                    <label class="settings__field">
                        "Default View"
                        <select on:change=move |ev| {
                            workspace.update(|w| w.default_view = event_target_value(&ev));
                        }>
                            {["dashboard", "clients", "documents", "analytics"]
                                .into_iter()
                                .map(|v| {
                                    view! {
                                        <option value=v selected=move || workspace.get().default_view == v>
                                            {v}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="settings__field">
                        "Matter Sorting"
                        <select on:change=move |ev| {
                            workspace.update(|w| w.matter_sorting = event_target_value(&ev));
                        }>
                            {["recent", "alphabetical", "deadline"]
                                .into_iter()
                                .map(|v| {
                                    view! {
                                        <option value=v selected=move || workspace.get().matter_sorting == v>
                                            {v}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="settings__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || workspace.get().document_auto_save
                            on:change=move |_| {
                                workspace.update(|w| w.document_auto_save = !w.document_auto_save);
                            }
                        />
                        "Document Auto-Save"
                    </label>
                    <label class="settings__field">
                        "Backup Frequency"
                        <select on:change=move |ev| {
                            workspace.update(|w| w.backup_frequency = event_target_value(&ev));
                        }>
                            {["hourly", "daily", "weekly"]
                                .into_iter()
                                .map(|v| {
                                    view! {
                                        <option value=v selected=move || workspace.get().backup_frequency == v>
                                            {v}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <div class="settings__actions">
                        <button class="btn btn--primary" on:click=save_workspace>
                            "Save Workspace"
                        </button>
                    </div>
                    {state_line(workspace_state)}
                </section>
            </div>
        </div>
    }
}
