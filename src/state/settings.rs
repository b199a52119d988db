//! Settings records persisted through the key-value store.
//!
//! Four independent flat records, each read at startup and overwritten
//! wholesale on explicit save. Serde defaults keep old stored values
//! loadable when a field is missing.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

/// Advocate profile form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    pub name: String,
    pub specialization: String,
    pub bar_registration: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: "Sarah Johnson".to_owned(),
            specialization: "Intellectual Property Law".to_owned(),
            bar_registration: "CA-2020-18935".to_owned(),
            email: "s.johnson@lawfirm.com".to_owned(),
            phone: "(555) 123-4567".to_owned(),
            bio: "Experienced IP attorney with focus on technology patents and copyright law."
                .to_owned(),
        }
    }
}

/// Selectable specializations for the profile form.
pub const SPECIALIZATIONS: [&str; 5] = [
    "Intellectual Property Law",
    "Criminal Law",
    "Corporate Law",
    "Family Law",
    "Real Estate Law",
];

/// Validate the profile form before save. Returns the first problem found.
pub fn validate_profile(profile: &ProfileSettings) -> Result<(), String> {
    if profile.name.trim().is_empty() {
        return Err("Name is required.".to_owned());
    }
    if !is_valid_email(&profile.email) {
        return Err("Enter a valid email address.".to_owned());
    }
    Ok(())
}

/// Minimal shape check: something before `@`, and a dot in the domain part.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Notification preference toggles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPrefs {
    pub email_notifications: bool,
    pub case_updates: bool,
    pub court_deadlines: bool,
    pub new_messages: bool,
    pub marketing_emails: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email_notifications: true,
            case_updates: true,
            court_deadlines: true,
            new_messages: true,
            marketing_emails: false,
        }
    }
}

/// Appearance mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Auto,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto];

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::Auto => "System Default",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "auto" => Some(ThemeMode::Auto),
            _ => None,
        }
    }
}

/// Theme and accessibility preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub mode: ThemeMode,
    pub font_size: String,
    pub high_contrast: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            font_size: "medium".to_owned(),
            high_contrast: false,
        }
    }
}

/// Workspace behavior preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    pub default_view: String,
    pub matter_sorting: String,
    pub document_auto_save: bool,
    pub backup_frequency: String,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            default_view: "dashboard".to_owned(),
            matter_sorting: "recent".to_owned(),
            document_auto_save: true,
            backup_frequency: "daily".to_owned(),
        }
    }
}
