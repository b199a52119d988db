//! Integration connection state and calendar sync settings.
//!
//! Connections are simulated: toggling marks the row loading, then a timer
//! on the page flips the connected flag. The transitions themselves are
//! pure so the ~1500 ms latency stays component glue.

#[cfg(test)]
#[path = "integrations_test.rs"]
mod integrations_test;

/// Simulated connect/disconnect latency.
pub const TOGGLE_DELAY_MS: u64 = 1500;

/// One connectable portal or service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Integration {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub connected: bool,
    pub loading: bool,
}

/// The five government portals plus calendar sync, all disconnected.
pub fn seed_integrations() -> Vec<Integration> {
    let portal = |id, name, description, icon| Integration {
        id,
        name,
        description,
        icon,
        connected: false,
        loading: false,
    };
    vec![
        portal("ec-portal", "Election Commission Portal", "Access voter information and election records", "how_to_vote"),
        portal("patta", "Patta Chitta", "Land records and property ownership verification", "map"),
        portal("fmb", "FMB - Field Measurement Book", "Survey and land measurement data", "square_foot"),
        portal("guideline-value", "Guideline Value Registry", "Property valuation and registration data", "attach_money"),
        portal("e-filing", "E-Filing System", "Electronic court document filing", "description"),
        portal("calendar-sync", "Calendar Sync", "Sync with court cause-lists and get reminders", "event"),
    ]
}

/// Id of the calendar sync entry, rendered in its own section.
pub const CALENDAR_SYNC_ID: &str = "calendar-sync";

/// Mark an integration loading ahead of the simulated connect call.
/// Returns false when the id is unknown or a toggle is already in flight.
pub fn begin_toggle(integrations: &mut [Integration], id: &str) -> bool {
    match integrations.iter_mut().find(|i| i.id == id) {
        Some(integration) if !integration.loading => {
            integration.loading = true;
            true
        }
        _ => false,
    }
}

/// Complete a toggle: flip the connection and clear the loading flag.
pub fn finish_toggle(integrations: &mut [Integration], id: &str) {
    if let Some(integration) = integrations.iter_mut().find(|i| i.id == id) {
        integration.connected = !integration.connected;
        integration.loading = false;
    }
}

pub fn find<'a>(integrations: &'a [Integration], id: &str) -> Option<&'a Integration> {
    integrations.iter().find(|i| i.id == id)
}

/// Calendar sync preferences shown once the sync integration connects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarSettings {
    pub sync_frequency: String,
    pub notify_before: String,
    pub court_types: Vec<String>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            sync_frequency: "daily".to_owned(),
            notify_before: "1 day".to_owned(),
            court_types: vec!["high".to_owned(), "district".to_owned(), "supreme".to_owned()],
        }
    }
}

impl CalendarSettings {
    /// Toggle membership of a court type in the sync set.
    pub fn toggle_court_type(&mut self, court: &str) {
        if let Some(at) = self.court_types.iter().position(|c| c == court) {
            self.court_types.remove(at);
        } else {
            self.court_types.push(court.to_owned());
        }
    }

    pub fn syncs_court_type(&self, court: &str) -> bool {
        self.court_types.iter().any(|c| c == court)
    }
}
