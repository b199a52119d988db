//! Integrations: simulated portal connections and calendar sync settings.

use leptos::prelude::*;

use crate::state::integrations::{
    CALENDAR_SYNC_ID, CalendarSettings, Integration, begin_toggle, find, finish_toggle,
    seed_integrations,
};
#[cfg(feature = "hydrate")]
use crate::state::integrations::TOGGLE_DELAY_MS;

/// Integrations page.
#[component]
pub fn IntegrationsPage() -> impl IntoView {
    let integrations = RwSignal::new(seed_integrations());
    let calendar = RwSignal::new(CalendarSettings::default());
    let settings_saved = RwSignal::new(false);

    let toggle = Callback::new(move |id: &'static str| {
        let started = integrations.try_update(|list| begin_toggle(list, id)).unwrap_or(false);
        if !started {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOGGLE_DELAY_MS)).await;
            integrations.update(|list| finish_toggle(list, id));
        });
        #[cfg(not(feature = "hydrate"))]
        integrations.update(|list| finish_toggle(list, id));
    });

    let calendar_connected = move || {
        integrations.with(|list| find(list, CALENDAR_SYNC_ID).is_some_and(|i| i.connected))
    };

    let portals = move || {
        integrations.with(|list| {
            list.iter().filter(|i| i.id != CALENDAR_SYNC_ID).cloned().collect::<Vec<_>>()
        })
    };

    view! {
        <div class="integrations">
            <h2>"🔗 Integrations"</h2>
            <p class="integrations__subtitle">
                "Connect with government portals and sync with court calendars"
            </p>

            <div class="integrations__columns">
                <section class="card" aria-label="Government Portals">
                    <h3>"Government Portals"</h3>
                    <p>"Connect directly to government systems for seamless data access"</p>
                    {move || {
                        portals()
                            .into_iter()
                            .map(|portal| view! { <IntegrationRow integration=portal on_toggle=toggle/> })
                            .collect::<Vec<_>>()
                    }}
                </section>

                <section class="card" aria-label="Court Calendar Sync">
                    <h3>"Court Calendar Sync"</h3>
                    <p>"Sync with court cause-lists and get automatic updates"</p>
                    {move || {
                        integrations
                            .with(|list| find(list, CALENDAR_SYNC_ID).cloned())
                            .map(|sync| view! { <IntegrationRow integration=sync on_toggle=toggle/> })
                    }}

                    <Show when=calendar_connected>
                        <div class="integrations__calendar">
                            <h4>"Calendar Settings"</h4>
                            <label class="integrations__field">
                                "Sync Frequency"
                                <select on:change=move |ev| {
                                    calendar.update(|c| c.sync_frequency = event_target_value(&ev));
                                    settings_saved.set(false);
                                }>
                                    <option value="realtime">"Real-time"</option>
                                    <option value="hourly">"Hourly"</option>
                                    <option value="daily" selected=true>"Daily"</option>
                                    <option value="weekly">"Weekly"</option>
                                </select>
                            </label>
                            <label class="integrations__field">
                                "Notify Before Hearing"
                                <select on:change=move |ev| {
                                    calendar.update(|c| c.notify_before = event_target_value(&ev));
                                    settings_saved.set(false);
                                }>
                                    <option value="1 hour">"1 hour"</option>
                                    <option value="3 hours">"3 hours"</option>
                                    <option value="6 hours">"6 hours"</option>
                                    <option value="1 day" selected=true>"1 day"</option>
                                    <option value="2 days">"2 days"</option>
                                    <option value="1 week">"1 week"</option>
                                </select>
                            </label>
                            <fieldset class="integrations__field">
                                <legend>"Court Types to Sync"</legend>
                                {[("high", "High Court"), ("district", "District Court"), ("supreme", "Supreme Court"), ("tribunal", "Tribunals")]
                                    .into_iter()
                                    .map(|(id, label)| {
                                        view! {
                                            <label class="integrations__checkbox">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || calendar.with(|c| c.syncs_court_type(id))
                                                    on:change=move |_| {
                                                        calendar.update(|c| c.toggle_court_type(id));
                                                        settings_saved.set(false);
                                                    }
                                                />
                                                {label}
                                            </label>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </fieldset>
                            <button class="btn btn--primary" on:click=move |_| settings_saved.set(true)>
                                "Save Settings"
                            </button>
                            <Show when=move || settings_saved.get()>
                                <p class="integrations__saved">"Calendar settings saved."</p>
                            </Show>
                        </div>
                    </Show>
                </section>
            </div>

            <section class="card" aria-label="Recent Integration Activity">
                <h3>"Recent Integration Activity"</h3>
                <table class="integrations__table">
                    <thead>
                        <tr>
                            <th>"Integration"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            portals()
                                .into_iter()
                                .map(|portal| {
                                    let connected = portal.connected;
                                    view! {
                                        <tr>
                                            <td>{portal.name}</td>
                                            <td>
                                                <span
                                                    class="badge"
                                                    class:badge--connected=connected
                                                    class:badge--disconnected=!connected
                                                >
                                                    {if connected { "Connected" } else { "Disconnected" }}
                                                </span>
                                            </td>
                                            <td>
                                                <button class="integrations__link">"View Logs"</button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </section>
        </div>
    }
}

/// One integration row with its connect/disconnect button.
#[component]
fn IntegrationRow(integration: Integration, on_toggle: Callback<&'static str>) -> impl IntoView {
    let id = integration.id;
    let label = if integration.loading {
        "Processing..."
    } else if integration.connected {
        "Connected"
    } else {
        "Connect"
    };

    view! {
        <div class="integration">
            <div class="integration__info">
                <span class="integration__icon">{integration.icon}</span>
                <div>
                    <h4>{integration.name}</h4>
                    <p>{integration.description}</p>
                </div>
            </div>
            <button
                class="integration__toggle"
                class:integration__toggle--connected=integration.connected
                disabled=integration.loading
                on:click=move |_| on_toggle.run(id)
            >
                {label}
            </button>
        </div>
    }
}
