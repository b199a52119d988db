//! Root application component: context providers and page switching.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell simulates the user-data fetch, provides shared state contexts,
//! and renders whichever page the sidebar selected. Pages never talk to each
//! other directly.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::clients::ClientsPage;
use crate::pages::documents::DocumentsPage;
use crate::pages::integrations::IntegrationsPage;
use crate::pages::overview::OverviewPage;
use crate::pages::research::ResearchPage;
use crate::pages::settings::SettingsPage;
use crate::pages::simulation::SimulationPage;
use crate::state::notifications::seed_notifications;
use crate::state::session::SessionState;
use crate::state::settings::ThemeSettings;
use crate::state::ui::{ActivePage, UiState};
use crate::util::content_index::ContentIndex;
use crate::util::storage::{StoreHandle, THEME_KEY, load_record};
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and switches between pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::loading());
    let ui = RwSignal::new(UiState::default());
    let notifications = RwSignal::new(seed_notifications());
    let index = RwSignal::new(ContentIndex::default());
    let store = StoreHandle::browser();

    provide_context(session);
    provide_context(ui);
    provide_context(notifications);
    provide_context(index);
    provide_context(store.clone());

    // Simulated login and user-data fetch.
    #[cfg(feature = "hydrate")]
    {
        use crate::state::session::{PROFILE_FETCH_DELAY_MS, advocate_profile_seed};

        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(PROFILE_FETCH_DELAY_MS))
                .await;
            session.update(|s| {
                s.profile = Some(advocate_profile_seed());
                s.loading = false;
            });
            log::debug!("session profile loaded");
        });
    }

    // Apply the persisted theme once at startup.
    let theme_settings = load_record::<ThemeSettings>(&*store, THEME_KEY);
    theme::apply(theme_settings.mode);

    view! {
        <Stylesheet id="leptos" href="/pkg/legalsuite.css"/>
        <Title text="LegalSuite"/>

        <div class="app">
            <Sidebar/>
            <div class="app__main">
                <Navbar/>
                <main class="app__content">
                    {move || match ui.get().active_page {
                        ActivePage::Overview => view! { <OverviewPage/> }.into_any(),
                        ActivePage::Documents => view! { <DocumentsPage/> }.into_any(),
                        ActivePage::Research => view! { <ResearchPage/> }.into_any(),
                        ActivePage::Analytics => view! { <AnalyticsPage/> }.into_any(),
                        ActivePage::Clients => view! { <ClientsPage/> }.into_any(),
                        ActivePage::Simulation => view! { <SimulationPage/> }.into_any(),
                        ActivePage::Integrations => view! { <IntegrationsPage/> }.into_any(),
                        ActivePage::Settings => view! { <SettingsPage/> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
