//! Collapsible sidebar navigation between pages.

use leptos::prelude::*;

use crate::state::ui::{ActivePage, UiState};

fn page_icon(page: ActivePage) -> &'static str {
    match page {
        ActivePage::Overview => "📋",
        ActivePage::Documents => "📂",
        ActivePage::Research => "🎓",
        ActivePage::Analytics => "📊",
        ActivePage::Clients => "👥",
        ActivePage::Simulation => "🏛️",
        ActivePage::Integrations => "🔗",
        ActivePage::Settings => "⚙️",
    }
}

/// Sidebar with one entry per page; the active entry is emphasized.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="sidebar" class:sidebar--collapsed=move || ui.get().sidebar_collapsed>
            <div class="sidebar__brand">
                <span class="sidebar__brand-mark">"⚖️"</span>
                <Show when=move || !ui.get().sidebar_collapsed>
                    <span class="sidebar__brand-name">"LegalSuite"</span>
                </Show>
            </div>
            {ActivePage::ALL
                .into_iter()
                .map(|page| {
                    view! {
                        <button
                            class="sidebar__item"
                            class:sidebar__item--active=move || ui.get().active_page == page
                            on:click=move |_| ui.update(|u| u.active_page = page)
                        >
                            <span class="sidebar__item-icon">{page_icon(page)}</span>
                            <Show when=move || !ui.get().sidebar_collapsed>
                                <span class="sidebar__item-label">{page.label()}</span>
                            </Show>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
