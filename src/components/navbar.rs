//! Top navigation bar: in-page search, notifications, profile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Search queries the shared content index instead of walking the DOM;
//! activating a result scrolls the registered element into view and applies
//! a temporary highlight that fades back after a fixed delay.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::notifications::{Notification, unread_count};
use crate::state::session::{SessionState, avatar_initial};
use crate::state::ui::UiState;
use crate::util::content_index::{ContentIndex, MIN_QUERY_CHARS, SearchMatch};

/// Highlight color applied to an activated search result.
#[cfg(feature = "hydrate")]
const HIGHLIGHT_COLOR: &str = "#fffdba";
/// How long the highlight stays before fading back.
#[cfg(feature = "hydrate")]
const HIGHLIGHT_REVERT_MS: u64 = 2000;

/// Whether a query is long enough to run and keep the result surface open.
fn should_search(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}

/// Top navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<Vec<Notification>>>();
    let index = expect_context::<RwSignal<ContentIndex>>();

    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<SearchMatch>::new());
    let search_open = RwSignal::new(false);
    let notifications_open = RwSignal::new(false);
    let profile_open = RwSignal::new(false);

    let run_search = move |raw: String| {
        if should_search(&raw) {
            results.set(index.with_untracked(|i| i.query(&raw)));
            search_open.set(true);
        } else {
            results.set(Vec::new());
            search_open.set(false);
        }
        query.set(raw);
    };

    let clear_search = move |_| {
        query.set(String::new());
        results.set(Vec::new());
        search_open.set(false);
    };

    let activate = Callback::new(move |entry_id: String| {
        #[cfg(feature = "hydrate")]
        highlight_element(&entry_id);
        #[cfg(not(feature = "hydrate"))]
        let _ = entry_id;
        search_open.set(false);
    });

    let identity = move || {
        session
            .get()
            .profile
            .map(|p| (p.name, p.role))
            .unwrap_or_else(|| ("User".to_owned(), "Advocate".to_owned()))
    };

    view! {
        <div class="navbar">
            <button
                class="navbar__menu-toggle"
                aria-label="Toggle sidebar"
                on:click=move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed)
            >
                "☰"
            </button>

            <div class="navbar__search">
                <input
                    class="navbar__search-input"
                    type="text"
                    placeholder="Search anything on this page..."
                    prop:value=move || query.get()
                    on:input=move |ev| run_search(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            let current = results.get_untracked();
                            if let Some(first) = current.first() {
                                activate.run(first.entry_id.clone());
                            }
                        }
                    }
                />
                <Show when=move || !query.get().is_empty()>
                    <button class="navbar__search-clear" on:click=clear_search>
                        "✕"
                    </button>
                </Show>

                <Show when=move || search_open.get() && !results.get().is_empty()>
                    <div class="navbar__results">
                        <div class="navbar__results-header">
                            {move || {
                                let count = results.get().len();
                                let plural = if count == 1 { "" } else { "s" };
                                format!("{count} result{plural} found")
                            }}
                        </div>
                        {move || {
                            results
                                .get()
                                .into_iter()
                                .map(|result| {
                                    let entry_id = result.entry_id.clone();
                                    view! {
                                        <div
                                            class="navbar__result"
                                            on:click=move |_| activate.run(entry_id.clone())
                                        >
                                            <p class="navbar__result-context">{result.context}</p>
                                            <span class="navbar__result-category">{result.category}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>

                <Show when=move || search_open.get() && results.get().is_empty()>
                    <div class="navbar__results navbar__results--empty">
                        <p>{move || format!("No results found for \"{}\"", query.get())}</p>
                        <p class="navbar__results-hint">"Try different keywords"</p>
                    </div>
                </Show>
            </div>

            <div class="navbar__actions">
                <div class="navbar__notifications">
                    <button
                        class="navbar__icon-button"
                        aria-label="Notifications"
                        on:click=move |_| notifications_open.update(|open| *open = !*open)
                    >
                        "🔔"
                        <Show when=move || notifications.with(|n| unread_count(n) > 0)>
                            <span class="navbar__badge">
                                {move || notifications.with(|n| unread_count(n))}
                            </span>
                        </Show>
                    </button>

                    <Show when=move || notifications_open.get()>
                        <div class="navbar__dropdown navbar__dropdown--notifications">
                            <div class="navbar__dropdown-header">
                                <span>"Notifications"</span>
                                // Rendered but intentionally unwired, matching
                                // the source behavior.
                                <button class="navbar__dropdown-link">"Mark all as read"</button>
                            </div>
                            {move || {
                                notifications
                                    .get()
                                    .into_iter()
                                    .map(|n| {
                                        view! {
                                            <div class="navbar__notification" class:navbar__notification--unread=!n.read>
                                                <p>{n.text}</p>
                                                <span class="navbar__notification-time">{n.time}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                            <div class="navbar__dropdown-footer">
                                <button class="navbar__dropdown-link">"View all notifications"</button>
                            </div>
                        </div>
                    </Show>
                </div>

                <div class="navbar__profile">
                    <button
                        class="navbar__profile-button"
                        on:click=move |_| profile_open.update(|open| *open = !*open)
                    >
                        <span class="navbar__avatar">
                            {move || avatar_initial(session.get().profile.as_ref())}
                        </span>
                        <span class="navbar__profile-name">{move || identity().0}</span>
                        <span class="navbar__profile-role">{move || identity().1}</span>
                    </button>

                    <Show when=move || profile_open.get()>
                        <div class="navbar__dropdown navbar__dropdown--profile">
                            <div class="navbar__dropdown-header">
                                <span>{move || identity().0}</span>
                            </div>
                            <button class="navbar__dropdown-link">"Profile"</button>
                            <button class="navbar__dropdown-link">"Settings"</button>
                            <button class="navbar__dropdown-link">"Sign out"</button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Scroll a registered element into view and flash a temporary highlight.
#[cfg(feature = "hydrate")]
fn highlight_element(id: &str) {
    use wasm_bindgen::JsCast as _;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(el) = doc.get_element_by_id(id) else {
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&options);

    let Ok(html) = el.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let style = html.style();
    let original = style.get_property_value("background-color").unwrap_or_default();
    let _ = style.set_property("transition", "background-color 0.5s");
    let _ = style.set_property("background-color", HIGHLIGHT_COLOR);

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(HIGHLIGHT_REVERT_MS)).await;
        if original.is_empty() {
            let _ = style.remove_property("background-color");
        } else {
            let _ = style.set_property("background-color", &original);
        }
    });
}
