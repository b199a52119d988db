//! Small presentational cards shared across pages.

use leptos::prelude::*;

/// A clickable headline statistic card.
#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    change: &'static str,
    icon: &'static str,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let clickable = on_select.is_some();
    view! {
        <div
            class="stat-card"
            class:stat-card--clickable=clickable
            on:click=move |_| {
                if let Some(on_select) = on_select.as_ref() {
                    on_select.run(());
                }
            }
        >
            <div class="stat-card__body">
                <p class="stat-card__title">{title}</p>
                <p class="stat-card__value">{move || value.get()}</p>
                <p class="stat-card__change">{change}</p>
            </div>
            <span class="stat-card__icon">{icon}</span>
        </div>
    }
}

/// Labeled progress bar with a percentage readout.
#[component]
pub fn ProgressBar(label: String, percent: u32) -> impl IntoView {
    let width = format!("width: {}%", percent.min(100));
    view! {
        <div class="progress">
            <div class="progress__header">
                <span class="progress__label">{label}</span>
                <span class="progress__value">{format!("{percent}%")}</span>
            </div>
            <div class="progress__track">
                <div class="progress__fill" style=width></div>
            </div>
        </div>
    }
}
