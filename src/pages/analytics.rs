//! Case analytics: portfolio table with filters and headline aggregates.
//!
//! The aggregate cards are computed over the full portfolio regardless of
//! the active table filters; only the table narrows. See `state::cases`.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::state::cases::{
    Case, CaseFilter, CaseStats, RiskLevel, category_options, seed_cases, status_options,
};
use crate::util::content_index::{ContentIndex, IndexEntry};
use crate::util::format::format_currency;

/// Sentinel select value meaning "no filter".
const ALL: &str = "All";

/// Map a select value onto an optional equality filter.
fn option_from_select(value: &str) -> Option<String> {
    if value == ALL { None } else { Some(value.to_owned()) }
}

/// One-decimal percentage label for the aggregate cards.
fn percent_label(value: f64) -> String {
    format!("{value:.1}%")
}

/// Badge modifier for a case risk level.
fn risk_class(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "risk-badge--low",
        RiskLevel::Medium => "risk-badge--medium",
        RiskLevel::High => "risk-badge--high",
    }
}

fn index_entries(cases: &[Case]) -> Vec<IndexEntry> {
    cases
        .iter()
        .map(|case| {
            IndexEntry::new(
                format!("analytics-case-{}", case.id),
                format!("{} {} {} {}", case.name, case.status, case.category, case.next_hearing),
                Some("Case Portfolio"),
            )
        })
        .collect()
}

/// Analytics page.
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let cases = StoredValue::new(seed_cases());
    // Aggregates over the unfiltered portfolio, computed once.
    let stats = cases.with_value(|c| CaseStats::compute(c));
    let statuses = cases.with_value(|c| status_options(c));
    let categories = cases.with_value(|c| category_options(c));

    let index = expect_context::<RwSignal<ContentIndex>>();
    Effect::new(move || {
        index.update(|i| {
            for entry in cases.with_value(|c| index_entries(c)) {
                i.register(entry);
            }
        });
    });
    on_cleanup(move || index.update(|i| i.unregister_prefix("analytics-")));

    let query = RwSignal::new(String::new());
    let risk = RwSignal::new(None::<RiskLevel>);
    let status = RwSignal::new(None::<String>);
    let category = RwSignal::new(None::<String>);

    let filtered = Memo::new(move |_| {
        let filter = CaseFilter {
            query: query.get(),
            risk: risk.get(),
            status: status.get(),
            category: category.get(),
        };
        cases.with_value(|c| filter.apply(c))
    });

    view! {
        <div class="analytics">
            <header class="analytics__header">
                <h2>"📊 Case Analytics"</h2>
                <p>"Track progress, risk, and outcomes across your portfolio"</p>
            </header>

            <div class="analytics__stats">
                <StatCard
                    title="Average Progress"
                    value=percent_label(stats.average_progress)
                    change="Across all matters"
                    icon="📈"
                />
                <StatCard
                    title="Average Success Probability"
                    value=percent_label(stats.average_success_probability)
                    change="Weighted evenly"
                    icon="🎯"
                />
                <StatCard
                    title="High Risk Cases"
                    value=stats.high_risk_count.to_string()
                    change="Needs attention"
                    icon="⚠️"
                />
                <StatCard
                    title="Portfolio Value"
                    value=format_currency(stats.total_value_cents)
                    change="Total across matters"
                    icon="💰"
                />
            </div>

            <section class="card" aria-label="Case Portfolio">
                <div class="analytics__filters">
                    <input
                        class="analytics__search"
                        type="text"
                        placeholder="Filter by case name..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <select
                        class="analytics__select"
                        on:change=move |ev| risk.set(RiskLevel::from_label(&event_target_value(&ev)))
                    >
                        <option value=ALL>"All Risk Levels"</option>
                        {RiskLevel::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.label()>{r.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="analytics__select"
                        on:change=move |ev| status.set(option_from_select(&event_target_value(&ev)))
                    >
                        <option value=ALL>"All Statuses"</option>
                        {statuses
                            .iter()
                            .map(|s| view! { <option value=s.clone()>{s.clone()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="analytics__select"
                        on:change=move |ev| category.set(option_from_select(&event_target_value(&ev)))
                    >
                        <option value=ALL>"All Categories"</option>
                        {categories
                            .iter()
                            .map(|c| view! { <option value=c.clone()>{c.clone()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <table class="analytics__table">
                    <thead>
                        <tr>
                            <th>"Case"</th>
                            <th>"Progress"</th>
                            <th>"Risk"</th>
                            <th>"Success"</th>
                            <th>"Stages"</th>
                            <th>"Delays"</th>
                            <th>"Value"</th>
                            <th>"Status"</th>
                            <th>"Next Hearing"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|case| view! { <CaseRow case=case/> })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>

                <Show when=move || filtered.get().is_empty()>
                    <p class="analytics__empty">"No cases match the current filters."</p>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn CaseRow(case: Case) -> impl IntoView {
    let progress_style = format!("width: {}%", case.progress.min(100));
    let risk_badge = format!("risk-badge {}", risk_class(case.risk));

    view! {
        <tr class="analytics__row" id=format!("analytics-case-{}", case.id)>
            <td>
                <span class="analytics__case-name">{case.name.clone()}</span>
                <span class="analytics__case-category">{case.category.clone()}</span>
            </td>
            <td>
                <div class="progress__track progress__track--table">
                    <div class="progress__fill" style=progress_style></div>
                </div>
                <span class="analytics__percent">{format!("{}%", case.progress)}</span>
            </td>
            <td>
                <span class=risk_badge>{case.risk.label()}</span>
            </td>
            <td>{format!("{}%", case.success_probability)}</td>
            <td>{format!("{}/{}", case.stages_completed, case.stages_total)}</td>
            <td>{case.delays.to_string()}</td>
            <td>{format_currency(case.value_cents)}</td>
            <td>{case.status.clone()}</td>
            <td>{case.next_hearing.clone()}</td>
        </tr>
    }
}
