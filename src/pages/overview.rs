//! Dashboard overview: headline stats, quick actions, activity, hearings.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use leptos::prelude::*;

use crate::components::stat_card::{ProgressBar, StatCard};
use crate::state::session::SessionState;
use crate::state::ui::{ActivePage, UiState};
use crate::util::content_index::{ContentIndex, IndexEntry};

/// A recent activity feed row.
struct ActivityItem {
    time: &'static str,
    action: &'static str,
    case_no: &'static str,
    icon: &'static str,
}

fn recent_activity() -> [ActivityItem; 3] {
    [
        ActivityItem {
            time: "2 hours ago",
            action: "Submitted motion for summary judgment in Smith v. Jones",
            case_no: "Case #C-2023-4582",
            icon: "📝",
        },
        ActivityItem {
            time: "Yesterday",
            action: "Added deposition transcripts from Dr. Evans",
            case_no: "Case #C-2023-4196",
            icon: "📑",
        },
        ActivityItem {
            time: "2 days ago",
            action: "Scheduled mediation session for October 15th",
            case_no: "Case #C-2023-3871",
            icon: "📅",
        },
    ]
}

/// An upcoming hearing card.
struct HearingItem {
    case_name: &'static str,
    time: &'static str,
    court: &'static str,
    status: &'static str,
    status_class: &'static str,
}

fn upcoming_hearings() -> [HearingItem; 3] {
    [
        HearingItem {
            case_name: "Smith v. Jones",
            time: "Tomorrow, 10:30 AM",
            court: "District Court Room 4B",
            status: "Preparation Needed",
            status_class: "hearing__status--preparation",
        },
        HearingItem {
            case_name: "Williams v. Anderson Corp",
            time: "Oct 15, 2:00 PM",
            court: "Federal Court Room 2",
            status: "Under Review",
            status_class: "hearing__status--review",
        },
        HearingItem {
            case_name: "State v. Peterson",
            time: "Oct 18, 9:00 AM",
            court: "Superior Court Room 5",
            status: "Confirmed",
            status_class: "hearing__status--confirmed",
        },
    ]
}

/// Register this page's searchable content.
fn index_entries() -> Vec<IndexEntry> {
    let mut entries = Vec::new();
    for (i, hearing) in upcoming_hearings().iter().enumerate() {
        entries.push(IndexEntry::new(
            format!("overview-hearing-{i}"),
            format!("{} {} {}", hearing.case_name, hearing.time, hearing.court),
            Some("Upcoming Hearings"),
        ));
    }
    for (i, item) in recent_activity().iter().enumerate() {
        entries.push(IndexEntry::new(
            format!("overview-activity-{i}"),
            format!("{} {}", item.action, item.case_no),
            Some("Recent Activity"),
        ));
    }
    entries
}

/// Dashboard overview page. Shows a loading state until the simulated
/// profile fetch resolves.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let index = expect_context::<RwSignal<ContentIndex>>();

    Effect::new(move || {
        index.update(|i| {
            for entry in index_entries() {
                i.register(entry);
            }
        });
    });
    on_cleanup(move || index.update(|i| i.unregister_prefix("overview-")));

    let go_to = move |page: ActivePage| Callback::new(move |()| ui.update(|u| u.active_page = page));

    view! {
        <Show
            when=move || session.get().profile.is_some()
            fallback=move || {
                view! {
                    <div class="overview overview--loading">
                        <div class="spinner" aria-label="Loading"></div>
                    </div>
                }
            }
        >
            <div class="overview">
                <header class="overview__welcome">
                    <h1>
                        {move || {
                            let name = session.get().profile.map(|p| p.name).unwrap_or_default();
                            format!("Welcome back, {name}!")
                        }}
                    </h1>
                    <p>"Here's what's happening with your cases today."</p>
                </header>

                <div class="overview__stats">
                    <StatCard
                        title="Active Cases"
                        value=Signal::derive(move || {
                            session.get().profile.map(|p| p.cases.to_string()).unwrap_or_default()
                        })
                        change="+2 from last week"
                        icon="📋"
                        on_select=go_to(ActivePage::Clients)
                    />
                    <StatCard
                        title="Upcoming Hearings"
                        value=Signal::derive(move || {
                            session
                                .get()
                                .profile
                                .map(|p| p.upcoming_hearings.to_string())
                                .unwrap_or_default()
                        })
                        change="Next: Tomorrow at 10:30 AM"
                        icon="⚖️"
                        on_select=go_to(ActivePage::Documents)
                    />
                    <StatCard
                        title="Recent Documents"
                        value=Signal::derive(move || {
                            session
                                .get()
                                .profile
                                .map(|p| p.recent_documents.to_string())
                                .unwrap_or_default()
                        })
                        change="3 need review"
                        icon="📄"
                        on_select=go_to(ActivePage::Documents)
                    />
                    <StatCard
                        title="Performance Score"
                        value=Signal::derive(move || {
                            session
                                .get()
                                .profile
                                .map(|p| format!("{}%", p.performance_score))
                                .unwrap_or_default()
                        })
                        change="+5% from last month"
                        icon="📊"
                        on_select=go_to(ActivePage::Analytics)
                    />
                </div>

                <div class="overview__columns">
                    <div class="overview__main">
                        <section class="card" aria-label="Quick Actions">
                            <h2>"Quick Actions"</h2>
                            <div class="overview__actions">
                                <button class="action-button" on:click=move |_| ui.update(|u| u.active_page = ActivePage::Documents)>
                                    <span class="action-button__icon">"📄"</span>
                                    <span>"Add Document"</span>
                                </button>
                                <button class="action-button" on:click=move |_| ui.update(|u| u.active_page = ActivePage::Research)>
                                    <span class="action-button__icon">"🎓"</span>
                                    <span>"Research"</span>
                                </button>
                                <button class="action-button" on:click=move |_| ui.update(|u| u.active_page = ActivePage::Analytics)>
                                    <span class="action-button__icon">"📊"</span>
                                    <span>"Analytics"</span>
                                </button>
                                <button class="action-button" on:click=move |_| ui.update(|u| u.active_page = ActivePage::Simulation)>
                                    <span class="action-button__icon">"🏛️"</span>
                                    <span>"Simulation"</span>
                                </button>
                            </div>
                        </section>

                        <section class="card" aria-label="Recent Activity">
                            <h2>"Recent Activity"</h2>
                            {recent_activity()
                                .into_iter()
                                .enumerate()
                                .map(|(i, item)| {
                                    view! {
                                        <div class="activity" id=format!("overview-activity-{i}")>
                                            <span class="activity__icon">{item.icon}</span>
                                            <div class="activity__body">
                                                <p class="activity__action">{item.action}</p>
                                                <span class="activity__case">{item.case_no}</span>
                                                <span class="activity__time">{item.time}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </section>
                    </div>

                    <div class="overview__side">
                        <section class="card" aria-label="Upcoming Hearings">
                            <h2>"Upcoming Hearings"</h2>
                            {upcoming_hearings()
                                .into_iter()
                                .enumerate()
                                .map(|(i, hearing)| {
                                    view! {
                                        <div class="hearing" id=format!("overview-hearing-{i}")>
                                            <h3 class="hearing__case">{hearing.case_name}</h3>
                                            <p class="hearing__time">{hearing.time}</p>
                                            <p class="hearing__court">{hearing.court}</p>
                                            <span class=format!("hearing__status {}", hearing.status_class)>
                                                {hearing.status}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </section>

                        <section class="card" aria-label="Performance Overview">
                            <h2>"Performance Overview"</h2>
                            <ProgressBar label="Case Resolution Rate".to_owned() percent=78/>
                            <ProgressBar label="Client Satisfaction".to_owned() percent=92/>
                            <ProgressBar label="Document Accuracy".to_owned() percent=86/>
                        </section>
                    </div>
                </div>
            </div>
        </Show>
    }
}
