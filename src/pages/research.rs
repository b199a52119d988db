//! Research & intelligence: case law search, judgment evolution, cause list.

#[cfg(test)]
#[path = "research_test.rs"]
mod research_test;

use leptos::prelude::*;

use crate::state::research::{
    CaseLawResult, ResearchTab, seed_case_law, seed_cause_list, seed_evolution,
};
use crate::util::content_index::{ContentIndex, IndexEntry};

fn index_entries(results: &[CaseLawResult]) -> Vec<IndexEntry> {
    results
        .iter()
        .map(|result| {
            IndexEntry::new(
                format!("research-case-{}", result.id),
                format!("{} {} {}", result.title, result.citation, result.summary),
                Some("Case Law"),
            )
        })
        .collect()
}

/// Research page.
#[component]
pub fn ResearchPage() -> impl IntoView {
    let tab = RwSignal::new(ResearchTab::default());
    let search_query = RwSignal::new(String::new());
    let selected_court = RwSignal::new("supreme".to_owned());
    let selected_year = RwSignal::new("2023".to_owned());

    let case_law = StoredValue::new(seed_case_law());
    let evolution = StoredValue::new(seed_evolution());
    let cause_list = StoredValue::new(seed_cause_list());

    let index = expect_context::<RwSignal<ContentIndex>>();
    Effect::new(move || {
        index.update(|i| {
            for entry in case_law.with_value(|r| index_entries(r)) {
                i.register(entry);
            }
        });
    });
    on_cleanup(move || index.update(|i| i.unregister_prefix("research-")));

    view! {
        <div class="research">
            <header class="research__header">
                <span class="research__header-icon">"🎓"</span>
                <div>
                    <h1>"Research & Intelligence"</h1>
                    <p>"Advanced legal research tools and case law analysis"</p>
                </div>
            </header>

            <div class="research__stats">
                <div class="card research__stat">
                    <h3>"12,487"</h3>
                    <p>"Cases in Database"</p>
                </div>
                <div class="card research__stat">
                    <h3>"2,341"</h3>
                    <p>"Supreme Court Cases"</p>
                </div>
                <div class="card research__stat">
                    <h3>"8,642"</h3>
                    <p>"High Court Cases"</p>
                </div>
                <div class="card research__stat">
                    <h3>"Daily"</h3>
                    <p>"Database Updates"</p>
                </div>
            </div>

            <nav class="tabs">
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || tab.get() == ResearchTab::CaseLaw
                    on:click=move |_| tab.set(ResearchTab::CaseLaw)
                >
                    "Case Law Search"
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || tab.get() == ResearchTab::Evolution
                    on:click=move |_| tab.set(ResearchTab::Evolution)
                >
                    "Judgment Evolution"
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || tab.get() == ResearchTab::CauseList
                    on:click=move |_| tab.set(ResearchTab::CauseList)
                >
                    "Cause List Monitoring"
                </button>
            </nav>

            <section class="card">
                <Show when=move || tab.get() == ResearchTab::CaseLaw>
                    <div class="research__caselaw">
                        <h2>"Case Law Search"</h2>
                        <input
                            class="research__search"
                            type="text"
                            placeholder="Search by case name, citation, judge, or keywords..."
                            prop:value=move || search_query.get()
                            on:input=move |ev| search_query.set(event_target_value(&ev))
                        />
                        <div class="research__selects">
                            <select on:change=move |ev| selected_court.set(event_target_value(&ev))>
                                <option value="supreme">"Supreme Court of India"</option>
                                <option value="delhi">"Delhi High Court"</option>
                                <option value="bombay">"Bombay High Court"</option>
                                <option value="madras">"Madras High Court"</option>
                            </select>
                            <select on:change=move |ev| selected_year.set(event_target_value(&ev))>
                                <option value="2023">"2023"</option>
                                <option value="2022">"2022"</option>
                                <option value="2021">"2021"</option>
                                <option value="2020">"2020"</option>
                                <option value="2019">"2019"</option>
                            </select>
                        </div>
                        <button class="btn btn--primary research__submit">"Search Case Law"</button>

                        <h3>"Search Results"</h3>
                        {case_law
                            .with_value(|results| {
                                results
                                    .iter()
                                    .map(|result| {
                                        view! {
                                            <div class="research__result" id=format!("research-case-{}", result.id)>
                                                <div class="research__result-top">
                                                    <h4>{result.title.clone()}</h4>
                                                    <span class="research__importance">{result.importance.clone()}</span>
                                                </div>
                                                <p class="research__citation">
                                                    {format!("{} | {} | {}", result.citation, result.court, result.year)}
                                                </p>
                                                <p>{result.summary.clone()}</p>
                                                <div class="research__tags">
                                                    {result
                                                        .tags
                                                        .iter()
                                                        .map(|tag| view! { <span class="research__tag">{tag.clone()}</span> })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })}
                    </div>
                </Show>

                <Show when=move || tab.get() == ResearchTab::Evolution>
                    <div class="research__evolution">
                        <h2>"Judgment Evolution Tracker"</h2>
                        <div class="timeline">
                            {evolution
                                .with_value(|milestones| {
                                    milestones
                                        .iter()
                                        .map(|milestone| {
                                            view! {
                                                <div class="timeline__item">
                                                    <span class="timeline__dot" aria-hidden="true"></span>
                                                    <div class="timeline__card">
                                                        <div class="timeline__card-top">
                                                            <h3>{milestone.title.clone()}</h3>
                                                            <span class="timeline__year">{milestone.year.clone()}</span>
                                                        </div>
                                                        <p>{milestone.description.clone()}</p>
                                                        <button class="research__link">"View Related Judgments →"</button>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })}
                        </div>
                    </div>
                </Show>

                <Show when=move || tab.get() == ResearchTab::CauseList>
                    <div class="research__causelist">
                        <div class="research__causelist-header">
                            <h2>"Cause List Live Monitoring"</h2>
                            <span class="research__updated">"Last updated: Today, 09:45 AM"</span>
                        </div>
                        <p class="research__notice">
                            "Cause lists are updated daily at 6:00 AM. Real-time updates provided during court hours."
                        </p>
                        <table class="research__table">
                            <thead>
                                <tr>
                                    <th>"Case No."</th>
                                    <th>"Petitioner vs Respondent"</th>
                                    <th>"Purpose"</th>
                                    <th>"Time"</th>
                                    <th>"Bench"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {cause_list
                                    .with_value(|entries| {
                                        entries
                                            .iter()
                                            .map(|entry| {
                                                view! {
                                                    <tr>
                                                        <td>{entry.case_no.clone()}</td>
                                                        <td>
                                                            <div>{entry.petitioner.clone()}</div>
                                                            <div class="research__respondent">
                                                                {format!("vs {}", entry.respondent)}
                                                            </div>
                                                        </td>
                                                        <td>{entry.purpose.clone()}</td>
                                                        <td>{entry.time.clone()}</td>
                                                        <td>{entry.bench.clone()}</td>
                                                        <td>
                                                            <span class="badge badge--upcoming">{entry.status.clone()}</span>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })}
                            </tbody>
                        </table>
                        <div class="research__causelist-footer">
                            <p>"Showing 3 of 247 cases listed today"</p>
                            <button class="research__link">"View Full Cause List →"</button>
                        </div>
                    </div>
                </Show>
            </section>
        </div>
    }
}
