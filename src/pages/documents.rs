//! Contract comparison workspace: uploads, webhook calls, result panes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only remote interaction in the app lives here: two fire-and-forget
//! multipart POSTs. Handlers validate locally before any network call and
//! fold every failure into a visible, dismissable error state. Requests are
//! not deduplicated; a second click issues a second independent request.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::documents::{
    UploadedDoc, comparison_blocker, partition_differences, risk_blocker, sample_comparison,
};
use crate::util::format::format_file_size;

/// Which result pane is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ResultTab {
    #[default]
    Comparison,
    Risk,
}

/// Map a transport/server failure onto the user-facing message shown in the
/// error pane.
#[cfg(any(test, feature = "hydrate"))]
fn friendly_error(raw: &str) -> String {
    if raw.starts_with("Server error") {
        return raw.to_owned();
    }
    let lowered = raw.to_lowercase();
    if lowered.contains("fetch") || lowered.contains("network") {
        return "Network error: Could not connect to the comparison service. Please check your internet connection.".to_owned();
    }
    "Failed to compare contracts. The service might be temporarily unavailable.".to_owned()
}

fn text_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn list_field(value: &serde_json::Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Whether the payload carries any of the structured comparison sections.
fn is_structured(value: &serde_json::Value) -> bool {
    text_field(value, "summary").is_some()
        || !list_field(value, "differences").is_empty()
        || !list_field(value, "similarities").is_empty()
        || text_field(value, "riskAssessment").is_some()
}

/// Bullet lines of a risk-analysis message, minus the summary line.
fn risk_lines(message: &str) -> Vec<String> {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains("Summary of Risk Level"))
        .map(str::to_owned)
        .collect()
}

/// The level text after "Summary of Risk Level:", when present.
fn risk_level_summary(message: &str) -> Option<String> {
    message
        .split_once("Summary of Risk Level:")
        .map(|(_, level)| level.trim().to_owned())
        .filter(|level| !level.is_empty())
}

/// Badge modifier for a risk-level label.
fn risk_badge_class(level: &str) -> &'static str {
    let lowered = level.to_lowercase();
    if lowered.contains("high") {
        "risk-badge--high"
    } else if lowered.contains("medium") {
        "risk-badge--medium"
    } else if lowered.contains("low") {
        "risk-badge--low"
    } else {
        "risk-badge--unknown"
    }
}

/// Contract comparison page.
#[component]
pub fn DocumentsPage() -> impl IntoView {
    let docs = RwSignal::new_local(Vec::<UploadedDoc>::new());
    let comparison = RwSignal::new(None::<serde_json::Value>);
    let risk = RwSignal::new(None::<serde_json::Value>);
    let error = RwSignal::new(None::<String>);
    let status = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let result_tab = RwSignal::new(ResultTab::default());

    let clear_outcome = move || {
        comparison.set(None);
        risk.set(None);
        error.set(None);
        status.set(String::new());
    };

    #[cfg(feature = "hydrate")]
    let add_files = move |list: web_sys::FileList| {
        let mut incoming = Vec::new();
        for i in 0..list.length() {
            if let Some(file) = list.item(i) {
                incoming.push(UploadedDoc::from_file(&file));
            }
        }
        let screening = crate::state::documents::screen_uploads(incoming);
        if !screening.warnings.is_empty() {
            error.set(Some(screening.warnings.join(" ")));
        } else {
            error.set(None);
        }
        if !screening.accepted.is_empty() {
            docs.update(|d| d.extend(screening.accepted));
            comparison.set(None);
            risk.set(None);
            status.set(String::new());
        }
    };

    let remove_doc = Callback::new(move |id: String| {
        docs.update(|d| d.retain(|doc| doc.id != id));
        clear_outcome();
    });

    let on_compare = move |_| {
        if let Some(blocker) = docs.with_untracked(|d| comparison_blocker(d)) {
            error.set(Some(blocker));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some((first, second)) = docs.with_untracked(|d| {
                crate::state::documents::comparison_pair(d)
                    .map(|(a, b)| (a.handle.clone(), b.handle.clone()))
            }) else {
                return;
            };
            clear_outcome();
            loading.set(true);
            result_tab.set(ResultTab::Comparison);
            status.set("Preparing documents for comparison...".to_owned());
            leptos::task::spawn_local(async move {
                match crate::net::webhook::compare_contracts(&first, &second).await {
                    Ok(value) => {
                        comparison.set(Some(value));
                        status.set("Comparison completed successfully!".to_owned());
                    }
                    Err(e) => {
                        comparison.set(None);
                        error.set(Some(friendly_error(&e)));
                        status.set("Comparison failed!".to_owned());
                    }
                }
                loading.set(false);
                gloo_timers::future::sleep(std::time::Duration::from_millis(3000)).await;
                status.set(String::new());
            });
        }
    };

    let on_risk_analysis = move |_| {
        if let Some(blocker) = docs.with_untracked(|d| risk_blocker(d)) {
            error.set(Some(blocker));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(first) = docs.with_untracked(|d| d.first().map(|doc| doc.handle.clone()))
            else {
                return;
            };
            clear_outcome();
            loading.set(true);
            result_tab.set(ResultTab::Risk);
            leptos::task::spawn_local(async move {
                match crate::net::webhook::analyze_risk(&first).await {
                    Ok(value) => risk.set(Some(value)),
                    Err(e) => {
                        risk.set(None);
                        error.set(Some(friendly_error(&e)));
                    }
                }
                loading.set(false);
            });
        }
    };

    let on_sample_data = move |_| {
        clear_outcome();
        comparison.set(Some(sample_comparison()));
        result_tab.set(ResultTab::Comparison);
    };

    let file_names = move || {
        docs.with(|d| {
            let first = d.first().map_or_else(|| "Unknown file".to_owned(), |doc| doc.name.clone());
            let second = d.get(1).map_or_else(|| "Unknown file".to_owned(), |doc| doc.name.clone());
            (first, second)
        })
    };

    view! {
        <div class="documents">
            <h2 class="documents__title">"📂 Contract Comparison Tool"</h2>

            <section class="card" aria-label="Upload Documents">
                <label class="documents__dropzone">
                    <span class="documents__dropzone-icon">"📁"</span>
                    <p>"Click to browse PDF files"</p>
                    <p class="documents__dropzone-hint">
                        {format!("Only PDF files supported. Max file size: {}.", format_file_size(crate::state::documents::MAX_UPLOAD_BYTES))}
                    </p>
                    <input
                        class="documents__file-input"
                        type="file"
                        multiple
                        accept=".pdf"
                        on:change=move |ev| {
                            #[cfg(feature = "hydrate")]
                            {
                                let input: web_sys::HtmlInputElement = event_target(&ev);
                                if let Some(list) = input.files() {
                                    add_files(list);
                                }
                                input.set_value("");
                            }
                            #[cfg(not(feature = "hydrate"))]
                            let _ = ev;
                        }
                    />
                </label>

                <Show when=move || !docs.with(Vec::is_empty)>
                    <h3>"Uploaded PDF Files"</h3>
                    <ul class="documents__list">
                        {move || {
                            docs.with(|d| {
                                d.iter()
                                    .map(|doc| {
                                        let id = doc.id.clone();
                                        view! {
                                            <li class="documents__item">
                                                <span class="documents__item-icon">"📄"</span>
                                                <div class="documents__item-meta">
                                                    <span class="documents__item-name">{doc.name.clone()}</span>
                                                    <span class="documents__item-size">
                                                        {format!("{} • PDF Document", format_file_size(doc.size_bytes))}
                                                    </span>
                                                </div>
                                                <button
                                                    class="documents__item-remove"
                                                    on:click=move |_| remove_doc.run(id.clone())
                                                >
                                                    "Remove"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </ul>
                </Show>

                <div class="documents__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || loading.get()
                        on:click=on_compare
                    >
                        {move || {
                            if loading.get() && result_tab.get() == ResultTab::Comparison {
                                "Comparing..."
                            } else {
                                "Compare Contracts"
                            }
                        }}
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || loading.get()
                        on:click=on_risk_analysis
                    >
                        {move || {
                            if loading.get() && result_tab.get() == ResultTab::Risk {
                                "Analyzing..."
                            } else {
                                "Analyze Contract Risks"
                            }
                        }}
                    </button>
                    <button class="btn" on:click=on_sample_data>
                        "Test with Sample Data"
                    </button>
                    <Show when=move || comparison.get().is_some() || risk.get().is_some()>
                        <button class="btn" on:click=move |_| clear_outcome()>
                            "Clear Results"
                        </button>
                    </Show>
                </div>

                <Show when=move || !status.get().is_empty()>
                    <p class="documents__status">{move || status.get()}</p>
                </Show>

                <Show when=move || error.get().is_some()>
                    <div class="documents__error">
                        <h3>"Error:"</h3>
                        <p>{move || error.get().unwrap_or_default()}</p>
                        <p class="documents__error-hint">
                            "Please ensure you've uploaded PDF files and try again."
                        </p>
                    </div>
                </Show>
            </section>

            <Show when=move || comparison.get().is_some() || risk.get().is_some()>
                <section class="card documents__results" aria-label="Analysis Results">
                    <nav class="tabs">
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || result_tab.get() == ResultTab::Comparison
                            on:click=move |_| result_tab.set(ResultTab::Comparison)
                        >
                            "Contract Comparison"
                        </button>
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || result_tab.get() == ResultTab::Risk
                            on:click=move |_| result_tab.set(ResultTab::Risk)
                        >
                            "Risk Analysis"
                        </button>
                    </nav>

                    <Show when=move || result_tab.get() == ResultTab::Comparison && comparison.get().is_some()>
                        {move || {
                            comparison
                                .get()
                                .map(|value| {
                                    let (file1, file2) = file_names();
                                    view! { <ComparisonReport value=value file1=file1 file2=file2/> }
                                })
                        }}
                    </Show>

                    <Show when=move || result_tab.get() == ResultTab::Risk && risk.get().is_some()>
                        {move || risk.get().map(|value| view! { <RiskReport value=value/> })}
                    </Show>
                </section>
            </Show>
        </div>
    }
}

/// Structured comparison result pane with raw JSON fallback.
#[component]
fn ComparisonReport(value: serde_json::Value, file1: String, file2: String) -> impl IntoView {
    let summary = text_field(&value, "summary");
    let differences = list_field(&value, "differences");
    let similarities = list_field(&value, "similarities");
    let risk_assessment = text_field(&value, "riskAssessment");
    let structured = is_structured(&value);
    let has_differences = !differences.is_empty();
    let has_similarities = !similarities.is_empty();
    let (doc1_diffs, doc2_diffs, general_diffs) = partition_differences(&differences);
    let raw = serde_json::to_string_pretty(&value).unwrap_or_default();

    view! {
        <div class="comparison-report">
            <h3>"Comparison Results"</h3>
            <div class="comparison-report__files">
                <div class="comparison-report__file">
                    <h4>"Document 1:"</h4>
                    <p>{file1.clone()}</p>
                </div>
                <div class="comparison-report__file">
                    <h4>"Document 2:"</h4>
                    <p>{file2.clone()}</p>
                </div>
            </div>

            {summary.map(|text| {
                view! {
                    <div class="comparison-report__section">
                        <h4>"Summary:"</h4>
                        <p>{text}</p>
                    </div>
                }
            })}

            <Show when=move || has_differences>
                <div class="comparison-report__section">
                    <h4>"Key Differences:"</h4>
                    <div class="comparison-report__diff-columns">
                        <div class="comparison-report__diff-column">
                            <h5>{format!("In {file1}:")}</h5>
                            <ul>
                                {doc1_diffs.iter().map(|d| view! { <li>{d.clone()}</li> }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                        <div class="comparison-report__diff-column">
                            <h5>{format!("In {file2}:")}</h5>
                            <ul>
                                {doc2_diffs.iter().map(|d| view! { <li>{d.clone()}</li> }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    </div>
                    <div class="comparison-report__diff-general">
                        <h5>"General Differences:"</h5>
                        <ul>
                            {general_diffs.iter().map(|d| view! { <li>{d.clone()}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
            </Show>

            <Show when=move || has_similarities>
                <div class="comparison-report__section">
                    <h4>"Similarities:"</h4>
                    <ul>
                        {similarities.iter().map(|s| view! { <li>{s.clone()}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
            </Show>

            {risk_assessment.map(|text| {
                view! {
                    <div class="comparison-report__risk">
                        <h4>"Risk Assessment:"</h4>
                        <p>{text}</p>
                    </div>
                }
            })}

            <Show when=move || !structured>
                <div class="comparison-report__section">
                    <h4>"Raw API Response:"</h4>
                    <pre class="comparison-report__raw">{raw.clone()}</pre>
                </div>
            </Show>
        </div>
    }
}

/// Risk analysis pane: bullet list plus a risk-level badge, with raw JSON
/// fallback when the payload isn't message-shaped.
#[component]
fn RiskReport(value: serde_json::Value) -> impl IntoView {
    let message = text_field(&value, "message");
    let raw = serde_json::to_string_pretty(&value).unwrap_or_default();

    view! {
        <div class="risk-report">
            <h3>"Risk Analysis Results"</h3>
            {match message {
                Some(message) => {
                    let lines = risk_lines(&message);
                    let level = risk_level_summary(&message);
                    view! {
                        <div class="risk-report__body">
                            <div class="risk-report__flagged">
                                <h4>"Flagged Risks & Missing Critical Clauses:"</h4>
                                <ul>
                                    {lines.into_iter().map(|l| view! { <li>{l}</li> }).collect::<Vec<_>>()}
                                </ul>
                            </div>
                            <div class="risk-report__summary">
                                <h4>"Summary of Risk Level:"</h4>
                                {level.map(|level| {
                                    let class = format!("risk-badge {}", risk_badge_class(&level));
                                    view! { <span class=class>{level}</span> }
                                })}
                            </div>
                        </div>
                    }
                        .into_any()
                }
                None => view! { <pre class="risk-report__raw">{raw}</pre> }.into_any(),
            }}
        </div>
    }
}
