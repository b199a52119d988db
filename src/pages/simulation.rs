//! Courtroom simulation: argument generation, cross-examination, timelines,
//! and simulated feedback. Everything is generated locally from the fixed
//! tables in `state::simulation`.

use leptos::prelude::*;

use crate::components::stat_card::ProgressBar;
use crate::state::simulation::{
    ArgumentStyle, Feedback, ResponseStyle, SimulationTab, TimelineOutcome, WitnessExchange,
    build_feedback, canned_argument, timeline_outcomes, witness_exchange,
};
use crate::util::random::random_below;

/// Simulation page.
#[component]
pub fn SimulationPage() -> impl IntoView {
    let tab = RwSignal::new(SimulationTab::default());
    let style = RwSignal::new(ArgumentStyle::default());
    let argument = RwSignal::new(String::new());
    let question = RwSignal::new(String::new());
    let exchanges = RwSignal::new(Vec::<WitnessExchange>::new());
    let timelines = RwSignal::new(Vec::<TimelineOutcome>::new());
    let feedback = RwSignal::new(None::<Feedback>);

    let on_generate = move |_| {
        argument.set(canned_argument(style.get_untracked()).to_owned());
    };

    let ask_question = move || {
        let text = question.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        exchanges.update(|list| {
            let exchange = witness_exchange(
                list.len() + 1,
                text.trim(),
                random_below(ResponseStyle::ALL.len()),
                random_below(3),
            );
            list.push(exchange);
        });
        question.set(String::new());
    };

    let on_timelines = move |_| timelines.set(timeline_outcomes());

    let on_feedback = move |_| feedback.set(Some(build_feedback(|| random_below(40))));

    view! {
        <div class="simulation">
            <h2>"🏛️ Courtroom Simulation"</h2>
            <p class="simulation__subtitle">
                "Practice arguments, cross-examination, and explore different case outcomes"
            </p>

            <nav class="tabs">
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || tab.get() == SimulationTab::Arguments
                    on:click=move |_| tab.set(SimulationTab::Arguments)
                >
                    "Argument Simulation"
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || tab.get() == SimulationTab::CrossExam
                    on:click=move |_| tab.set(SimulationTab::CrossExam)
                >
                    "Cross-Examination"
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || tab.get() == SimulationTab::Timelines
                    on:click=move |_| tab.set(SimulationTab::Timelines)
                >
                    "Timeline Outcomes"
                </button>
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || tab.get() == SimulationTab::Feedback
                    on:click=move |_| tab.set(SimulationTab::Feedback)
                >
                    "AI Feedback"
                </button>
            </nav>

            <Show when=move || tab.get() == SimulationTab::Arguments>
                <section class="card" aria-label="Mock Argument Generation">
                    <h3>"Mock Argument Generation"</h3>
                    <div class="simulation__styles">
                        {ArgumentStyle::ALL
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <button
                                        class="simulation__style"
                                        class:simulation__style--selected=move || style.get() == s
                                        on:click=move |_| style.set(s)
                                    >
                                        <span class="simulation__style-name">{s.name()}</span>
                                        <span class="simulation__style-desc">{s.description()}</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <button class="btn btn--primary" on:click=on_generate>
                        "Generate Argument"
                    </button>
                    <div class="simulation__argument">
                        <p>
                            {move || {
                                let text = argument.get();
                                if text.is_empty() {
                                    "Your generated argument will appear here...".to_owned()
                                } else {
                                    text
                                }
                            }}
                        </p>
                    </div>
                </section>
            </Show>

            <Show when=move || tab.get() == SimulationTab::CrossExam>
                <section class="card" aria-label="AI Witness Cross-Examination">
                    <h3>"AI Witness Cross-Examination"</h3>
                    <div class="simulation__ask">
                        <input
                            type="text"
                            placeholder="Type your question for the witness..."
                            prop:value=move || question.get()
                            on:input=move |ev| question.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    ask_question();
                                }
                            }
                        />
                        <button class="btn btn--primary" on:click=move |_| ask_question()>
                            "Ask Question"
                        </button>
                    </div>
                    <Show
                        when=move || !exchanges.with(Vec::is_empty)
                        fallback=|| {
                            view! {
                                <p class="simulation__empty">
                                    "No questions asked yet. Start by asking a question to the AI witness."
                                </p>
                            }
                        }
                    >
                        {move || {
                            exchanges
                                .get()
                                .into_iter()
                                .map(|exchange| {
                                    view! {
                                        <div class="exchange">
                                            <p class="exchange__question">
                                                {format!("You: {}", exchange.question)}
                                            </p>
                                            <div class="exchange__response">
                                                <span class="exchange__witness">
                                                    {format!("AI Witness ({}):", exchange.style.label())}
                                                </span>
                                                <p>{exchange.response}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </section>
            </Show>

            <Show when=move || tab.get() == SimulationTab::Timelines>
                <section class="card" aria-label="Parallel Timeline Outcomes">
                    <h3>"Parallel Timeline Outcomes"</h3>
                    <button class="btn btn--primary" on:click=on_timelines>
                        "Generate Timeline Scenarios"
                    </button>
                    <Show
                        when=move || !timelines.with(Vec::is_empty)
                        fallback=|| {
                            view! {
                                <p class="simulation__empty">
                                    "No timeline scenarios generated yet. Click the button to explore different outcomes."
                                </p>
                            }
                        }
                    >
                        <div class="simulation__timelines">
                            {move || {
                                timelines
                                    .get()
                                    .into_iter()
                                    .map(|timeline| {
                                        view! {
                                            <div class="timeline-outcome">
                                                <h4>{timeline.title}</h4>
                                                <span class="timeline-outcome__probability">
                                                    {format!("Success Probability: {}", timeline.success_probability)}
                                                </span>
                                                <ul>
                                                    {timeline
                                                        .steps
                                                        .iter()
                                                        .map(|step| view! { <li>{*step}</li> })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </section>
            </Show>

            <Show when=move || tab.get() == SimulationTab::Feedback>
                <section class="card" aria-label="AI Jury Feedback">
                    <h3>"AI Jury/Bench Feedback"</h3>
                    <button class="btn btn--primary" on:click=on_feedback>
                        "Request Feedback"
                    </button>
                    <Show
                        when=move || feedback.get().is_some()
                        fallback=|| {
                            view! {
                                <p class="simulation__empty">
                                    "No feedback yet. Click the button to get AI evaluation of your performance."
                                </p>
                            }
                        }
                    >
                        {move || {
                            feedback
                                .get()
                                .map(|report| {
                                    view! {
                                        <div class="feedback">
                                            <div class="feedback__overall">
                                                <span class="feedback__score">
                                                    {format!("{}/100", report.overall_score)}
                                                </span>
                                            </div>
                                            <div class="feedback__criteria">
                                                {report
                                                    .criteria
                                                    .iter()
                                                    .map(|criterion| {
                                                        view! {
                                                            <ProgressBar
                                                                label=criterion.name.to_owned()
                                                                percent=criterion.score
                                                            />
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                            <div class="feedback__comments">
                                                <h4>"Feedback Comments"</h4>
                                                <ul>
                                                    {report
                                                        .comments
                                                        .iter()
                                                        .map(|comment| view! { <li>{*comment}</li> })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            </div>
                                        </div>
                                    }
                                })
                        }}
                    </Show>
                </section>
            </Show>
        </div>
    }
}
