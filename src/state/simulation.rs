//! Courtroom simulation generators.
//!
//! DESIGN
//! ======
//! Every generator is a pure function over fixed literal tables; the only
//! nondeterminism is an injected uniform pick, so components pass
//! `util::random::random_below` while tests pass fixed indices.

#[cfg(test)]
#[path = "simulation_test.rs"]
mod simulation_test;

/// Tabs on the simulation page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimulationTab {
    #[default]
    Arguments,
    CrossExam,
    Timelines,
    Feedback,
}

/// Rhetorical style for generated arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArgumentStyle {
    #[default]
    Persuasive,
    Calm,
    Aggressive,
    Narrative,
}

impl ArgumentStyle {
    pub const ALL: [ArgumentStyle; 4] = [
        ArgumentStyle::Persuasive,
        ArgumentStyle::Calm,
        ArgumentStyle::Aggressive,
        ArgumentStyle::Narrative,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ArgumentStyle::Persuasive => "Persuasive",
            ArgumentStyle::Calm => "Calm & Measured",
            ArgumentStyle::Aggressive => "Aggressive",
            ArgumentStyle::Narrative => "Narrative",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ArgumentStyle::Persuasive => "Appeal to logic and emotion with balanced rhetoric",
            ArgumentStyle::Calm => "Fact-based, methodical approach with neutral tone",
            ArgumentStyle::Aggressive => "Confrontational style with strong challenges",
            ArgumentStyle::Narrative => "Storytelling approach to frame your case",
        }
    }
}

/// Canned argument text for the selected style.
pub fn canned_argument(style: ArgumentStyle) -> &'static str {
    match style {
        ArgumentStyle::Persuasive => {
            "Your Honor, if we consider the fundamental principles of justice in this matter, we find that the evidence clearly demonstrates a pattern of behavior that any reasonable person would find concerning. The defendant's actions not only violated the statute but also breached the trust placed in them by the community."
        }
        ArgumentStyle::Calm => {
            "The record shows three specific instances where the protocol was not followed. On June 15th, the log indicates an entry was modified after the fact. On July 22nd, the required verification step was skipped. Finally, on August 5th, the documentation was incomplete according to regulation 4.2.C."
        }
        ArgumentStyle::Aggressive => {
            "This is nothing but a blatant attempt to mislead the court! The evidence clearly shows the defendant knowingly and willingly violated the agreement. Their actions demonstrate a complete disregard for the process and for the truth!"
        }
        ArgumentStyle::Narrative => {
            "Imagine a small business owner, working tirelessly for decades to build something for their family. Now picture that foundation being undermined by the deceptive practices we've seen in this case. This isn't just about financial loss, it's about broken trust and damaged reputations."
        }
    }
}

/// Response temperament of the simulated witness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseStyle {
    Persuasive,
    Calm,
    Aggressive,
    Evasive,
}

impl ResponseStyle {
    pub const ALL: [ResponseStyle; 4] = [
        ResponseStyle::Persuasive,
        ResponseStyle::Calm,
        ResponseStyle::Aggressive,
        ResponseStyle::Evasive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResponseStyle::Persuasive => "persuasive",
            ResponseStyle::Calm => "calm",
            ResponseStyle::Aggressive => "aggressive",
            ResponseStyle::Evasive => "evasive",
        }
    }
}

/// Canned witness responses per temperament.
pub fn witness_responses(style: ResponseStyle) -> &'static [&'static str] {
    match style {
        ResponseStyle::Persuasive => &[
            "I understand your perspective, but consider the broader implications...",
            "That's a reasonable point, however the evidence suggests otherwise...",
            "I appreciate that viewpoint, but let me offer an alternative interpretation...",
        ],
        ResponseStyle::Calm => &[
            "Based on the records, I can confirm that on June 15th...",
            "The documentation shows a different sequence of events...",
            "I need to clarify that my previous statement was specifically about...",
        ],
        ResponseStyle::Aggressive => &[
            "I strongly disagree with that characterization of events!",
            "That's an inaccurate representation of what occurred!",
            "I must object to that line of questioning as misleading!",
        ],
        ResponseStyle::Evasive => &[
            "I don't recall that specific detail...",
            "I would need to review the documents before answering...",
            "That question seems to presume facts not in evidence...",
        ],
    }
}

/// An asked question with the witness's styled reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WitnessExchange {
    pub id: usize,
    pub question: String,
    pub response: String,
    pub style: ResponseStyle,
}

/// Build a witness exchange from two uniform picks: temperament, then the
/// response row within it.
pub fn witness_exchange(
    id: usize,
    question: &str,
    style_pick: usize,
    response_pick: usize,
) -> WitnessExchange {
    let style = ResponseStyle::ALL[style_pick % ResponseStyle::ALL.len()];
    let responses = witness_responses(style);
    WitnessExchange {
        id,
        question: question.to_owned(),
        response: responses[response_pick % responses.len()].to_owned(),
        style,
    }
}

/// One simulated procedural timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineOutcome {
    pub title: &'static str,
    pub steps: &'static [&'static str],
    pub success_probability: &'static str,
}

/// The three fixed timeline scenarios.
pub fn timeline_outcomes() -> Vec<TimelineOutcome> {
    vec![
        TimelineOutcome {
            title: "Standard Procedure Timeline",
            steps: &[
                "Motion to dismiss - Denied",
                "Discovery phase - Completed",
                "Pre-trial conference - Scheduled",
                "Trial - Estimated 3-5 days",
                "Verdict - Jury deliberation 1-2 days",
            ],
            success_probability: "65%",
        },
        TimelineOutcome {
            title: "Expedited Timeline",
            steps: &[
                "Motion to dismiss - Granted in part",
                "Limited discovery - 30 days",
                "Summary judgment motion - Filed",
                "Settlement conference - Ordered",
                "Possible resolution in 60 days",
            ],
            success_probability: "45%",
        },
        TimelineOutcome {
            title: "Appeal Scenario",
            steps: &[
                "Initial verdict - Unfavorable",
                "Notice of appeal - Filed",
                "Appellate briefing - 90 days",
                "Oral arguments - Scheduled",
                "Appellate decision - 6-12 months",
            ],
            success_probability: "30%",
        },
    ]
}

/// Names of the scored feedback criteria.
pub const FEEDBACK_CRITERIA: [&str; 5] =
    ["Persuasiveness", "Legal Accuracy", "Clarity", "Professionalism", "Effectiveness"];

/// Canned feedback comments.
pub const FEEDBACK_COMMENTS: [&str; 5] = [
    "Your persuasive approach was effective but could use more specific case references.",
    "Consider varying your tone more to emphasize key points.",
    "The narrative structure was compelling but watch for tangential details.",
    "Your cross-examination strategy effectively highlighted inconsistencies.",
    "Work on transitioning more smoothly between evidence points.",
];

/// A scored criterion in the feedback report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CriterionScore {
    pub name: &'static str,
    pub score: u32,
}

/// Simulated jury/bench feedback.
#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub criteria: Vec<CriterionScore>,
    /// Arithmetic mean of the criterion scores, one decimal.
    pub overall_score: String,
    pub comments: Vec<&'static str>,
}

/// Build a feedback report from uniform draws in `0..40`; each criterion
/// scores `60 + draw`, landing in 60..=99.
pub fn build_feedback(mut draw: impl FnMut() -> usize) -> Feedback {
    let criteria: Vec<CriterionScore> = FEEDBACK_CRITERIA
        .iter()
        .map(|name| CriterionScore {
            name,
            score: 60 + u32::try_from(draw() % 40).unwrap_or(0),
        })
        .collect();
    #[allow(clippy::cast_precision_loss)]
    let overall =
        criteria.iter().map(|c| f64::from(c.score)).sum::<f64>() / criteria.len() as f64;
    Feedback {
        criteria,
        overall_score: format!("{overall:.1}"),
        comments: FEEDBACK_COMMENTS.to_vec(),
    }
}
