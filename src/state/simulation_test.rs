use super::*;

#[test]
fn every_style_has_a_canned_argument() {
    for style in ArgumentStyle::ALL {
        assert!(!canned_argument(style).is_empty());
    }
}

#[test]
fn calm_argument_cites_the_record() {
    assert!(canned_argument(ArgumentStyle::Calm).contains("June 15th"));
}

#[test]
fn witness_exchange_selects_deterministic_rows_from_picks() {
    let exchange = witness_exchange(1, "Where were you on June 15th?", 1, 0);
    assert_eq!(exchange.style, ResponseStyle::Calm);
    assert_eq!(exchange.response, "Based on the records, I can confirm that on June 15th...");
    assert_eq!(exchange.question, "Where were you on June 15th?");
}

#[test]
fn witness_exchange_wraps_out_of_range_picks() {
    let wrapped = witness_exchange(1, "q", ResponseStyle::ALL.len() + 2, 7);
    let direct = witness_exchange(1, "q", 2, 1);
    assert_eq!(wrapped.style, direct.style);
    assert_eq!(wrapped.response, direct.response);
}

#[test]
fn every_response_style_has_three_responses() {
    for style in ResponseStyle::ALL {
        assert_eq!(witness_responses(style).len(), 3);
    }
}

#[test]
fn timeline_outcomes_are_the_three_fixed_scenarios() {
    let outcomes = timeline_outcomes();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].title, "Standard Procedure Timeline");
    assert_eq!(outcomes[0].success_probability, "65%");
    assert_eq!(outcomes[2].success_probability, "30%");
    assert!(outcomes.iter().all(|o| o.steps.len() == 5));
}

#[test]
fn feedback_scores_stay_in_range() {
    let mut i = 0;
    let feedback = build_feedback(|| {
        i += 7;
        i * 13
    });
    assert_eq!(feedback.criteria.len(), FEEDBACK_CRITERIA.len());
    assert!(feedback.criteria.iter().all(|c| (60..=99).contains(&c.score)));
}

#[test]
fn feedback_overall_is_the_mean_to_one_decimal() {
    // Draws of 0 score every criterion at 60.
    let feedback = build_feedback(|| 0);
    assert_eq!(feedback.overall_score, "60.0");

    let mut draws = [10usize, 20, 30, 0, 5].into_iter();
    let feedback = build_feedback(|| draws.next().unwrap());
    // Scores: 70, 80, 90, 60, 65 -> mean 73.0
    assert_eq!(feedback.overall_score, "73.0");
}

#[test]
fn feedback_carries_the_canned_comments() {
    let feedback = build_feedback(|| 0);
    assert_eq!(feedback.comments.len(), 5);
    assert!(feedback.comments[0].contains("persuasive approach"));
}
