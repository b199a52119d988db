use super::*;

#[test]
fn seed_has_seven_cases_with_one_high_risk() {
    let cases = seed_cases();
    assert_eq!(cases.len(), 7);
    let high: Vec<_> = cases.iter().filter(|c| c.risk == RiskLevel::High).collect();
    assert_eq!(high.len(), 1);
    assert_eq!(high[0].name, "Williams v. Anderson Corp");
}

#[test]
fn filtered_set_is_subset_of_base() {
    let cases = seed_cases();
    let filter = CaseFilter {
        query: "v.".to_owned(),
        risk: None,
        status: Some("Active".to_owned()),
        category: None,
    };
    let filtered = filter.apply(&cases);
    assert!(filtered.iter().all(|c| cases.contains(c)));
    assert!(filtered.len() <= cases.len());
}

#[test]
fn filtering_is_idempotent() {
    let cases = seed_cases();
    let filter = CaseFilter {
        query: String::new(),
        risk: Some(RiskLevel::Medium),
        status: None,
        category: Some("Corporate".to_owned()),
    };
    let once = filter.apply(&cases);
    let twice = filter.apply(&once);
    assert_eq!(once, twice);
}

#[test]
fn unset_filters_are_a_no_op() {
    let cases = seed_cases();
    assert_eq!(CaseFilter::default().apply(&cases), cases);
}

#[test]
fn query_matches_name_substring_case_insensitively() {
    let cases = seed_cases();
    let filter = CaseFilter {
        query: "anderson".to_owned(),
        ..CaseFilter::default()
    };
    let filtered = filter.apply(&cases);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Williams v. Anderson Corp");
}

#[test]
fn high_risk_filter_shows_exactly_williams() {
    let cases = seed_cases();
    let filter = CaseFilter {
        risk: Some(RiskLevel::High),
        ..CaseFilter::default()
    };
    let filtered = filter.apply(&cases);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Williams v. Anderson Corp");
}

#[test]
fn stats_are_computed_over_the_full_base() {
    let cases = seed_cases();
    let stats = CaseStats::compute(&cases);
    assert!((stats.average_progress - 435.0 / 7.0).abs() < 1e-9);
    assert!((stats.average_success_probability - 513.0 / 7.0).abs() < 1e-9);
    assert_eq!(stats.high_risk_count, 1);
    assert_eq!(stats.total_value_cents, 119_200_000);
}

#[test]
fn stats_ignore_active_filters() {
    // The analytics page always passes the unfiltered portfolio; a filter
    // narrowing the table to one case must not change the aggregates.
    let cases = seed_cases();
    let filter = CaseFilter {
        risk: Some(RiskLevel::High),
        ..CaseFilter::default()
    };
    assert_eq!(filter.apply(&cases).len(), 1);
    let stats = CaseStats::compute(&cases);
    assert_eq!(stats.high_risk_count, 1);
    assert!((stats.average_progress - 435.0 / 7.0).abs() < 1e-9);
}

#[test]
fn stats_on_empty_collection_are_zero() {
    let stats = CaseStats::compute(&[]);
    assert_eq!(stats.average_progress, 0.0);
    assert_eq!(stats.high_risk_count, 0);
    assert_eq!(stats.total_value_cents, 0);
}

#[test]
fn select_options_are_distinct_in_seed_order() {
    let cases = seed_cases();
    assert_eq!(status_options(&cases), ["Active", "Pending", "On Hold"]);
    assert_eq!(
        category_options(&cases),
        ["Civil Litigation", "Corporate", "Criminal", "Probate", "Real Estate", "Intellectual Property"]
    );
}

#[test]
fn risk_level_labels_round_trip() {
    for risk in RiskLevel::ALL {
        assert_eq!(RiskLevel::from_label(risk.label()), Some(risk));
    }
    assert_eq!(RiskLevel::from_label("All"), None);
}
