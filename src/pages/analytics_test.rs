use super::*;

#[test]
fn select_sentinel_means_no_filter() {
    assert_eq!(option_from_select("All"), None);
    assert_eq!(option_from_select("Active"), Some("Active".to_owned()));
}

#[test]
fn percent_labels_use_one_decimal() {
    assert_eq!(percent_label(435.0 / 7.0), "62.1%");
    assert_eq!(percent_label(513.0 / 7.0), "73.3%");
    assert_eq!(percent_label(0.0), "0.0%");
}

#[test]
fn aggregate_cards_reflect_the_full_portfolio_while_table_filters() {
    let cases = seed_cases();
    let stats = CaseStats::compute(&cases);
    let filter = CaseFilter {
        risk: Some(RiskLevel::High),
        ..CaseFilter::default()
    };
    let table_rows = filter.apply(&cases);
    assert_eq!(table_rows.len(), 1);
    assert_eq!(table_rows[0].name, "Williams v. Anderson Corp");
    // The cards keep reporting over all 7 seeded cases.
    assert_eq!(stats.high_risk_count, 1);
    assert_eq!(percent_label(stats.average_progress), "62.1%");
}

#[test]
fn risk_classes_cover_every_level() {
    assert_eq!(risk_class(RiskLevel::Low), "risk-badge--low");
    assert_eq!(risk_class(RiskLevel::Medium), "risk-badge--medium");
    assert_eq!(risk_class(RiskLevel::High), "risk-badge--high");
}

#[test]
fn index_entries_cover_every_case_with_the_page_prefix() {
    let cases = seed_cases();
    let entries = index_entries(&cases);
    assert_eq!(entries.len(), cases.len());
    assert!(entries.iter().all(|e| e.id.starts_with("analytics-case-")));
    assert!(entries.iter().all(|e| e.category.as_deref() == Some("Case Portfolio")));
    assert!(entries.iter().any(|e| e.text.contains("Williams v. Anderson Corp")));
}
