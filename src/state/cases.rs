//! Case portfolio model, filtering, and aggregate statistics.
//!
//! DESIGN
//! ======
//! Filters combine with AND semantics and an unset selector is a no-op.
//! Aggregates are always computed over the unfiltered portfolio, independent
//! of what the table currently shows; that asymmetry is intentional and
//! matched by the analytics page.

#[cfg(test)]
#[path = "cases_test.rs"]
mod cases_test;

/// Assessed risk level for a case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(RiskLevel::Low),
            "Medium" => Some(RiskLevel::Medium),
            "High" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

/// A matter in the advocate's portfolio.
#[derive(Clone, Debug, PartialEq)]
pub struct Case {
    pub id: u32,
    pub name: String,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    pub risk: RiskLevel,
    /// Estimated success probability, 0..=100.
    pub success_probability: u8,
    pub stages_completed: u8,
    pub stages_total: u8,
    pub delays: u8,
    pub value_cents: i64,
    pub status: String,
    pub category: String,
    pub next_hearing: String,
}

/// Seed portfolio backing the analytics page.
pub fn seed_cases() -> Vec<Case> {
    let case = |id: u32,
                name: &str,
                progress: u8,
                risk: RiskLevel,
                success_probability: u8,
                stages: (u8, u8),
                delays: u8,
                value_cents: i64,
                status: &str,
                category: &str,
                next_hearing: &str| Case {
        id,
        name: name.to_owned(),
        progress,
        risk,
        success_probability,
        stages_completed: stages.0,
        stages_total: stages.1,
        delays,
        value_cents,
        status: status.to_owned(),
        category: category.to_owned(),
        next_hearing: next_hearing.to_owned(),
    };

    vec![
        case(1, "Smith v. Jones", 65, RiskLevel::Medium, 72, (3, 5), 1, 12_000_000, "Active", "Civil Litigation", "Oct 12, 2023"),
        case(2, "Williams v. Anderson Corp", 40, RiskLevel::High, 55, (2, 6), 3, 45_000_000, "Active", "Corporate", "Oct 15, 2023"),
        case(3, "State v. Peterson", 85, RiskLevel::Low, 88, (5, 6), 0, 3_500_000, "Active", "Criminal", "Oct 18, 2023"),
        case(4, "Johnson Estate Probate", 90, RiskLevel::Low, 91, (4, 5), 0, 6_200_000, "Pending", "Probate", "Nov 2, 2023"),
        case(5, "Chen Business Contract", 55, RiskLevel::Medium, 67, (2, 4), 1, 25_000_000, "Active", "Corporate", "Oct 28, 2023"),
        case(6, "Rodriguez Property Dispute", 30, RiskLevel::Medium, 61, (1, 5), 2, 18_000_000, "On Hold", "Real Estate", "Nov 10, 2023"),
        case(7, "Wilson IP Infringement", 70, RiskLevel::Low, 79, (3, 5), 1, 9_500_000, "Active", "Intellectual Property", "Oct 25, 2023"),
    ]
}

/// Distinct status values in seed order, for the filter select.
pub fn status_options(cases: &[Case]) -> Vec<String> {
    let mut options = Vec::new();
    for case in cases {
        if !options.contains(&case.status) {
            options.push(case.status.clone());
        }
    }
    options
}

/// Distinct category values in seed order, for the filter select.
pub fn category_options(cases: &[Case]) -> Vec<String> {
    let mut options = Vec::new();
    for case in cases {
        if !options.contains(&case.category) {
            options.push(case.category.clone());
        }
    }
    options
}

/// Active filters on the case table. `None` selectors and an empty query
/// are no-ops ("All").
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaseFilter {
    pub query: String,
    pub risk: Option<RiskLevel>,
    pub status: Option<String>,
    pub category: Option<String>,
}

impl CaseFilter {
    /// AND of all active filters.
    pub fn matches(&self, case: &Case) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() && !case.name.to_lowercase().contains(&query) {
            return false;
        }
        if self.risk.is_some_and(|risk| case.risk != risk) {
            return false;
        }
        if self.status.as_ref().is_some_and(|s| &case.status != s) {
            return false;
        }
        if self.category.as_ref().is_some_and(|c| &case.category != c) {
            return false;
        }
        true
    }

    pub fn apply(&self, cases: &[Case]) -> Vec<Case> {
        cases.iter().filter(|c| self.matches(c)).cloned().collect()
    }
}

/// Portfolio-wide aggregates. Always computed over the full base
/// collection, never the filtered view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaseStats {
    pub average_progress: f64,
    pub average_success_probability: f64,
    pub high_risk_count: usize,
    pub total_value_cents: i64,
}

impl CaseStats {
    pub fn compute(cases: &[Case]) -> Self {
        if cases.is_empty() {
            return Self {
                average_progress: 0.0,
                average_success_probability: 0.0,
                high_risk_count: 0,
                total_value_cents: 0,
            };
        }
        #[allow(clippy::cast_precision_loss)]
        let count = cases.len() as f64;
        Self {
            average_progress: cases.iter().map(|c| f64::from(c.progress)).sum::<f64>() / count,
            average_success_probability: cases
                .iter()
                .map(|c| f64::from(c.success_probability))
                .sum::<f64>()
                / count,
            high_risk_count: cases.iter().filter(|c| c.risk == RiskLevel::High).count(),
            total_value_cents: cases.iter().map(|c| c.value_cents).sum(),
        }
    }
}
