//! Research page seed data: case law, judgment evolution, cause list.

#[cfg(test)]
#[path = "research_test.rs"]
mod research_test;

/// Tabs on the research page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResearchTab {
    #[default]
    CaseLaw,
    Evolution,
    CauseList,
}

/// A case-law search result card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseLawResult {
    pub id: u32,
    pub title: String,
    pub citation: String,
    pub court: String,
    pub year: String,
    pub judges: String,
    pub summary: String,
    pub importance: String,
    pub tags: Vec<String>,
}

/// A milestone on the judgment evolution timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvolutionMilestone {
    pub id: u32,
    pub year: String,
    pub title: String,
    pub description: String,
}

/// A row in today's cause list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CauseListEntry {
    pub id: u32,
    pub case_no: String,
    pub petitioner: String,
    pub respondent: String,
    pub purpose: String,
    pub time: String,
    pub bench: String,
    pub status: String,
}

pub fn seed_case_law() -> Vec<CaseLawResult> {
    vec![
        CaseLawResult {
            id: 1,
            title: "Kesavananda Bharati vs State of Kerala".to_owned(),
            citation: "AIR 1973 SC 1461".to_owned(),
            court: "Supreme Court".to_owned(),
            year: "1973".to_owned(),
            judges: "Sikri, S.M., Shelat, J.M., Hegde, K.S., Grover, A.N., Ray, A.N., Palekar, D.G., Beg, M.H., Dwivedi, S.N., Chandrachud, Y.V., Reddy, P.J., Khanna, H.R., Mathew, K.K., Mukherjea, A.K.".to_owned(),
            summary: "Established the Basic Structure Doctrine of the Constitution".to_owned(),
            importance: "Landmark".to_owned(),
            tags: vec!["Constitutional Law".to_owned(), "Basic Structure Doctrine".to_owned()],
        },
        CaseLawResult {
            id: 2,
            title: "Maneka Gandhi vs Union of India".to_owned(),
            citation: "AIR 1978 SC 597".to_owned(),
            court: "Supreme Court".to_owned(),
            year: "1978".to_owned(),
            judges: "Bhagwati, P.N., Untwalia, N.L., Fazal Ali, S.M.".to_owned(),
            summary: "Expanded the scope of Article 21 (Right to Life and Personal Liberty)".to_owned(),
            importance: "Landmark".to_owned(),
            tags: vec!["Constitutional Law".to_owned(), "Fundamental Rights".to_owned()],
        },
        CaseLawResult {
            id: 3,
            title: "Shayara Bano vs Union of India".to_owned(),
            citation: "AIR 2017 SC 4609".to_owned(),
            court: "Supreme Court".to_owned(),
            year: "2017".to_owned(),
            judges: "Khehar, J.S., Nariman, R.F., Lalit, U.U., Joseph, K., Goel, R.".to_owned(),
            summary: "Declared instant triple talaq (talaq-e-biddat) unconstitutional".to_owned(),
            importance: "Landmark".to_owned(),
            tags: vec!["Muslim Law".to_owned(), "Gender Justice".to_owned()],
        },
    ]
}

pub fn seed_evolution() -> Vec<EvolutionMilestone> {
    let milestone = |id: u32, year: &str, title: &str, description: &str| EvolutionMilestone {
        id,
        year: year.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
    };
    vec![
        milestone(1, "1950", "Initial Interpretation", "Early constitutional interpretations established foundational principles"),
        milestone(2, "1973", "Basic Structure Doctrine", "Kesavananda Bharati case established the basic structure doctrine"),
        milestone(3, "1978", "Expansion of Article 21", "Maneka Gandhi case expanded the scope of right to life and personal liberty"),
        milestone(4, "2017", "Privacy as Fundamental Right", "Puttaswamy case declared privacy as a fundamental right"),
        milestone(5, "2023", "Modern Interpretations", "Recent judgments addressing digital rights and contemporary issues"),
    ]
}

pub fn seed_cause_list() -> Vec<CauseListEntry> {
    vec![
        CauseListEntry {
            id: 1,
            case_no: "Crl.A. No. 1234/2023".to_owned(),
            petitioner: "State of Maharashtra".to_owned(),
            respondent: "Rajesh Kumar".to_owned(),
            purpose: "Hearing".to_owned(),
            time: "10:30 AM".to_owned(),
            bench: "Court No. 5".to_owned(),
            status: "Upcoming".to_owned(),
        },
        CauseListEntry {
            id: 2,
            case_no: "W.P.(C) No. 5678/2023".to_owned(),
            petitioner: "Sunita Sharma".to_owned(),
            respondent: "Delhi Municipal Corporation".to_owned(),
            purpose: "Arguments".to_owned(),
            time: "11:45 AM".to_owned(),
            bench: "Court No. 2".to_owned(),
            status: "Upcoming".to_owned(),
        },
        CauseListEntry {
            id: 3,
            case_no: "Civil Appeal No. 9012/2023".to_owned(),
            petitioner: "Reliance Industries Ltd.".to_owned(),
            respondent: "Competition Commission of India".to_owned(),
            purpose: "Judgment".to_owned(),
            time: "02:15 PM".to_owned(),
            bench: "Chief Justice Court".to_owned(),
            status: "Upcoming".to_owned(),
        },
    ]
}
