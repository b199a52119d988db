//! Upload list state for the contract comparison workflow.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

/// Only PDFs up to this size are accepted for comparison.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const PDF_MIME: &str = "application/pdf";

/// An uploaded document. Metadata is kept separate from the browser file
/// handle so validation and list logic stay testable off-target.
#[derive(Clone, Debug)]
pub struct UploadedDoc {
    pub id: String,
    pub name: String,
    pub size_bytes: u64,
    pub mime: String,
    #[cfg(feature = "hydrate")]
    pub handle: web_sys::File,
}

impl UploadedDoc {
    #[cfg(feature = "hydrate")]
    pub fn from_file(file: &web_sys::File) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size_bytes = file.size().max(0.0) as u64;
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: file.name(),
            size_bytes,
            mime: file.type_(),
            handle: file.clone(),
        }
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn new(name: &str, size_bytes: u64, mime: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            size_bytes,
            mime: mime.to_owned(),
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.mime == PDF_MIME
    }
}

/// Outcome of screening a batch of picked files.
#[derive(Clone, Debug, Default)]
pub struct UploadScreening {
    pub accepted: Vec<UploadedDoc>,
    /// User-visible validation messages for rejected files.
    pub warnings: Vec<String>,
}

/// Screen picked files: keep PDFs within the size limit, report the rest.
pub fn screen_uploads(incoming: Vec<UploadedDoc>) -> UploadScreening {
    use crate::util::format::format_file_size;

    let mut screening = UploadScreening::default();
    let mut non_pdf = 0usize;
    let mut oversized = 0usize;

    for doc in incoming {
        if !doc.is_pdf() {
            non_pdf += 1;
        } else if doc.size_bytes > MAX_UPLOAD_BYTES {
            oversized += 1;
        } else {
            screening.accepted.push(doc);
        }
    }

    if non_pdf > 0 {
        screening.warnings.push(format!(
            "{non_pdf} non-PDF file(s) were skipped; only PDF files can be used for comparison."
        ));
    }
    if oversized > 0 {
        screening.warnings.push(format!(
            "{oversized} PDF file(s) exceed the maximum size limit of {}.",
            format_file_size(MAX_UPLOAD_BYTES)
        ));
    }
    screening
}

/// The first two uploads, if enough are present to compare.
pub fn comparison_pair(docs: &[UploadedDoc]) -> Option<(&UploadedDoc, &UploadedDoc)> {
    match docs {
        [first, second, ..] => Some((first, second)),
        _ => None,
    }
}

/// Validation message when comparison cannot start, `None` when it can.
pub fn comparison_blocker(docs: &[UploadedDoc]) -> Option<String> {
    if docs.len() < 2 {
        return Some("Please upload exactly 2 PDF contracts to compare.".to_owned());
    }
    None
}

/// Validation message when risk analysis cannot start, `None` when it can.
pub fn risk_blocker(docs: &[UploadedDoc]) -> Option<String> {
    if docs.is_empty() {
        return Some("Please select a contract file first!".to_owned());
    }
    None
}

/// Partition comparison differences the way the result pane groups them:
/// lines scoped to document 1, document 2, and everything else.
pub fn partition_differences(differences: &[String]) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut doc1 = Vec::new();
    let mut doc2 = Vec::new();
    let mut general = Vec::new();
    for diff in differences {
        if diff.contains("only in Document 1") {
            doc1.push(diff.clone());
        } else if diff.contains("only in Document 2") {
            doc2.push(diff.clone());
        } else {
            general.push(diff.clone());
        }
    }
    (doc1, doc2, general)
}

/// Sample comparison payload behind the "Test with Sample Data" button.
pub fn sample_comparison() -> serde_json::Value {
    serde_json::json!({
        "summary": "The contracts have 5 significant differences and 3 similarities.",
        "differences": [
            "Clause 4.2: Payment terms are 30 days in Document 1 but 45 days in Document 2",
            "Clause 7.1: Liability cap is $100,000 in Document 1 but unlimited in Document 2",
            "Document 1 includes a non-compete clause missing in Document 2",
            "Document 2 includes an arbitration clause missing in Document 1"
        ],
        "similarities": [
            "Both contracts have identical confidentiality clauses",
            "Termination conditions are the same in both documents",
            "Intellectual property rights allocation is identical"
        ],
        "riskAssessment": "Document 2 presents higher financial risk due to unlimited liability cap."
    })
}
