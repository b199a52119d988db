use super::*;

fn pdf(name: &str, size_bytes: u64) -> UploadedDoc {
    UploadedDoc::new(name, size_bytes, "application/pdf")
}

#[test]
fn screening_accepts_pdfs_within_the_limit() {
    let screening = screen_uploads(vec![pdf("a.pdf", 1_000), pdf("b.pdf", MAX_UPLOAD_BYTES)]);
    assert_eq!(screening.accepted.len(), 2);
    assert!(screening.warnings.is_empty());
}

#[test]
fn screening_rejects_non_pdfs_with_a_message() {
    let screening = screen_uploads(vec![
        pdf("a.pdf", 1_000),
        UploadedDoc::new("notes.docx", 500, "application/msword"),
    ]);
    assert_eq!(screening.accepted.len(), 1);
    assert_eq!(screening.warnings.len(), 1);
    assert!(screening.warnings[0].contains("non-PDF"));
}

#[test]
fn screening_rejects_oversized_pdfs_with_the_limit_spelled_out() {
    let screening = screen_uploads(vec![pdf("huge.pdf", MAX_UPLOAD_BYTES + 1)]);
    assert!(screening.accepted.is_empty());
    assert_eq!(screening.warnings.len(), 1);
    assert!(screening.warnings[0].contains("10 MB"));
}

#[test]
fn comparison_needs_two_uploads() {
    assert!(comparison_blocker(&[]).is_some());
    assert!(comparison_blocker(&[pdf("a.pdf", 1)]).is_some());
    assert!(comparison_blocker(&[pdf("a.pdf", 1), pdf("b.pdf", 1)]).is_none());
}

#[test]
fn comparison_pair_takes_the_first_two() {
    let docs = vec![pdf("a.pdf", 1), pdf("b.pdf", 2), pdf("c.pdf", 3)];
    let (first, second) = comparison_pair(&docs).unwrap();
    assert_eq!(first.name, "a.pdf");
    assert_eq!(second.name, "b.pdf");
    assert!(comparison_pair(&docs[..1]).is_none());
}

#[test]
fn risk_analysis_needs_one_upload() {
    assert!(risk_blocker(&[]).is_some());
    assert!(risk_blocker(&[pdf("a.pdf", 1)]).is_none());
}

#[test]
fn differences_partition_by_document_scope() {
    let differences = vec![
        "Clause present only in Document 1".to_owned(),
        "Clause present only in Document 2".to_owned(),
        "Payment terms differ".to_owned(),
    ];
    let (doc1, doc2, general) = partition_differences(&differences);
    assert_eq!(doc1.len(), 1);
    assert_eq!(doc2.len(), 1);
    assert_eq!(general, ["Payment terms differ"]);
}

#[test]
fn sample_comparison_has_the_structured_sections() {
    let sample = sample_comparison();
    assert!(sample["summary"].is_string());
    assert_eq!(sample["differences"].as_array().unwrap().len(), 4);
    assert_eq!(sample["similarities"].as_array().unwrap().len(), 3);
    assert!(sample["riskAssessment"].as_str().unwrap().contains("liability"));
}
