//! Shortlist pipeline — extract → match → score per document, then rank.
//!
//! Pure with respect to the request: everything it needs is passed in and
//! nothing survives the call. Documents are processed one after another.
//! A document whose parser fails is scored on empty text so the rest of the
//! batch still completes.

use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::extraction::{Document, TextExtractor};
use crate::shortlist::keywords::{parse_keywords, KeywordMatcher};
use crate::shortlist::models::{MatchRecord, ShortlistResponse};
use crate::shortlist::scoring::{compute_score, rank};

/// Runs one shortlist batch.
///
/// Returns the awaiting-input prompt instead of results when there are no
/// documents or the keyword string holds no usable keyword.
pub fn run_shortlist(
    documents: &[Document],
    keyword_input: &str,
    extractor: &dyn TextExtractor,
) -> Result<ShortlistResponse, regex::Error> {
    let keywords = parse_keywords(keyword_input);
    if documents.is_empty() || keywords.is_empty() {
        return Ok(ShortlistResponse::awaiting_input(keywords));
    }

    let batch_id = Uuid::new_v4();
    let _span = info_span!("shortlist", %batch_id).entered();
    info!(
        documents = documents.len(),
        keywords = keywords.len(),
        "Shortlisting batch"
    );

    let matcher = KeywordMatcher::new(&keywords)?;
    let records = documents
        .iter()
        .map(|doc| score_document(doc, &matcher, extractor))
        .collect();

    Ok(ShortlistResponse::ranked(keywords, rank(records)))
}

/// Extracts, matches and scores a single document.
pub fn score_document(
    document: &Document,
    matcher: &KeywordMatcher,
    extractor: &dyn TextExtractor,
) -> MatchRecord {
    let (text, extraction_error) = match extractor.extract(document) {
        Ok(text) => (text, None),
        Err(e) => {
            warn!(
                filename = %document.filename,
                "Extraction failed, scoring as empty: {e}"
            );
            (String::new(), Some(e.to_string()))
        }
    };

    let matched_keywords = matcher.match_keywords(&text);
    let score = compute_score(matched_keywords.len(), matcher.keyword_count());
    debug!(
        filename = %document.filename,
        format = ?document.format,
        score,
        "Scored document"
    );

    MatchRecord {
        filename: document.filename.clone(),
        matched_keywords,
        score,
        format: document.format,
        extraction_error,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::extraction::{DocumentFormat, ExtractionError};
    use crate::shortlist::models::{ShortlistStatus, AWAITING_INPUT_MESSAGE};

    /// Returns canned text per filename; filenames starting with "corrupt"
    /// fail the way a real parser would.
    pub(crate) struct StubExtractor(pub HashMap<String, String>);

    impl StubExtractor {
        pub(crate) fn with(entries: &[(&str, &str)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
        }
    }

    impl TextExtractor for StubExtractor {
        fn extract(&self, document: &Document) -> Result<String, ExtractionError> {
            if document.filename.starts_with("corrupt") {
                return Err(ExtractionError::Pdf("invalid file header".to_string()));
            }
            if document.format == DocumentFormat::Unsupported {
                return Ok(String::new());
            }
            Ok(self.0.get(&document.filename).cloned().unwrap_or_default())
        }
    }

    fn doc(name: &str) -> Document {
        Document::new(name, Vec::new())
    }

    #[test]
    fn test_every_keyword_present_scores_100() {
        let extractor = StubExtractor::with(&[("a.pdf", "Python, Django and REST API work")]);
        let response = run_shortlist(&[doc("a.pdf")], "Python, Django, API", &extractor).unwrap();

        assert_eq!(response.status, ShortlistStatus::Ranked);
        let entry = &response.results[0];
        assert_eq!(entry.score, 100);
        assert_eq!(entry.matched_keywords, vec!["python", "django", "api"]);
    }

    #[test]
    fn test_no_keyword_present_scores_0() {
        let extractor = StubExtractor::with(&[("a.docx", "Gardening and cooking")]);
        let response = run_shortlist(&[doc("a.docx")], "rust, go", &extractor).unwrap();

        let entry = &response.results[0];
        assert_eq!(entry.score, 0);
        assert!(entry.matched_keywords.is_empty());
        assert_eq!(entry.matched_display, "None");
    }

    #[test]
    fn test_results_ranked_by_score() {
        let extractor = StubExtractor::with(&[
            ("low.pdf", "rust"),
            ("high.pdf", "rust go sql"),
            ("mid.docx", "rust go"),
        ]);
        let docs = [doc("low.pdf"), doc("high.pdf"), doc("mid.docx")];
        let response = run_shortlist(&docs, "rust, go, sql", &extractor).unwrap();

        let order: Vec<_> = response
            .results
            .iter()
            .map(|r| (r.filename.as_str(), r.score))
            .collect();
        assert_eq!(order, vec![("high.pdf", 100), ("mid.docx", 66), ("low.pdf", 33)]);
    }

    #[test]
    fn test_unsupported_extension_scores_0() {
        let extractor = StubExtractor::with(&[("notes.txt", "rust go sql")]);
        let response = run_shortlist(&[doc("notes.txt")], "rust", &extractor).unwrap();

        let entry = &response.results[0];
        assert_eq!(entry.score, 0);
        assert!(entry.matched_keywords.is_empty());
        assert_eq!(entry.format, DocumentFormat::Unsupported);
        assert!(entry.extraction_error.is_none());
    }

    #[test]
    fn test_corrupt_document_does_not_abort_batch() {
        let extractor = StubExtractor::with(&[("good.pdf", "rust")]);
        let docs = [doc("corrupt.pdf"), doc("good.pdf")];
        let response = run_shortlist(&docs, "rust", &extractor).unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].filename, "good.pdf");
        assert_eq!(response.results[0].score, 100);

        let corrupt = &response.results[1];
        assert_eq!(corrupt.score, 0);
        assert!(corrupt
            .extraction_error
            .as_deref()
            .unwrap()
            .contains("invalid file header"));
    }

    #[test]
    fn test_duplicate_filenames_are_kept() {
        let extractor = StubExtractor::with(&[("cv.pdf", "rust")]);
        let response = run_shortlist(&[doc("cv.pdf"), doc("cv.pdf")], "rust", &extractor).unwrap();
        assert_eq!(response.results.len(), 2);
    }

    #[test]
    fn test_no_documents_prompts_for_input() {
        let extractor = StubExtractor::with(&[]);
        let response = run_shortlist(&[], "rust", &extractor).unwrap();

        assert_eq!(response.status, ShortlistStatus::AwaitingInput);
        assert_eq!(response.message, AWAITING_INPUT_MESSAGE);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_blank_keywords_prompt_for_input() {
        let extractor = StubExtractor::with(&[("a.pdf", "rust")]);
        for input in ["", "   ", ", ,"] {
            let response = run_shortlist(&[doc("a.pdf")], input, &extractor).unwrap();
            assert_eq!(response.status, ShortlistStatus::AwaitingInput);
        }
    }

    #[test]
    fn test_score_document_with_empty_matcher_is_zero() {
        let extractor = StubExtractor::with(&[("a.pdf", "rust go")]);
        let matcher = KeywordMatcher::new(&[]).unwrap();
        let record = score_document(&doc("a.pdf"), &matcher, &extractor);
        assert_eq!(record.score, 0);
        assert!(record.matched_keywords.is_empty());
    }
}
