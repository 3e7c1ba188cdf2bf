use serde::Serialize;

use crate::extraction::DocumentFormat;

/// Prompt shown when a batch is missing files or keywords.
pub const AWAITING_INPUT_MESSAGE: &str =
    "Please upload at least one CV and enter keywords to start.";

/// Shown in place of the matched-keyword list when nothing matched.
pub const NONE_MATCHED: &str = "None";

/// Outcome of scoring one document. Lives only for the duration of a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub filename: String,
    pub matched_keywords: Vec<String>,
    pub score: u32, // 0 – 100
    pub format: DocumentFormat,
    /// Set when the parser failed and the document was scored on empty text.
    pub extraction_error: Option<String>,
}

impl MatchRecord {
    pub fn matched_display(&self) -> String {
        if self.matched_keywords.is_empty() {
            NONE_MATCHED.to_string()
        } else {
            self.matched_keywords.join(", ")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortlistStatus {
    AwaitingInput,
    Ranked,
}

/// One ranked row as rendered to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ShortlistEntry {
    pub filename: String,
    pub score: u32,
    pub matched_keywords: Vec<String>,
    pub matched_display: String,
    pub format: DocumentFormat,
    pub extraction_error: Option<String>,
}

impl From<MatchRecord> for ShortlistEntry {
    fn from(record: MatchRecord) -> Self {
        let matched_display = record.matched_display();
        Self {
            filename: record.filename,
            score: record.score,
            matched_keywords: record.matched_keywords,
            matched_display,
            format: record.format,
            extraction_error: record.extraction_error,
        }
    }
}

/// Full response for one shortlist request.
#[derive(Debug, Clone, Serialize)]
pub struct ShortlistResponse {
    pub status: ShortlistStatus,
    pub message: String,
    pub keywords: Vec<String>,
    pub results: Vec<ShortlistEntry>,
}

impl ShortlistResponse {
    pub fn awaiting_input(keywords: Vec<String>) -> Self {
        Self {
            status: ShortlistStatus::AwaitingInput,
            message: AWAITING_INPUT_MESSAGE.to_string(),
            keywords,
            results: vec![],
        }
    }

    pub fn ranked(keywords: Vec<String>, records: Vec<MatchRecord>) -> Self {
        Self {
            status: ShortlistStatus::Ranked,
            message: format!("Searching for keywords: {}", keywords.join(", ")),
            keywords,
            results: records.into_iter().map(ShortlistEntry::from).collect(),
        }
    }
}
