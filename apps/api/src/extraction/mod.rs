//! Text Extraction — turns an uploaded CV into one plain-text string.
//!
//! The format is resolved once from the filename (`DocumentFormat`) and each
//! variant knows how to pull text out of a file on disk. Uploads arrive as
//! bytes, so `TempFileExtractor` stages them in a `NamedTempFile` that is
//! removed when the guard drops, whatever the parser did.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>` so handlers never depend on
//! the concrete strategy.

pub mod docx;
pub mod pdf;

use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Supported upload formats. Anything else extracts to an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentFormat {
    /// Resolves the format from a filename extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Self {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => DocumentFormat::Pdf,
            "docx" => DocumentFormat::Docx,
            _ => DocumentFormat::Unsupported,
        }
    }

    /// Suffix used for the staged temp file, so parsers that sniff the
    /// extension see the same one the user uploaded.
    pub fn suffix(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => ".pdf",
            DocumentFormat::Docx => ".docx",
            DocumentFormat::Unsupported => "",
        }
    }

    /// Extracts the full text of the file at `path` using this format's parser.
    pub fn extract(self, path: &Path) -> Result<String, ExtractionError> {
        match self {
            DocumentFormat::Pdf => pdf::extract_text(path),
            DocumentFormat::Docx => docx::extract_text(path),
            DocumentFormat::Unsupported => Ok(String::new()),
        }
    }
}

/// One uploaded CV: display name plus raw bytes. Filenames are not unique.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub content: Bytes,
    pub format: DocumentFormat,
}

impl Document {
    pub fn new(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let filename = filename.into();
        let format = DocumentFormat::from_filename(&filename);
        Self {
            filename,
            content: content.into(),
            format,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("Word extraction error: {0}")]
    Docx(String),

    #[error("{0} parser panicked")]
    ParserPanic(&'static str),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Pulls plain text out of an uploaded document.
///
/// Implementations are blocking; async callers should run them on
/// `tokio::task::spawn_blocking`.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &Document) -> Result<String, ExtractionError>;
}

// ────────────────────────────────────────────────────────────────────────────
// TempFileExtractor — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Writes the upload to a temp file, parses it from disk, and lets the
/// `NamedTempFile` guard delete it on every exit path.
#[derive(Debug, Default, Clone)]
pub struct TempFileExtractor {
    /// Directory for staged uploads. `None` uses the OS temp dir.
    staging_dir: Option<PathBuf>,
}

impl TempFileExtractor {
    pub fn new(staging_dir: Option<PathBuf>) -> Self {
        Self { staging_dir }
    }
}

impl TextExtractor for TempFileExtractor {
    fn extract(&self, document: &Document) -> Result<String, ExtractionError> {
        if document.format == DocumentFormat::Unsupported {
            return Ok(String::new());
        }

        let mut builder = tempfile::Builder::new();
        builder.prefix("cv-").suffix(document.format.suffix());
        let mut staged = match &self.staging_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        staged.write_all(&document.content)?;
        staged.flush()?;

        run_guarded(document.format, staged.path())
    }
}

/// Runs a format parser, converting a parser panic into an `ExtractionError`.
/// Third-party PDF/DOCX parsers can panic on malformed input.
fn run_guarded(format: DocumentFormat, path: &Path) -> Result<String, ExtractionError> {
    let label = match format {
        DocumentFormat::Pdf => "PDF",
        DocumentFormat::Docx => "Word",
        DocumentFormat::Unsupported => "unsupported",
    };
    panic::catch_unwind(AssertUnwindSafe(|| format.extract(path)))
        .unwrap_or(Err(ExtractionError::ParserPanic(label)))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_filename("cv.pdf"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("cv.docx"), DocumentFormat::Docx);
        assert_eq!(
            DocumentFormat::from_filename("cv.txt"),
            DocumentFormat::Unsupported
        );
    }

    #[test]
    fn test_format_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_filename("CV.PDF"), DocumentFormat::Pdf);
        assert_eq!(
            DocumentFormat::from_filename("Jane Doe.DocX"),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_format_without_extension_is_unsupported() {
        assert_eq!(
            DocumentFormat::from_filename("resume"),
            DocumentFormat::Unsupported
        );
        assert_eq!(DocumentFormat::from_filename(""), DocumentFormat::Unsupported);
        // Legacy .doc is not .docx
        assert_eq!(
            DocumentFormat::from_filename("resume.doc"),
            DocumentFormat::Unsupported
        );
    }

    #[test]
    fn test_document_resolves_format_once() {
        let doc = Document::new("Alice.Pdf", Vec::new());
        assert_eq!(doc.format, DocumentFormat::Pdf);
        assert_eq!(doc.filename, "Alice.Pdf");
    }

    fn staged_files(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_unsupported_extracts_empty_text() {
        let doc = Document::new("notes.txt", b"python rust kubernetes".to_vec());
        let text = TempFileExtractor::default().extract(&doc).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_corrupt_pdf_is_an_error_not_a_panic() {
        let doc = Document::new("broken.pdf", b"this is not a pdf".to_vec());
        assert!(TempFileExtractor::default().extract(&doc).is_err());
    }

    #[test]
    fn test_corrupt_docx_is_an_error() {
        let doc = Document::new("broken.docx", b"PK not really a zip".to_vec());
        assert!(TempFileExtractor::default().extract(&doc).is_err());
    }

    #[test]
    fn test_staged_file_is_removed_after_failure() {
        let dir = TempDir::new().unwrap();
        let extractor = TempFileExtractor::new(Some(dir.path().to_path_buf()));

        let doc = Document::new("broken.pdf", b"%PDF-1.4 truncated".to_vec());
        assert!(extractor.extract(&doc).is_err());
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[test]
    fn test_staged_file_is_removed_after_success() {
        let dir = TempDir::new().unwrap();
        let extractor = TempFileExtractor::new(Some(dir.path().to_path_buf()));

        let doc = Document::new("cv.docx", docx::tests::build_docx(&["Rust engineer"]));
        let text = extractor.extract(&doc).unwrap();
        assert!(text.contains("Rust engineer"));
        assert_eq!(staged_files(dir.path()), 0);
    }

    #[test]
    fn test_unsupported_never_touches_disk() {
        let dir = TempDir::new().unwrap();
        let extractor = TempFileExtractor::new(Some(dir.path().join("missing")));

        // Staging into a directory that does not exist would fail for real formats.
        let doc = Document::new("cv.odt", b"rust".to_vec());
        assert_eq!(extractor.extract(&doc).unwrap(), "");
    }
}
