//! Axum route handlers for the Shortlist API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::Document;
use crate::shortlist::models::ShortlistResponse;
use crate::shortlist::pipeline::run_shortlist;
use crate::state::AppState;

/// Display name for uploads that arrive without a filename.
const UNNAMED_UPLOAD: &str = "unnamed";

/// POST /api/v1/shortlist
///
/// Multipart form: one `keywords` text field (comma-separated) and any number
/// of `files` parts. Missing files or keywords return the awaiting-input
/// prompt with 200, not an error.
pub async fn handle_shortlist(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ShortlistResponse>, AppError> {
    let mut documents = Vec::new();
    let mut keyword_parts = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "keywords" => keyword_parts.push(field.text().await?),
            "files" => {
                let filename = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .map(String::from);
                let content = field.bytes().await?;
                // An empty file input still posts one nameless, empty part.
                if filename.is_none() && content.is_empty() {
                    continue;
                }
                let filename = filename.unwrap_or_else(|| UNNAMED_UPLOAD.to_string());
                documents.push(Document::new(filename, content));
            }
            other => debug!("Ignoring unknown multipart field '{other}'"),
        }
    }

    let keyword_input = keyword_parts.join(",");
    let extractor = state.extractor.clone();

    // Parsers are blocking; keep them off the async executor.
    let response = tokio::task::spawn_blocking(move || {
        run_shortlist(&documents, &keyword_input, extractor.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in shortlist: {e}")))?
    .map_err(|e| AppError::Validation(format!("Keyword could not be compiled: {e}")))?;

    Ok(Json(response))
}
