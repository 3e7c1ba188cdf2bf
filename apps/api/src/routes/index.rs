//! Raw-API convenience page. The form posts straight to the JSON endpoint,
//! so the browser shows the ranked results as JSON, not a rendered table.

use axum::response::Html;

/// Upload form: pick CVs, type keywords, post to `POST /api/v1/shortlist`.
const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>CV Shortlister</title>
</head>
<body>
  <h1>CV Keyword Shortlister</h1>
  <p>Upload CVs (PDF or DOCX), enter required keywords, and this tool will find matching CVs.</p>
  <form action="/api/v1/shortlist" method="post" enctype="multipart/form-data">
    <p>
      <label for="files">Upload CVs (PDF or DOCX)</label><br>
      <input id="files" type="file" name="files" accept=".pdf,.docx" multiple>
    </p>
    <p>
      <label for="keywords">Enter keywords to match (comma-separated)</label><br>
      <input id="keywords" type="text" name="keywords" placeholder="e.g. Python, Django, API" size="48">
    </p>
    <button type="submit">Shortlist</button>
  </form>
</body>
</html>
"#;

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
