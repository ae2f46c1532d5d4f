//! HTML pages: the transaction form and the verdict page.

use axum::response::Html;

const FORM_PAGE: &str = include_str!("../../templates/predict.html");
const RESULT_PAGE: &str = include_str!("../../templates/result.html");

/// `GET /` - the transaction form.
pub async fn form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// Render the verdict page with the given result string substituted in.
pub fn render_result(prediction_text: &str) -> Html<String> {
    Html(RESULT_PAGE.replace("{{prediction_text}}", prediction_text))
}
