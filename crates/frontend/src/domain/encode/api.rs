use web_sys::FormData;

use crate::shared::api_utils::post_form_for_html;
use crate::shared::error::ControllerResult;

/// Submit one panel form; returns the HTML fragment for the panel's result.
pub async fn encode(page_path: &str, form: FormData) -> ControllerResult<String> {
    post_form_for_html(page_path, form).await
}
