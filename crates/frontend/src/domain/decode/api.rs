use contracts::domain::decode::DecodeRequest;

use crate::shared::api_utils::post_json_for_html;
use crate::shared::error::ControllerResult;

/// Ask the backend to decode the page's image into `request.save_path`.
///
/// Returns the full HTML document to show afterwards.
pub async fn decode(page_path: &str, request: &DecodeRequest) -> ControllerResult<String> {
    post_json_for_html(page_path, request).await
}
