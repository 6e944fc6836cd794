use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

use contracts::domain::decode::DecodeRequest;
use contracts::shared::artifact::ArtifactId;

use super::api;
use crate::shared::cleanup::register_unload_cleanup;
use crate::shared::config::ControllerConfig;
use crate::shared::dom;
use crate::shared::error::{report, ControllerError, ControllerResult};
use crate::shared::once::OnceGuard;

thread_local! {
    static MOUNTED: OnceGuard = const { OnceGuard::new() };
}

/// `true` for the first mount on this page only
fn claim_mount() -> bool {
    MOUNTED.with(OnceGuard::claim)
}

/// Start the decode page: run the decode once, then arm the unload cleanup.
///
/// Cleanup is registered after the decode request settles, whatever its
/// outcome. Later calls on the same page do nothing, so one page load
/// sends one decode request.
pub fn mount(config: ControllerConfig) {
    if !claim_mount() {
        log::debug!("Decode controller already mounted");
        return;
    }
    log::info!("Mounting decode controller");
    spawn_local(async move {
        run_decode(None).await;
        if let Err(err) = register_unload_cleanup(&config) {
            report("Decode cleanup registration", &err);
        }
    });
}

/// Post a fresh artifact id to the current path and replace the whole
/// document with the response.
///
/// On failure the page is left unchanged and the error is logged.
pub async fn run_decode(trigger: Option<Event>) {
    if let Some(event) = trigger {
        event.prevent_default();
    }

    match decode_page().await {
        Ok(save_path) => log::debug!("Decoded into {}", save_path),
        Err(err) => report("Decode", &err),
    }
}

async fn decode_page() -> ControllerResult<ArtifactId> {
    let save_path = ArtifactId::new_v4();
    let page_path = dom::current_path()?;

    let html = api::decode(&page_path, &DecodeRequest::new(save_path)).await?;

    // Server markup is trusted and injected as-is.
    dom::document()?
        .document_element()
        .ok_or_else(|| ControllerError::MissingElement("documentElement".into()))?
        .set_inner_html(&html);

    Ok(save_path)
}
