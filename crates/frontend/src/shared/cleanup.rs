//! Best-effort removal of the server-side temporary image when the user
//! leaves the page.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

use contracts::shared::routes::RemovalRequest;

use super::api_utils::post_keepalive;
use super::config::ControllerConfig;
use super::dom;
use super::error::{report, ControllerResult};
use super::once::OnceGuard;

// One listener per page, whichever controllers mounted
thread_local! {
    static REGISTERED: OnceGuard = const { OnceGuard::new() };
}

/// `true` for the first registration on this page only
fn claim_registration() -> bool {
    REGISTERED.with(OnceGuard::claim)
}

/// Register the `beforeunload` cleanup once per page.
///
/// The deletion key is the last segment of `location.pathname` read at
/// unload time, not any `save_path` generated on the page.
pub fn register_unload_cleanup(config: &ControllerConfig) -> ControllerResult<()> {
    let window = dom::window()?;
    if !claim_registration() {
        log::debug!("Unload cleanup already registered");
        return Ok(());
    }

    let remove_prefix = config.remove_prefix.clone();
    let confirm_on_leave = config.confirm_on_leave;

    let on_unload = Closure::wrap(Box::new(move |event: Event| {
        if confirm_on_leave {
            event.prevent_default();
        }
        if let Err(err) = dispatch_removal(&remove_prefix) {
            report("Unload cleanup", &err);
        }
    }) as Box<dyn FnMut(Event)>);

    let registered = window
        .add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref());
    if let Err(err) = registered {
        REGISTERED.with(OnceGuard::release);
        return Err(err.into());
    }

    // Listener lives for the page lifetime
    on_unload.forget();
    Ok(())
}

fn dispatch_removal(remove_prefix: &str) -> ControllerResult<()> {
    let request = RemovalRequest::for_page(remove_prefix, &dom::current_path()?);
    log::debug!("Requesting removal: {}", request.url);
    post_keepalive(&request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_registration_is_skipped() {
        // Encode and decode mounts on one page share a single listener,
        // so each unload sends one removal request.
        assert!(claim_registration());
        assert!(!claim_registration());
        assert!(!claim_registration());
    }
}
