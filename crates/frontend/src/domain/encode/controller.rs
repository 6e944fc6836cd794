use std::cell::RefCell;

use leptos::prelude::*;

use super::{submit, tabs};
use crate::shared::cleanup::register_unload_cleanup;
use crate::shared::config::ControllerConfig;
use crate::shared::dom;
use crate::shared::error::{report, ControllerResult};
use crate::shared::once::OnceGuard;

// Owner of the page's reactive state, kept for the page lifetime
thread_local! {
    static PAGE_OWNER: RefCell<Option<Owner>> = const { RefCell::new(None) };
    static MOUNTED: OnceGuard = const { OnceGuard::new() };
}

/// `true` for the first mount on this page only
fn claim_mount() -> bool {
    MOUNTED.with(OnceGuard::claim)
}

/// Start the encode page: tabs, panel forms and the unload cleanup.
///
/// Later calls on the same page do nothing, so listeners are never doubled
/// and the first owner keeps its signals alive.
pub fn mount(config: ControllerConfig) {
    if !claim_mount() {
        log::debug!("Encode controller already mounted");
        return;
    }
    log::info!("Mounting encode controller");

    let owner = Owner::new();
    owner.with(|| {
        if let Err(err) = wire(&config) {
            report("Encode controller", &err);
        }
    });
    PAGE_OWNER.with(|slot| *slot.borrow_mut() = Some(owner));

    if let Err(err) = register_unload_cleanup(&config) {
        report("Encode cleanup registration", &err);
    }
}

fn wire(config: &ControllerConfig) -> ControllerResult<()> {
    let document = dom::document()?;

    let initial = tabs::read_selection(&document, config)?;
    log::debug!(
        "Tabs: {} found, active {:?}",
        initial.headers().len(),
        initial.active().map(|t| t.as_str())
    );
    let selection = RwSignal::new(initial);

    tabs::wire_tabs(&document, config, selection)?;
    let forms = submit::wire_forms(&document, config, selection)?;
    log::debug!("Intercepting {} panel form(s)", forms);

    Ok(())
}
