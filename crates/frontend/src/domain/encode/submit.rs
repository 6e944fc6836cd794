use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, FormData, HtmlFormElement};

use contracts::domain::encode::{EncodeSubmission, PayloadSink};
use contracts::shared::tabs::TabSelection;

use super::{api, result};
use crate::shared::config::ControllerConfig;
use crate::shared::dom;
use crate::shared::error::{report, ControllerError, ControllerResult};

/// `FormData` as a payload sink
struct FormDataSink<'a>(&'a FormData);

impl PayloadSink for FormDataSink<'_> {
    type Error = JsValue;

    fn append_field(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        self.0.append_with_str(name, value)
    }
}

/// Intercept submit on every panel form. Returns how many were wired.
pub fn wire_forms(
    document: &web_sys::Document,
    config: &ControllerConfig,
    selection: RwSignal<TabSelection>,
) -> ControllerResult<usize> {
    let forms: Vec<HtmlFormElement> = dom::query_document(document, &config.form_selector())?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
        .collect();

    for form in &forms {
        let form_for_submit = form.clone();
        let config = config.clone();
        let on_submit = Closure::wrap(Box::new(move |event: Event| {
            // Never fall back to a native navigation, even when the submit fails early.
            event.prevent_default();
            if let Err(err) = submit(&form_for_submit, selection, &config) {
                report("Encode submit", &err);
            }
        }) as Box<dyn FnMut(Event)>);

        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();
    }

    Ok(forms.len())
}

/// Build the payload, show the loading message, and post in the background.
///
/// Overlapping submissions are not prevented; the last response to arrive
/// wins the result element.
fn submit(
    form: &HtmlFormElement,
    selection: RwSignal<TabSelection>,
    config: &ControllerConfig,
) -> ControllerResult<()> {
    let form_data = FormData::new_with_form(form)?;

    let selected = selection
        .with_untracked(|s| s.active().cloned())
        .ok_or(ControllerError::NoActiveTab)?;
    let submission = EncodeSubmission::for_tab(selected);
    submission.apply_to(&mut FormDataSink(&form_data))?;

    let result_selector = submission.result_selector(&config.result_id);
    let target = dom::document()?
        .query_selector(&result_selector)?
        .ok_or_else(|| ControllerError::MissingElement(result_selector.clone()))?;
    result::begin(&target, &config.loading_message);

    log::debug!(
        "Submitting panel {} into {}",
        submission.panel(),
        submission.save_path
    );

    let page_path = dom::current_path()?;
    spawn_local(async move {
        let response = api::encode(&page_path, form_data).await;
        if let Err(err) = result::finish(&target, response) {
            report("Encode", &err);
        }
    });

    Ok(())
}
