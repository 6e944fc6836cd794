//! Thin helpers over `web_sys` used by both controllers

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use super::error::{ControllerError, ControllerResult};

pub fn window() -> ControllerResult<Window> {
    web_sys::window().ok_or_else(|| ControllerError::MissingElement("window".into()))
}

pub fn document() -> ControllerResult<Document> {
    window()?
        .document()
        .ok_or_else(|| ControllerError::MissingElement("document".into()))
}

/// `location.pathname` of the current page
pub fn current_path() -> ControllerResult<String> {
    Ok(window()?.location().pathname()?)
}

/// All elements under `root` matching `selector`, in document order
pub fn query_all(root: &Element, selector: &str) -> ControllerResult<Vec<Element>> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Show (`visible`) or hide an element through its inline `display`
pub fn set_displayed(element: &Element, visible: bool) -> ControllerResult<()> {
    let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() else {
        return Ok(());
    };
    let style = html.style();
    if visible {
        style.set_property("display", "")?;
    } else {
        style.set_property("display", "none")?;
    }
    Ok(())
}

/// All elements in the document matching `selector`, in document order
pub fn query_document(document: &Document, selector: &str) -> ControllerResult<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
