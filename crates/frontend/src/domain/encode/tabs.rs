//! Tab switching.
//!
//! The active header lives in an `RwSignal<TabSelection>`; header classes
//! and panel visibility are a projection of it. Initial state is whatever
//! the markup marks `active`; nothing is projected until the first click.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use contracts::shared::tabs::{TabId, TabSelection};

use crate::shared::config::ControllerConfig;
use crate::shared::dom;
use crate::shared::error::{report, ControllerResult};

/// Header elements that name a panel, with the panel they target
fn header_targets(headers: &Element, config: &ControllerConfig) -> ControllerResult<Vec<(Element, TabId)>> {
    Ok(dom::query_all(headers, &config.tab_button_selector())?
        .into_iter()
        .filter_map(|btn| {
            let target = btn.get_attribute(&config.target_attribute)?;
            Some((btn, TabId::new(target)))
        })
        .collect())
}

/// Read headers and the initially active one from the markup.
///
/// A page without `#tabs-headers` yields an empty selection.
pub fn read_selection(document: &Document, config: &ControllerConfig) -> ControllerResult<TabSelection> {
    let Some(headers) = document.get_element_by_id(&config.tabs_headers_id) else {
        return Ok(TabSelection::default());
    };

    let targets = header_targets(&headers, config)?;
    let active = targets
        .iter()
        .position(|(btn, _)| btn.class_list().contains(&config.active_class));

    Ok(TabSelection::from_markup(
        targets.into_iter().map(|(_, id)| id),
        active,
    ))
}

/// Apply `selection` to the DOM: one active header, one visible panel.
pub fn project(
    document: &Document,
    headers: &Element,
    panels: &Element,
    selection: &TabSelection,
    config: &ControllerConfig,
) -> ControllerResult<()> {
    let buttons = header_targets(headers, config)?;
    let panel_elements = dom::query_all(panels, &config.tab_panel_selector())?;
    let panel_ids: Vec<String> = panel_elements.iter().map(Element::id).collect();

    let projection = selection.projection(panel_ids.iter().map(String::as_str));

    for ((btn, _), on) in buttons.iter().zip(&projection.headers) {
        btn.class_list().toggle_with_force(&config.active_class, *on)?;
    }
    for (panel, shown) in panel_elements.iter().zip(&projection.panels) {
        dom::set_displayed(panel, *shown)?;
    }

    // A target outside the panels container is still shown by id.
    if let Some(active) = selection.active() {
        if !panel_ids.iter().any(|id| id == active.as_str()) {
            match document.get_element_by_id(active.as_str()) {
                Some(panel) => dom::set_displayed(&panel, true)?,
                None => log::warn!("Tab panel #{} not found", active),
            }
        }
    }

    Ok(())
}

/// Wire click delegation on the headers container and the projection
/// effect. Pages without the tab containers are left alone.
///
/// Must run inside a reactive owner.
pub fn wire_tabs(
    document: &Document,
    config: &ControllerConfig,
    selection: RwSignal<TabSelection>,
) -> ControllerResult<()> {
    let (Some(headers), Some(panels)) = (
        document.get_element_by_id(&config.tabs_headers_id),
        document.get_element_by_id(&config.tabs_panels_id),
    ) else {
        log::debug!("No tab containers on this page");
        return Ok(());
    };

    {
        let document = document.clone();
        let headers = headers.clone();
        let config = config.clone();
        Effect::new(move |prev: Option<()>| {
            selection.with(|current| {
                // First run only subscribes; markup owns the initial state.
                if prev.is_none() {
                    return;
                }
                if let Err(err) = project(&document, &headers, &panels, current, &config) {
                    report("Tab switch", &err);
                }
            });
        });
    }

    let container = headers.clone();
    let config = config.clone();

    // Delegation: one listener on the container instead of one per header
    let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
        let Some(target) = e.target() else { return };
        let Ok(element) = target.dyn_into::<Element>() else {
            return;
        };
        let btn = match element.closest(&config.tab_button_selector()) {
            Ok(Some(btn)) => btn,
            _ => return, // click outside any header
        };

        let targets = match header_targets(&container, &config) {
            Ok(targets) => targets,
            Err(err) => {
                report("Tab switch", &err);
                return;
            }
        };
        let Some(index) = targets.iter().position(|(el, _)| *el == btn) else {
            log::warn!("Tab header without {}", config.target_attribute);
            return;
        };

        log::debug!("Switching to tab {}", targets[index].1);
        selection.update(|s| {
            s.sync_headers(targets.into_iter().map(|(_, id)| id).collect());
            s.select(index);
        });
    }) as Box<dyn FnMut(MouseEvent)>);

    headers.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    Ok(())
}
