//! Guarded DOM lookups and mutations shared by the browser glue.
//!
//! Every lookup returns `Option`/`Result` instead of assuming the markup is
//! complete. Event closures are leaked for the lifetime of the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoWindow)
}

/// All `HtmlElement`s matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<HtmlElement>, SiteError> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn query(selector: &str) -> Result<Option<HtmlElement>, SiteError> {
    Ok(document()?
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Text content of the first descendant matching `selector`.
pub fn child_text(root: &Element, selector: &str) -> Option<String> {
    root.query_selector(selector).ok().flatten().and_then(|el| el.text_content())
}

/// Heading text of the nearest enclosing `card_selector` card.
pub fn card_heading(button: &Element, card_selector: &str, heading: &str) -> String {
    button
        .closest(card_selector)
        .ok()
        .flatten()
        .and_then(|card| child_text(&card, heading))
        .unwrap_or_default()
}

pub fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (property, value) in styles {
        if let Err(err) = style.set_property(property, value) {
            log::debug!("style {property}: {value} rejected: {err:?}");
        }
    }
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    set_styles(el, &[(property, value)]);
}

pub fn set_class(el: &Element, class: &str, present: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, present) {
        log::debug!("class {class} not updated: {err:?}");
    }
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn scroll_to_top() {
    if let Ok(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
