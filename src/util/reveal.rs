//! `IntersectionObserver` wiring for one-shot reveals and staggered grids.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::SiteError;
use crate::state::reveal::{RevealGroup, RevealScheduler, stagger_delay};
use crate::util::dom;

/// Hide every element matching `selector` and reveal each one the first
/// time at least `threshold` of it is visible.
///
/// # Errors
///
/// Returns an error when the document cannot be queried or the observer
/// cannot be constructed.
pub fn observe(selector: &str, group: RevealGroup, threshold: f64) -> Result<(), SiteError> {
    let elements = dom::query_all(selector)?;
    let mut scheduler = RevealScheduler::new(group);
    for (index, el) in elements.iter().enumerate() {
        dom::set_styles(el, group.initial_styles());
        scheduler.observe(index);
    }
    log::debug!("{group:?} reveal observing {} elements", scheduler.pending_count());

    let scheduler = Rc::new(RefCell::new(scheduler));
    let elements: Rc<Vec<HtmlElement>> = Rc::new(elements);
    let tracked = Rc::clone(&elements);

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = JsValue::from(entry.target());
                    tracked
                        .iter()
                        .position(|el| AsRef::<JsValue>::as_ref(el) == &target)
                        .map(|index| (index, entry.is_intersecting()))
                })
                .collect::<Vec<_>>();
            let revealed = scheduler.borrow_mut().visit(batch);
            for index in revealed {
                if let Some(el) = tracked.get(index) {
                    dom::set_styles(el, group.revealed_styles());
                    observer.unobserve(el);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    for el in elements.iter() {
        observer.observe(el);
    }
    Ok(())
}

/// Delay each card's entrance animation by its index within its grid.
///
/// # Errors
///
/// Returns an error when the document cannot be queried.
pub fn stagger(selectors: &[&str], step_secs: f64) -> Result<(), SiteError> {
    for selector in selectors {
        for (index, card) in dom::query_all(selector)?.iter().enumerate() {
            dom::set_style(card, "animation-delay", &stagger_delay(index, step_secs));
        }
    }
    Ok(())
}
