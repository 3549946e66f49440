//! Project list filter wiring.

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::error::SiteError;
use crate::markup;
use crate::state::filter::{FilterCard, HIDDEN_STYLES, ProjectFilter, SHOWN_STYLES};
use crate::util::dom;

/// Filter project cards on every keystroke in the filter input. Pages
/// without a filter input get no handler.
///
/// # Errors
///
/// Returns an error when the document cannot be queried or the listener
/// cannot be attached.
pub fn wire() -> Result<(), SiteError> {
    let input = dom::document()?
        .query_selector(markup::PROJECT_FILTER_INPUT)?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let Some(input) = input else {
        log::debug!("no project filter input; filtering disabled");
        return Ok(());
    };

    let cards = dom::query_all(markup::PROJECT_CARD)?;
    let filter = ProjectFilter::new(cards.iter().map(|card| {
        FilterCard::new(
            &dom::child_text(card, markup::CARD_HEADING).unwrap_or_default(),
            &dom::child_text(card, markup::PROJECT_DESCRIPTION).unwrap_or_default(),
        )
    }));
    log::debug!("project filter over {} cards", filter.len());

    let source = input.clone();
    dom::listen(&input, "input", move |_| {
        let visibility = filter.visibility(&source.value());
        for (card, shown) in cards.iter().zip(visibility) {
            dom::set_styles(card, if shown { SHOWN_STYLES } else { HIDDEN_STYLES });
        }
    })
}
