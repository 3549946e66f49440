//! Theme toggle wiring.
//!
//! The controller signal is the source of truth; an effect projects it onto
//! the body class and the toggle control's glyph.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::markup;
use crate::state::theme::ThemeController;
use crate::util::dom;
use crate::util::preferences::LocalStoragePreferences;

/// Apply the persisted theme and attach the toggle handler.
///
/// # Errors
///
/// Returns an error when there is no document body or the click listener
/// cannot be attached. A missing toggle control only skips the handler.
pub fn wire(config: &SiteConfig) -> Result<(), SiteError> {
    let document = dom::document()?;
    let body = document
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".to_owned()))?;
    let toggle = document.get_element_by_id(markup::THEME_TOGGLE_ID);

    let controller = RwSignal::new(ThemeController::init(
        LocalStoragePreferences,
        config.theme_storage_key.clone(),
    ));

    let icon_target = toggle.clone();
    Effect::new(move || {
        let theme = controller.with(ThemeController::theme);
        dom::set_class(&body, markup::LIGHT_THEME_CLASS, theme.body_marker());
        if let Some(control) = &icon_target {
            control.set_text_content(Some(theme.icon()));
        }
    });

    let Some(toggle) = toggle else {
        log::warn!("#{} not found; theme applied without a toggle", markup::THEME_TOGGLE_ID);
        return Ok(());
    };
    dom::listen(&toggle, "click", move |_| {
        if let Some(next) = controller.try_update(ThemeController::toggle) {
            log::debug!("theme switched to {}", next.as_str());
        }
    })
}
