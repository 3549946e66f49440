//! Card button wiring: challenge participation, project actions, and
//! call-to-action buttons.

use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::error::SiteError;
use crate::markup;
use crate::state::cards::{ChallengeCard, ProjectAction, call_to_action_message};
use crate::state::notifications::NotificationState;
use crate::util::dom;
use crate::util::notify::show_notification;

fn render_challenge(button: &HtmlElement, card: &ChallengeCard) {
    let (background, color) = card.colors();
    button.set_text_content(Some(card.label()));
    dom::set_styles(button, &[("background", background), ("color", color)]);
}

/// # Errors
///
/// Returns an error when the document cannot be queried or a listener
/// cannot be attached.
pub fn wire_challenges(notifications: RwSignal<NotificationState>) -> Result<(), SiteError> {
    for button in dom::query_all(markup::CHALLENGE_BUTTONS)? {
        let title = dom::card_heading(&button, markup::CHALLENGE_CARD, markup::CARD_HEADING);
        let mut card = ChallengeCard::from_label(title, &button.text_content().unwrap_or_default());
        let target = button.clone();
        dom::listen(&button, "click", move |event| {
            event.prevent_default();
            let message = card.toggle();
            render_challenge(&target, &card);
            show_notification(notifications, message);
        })?;
    }
    Ok(())
}

fn open_repository(url: &str) {
    let opened = dom::window().and_then(|w| w.open_with_url_and_target(url, "_blank").map_err(SiteError::from));
    if let Err(err) = opened {
        log::warn!("[{}] repository not opened: {err}", err.error_code());
    }
}

/// # Errors
///
/// Returns an error when the document cannot be queried or a listener
/// cannot be attached.
pub fn wire_projects(notifications: RwSignal<NotificationState>, repository_url: &str) -> Result<(), SiteError> {
    for button in dom::query_all(markup::PROJECT_BUTTONS)? {
        let action = ProjectAction::from_view_class(button.class_list().contains(markup::PROJECT_VIEW_CLASS));
        let title = dom::card_heading(&button, markup::PROJECT_CARD, markup::CARD_HEADING);
        let url = repository_url.to_owned();
        dom::listen(&button, "click", move |event| {
            event.prevent_default();
            show_notification(notifications, action.message(&title));
            if action.opens_repository() {
                open_repository(&url);
            }
        })?;
    }
    Ok(())
}

/// Buttons that target a section are left to the router.
///
/// # Errors
///
/// Returns an error when the document cannot be queried or a listener
/// cannot be attached.
pub fn wire_calls_to_action(notifications: RwSignal<NotificationState>) -> Result<(), SiteError> {
    let buttons = dom::query_all(markup::CALL_TO_ACTION_BUTTONS)?
        .into_iter()
        .filter(|button| {
            button
                .get_attribute(markup::SECTION_TARGET_ATTR)
                .is_none_or(|target| target.is_empty())
        });
    for button in buttons {
        let source = button.clone();
        dom::listen(&button, "click", move |event| {
            event.prevent_default();
            let label = source.text_content().unwrap_or_default();
            show_notification(notifications, call_to_action_message(&label));
        })?;
    }
    Ok(())
}
