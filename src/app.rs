//! Root component and startup phase.

use leptos::prelude::*;

use crate::components::notification_stack::NotificationStack;
use crate::config::SiteConfig;
use crate::state::notifications::NotificationState;

/// Root component mounted into the existing page body.
///
/// Provides the notification state, attaches behaviour to the authored
/// markup (browser build only), and renders the notification overlay.
#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load();
    let notifications = RwSignal::new(NotificationState::new(config.notification_timing()));
    provide_context(notifications);

    #[cfg(feature = "csr")]
    crate::util::startup(&config, notifications);

    view! { <NotificationStack/> }
}
