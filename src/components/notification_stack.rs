//! Toast overlay rendering the live notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each notification renders as its own fixed-position element in the top
//! right corner. Concurrent toasts overlap; there is no stacking offset.

#[cfg(test)]
#[path = "notification_stack_test.rs"]
mod notification_stack_test;

use leptos::prelude::*;

use crate::state::notifications::{NotificationPhase, NotificationState};

/// Keyframes for the entrance and exit transitions, injected once.
pub const NOTIFICATION_KEYFRAMES: &str = "\
@keyframes slideIn {
    from { opacity: 0; transform: translateX(100px); }
    to { opacity: 1; transform: translateX(0); }
}
@keyframes slideOut {
    from { opacity: 1; transform: translateX(0); }
    to { opacity: 0; transform: translateX(100px); }
}";

const BASE_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
background: linear-gradient(135deg, #ff3366, #e6006d); color: white; \
padding: 1rem 1.5rem; border-radius: 4px; \
box-shadow: 0 4px 12px rgba(255, 51, 102, 0.4); z-index: 1000; font-weight: 600;";

/// Inline style for a notification in `phase`. The exit animation lasts
/// exactly as long as the `Closing` phase.
pub fn notification_style(phase: NotificationPhase, exit_ms: u32) -> String {
    let animation = match phase {
        NotificationPhase::Shown => "slideIn 0.3s ease-out".to_owned(),
        NotificationPhase::Closing => format!("slideOut {exit_ms}ms ease-out forwards"),
    };
    format!("{BASE_STYLE} animation: {animation};")
}

#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let exit_ms = notifications.with_untracked(|n| n.timing().exit_ms);

    view! {
        <style>{NOTIFICATION_KEYFRAMES}</style>
        <For
            each=move || notifications.with(NotificationState::ids)
            key=|id| *id
            children=move |id| {
                let message = notifications
                    .with_untracked(|n| n.get(id).map(|item| item.message.clone()))
                    .unwrap_or_default();
                let style = move || {
                    notifications
                        .with(|n| n.phase(id))
                        .map(|phase| notification_style(phase, exit_ms))
                        .unwrap_or_default()
                };
                view! {
                    <div class="notification" role="status" style=style>
                        {message}
                    </div>
                }
            }
        />
    }
}
