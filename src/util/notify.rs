//! Notification emitter.
//!
//! Pushes a message into the shared notification state and schedules its
//! two lifecycle transitions on browser timers. Timers are never cancelled.

use leptos::prelude::*;

use crate::state::notifications::{NotificationId, NotificationState};

/// Show `message` as a toast. Fire-and-forget.
pub fn show_notification(notifications: RwSignal<NotificationState>, message: impl Into<String>) {
    let message = message.into();
    log::debug!("notification: {message}");
    if let Some((id, delay_ms)) = notifications.try_update(|n| n.push(message)) {
        schedule_advance(notifications, id, delay_ms);
    }
}

#[cfg(feature = "csr")]
fn schedule_advance(notifications: RwSignal<NotificationState>, id: NotificationId, delay_ms: u32) {
    gloo_timers::callback::Timeout::new(delay_ms, move || {
        if let Some(next) = notifications.try_update(|n| n.advance(id)).flatten() {
            schedule_advance(notifications, id, next);
        }
    })
    .forget();
}

/// Without browser timers notifications stay in the `Shown` phase.
#[cfg(not(feature = "csr"))]
fn schedule_advance(_notifications: RwSignal<NotificationState>, _id: NotificationId, _delay_ms: u32) {}
