//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Each notification is a two-step state machine driven by scheduled
//! transitions: `Shown` for `display_ms`, then `Closing` for `exit_ms`
//! while the exit animation plays, then removed. Notifications are
//! independent: no dedup, no cap, and no cancellation.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

pub type NotificationId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationTiming {
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self { display_ms: 3000, exit_ms: 300 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationPhase {
    #[default]
    Shown,
    Closing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub phase: NotificationPhase,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    timing: NotificationTiming,
    next_id: NotificationId,
    items: Vec<Notification>,
}

impl NotificationState {
    pub fn new(timing: NotificationTiming) -> Self {
        Self { timing, next_id: 0, items: Vec::new() }
    }

    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }

    /// Add a notification in the `Shown` phase.
    ///
    /// Returns its id and the delay after which `advance` must be called.
    pub fn push(&mut self, message: impl Into<String>) -> (NotificationId, u32) {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification { id, message: message.into(), phase: NotificationPhase::Shown });
        (id, self.timing.display_ms)
    }

    /// Move notification `id` one step through its lifecycle.
    ///
    /// Returns the delay until the next step, or `None` once the notification
    /// has been removed (or was already gone).
    pub fn advance(&mut self, id: NotificationId) -> Option<u32> {
        let position = self.items.iter().position(|n| n.id == id)?;
        match self.items[position].phase {
            NotificationPhase::Shown => {
                self.items[position].phase = NotificationPhase::Closing;
                Some(self.timing.exit_ms)
            }
            NotificationPhase::Closing => {
                self.items.remove(position);
                None
            }
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn ids(&self) -> Vec<NotificationId> {
        self.items.iter().map(|n| n.id).collect()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn phase(&self, id: NotificationId) -> Option<NotificationPhase> {
        self.get(id).map(|n| n.phase)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
