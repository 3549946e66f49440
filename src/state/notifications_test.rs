use super::*;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Drives `advance` calls the way the browser timers do, on a simulated clock.
struct SimulatedTimers {
    now_ms: u64,
    queue: BinaryHeap<Reverse<(u64, NotificationId)>>,
}

impl SimulatedTimers {
    fn new() -> Self {
        Self { now_ms: 0, queue: BinaryHeap::new() }
    }

    fn show(&mut self, state: &mut NotificationState, message: &str) -> NotificationId {
        let (id, delay) = state.push(message);
        self.queue.push(Reverse((self.now_ms + u64::from(delay), id)));
        id
    }

    fn run_until(&mut self, state: &mut NotificationState, until_ms: u64) {
        while let Some(Reverse((due, id))) = self.queue.peek().copied() {
            if due > until_ms {
                break;
            }
            self.queue.pop();
            self.now_ms = due;
            if let Some(next) = state.advance(id) {
                self.queue.push(Reverse((due + u64::from(next), id)));
            }
        }
        self.now_ms = until_ms;
    }
}

fn count_with_text(state: &NotificationState, text: &str) -> usize {
    state.items().iter().filter(|n| n.message == text).count()
}

#[test]
fn default_timing_is_three_seconds_plus_exit() {
    let timing = NotificationTiming::default();
    assert_eq!(timing.display_ms, 3000);
    assert_eq!(timing.exit_ms, 300);
}

#[test]
fn push_starts_shown_and_requests_display_delay() {
    let mut state = NotificationState::new(NotificationTiming::default());
    let (id, delay) = state.push("hola");
    assert_eq!(delay, 3000);
    assert_eq!(state.phase(id), Some(NotificationPhase::Shown));
    assert_eq!(state.len(), 1);
}

#[test]
fn advance_walks_shown_closing_removed() {
    let mut state = NotificationState::new(NotificationTiming::default());
    let (id, _) = state.push("x");
    assert_eq!(state.advance(id), Some(300));
    assert_eq!(state.phase(id), Some(NotificationPhase::Closing));
    assert_eq!(state.advance(id), None);
    assert!(state.is_empty());
    assert_eq!(state.advance(id), None);
}

#[test]
fn lifecycle_removes_after_display_plus_exit() {
    let mut state = NotificationState::new(NotificationTiming::default());
    let mut timers = SimulatedTimers::new();
    timers.show(&mut state, "x");
    assert_eq!(count_with_text(&state, "x"), 1);

    timers.run_until(&mut state, 2999);
    assert_eq!(count_with_text(&state, "x"), 1);

    timers.run_until(&mut state, 3000);
    assert_eq!(count_with_text(&state, "x"), 1);
    assert_eq!(state.items()[0].phase, NotificationPhase::Closing);

    timers.run_until(&mut state, 3299);
    assert_eq!(count_with_text(&state, "x"), 1);

    timers.run_until(&mut state, 3301);
    assert_eq!(count_with_text(&state, "x"), 0);
}

#[test]
fn concurrent_notifications_are_independent() {
    let mut state = NotificationState::new(NotificationTiming::default());
    let mut timers = SimulatedTimers::new();
    let first = timers.show(&mut state, "same");
    timers.run_until(&mut state, 1000);
    let second = timers.show(&mut state, "same");
    assert_ne!(first, second);
    assert_eq!(count_with_text(&state, "same"), 2);

    timers.run_until(&mut state, 3301);
    assert_eq!(state.ids(), vec![second]);
    assert_eq!(state.phase(second), Some(NotificationPhase::Shown));

    timers.run_until(&mut state, 4301);
    assert!(state.is_empty());
}

#[test]
fn custom_timing_is_honored() {
    let mut state = NotificationState::new(NotificationTiming { display_ms: 10, exit_ms: 5 });
    let mut timers = SimulatedTimers::new();
    timers.show(&mut state, "quick");
    timers.run_until(&mut state, 14);
    assert_eq!(state.len(), 1);
    timers.run_until(&mut state, 15);
    assert!(state.is_empty());
}
