//! Leptos components rendered by the interaction layer itself.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page markup is authored statically; the only elements this crate
//! renders are the notification overlay and its keyframes.

pub mod notification_stack;
