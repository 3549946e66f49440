//! Explicit interaction state for each page feature.
//!
//! DESIGN
//! ======
//! Each module owns one feature's finite state. Browser glue in `util`
//! renders these values onto the document and never reads state back from
//! classes, styles, or labels.

pub mod cards;
pub mod filter;
pub mod notifications;
pub mod reveal;
pub mod sections;
pub mod theme;
