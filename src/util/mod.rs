//! Browser glue that renders `state` onto the page and feeds events back.
//!
//! SYSTEM CONTEXT
//! ==============
//! Modules gated on `csr` touch the DOM through `web-sys` and only exist in
//! the browser build. `preferences` and `notify` compile everywhere with
//! inert fallbacks so native builds and tests stay deterministic.

#[cfg(feature = "csr")]
pub mod cards;
#[cfg(feature = "csr")]
pub mod dom;
#[cfg(feature = "csr")]
pub mod filter;
pub mod notify;
pub mod preferences;
#[cfg(feature = "csr")]
pub mod reveal;
#[cfg(feature = "csr")]
pub mod sections;
#[cfg(feature = "csr")]
pub mod theme;

#[cfg(feature = "csr")]
use leptos::prelude::RwSignal;

#[cfg(feature = "csr")]
use crate::config::SiteConfig;
#[cfg(feature = "csr")]
use crate::error::SiteError;
#[cfg(feature = "csr")]
use crate::state::notifications::NotificationState;

#[cfg(feature = "csr")]
fn report(step: &str, result: Result<(), SiteError>) {
    if let Err(err) = result {
        log::warn!("[{}] {step} disabled: {err}", err.error_code());
    }
}

/// Startup phase: attach every feature to the current document.
///
/// Steps are independent; one that fails is logged and skipped.
#[cfg(feature = "csr")]
pub fn startup(config: &SiteConfig, notifications: RwSignal<NotificationState>) {
    use crate::markup;
    use crate::state::reveal::RevealGroup;

    report("theme", theme::wire(config));
    report("sections", sections::wire(config));
    report("anchors", sections::wire_anchors());
    report(
        "card reveal",
        reveal::observe(markup::REVEAL_CARDS, RevealGroup::Content, config.reveal_threshold),
    );
    report(
        "stat reveal",
        reveal::observe(markup::STAT_BOXES, RevealGroup::Stats, config.reveal_threshold),
    );
    report("stagger", reveal::stagger(&markup::STAGGERED_GRIDS, config.stagger_step_secs));
    report("project filter", filter::wire());
    report("challenges", cards::wire_challenges(notifications));
    report("projects", cards::wire_projects(notifications, &config.repository_url));
    report("calls to action", cards::wire_calls_to_action(notifications));

    log::info!("site interactions ready");
}
