//! Section navigation wiring: nav links, hover dimming, logo, and in-page
//! anchors.

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::markup;
use crate::state::sections::{HOVER_DIM_OPACITY, SectionRouter, anchor_target, link_color};
use crate::util::dom;

fn navigate(router: RwSignal<SectionRouter>, id: &str) {
    if router.try_update(|r| r.show(id)).unwrap_or(false) {
        dom::scroll_to_top();
    }
}

/// Discover sections and nav links, show the default section, and attach
/// navigation handlers. A missing logo only skips its handler.
///
/// # Errors
///
/// Returns an error when the document cannot be queried or a listener
/// cannot be attached.
pub fn wire(config: &SiteConfig) -> Result<(), SiteError> {
    let sections = dom::query_all(markup::SECTIONS)?;
    let links = dom::query_all(markup::NAV_LINKS)?;
    let targets = links
        .iter()
        .map(|link| link.get_attribute(markup::SECTION_TARGET_ATTR).unwrap_or_default())
        .collect::<Vec<_>>();

    let router = RwSignal::new(SectionRouter::new(
        sections.iter().map(|section| section.id()),
        targets.iter().cloned(),
    ));
    navigate(router, &config.default_section);
    log::debug!("{} sections, {} nav links", sections.len(), links.len());

    let projected_links = links.clone();
    Effect::new(move || {
        router.with(|r| {
            let ids = sections.iter().map(|section| section.id()).collect::<Vec<_>>();
            let flags = r.active_flags(ids.iter().map(String::as_str));
            for (section, active) in sections.iter().zip(flags) {
                dom::set_class(section, markup::ACTIVE_CLASS, active);
            }
            for (link, state) in projected_links.iter().zip(r.links()) {
                dom::set_style(link, "color", link_color(state.emphasized));
            }
        });
    });

    for (link, target) in links.iter().zip(targets) {
        let click_target = target.clone();
        dom::listen(link, "click", move |event| {
            event.prevent_default();
            navigate(router, &click_target);
        })?;

        let hovered = link.clone();
        dom::listen(link, "mouseenter", move |_| {
            if router.with_untracked(|r| r.dims_on_hover(&target)) {
                dom::set_style(&hovered, "opacity", HOVER_DIM_OPACITY);
            }
        })?;

        let left = link.clone();
        dom::listen(link, "mouseleave", move |_| dom::set_style(&left, "opacity", "1"))?;
    }

    let Some(logo) = dom::query(markup::LOGO)? else {
        log::warn!("{} not found; logo navigation skipped", markup::LOGO);
        return Ok(());
    };
    dom::set_style(&logo, "cursor", "pointer");
    let home = config.default_section.clone();
    dom::listen(&logo, "click", move |event| {
        event.prevent_default();
        navigate(router, &home);
    })
}

/// Smooth-scroll `href="#id"` anchors to their target element.
///
/// # Errors
///
/// Returns an error when the document cannot be queried or a listener
/// cannot be attached.
pub fn wire_anchors() -> Result<(), SiteError> {
    for anchor in dom::query_all(markup::INTERNAL_ANCHORS)? {
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(id) = anchor_target(&href) else {
                return;
            };
            if let Some(target) = dom::document().ok().and_then(|doc| doc.get_element_by_id(id)) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}
