//! Single-active-section router over the page's content panels.
//!
//! DESIGN
//! ======
//! Navigation never touches the URL. The router holds the set of known
//! section ids, the active one, and per-link emphasis. Showing an unknown id
//! clears the active section and leaves link emphasis as it was; callers
//! skip the scroll reset in that case. Elements without an id are never
//! sections, and a repeated id names only its first element.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// Opacity applied to a hovered link that does not point at the active section.
pub const HOVER_DIM_OPACITY: &str = "0.7";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub target: String,
    pub emphasized: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionRouter {
    sections: Vec<String>,
    links: Vec<NavLink>,
    active: Option<String>,
}

impl SectionRouter {
    pub fn new<S, L>(sections: S, link_targets: L) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let mut ids: Vec<String> = Vec::new();
        for id in sections.into_iter().map(Into::into) {
            if !id.is_empty() && !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self {
            sections: ids,
            links: link_targets
                .into_iter()
                .map(|target| NavLink { target: target.into(), emphasized: false })
                .collect(),
            active: None,
        }
    }

    /// Make `id` the active section.
    ///
    /// Returns `true` when `id` names a known section and the viewport should
    /// scroll back to the top.
    pub fn show(&mut self, id: &str) -> bool {
        self.active = None;
        if !self.sections.iter().any(|section| section == id) {
            log::debug!("show unknown section {id:?}; no section active");
            return false;
        }
        self.active = Some(id.to_owned());
        for link in &mut self.links {
            link.emphasized = link.target == id;
        }
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active.as_deref() == Some(section)
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Active flag for each section element, in document order. Only the
    /// first element carrying the active id is marked.
    pub fn active_flags<'a, I>(&self, element_ids: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut claimed = false;
        element_ids
            .into_iter()
            .map(|id| {
                let active = !claimed && self.is_active(id);
                claimed |= active;
                active
            })
            .collect()
    }

    /// Whether a hovered link pointing at `target` should dim.
    pub fn dims_on_hover(&self, target: &str) -> bool {
        !self.is_active(target)
    }
}

/// Inline color for a navigation link.
pub fn link_color(emphasized: bool) -> &'static str {
    if emphasized { "var(--primary)" } else { "var(--text-light)" }
}

/// Element id referenced by an in-page anchor `href`, if it names one.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return None;
    }
    Some(id)
}
