//! Case-insensitive text filter over the project card list.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Inline styles for a card that passes the filter. The animation is
/// re-applied on every pass.
pub const SHOWN_STYLES: &[(&str, &str)] = &[("display", "block"), ("animation", "fadeInSection 0.3s ease-out")];
pub const HIDDEN_STYLES: &[(&str, &str)] = &[("display", "none")];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCard {
    title: String,
    description: String,
}

impl FilterCard {
    pub fn new(title: &str, description: &str) -> Self {
        Self { title: title.to_lowercase(), description: description.to_lowercase() }
    }

    /// `needle` must already be lower-cased.
    fn matches(&self, needle: &str) -> bool {
        self.title.contains(needle) || self.description.contains(needle)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProjectFilter {
    cards: Vec<FilterCard>,
}

impl ProjectFilter {
    pub fn new(cards: impl IntoIterator<Item = FilterCard>) -> Self {
        Self { cards: cards.into_iter().collect() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Visibility of every card, in card order, for `query`.
    pub fn visibility(&self, query: &str) -> Vec<bool> {
        let needle = query.to_lowercase();
        self.cards.iter().map(|card| card.matches(&needle)).collect()
    }
}
