//! One-shot reveal scheduling for elements entering the viewport.
//!
//! Each scheduler tracks the indices of its group's elements that have not
//! been revealed yet. Intersection callbacks may repeat or arrive in any
//! order; an element leaves the pending set on its first intersection and is
//! ignored afterwards.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeSet;

/// Inline style declarations as `(property, value)` pairs.
pub type Styles = &'static [(&'static str, &'static str)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealGroup {
    /// Content cards that fade and slide into place.
    Content,
    /// Numeric stat boxes that play a count-up animation.
    Stats,
}

impl RevealGroup {
    pub fn initial_styles(self) -> Styles {
        match self {
            Self::Content => &[("opacity", "0.7"), ("transform", "translateY(20px)")],
            Self::Stats => &[],
        }
    }

    pub fn revealed_styles(self) -> Styles {
        match self {
            Self::Content => &[("opacity", "1"), ("transform", "translateY(0)")],
            Self::Stats => &[("animation", "countUp 2s ease-out forwards")],
        }
    }
}

#[derive(Clone, Debug)]
pub struct RevealScheduler {
    group: RevealGroup,
    pending: BTreeSet<usize>,
}

impl RevealScheduler {
    pub fn new(group: RevealGroup) -> Self {
        Self { group, pending: BTreeSet::new() }
    }

    pub fn group(&self) -> RevealGroup {
        self.group
    }

    pub fn observe(&mut self, index: usize) {
        self.pending.insert(index);
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.contains(&index)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Process one batch of `(index, is_intersecting)` entries.
    ///
    /// Returns the indices to reveal now, in entry order. Each returned index
    /// has been removed from the pending set and should be unobserved.
    pub fn visit<I>(&mut self, entries: I) -> Vec<usize>
    where
        I: IntoIterator<Item = (usize, bool)>,
    {
        entries
            .into_iter()
            .filter(|&(_, intersecting)| intersecting)
            .filter_map(|(index, _)| self.pending.remove(&index).then_some(index))
            .collect()
    }
}

/// `animation-delay` for the card at `index` in a staggered grid.
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let secs = index as f64 * step_secs;
    format!("{}s", (secs * 1000.0).round() / 1000.0)
}
