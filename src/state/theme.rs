//! Light/dark theme state and its persistence.
//!
//! The controller owns the current `Theme`; the body class and toggle icon
//! are projections of it. Every `apply` mirrors the value into the preference
//! store so the next session starts where this one left off.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::preferences::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Resolve a stored preference. Only `"light"` selects the light theme;
    /// absent or unrecognized values fall back to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the body carries the light-theme class.
    pub fn body_marker(self) -> bool {
        self == Self::Light
    }

    /// Glyph shown on the toggle control: the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

pub struct ThemeController<S> {
    store: S,
    key: String,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the persisted preference and apply it.
    pub fn init(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let stored = match store.load(&key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("[{}] theme preference unreadable: {err}", err.error_code());
                None
            }
        };
        let mut controller = Self { store, key, theme: Theme::default() };
        controller.apply(Theme::from_stored(stored.as_deref()));
        controller
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn apply(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(err) = self.store.save(&self.key, theme.as_str()) {
            log::warn!("[{}] theme preference not saved: {err}", err.error_code());
        }
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.apply(next);
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
