use super::*;
use crate::error::SiteError;
use crate::util::preferences::MemoryPreferences;

const KEY: &str = "theme";

/// Store whose backend is unreachable.
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn load(&self, _key: &str) -> Result<Option<String>, SiteError> {
        Err(SiteError::Storage("quota".to_owned()))
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), SiteError> {
        Err(SiteError::Storage("quota".to_owned()))
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn from_stored_only_accepts_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
}

#[test]
fn projection_is_consistent() {
    assert!(Theme::Light.body_marker());
    assert_eq!(Theme::Light.icon(), "🌙");
    assert!(!Theme::Dark.body_marker());
    assert_eq!(Theme::Dark.icon(), "☀️");
}

#[test]
fn toggled_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn init_resolves_every_stored_value() {
    let cases = [
        (Some("light"), Theme::Light),
        (Some("dark"), Theme::Dark),
        (None, Theme::Dark),
        (Some("sepia"), Theme::Dark),
    ];
    for (stored, expected) in cases {
        let store = match stored {
            Some(value) => MemoryPreferences::with_value(KEY, value),
            None => MemoryPreferences::new(),
        };
        let controller = ThemeController::init(store, KEY);
        assert_eq!(controller.theme(), expected, "stored {stored:?}");
    }
}

#[test]
fn init_normalizes_the_persisted_value() {
    let controller = ThemeController::init(MemoryPreferences::with_value(KEY, "sepia"), KEY);
    assert_eq!(controller.store().get(KEY).as_deref(), Some("dark"));

    let controller = ThemeController::init(MemoryPreferences::new(), KEY);
    assert_eq!(controller.store().get(KEY).as_deref(), Some("dark"));
}

#[test]
fn apply_persists_the_theme() {
    let mut controller = ThemeController::init(MemoryPreferences::new(), KEY);
    controller.apply(Theme::Light);
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.store().get(KEY).as_deref(), Some("light"));
}

#[test]
fn toggle_twice_restores_state_and_store() {
    let mut controller = ThemeController::init(MemoryPreferences::with_value(KEY, "light"), KEY);
    let before = (controller.theme().body_marker(), controller.store().get(KEY));

    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.store().get(KEY).as_deref(), Some("dark"));
    assert_eq!(controller.toggle(), Theme::Light);

    let after = (controller.theme().body_marker(), controller.store().get(KEY));
    assert_eq!(before, after);
}

#[test]
fn unreachable_store_falls_back_to_in_memory_state() {
    let mut controller = ThemeController::init(BrokenStore, KEY);
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(controller.toggle(), Theme::Light);
    assert_eq!(controller.theme(), Theme::Light);
}

#[test]
fn custom_key_is_respected() {
    let controller = ThemeController::init(MemoryPreferences::with_value("site_theme", "light"), "site_theme");
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.store().get(KEY), None);
}
