//! Site configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults cover the stock page. A page may override any field with a
//! `<script type="application/json" id="site-config">` block; unknown fields
//! are ignored and missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;
use crate::state::notifications::NotificationTiming;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Section shown at startup and when the logo is clicked.
    pub default_section: String,
    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: String,
    /// Fraction of an element that must be visible before it is revealed.
    pub reveal_threshold: f64,
    pub notification_display_ms: u32,
    pub notification_exit_ms: u32,
    /// Per-card entrance delay for staggered card grids, in seconds.
    pub stagger_step_secs: f64,
    /// Target opened by a project's "view" button.
    pub repository_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_section: "home".to_owned(),
            theme_storage_key: "theme".to_owned(),
            reveal_threshold: 0.1,
            notification_display_ms: 3000,
            notification_exit_ms: 300,
            stagger_step_secs: 0.1,
            repository_url: "#".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override block.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Config` if the text is not a JSON object matching
    /// the config shape.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.reveal_threshold = if config.reveal_threshold.is_finite() {
            config.reveal_threshold.clamp(0.0, 1.0)
        } else {
            Self::default().reveal_threshold
        };
        if config.stagger_step_secs.is_nan() || config.stagger_step_secs < 0.0 {
            config.stagger_step_secs = 0.0;
        }
        Ok(config)
    }

    /// Load the config block from the current document, falling back to
    /// defaults when it is absent or invalid.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(crate::markup::CONFIG_SCRIPT_ID))
                .and_then(|el| el.text_content());
            if let Some(raw) = raw {
                return match Self::from_json(&raw) {
                    Ok(config) => config,
                    Err(err) => {
                        log::warn!("[{}] ignoring site config: {err}", err.error_code());
                        Self::default()
                    }
                };
            }
        }
        Self::default()
    }

    pub fn notification_timing(&self) -> NotificationTiming {
        NotificationTiming {
            display_ms: self.notification_display_ms,
            exit_ms: self.notification_exit_ms,
        }
    }
}
