//! Error type shared by startup steps and browser glue.
//!
//! DESIGN
//! ======
//! Every failure here is recoverable: a step that errors is logged and the
//! remaining startup steps still run. Errors never reach the notification
//! channel, which is reserved for normal-flow feedback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no browser window or document available")]
    NoWindow,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

impl SiteError {
    /// Stable tag used as a prefix in log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoWindow => "E_NO_WINDOW",
            Self::MissingElement(_) => "E_MISSING_ELEMENT",
            Self::Storage(_) => "E_STORAGE",
            Self::Config(_) => "E_CONFIG",
            Self::Js(_) => "E_JS",
        }
    }
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
