//! # xdevs-site
//!
//! Leptos + WASM interaction layer for the X devs community site.
//!
//! The page markup and stylesheet are authored statically. This crate
//! attaches behaviour to that markup: theme toggling, single-page section
//! navigation, scroll-triggered reveals, project filtering, card buttons, and
//! toast notifications.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Explicit per-feature state; pure and natively testable |
//! | [`util`] | Browser glue projecting state onto the DOM (`csr` feature) |
//! | [`components`] | Notification overlay rendered by Leptos |
//! | [`app`] | Root component and startup phase |
//! | [`config`] | Optional JSON overrides for defaults |
//! | [`markup`] | Ids, classes, and selectors the page must expose |
//! | [`error`] | `SiteError` |

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod markup;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    leptos::mount::mount_to_body(app::App);
}
