//! Parche Verde - Frontend page enhancements
//!
//! A WebAssembly module loaded by every server-rendered page of the Parche
//! Verde community platform. It never renders pages itself; it decorates
//! what the server sent:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  server-rendered page                                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  background   route + login state → full-page image          │
//! │  dialog       confirm logout / create / add / delete         │
//! │  loader       show on nav click, hide on destination load    │
//! │  flash        fade out notifications after a fixed delay     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Selectors, class names and timings
//! - [`types`] - Page state and error types
//! - [`components`] - The four independent enhancements

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, PageState};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🌱 Parche Verde - page enhancements loading");

    // The module may finish loading before or after the parser does
    let document = gloo_utils::document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| enhance_page()).forget();
    } else {
        enhance_page();
    }
}

/// Wire every enhancement onto the current page.
///
/// Components are independent: one failing to wire never blocks the others,
/// it is logged and skipped.
pub fn enhance_page() {
    let document = gloo_utils::document();
    let state = PageState::read(&document);
    log::debug!(
        "wiring page {} (logged in: {})",
        state.path,
        state.logged_in
    );

    if let Err(e) = components::background::init(&document, &state) {
        log::warn!("background selector disabled: {e}");
    }
    if let Err(e) = components::loader::init(&document) {
        log::warn!("navigation loader disabled: {e}");
    }
    if let Err(e) = components::dialog::init(&document) {
        log::warn!("confirmation dialogs disabled: {e}");
    }
    if let Err(e) = components::flash::init(&document) {
        log::warn!("flash auto-dismiss disabled: {e}");
    }
}
