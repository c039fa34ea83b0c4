//! Common types used across the frontend enhancements.
//!
//! # Categories
//!
//! - **Page State** - What the server told us about this page
//! - **Error Types** - Frontend error handling

use std::fmt;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config::LOGGED_IN_DATA_KEY;

// =============================================================================
// Page State
// =============================================================================

/// Page-level state, read once when the module starts.
///
/// Both fields are immutable for the page's lifetime: the server renders a
/// full page per navigation, so a state change always comes with a reload.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    /// Current route path (`window.location.pathname`).
    pub path: String,
    /// Whether the server rendered this page for a logged-in session.
    pub logged_in: bool,
}

impl PageState {
    /// Read the state from the live page.
    ///
    /// The login flag comes from `data-logged-in` on `<body>`; a missing
    /// attribute means logged out.
    pub fn read(document: &Document) -> Self {
        let path = gloo_utils::window()
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string());

        let logged_in = document
            .body()
            .and_then(|body| body.dataset().get(LOGGED_IN_DATA_KEY))
            .is_some_and(|flag| flag == "true");

        Self { path, logged_in }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend enhancement errors.
///
/// Absent optional elements are not errors (the feature just stays off);
/// these cover actual DOM API failures.
#[derive(Clone, Debug)]
pub enum AppError {
    /// A DOM call threw.
    Dom(String),
    /// A selector matched an element of an unexpected type.
    UnexpectedElement(&'static str),
}

impl AppError {
    /// Carry a thrown JS value as a printable error.
    pub(crate) fn js(err: JsValue) -> Self {
        AppError::Dom(format!("{err:?}"))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Dom(msg) => write!(f, "DOM error: {}", msg),
            AppError::UnexpectedElement(selector) => {
                write!(f, "unexpected element type for selector '{}'", selector)
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn page_state_reads_login_flag_from_body_dataset() {
        let document = gloo_utils::document();
        let body = document.body().unwrap();

        body.dataset().set(LOGGED_IN_DATA_KEY, "true").unwrap();
        assert!(PageState::read(&document).logged_in);

        body.dataset().set(LOGGED_IN_DATA_KEY, "false").unwrap();
        assert!(!PageState::read(&document).logged_in);

        body.dataset().delete(LOGGED_IN_DATA_KEY);
        let state = PageState::read(&document);
        assert!(!state.logged_in);
        assert!(state.path.starts_with('/'));
    }
}
