//! Full-page background selection.
//!
//! Every page gets a full-bleed background image picked from the current
//! route and login state. The server only renders an empty
//! `#background-container`; the mapping lives entirely here so all templates
//! share one table instead of one copy-pasted script each.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::BACKGROUND_CONTAINER_ID;
use crate::types::{AppError, AppResult, PageState};

/// Background for the index page of a logged-in session.
const HOME_BACKGROUND: &str = "/static/backgrounds/home-background.png";

/// Fallback background while logged in.
const LOGGED_IN_BACKGROUND: &str = "/static/backgrounds/parche-verde-background.png";

/// Fallback background while logged out.
const LOGGED_OUT_BACKGROUND: &str =
    "/static/backgrounds/parche-verde-background-not-logged.png";

/// Route substring → background image, first match wins.
///
/// Order is load-bearing for overlapping routes: `/map/add` must hit `map`,
/// `/event/create` must hit `create`, `/item/add` must hit `add`.
const ROUTE_BACKGROUNDS: &[(&str, &str)] = &[
    ("profile", "/static/backgrounds/profile-background.png"),
    ("events", "/static/backgrounds/events-background.png"),
    ("items", "/static/backgrounds/items-background.png"),
    ("organizations", "/static/backgrounds/organizations-background.png"),
    ("map", "/static/backgrounds/map-background.png"),
    ("add", "/static/backgrounds/add-background.png"),
    ("register", "/static/backgrounds/register-background.png"),
    ("create", "/static/backgrounds/create-background.png"),
    ("about", "/static/backgrounds/about-background.png"),
];

/// Pick the background image for a route and login state.
///
/// Route matches win over the login state; with no match the index gets the
/// home image (logged in only) and everything else falls back to the
/// login-dependent default.
pub fn select_background(path: &str, logged_in: bool) -> &'static str {
    for (pattern, image) in ROUTE_BACKGROUNDS {
        if path.contains(pattern) {
            return image;
        }
    }

    if !logged_in {
        return LOGGED_OUT_BACKGROUND;
    }

    if path == "/" {
        HOME_BACKGROUND
    } else {
        LOGGED_IN_BACKGROUND
    }
}

/// Apply `image` as a fixed, centered, cover-sized background.
pub fn apply_background(container: &HtmlElement, image: &str) -> AppResult<()> {
    let style = container.style();
    style
        .set_property(
            "background",
            &format!("url(\"{image}\") no-repeat center center fixed"),
        )
        .map_err(AppError::js)?;
    style
        .set_property("background-size", "cover")
        .map_err(AppError::js)?;
    Ok(())
}

/// Resolve and apply the background for the current page.
pub fn init(document: &Document, state: &PageState) -> AppResult<()> {
    let Some(container) = document.get_element_by_id(BACKGROUND_CONTAINER_ID) else {
        log::debug!("no #{BACKGROUND_CONTAINER_ID} on this page");
        return Ok(());
    };
    let container: HtmlElement = container
        .dyn_into()
        .map_err(|_| AppError::UnexpectedElement("#background-container"))?;

    apply_background(&container, select_background(&state.path, state.logged_in))
}
