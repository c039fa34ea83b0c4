//! Application configuration.
//!
//! Central constants for the page enhancements. Selectors and class names
//! mirror what the server-rendered templates emit; if a template changes,
//! this is the only place to touch.

// =============================================================================
// Element selectors
// =============================================================================

/// Id of the element whose CSS background is swapped per route.
pub const BACKGROUND_CONTAINER_ID: &str = "background-container";

/// Selector for the navigation loading indicator.
pub const LOADER_SELECTOR: &str = ".central-loader";

/// Selector for the primary navigation links.
pub const NAV_LINK_SELECTOR: &str = "nav a";

/// Selector for server-rendered flash messages.
pub const FLASH_SELECTOR: &str = ".flash-message";

/// Selector for the logout link.
pub const LOGOUT_SELECTOR: &str = "a[href='/logout']";

/// Selector for the event creation form.
pub const CREATE_EVENT_FORM_SELECTOR: &str = "form[action='/event/create']";

/// Selector for the item publication form.
pub const ADD_ITEM_FORM_SELECTOR: &str = "form[action='/item/add']";

/// Selector for per-item delete links.
pub const DELETE_ITEM_SELECTOR: &str = ".delete-item-btn";

// =============================================================================
// Class names and data attributes
// =============================================================================

/// Class toggled to hide the loading indicator.
pub const HIDDEN_CLASS: &str = "hidden";

/// Root class of a confirmation dialog.
pub const DIALOG_CLASS: &str = "confirmation-dialog";

/// Class that reveals a confirmation dialog (CSS transition).
pub const DIALOG_SHOW_CLASS: &str = "show";

/// `dataset` key carrying the server-side login flag (`data-logged-in`).
pub const LOGGED_IN_DATA_KEY: &str = "loggedIn";

// =============================================================================
// Timings
// =============================================================================

/// Delay before revealing a freshly mounted dialog, in milliseconds.
///
/// The class toggle must land on a later tick than the insertion or the
/// browser skips the transition.
pub const DIALOG_REVEAL_MS: u32 = 10;

/// How long a flash message stays fully visible, in milliseconds.
pub const FLASH_DISMISS_MS: u32 = 4_000;

/// Duration of the flash fade-out before removal, in milliseconds.
pub const FLASH_FADE_MS: u32 = 300;
