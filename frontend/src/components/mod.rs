//! Page enhancement components.
//!
//! Each component wires itself onto DOM the server already rendered and is
//! independent of the others:
//!
//! - [`background`] - Route/login-aware full-page background
//! - [`dialog`] - Confirmation dialogs for destructive actions
//! - [`loader`] - Navigation loading indicator
//! - [`flash`] - Flash message auto-dismiss

pub mod background;
pub mod dialog;
pub mod flash;
pub mod loader;

pub use background::{apply_background, select_background};
pub use dialog::{create_confirmation_dialog, open_dialog};
