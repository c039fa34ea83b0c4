//! Flash message auto-dismiss.
//!
//! Server-rendered flash banners fade out after a few seconds and are then
//! detached. One fire-and-forget timer chain per banner, no cancellation.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::{FLASH_DISMISS_MS, FLASH_FADE_MS, FLASH_SELECTOR};
use crate::types::{AppError, AppResult};

/// Schedule dismissal of every flash message on this page.
pub fn init(document: &Document) -> AppResult<()> {
    let messages = document
        .query_selector_all(FLASH_SELECTOR)
        .map_err(AppError::js)?;

    for index in 0..messages.length() {
        let Some(node) = messages.get(index) else {
            continue;
        };
        let Ok(message) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        dismiss_later(message);
    }

    Ok(())
}

/// Fade after [`FLASH_DISMISS_MS`], detach [`FLASH_FADE_MS`] later.
fn dismiss_later(message: HtmlElement) {
    Timeout::new(FLASH_DISMISS_MS, move || {
        let _ = message.style().set_property("opacity", "0");
        Timeout::new(FLASH_FADE_MS, move || message.remove()).forget();
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn flash_message_stays_up_then_fades_and_detaches() {
        let document = gloo_utils::document();
        let message = document.create_element("div").unwrap();
        message.set_class_name("flash-message");
        document.body().unwrap().append_child(&message).unwrap();

        init(&document).unwrap();

        gloo_timers::future::sleep(Duration::from_millis(3_500)).await;
        assert!(message.is_connected());

        gloo_timers::future::sleep(Duration::from_millis(900)).await;
        assert!(!message.is_connected());
    }
}
