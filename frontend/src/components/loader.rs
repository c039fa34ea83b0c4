//! Navigation loading indicator.
//!
//! The loader is revealed the moment a navigation link is clicked and stays
//! up across the full page load; the destination page's `load` event hides
//! it again.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config::{HIDDEN_CLASS, LOADER_SELECTOR, NAV_LINK_SELECTOR};
use crate::types::{AppError, AppResult};

/// Wire the loader to the navigation links of this page.
pub fn init(document: &Document) -> AppResult<()> {
    let Some(loader) = document.query_selector(LOADER_SELECTOR).map_err(AppError::js)? else {
        log::debug!("no {LOADER_SELECTOR} on this page");
        return Ok(());
    };

    {
        let loader = loader.clone();
        EventListener::once(&gloo_utils::window(), "load", move |_| {
            let _ = loader.class_list().add_1(HIDDEN_CLASS);
        })
        .forget();
    }

    let links = document
        .query_selector_all(NAV_LINK_SELECTOR)
        .map_err(AppError::js)?;
    for index in 0..links.length() {
        let Some(node) = links.get(index) else {
            continue;
        };
        let Ok(link) = node.dyn_into::<Element>() else {
            continue;
        };
        let loader = loader.clone();
        EventListener::new(&link, "click", move |_| {
            let _ = loader.class_list().remove_1(HIDDEN_CLASS);
        })
        .forget();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn nav_click_reveals_the_loader_synchronously() {
        let document = gloo_utils::document();
        let body = document.body().unwrap();

        let loader = document.create_element("div").unwrap();
        loader.set_class_name("central-loader hidden");
        body.append_child(&loader).unwrap();

        let nav = document.create_element("nav").unwrap();
        let link = document.create_element("a").unwrap();
        nav.append_child(&link).unwrap();
        body.append_child(&nav).unwrap();

        init(&document).unwrap();

        let link: HtmlElement = link.dyn_into().unwrap();
        link.click();
        assert!(!loader.class_list().contains(HIDDEN_CLASS));

        nav.remove();
        loader.remove();
    }
}
