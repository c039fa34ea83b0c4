//! Confirmation dialogs for destructive or state-changing actions.
//!
//! The factory builds a small overlay with cancel/confirm buttons and runs a
//! continuation only on confirm. Wiring covers the four confirmable actions
//! of the app: logout, event creation, item publication and item deletion.
//! The dialog is cooperative, not modal: each trigger's default action is
//! suppressed until the user confirms.

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlFormElement};

use crate::config::{
    ADD_ITEM_FORM_SELECTOR, CREATE_EVENT_FORM_SELECTOR, DELETE_ITEM_SELECTOR, DIALOG_CLASS,
    DIALOG_REVEAL_MS, DIALOG_SHOW_CLASS, LOGOUT_SELECTOR,
};
use crate::types::{AppError, AppResult};

const CANCEL_LABEL: &str = "Cancelar";
const CONFIRM_LABEL: &str = "Confirmar";

const LOGOUT_MESSAGE: &str = "¿Está seguro que desea cerrar sesión?";
const CREATE_EVENT_MESSAGE: &str = "¿Desea crear este evento?";
const ADD_ITEM_MESSAGE: &str = "¿Desea agregar este ítem?";
const DELETE_ITEM_MESSAGE: &str = "¿Está seguro que desea eliminar este ítem?";

// =============================================================================
// Dialog factory
// =============================================================================

/// Build a confirmation dialog around `message`.
///
/// Cancel removes the dialog and nothing else. Confirm runs `on_confirm`
/// exactly once, then removes the dialog. The element is returned detached;
/// callers decide where to mount it.
pub fn create_confirmation_dialog(
    document: &Document,
    message: &str,
    on_confirm: impl FnOnce() + 'static,
) -> AppResult<Element> {
    let dialog = document.create_element("div").map_err(AppError::js)?;
    dialog.set_class_name(DIALOG_CLASS);

    let text = document.create_element("p").map_err(AppError::js)?;
    text.set_text_content(Some(message));
    dialog.append_child(&text).map_err(AppError::js)?;

    let buttons = document.create_element("div").map_err(AppError::js)?;
    buttons.set_class_name("confirmation-buttons");

    let cancel = document.create_element("button").map_err(AppError::js)?;
    cancel.set_class_name("btn btn-secondary cancel-btn");
    // type=button: inside a form these must never trigger an implicit submit
    cancel.set_attribute("type", "button").map_err(AppError::js)?;
    cancel.set_text_content(Some(CANCEL_LABEL));
    buttons.append_child(&cancel).map_err(AppError::js)?;

    let confirm = document.create_element("button").map_err(AppError::js)?;
    confirm.set_class_name("btn btn-danger confirm-btn");
    confirm.set_attribute("type", "button").map_err(AppError::js)?;
    confirm.set_text_content(Some(CONFIRM_LABEL));
    buttons.append_child(&confirm).map_err(AppError::js)?;

    dialog.append_child(&buttons).map_err(AppError::js)?;

    {
        let dialog = dialog.clone();
        EventListener::once(&cancel, "click", move |_| dialog.remove()).forget();
    }
    {
        let dialog = dialog.clone();
        EventListener::once(&confirm, "click", move |_| {
            on_confirm();
            dialog.remove();
        })
        .forget();
    }

    Ok(dialog)
}

/// Mount a confirmation dialog under `parent` and reveal it.
///
/// A parent owns at most one live dialog: any previous one is replaced. The
/// reveal class lands on a later tick so the CSS transition runs.
pub fn open_dialog(
    document: &Document,
    parent: &Element,
    message: &str,
    on_confirm: impl FnOnce() + 'static,
) -> AppResult<()> {
    if let Some(existing) = parent
        .query_selector(&format!(".{DIALOG_CLASS}"))
        .map_err(AppError::js)?
    {
        existing.remove();
    }

    let dialog = create_confirmation_dialog(document, message, on_confirm)?;
    parent.append_child(&dialog).map_err(AppError::js)?;

    Timeout::new(DIALOG_REVEAL_MS, move || {
        let _ = dialog.class_list().add_1(DIALOG_SHOW_CLASS);
    })
    .forget();

    Ok(())
}

// =============================================================================
// Action wiring
// =============================================================================

/// Wire every confirmable action present on this page.
pub fn init(document: &Document) -> AppResult<()> {
    if let Some(logout) = document.query_selector(LOGOUT_SELECTOR).map_err(AppError::js)? {
        let logout: HtmlAnchorElement = logout
            .dyn_into()
            .map_err(|_| AppError::UnexpectedElement(LOGOUT_SELECTOR))?;
        confirm_navigation(document, logout, LOGOUT_MESSAGE);
    }

    wire_form(document, CREATE_EVENT_FORM_SELECTOR, CREATE_EVENT_MESSAGE)?;
    wire_form(document, ADD_ITEM_FORM_SELECTOR, ADD_ITEM_MESSAGE)?;

    let delete_buttons = document
        .query_selector_all(DELETE_ITEM_SELECTOR)
        .map_err(AppError::js)?;
    for index in 0..delete_buttons.length() {
        let Some(node) = delete_buttons.get(index) else {
            continue;
        };
        let Ok(button) = node.dyn_into::<HtmlAnchorElement>() else {
            log::debug!("delete control {index} is not an anchor, skipping");
            continue;
        };
        confirm_navigation(document, button, DELETE_ITEM_MESSAGE);
    }

    Ok(())
}

/// Ask before following `anchor`; confirm navigates to its href.
///
/// The dialog mounts on the anchor's parent so it appears next to the
/// control that triggered it.
fn confirm_navigation(document: &Document, anchor: HtmlAnchorElement, message: &'static str) {
    let document = document.clone();
    let trigger = anchor.clone();
    EventListener::new_with_options(
        &anchor,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let Some(parent) = trigger.parent_element() else {
                return;
            };
            let href = trigger.href();
            let opened = open_dialog(&document, &parent, message, move || {
                let _ = gloo_utils::window().location().set_href(&href);
            });
            if let Err(e) = opened {
                log::warn!("confirmation dialog failed: {e}");
            }
        },
    )
    .forget();
}

/// Ask before submitting the form matching `selector`.
///
/// Confirm uses the programmatic `submit()`, which bypasses the submit
/// listener, so the user is not prompted twice.
fn wire_form(document: &Document, selector: &'static str, message: &'static str) -> AppResult<()> {
    let Some(form) = document.query_selector(selector).map_err(AppError::js)? else {
        log::debug!("no {selector} on this page");
        return Ok(());
    };
    let form: HtmlFormElement = form
        .dyn_into()
        .map_err(|_| AppError::UnexpectedElement(selector))?;

    let document = document.clone();
    let trigger = form.clone();
    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let confirmed = trigger.clone();
            let opened = open_dialog(&document, &trigger, message, move || {
                let _ = confirmed.submit();
            });
            if let Err(e) = opened {
                log::warn!("confirmation dialog failed: {e}");
            }
        },
    )
    .forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mounted_parent(document: &Document) -> Element {
        let parent = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&parent).unwrap();
        parent
    }

    fn click(dialog_root: &Element, selector: &str) {
        let button: HtmlElement = dialog_root
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        button.click();
    }

    #[wasm_bindgen_test]
    fn confirm_runs_continuation_once_and_removes_dialog() {
        let document = gloo_utils::document();
        let parent = mounted_parent(&document);
        let calls = Rc::new(Cell::new(0));

        let on_confirm = {
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        };
        let dialog = create_confirmation_dialog(&document, "¿Seguro?", on_confirm).unwrap();
        parent.append_child(&dialog).unwrap();

        click(&parent, ".confirm-btn");

        assert_eq!(calls.get(), 1);
        assert!(parent
            .query_selector(".confirmation-dialog")
            .unwrap()
            .is_none());
        parent.remove();
    }

    #[wasm_bindgen_test]
    fn cancel_removes_dialog_without_running_continuation() {
        let document = gloo_utils::document();
        let parent = mounted_parent(&document);
        let calls = Rc::new(Cell::new(0));

        let on_confirm = {
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        };
        let dialog = create_confirmation_dialog(&document, "¿Seguro?", on_confirm).unwrap();
        parent.append_child(&dialog).unwrap();

        click(&parent, ".cancel-btn");

        assert_eq!(calls.get(), 0);
        assert!(parent
            .query_selector(".confirmation-dialog")
            .unwrap()
            .is_none());
        parent.remove();
    }

    #[wasm_bindgen_test]
    fn dialog_buttons_never_submit_an_enclosing_form() {
        let document = gloo_utils::document();
        let dialog = create_confirmation_dialog(&document, "¿Seguro?", || {}).unwrap();

        for selector in [".cancel-btn", ".confirm-btn"] {
            let button = dialog.query_selector(selector).unwrap().unwrap();
            assert_eq!(button.get_attribute("type").as_deref(), Some("button"));
        }
    }

    #[wasm_bindgen_test]
    fn opening_a_second_dialog_replaces_the_first() {
        let document = gloo_utils::document();
        let parent = mounted_parent(&document);

        open_dialog(&document, &parent, "primero", || {}).unwrap();
        open_dialog(&document, &parent, "segundo", || {}).unwrap();

        let dialogs = parent.query_selector_all(".confirmation-dialog").unwrap();
        assert_eq!(dialogs.length(), 1);

        let text = parent
            .query_selector(".confirmation-dialog p")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap();
        assert_eq!(text, "segundo");
        parent.remove();
    }

    #[wasm_bindgen_test]
    async fn dialog_is_revealed_on_a_later_tick() {
        let document = gloo_utils::document();
        let parent = mounted_parent(&document);

        open_dialog(&document, &parent, "¿Seguro?", || {}).unwrap();
        let dialog = parent
            .query_selector(".confirmation-dialog")
            .unwrap()
            .unwrap();
        assert!(!dialog.class_list().contains(DIALOG_SHOW_CLASS));

        gloo_timers::future::sleep(Duration::from_millis(50)).await;
        assert!(dialog.class_list().contains(DIALOG_SHOW_CLASS));
        parent.remove();
    }

    #[wasm_bindgen_test]
    fn clicking_a_delete_link_opens_a_dialog_next_to_it() {
        let document = gloo_utils::document();
        let parent = mounted_parent(&document);

        let link = document.create_element("a").unwrap();
        link.set_class_name("delete-item-btn");
        link.set_attribute("href", "#").unwrap();
        parent.append_child(&link).unwrap();

        init(&document).unwrap();

        let link: HtmlElement = link.dyn_into().unwrap();
        link.click();

        let dialog = parent.query_selector(".confirmation-dialog").unwrap();
        assert!(dialog.is_some());
        parent.remove();
    }
}
