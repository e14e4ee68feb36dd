use crate::constants::{THEME_ATTRIBUTE, THEME_ICON_SELECTOR, THEME_STORAGE_KEY, THEME_TOGGLE_ID};
use crate::dom;
use crate::style;
use folio_core::{Scene, Theme};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Theme stored by a previous visit, if any.
pub fn load_saved_theme(window: &web::Window) -> Option<Theme> {
    let storage = window.local_storage().ok().flatten()?;
    let saved = storage.get_item(THEME_STORAGE_KEY).ok().flatten()?;
    Theme::parse(&saved)
}

fn save_theme(theme: Theme) {
    let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
    match storage {
        Some(s) => {
            if s.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
                log::warn!("[theme] could not persist preference");
            }
        }
        None => log::warn!("[theme] local storage unavailable"),
    }
}

fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
    if let Some(icon) = document
        .get_element_by_id(THEME_TOGGLE_ID)
        .and_then(|t| t.query_selector(THEME_ICON_SELECTOR).ok().flatten())
    {
        icon.set_text_content(Some(style::theme_icon(theme)));
    }
}

/// Apply `initial` to the page and flip theme on toggle clicks.
pub fn wire_theme_toggle(document: &web::Document, scene: &Rc<RefCell<Scene>>, initial: Theme) {
    apply_theme(document, initial);
    let current = Rc::new(Cell::new(initial));
    let scene = scene.clone();
    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let next = current.get().toggled();
        current.set(next);
        apply_theme(&doc, next);
        scene.borrow_mut().set_theme(next.is_dark());
        save_theme(next);
        log::info!("[theme] switched to {}", next.as_str());
    });
}
