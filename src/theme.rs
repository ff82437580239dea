use crate::constants::{DARK_CLASS, DARK_SCHEME_QUERY, THEME_TOGGLE_ID};
use crate::dom::{self, Listener};
use portfolio_core::Theme;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

fn prefers_dark(window: &web::Window) -> bool {
    window
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
    }
    if let Some(btn) = document.get_element_by_id(THEME_TOGGLE_ID) {
        let _ = btn.set_attribute("aria-label", theme.toggle_label());
    }
}

pub fn mount(window: &web::Window, document: &web::Document) -> Option<Listener> {
    let theme = Rc::new(Cell::new(Theme::from_prefers_dark(prefers_dark(window))));
    apply(document, theme.get());
    let doc = document.clone();
    let listener = dom::on_click(document, THEME_TOGGLE_ID, move || {
        let next = theme.get().toggled();
        theme.set(next);
        apply(&doc, next);
        log::debug!("[theme] {:?}", next);
    });
    if listener.is_none() {
        log::warn!("[dom] #{THEME_TOGGLE_ID} missing; theme toggle disabled");
    }
    listener
}
