use crate::constants::{nav_button_id, NAV_ACTIVE_CLASS};
use crate::dom::{self, Listener};
use portfolio_core::{nav_target, SectionBounds, SectionTracker, Viewport, NAV_LABELS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Layout reads and smooth scrolling against the live document.
#[derive(Clone)]
pub struct DomViewport {
    document: web::Document,
}

impl DomViewport {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl Viewport for DomViewport {
    fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
        let el = self
            .document
            .get_element_by_id(id)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        Some(SectionBounds::new(
            el.offset_top() as f64,
            el.offset_height() as f64,
        ))
    }

    fn scroll_to_section(&self, id: &str) -> bool {
        let Some(el) = self.document.get_element_by_id(id) else {
            return false;
        };
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}

fn render_highlight(document: &web::Document, tracker: &SectionTracker) {
    for section in tracker.sections() {
        if let Some(btn) = document.get_element_by_id(&nav_button_id(section)) {
            let active = tracker.is_active(section);
            let _ = btn.class_list().toggle_with_force(NAV_ACTIVE_CLASS, active);
            if active {
                let _ = btn.set_attribute("aria-current", "true");
            } else {
                let _ = btn.remove_attribute("aria-current");
            }
        }
    }
}

/// Wire nav buttons to smooth-scroll, and (when `scroll_spy`) keep the
/// highlight in sync with the active section.
pub fn mount(
    window: &web::Window,
    document: &web::Document,
    tracker: Rc<RefCell<SectionTracker>>,
    scroll_spy: bool,
) -> Vec<Listener> {
    let viewport = DomViewport::new(document.clone());
    let mut listeners = Vec::new();

    for label in NAV_LABELS {
        let target = nav_target(label);
        let tracker_click = tracker.clone();
        let viewport_click = viewport.clone();
        let button_id = nav_button_id(&target);
        let listener = dom::on_click(document, &button_id, move || {
            if !tracker_click
                .borrow()
                .navigate_to_section(&target, &viewport_click)
            {
                log::debug!("[nav] #{target} not found; click ignored");
            }
        });
        match listener {
            Some(l) => listeners.push(l),
            None => log::warn!("[nav] #{button_id} missing"),
        }
    }

    if !scroll_spy {
        return listeners;
    }

    let update = {
        let window = window.clone();
        let document = document.clone();
        let tracker = tracker.clone();
        move || {
            let offset = window.scroll_y().unwrap_or(0.0);
            let changed = tracker.borrow_mut().on_scroll(offset, &viewport).is_some();
            if changed {
                render_highlight(&document, &tracker.borrow());
            }
        }
    };

    // Evaluate once at mount so the highlight is right before the first scroll.
    update();
    render_highlight(document, &tracker.borrow());
    if let Some(l) = Listener::new(window, "scroll", move |_ev| update()) {
        listeners.push(l);
    }
    listeners
}
