use crate::constants::VARIANT_ATTR;
use portfolio_core::SiteVariant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Optional page hook: logs once and returns `None` when the markup lacks it.
pub fn optional_element(
    document: &web::Document,
    id: &str,
    feature: &str,
) -> Option<web::HtmlElement> {
    let el = html_element_by_id(document, id);
    if el.is_none() {
        log::warn!("[dom] #{id} missing; {feature} disabled");
    }
    el
}

/// Show or hide `el` through its `display` property, leaving other inline
/// styles alone.
pub fn set_visible(el: &web::HtmlElement, visible: bool) {
    let style = el.style();
    let _ = match crate::style::display_value(visible) {
        Some(value) => style.set_property("display", value),
        None => style.remove_property("display").map(|_| ()),
    };
}

/// Site variant from `<body data-variant=...>`, defaulting when absent or unknown.
pub fn read_variant(document: &web::Document) -> SiteVariant {
    let Some(raw) = document.body().and_then(|b| b.get_attribute(VARIANT_ATTR)) else {
        return SiteVariant::default();
    };
    SiteVariant::parse(&raw).unwrap_or_else(|e| {
        log::warn!("[dom] {e}; using default variant");
        SiteVariant::default()
    })
}

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::error!("[dom] add {event} listener failed: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Click listener on `#element_id`; `None` when the element is absent.
pub fn on_click(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<Listener> {
    let el = document.get_element_by_id(element_id)?;
    Listener::new(&el, "click", move |_ev| handler())
}
