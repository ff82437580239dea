use crate::constants::*;
use crate::dom::{self, Listener};
use crate::emailjs::EmailJsDelivery;
use portfolio_core::{submit, ContactChannel, ContactField, DeliveryConfig, SubmitStatus};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn field_value(el: &web::Element) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Set (or clear, with "") the control's custom validity message.
fn set_custom_validity(el: &web::Element, message: &str) {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.set_custom_validity(message);
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_custom_validity(message);
    }
}

fn set_field_value(el: &web::Element, value: &str) {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        if input.value() != value {
            input.set_value(value);
        }
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        if area.value() != value {
            area.set_value(value);
        }
    }
}

/// Elements the form renders channel state into.
struct ContactView {
    fields: Vec<(ContactField, web::Element)>,
    button: Option<web::HtmlButtonElement>,
    label: Option<web::Element>,
    success: Option<web::HtmlElement>,
    error: Option<web::HtmlElement>,
}

impl ContactView {
    fn locate(document: &web::Document) -> Self {
        let fields = ContactField::ALL
            .iter()
            .filter_map(|f| match document.get_element_by_id(f.as_str()) {
                Some(el) => Some((*f, el)),
                None => {
                    log::warn!("[contact] #{} missing", f.as_str());
                    None
                }
            })
            .collect();
        Self {
            fields,
            button: document
                .get_element_by_id(SUBMIT_BUTTON_ID)
                .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok()),
            label: document.get_element_by_id(SUBMIT_LABEL_ID),
            success: dom::html_element_by_id(document, SUCCESS_BANNER_ID),
            error: dom::html_element_by_id(document, ERROR_BANNER_ID),
        }
    }

    fn field_element(&self, field: ContactField) -> Option<&web::Element> {
        self.fields
            .iter()
            .find_map(|(f, el)| (*f == field).then_some(el))
    }

    fn render(&self, channel: &ContactChannel) {
        let status = channel.status();
        if let Some(button) = &self.button {
            button.set_disabled(status.is_pending());
        }
        if let Some(label) = &self.label {
            label.set_text_content(Some(status.button_label()));
        }
        if let Some(el) = &self.success {
            dom::set_visible(el, status == SubmitStatus::Success);
        }
        if let Some(el) = &self.error {
            dom::set_visible(el, status == SubmitStatus::Error);
        }
        for (field, el) in &self.fields {
            set_field_value(el, channel.draft().get(*field));
        }
    }
}

/// Wire the shared contact form. `None` when the page has no form.
pub fn mount(document: &web::Document, config: DeliveryConfig) -> Option<Vec<Listener>> {
    let form = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok());
    let Some(form) = form else {
        log::warn!("[dom] #{CONTACT_FORM_ID} missing; contact form disabled");
        return None;
    };

    let delivery = Rc::new(EmailJsDelivery::new(config.endpoint.clone()));
    let channel = Rc::new(RefCell::new(ContactChannel::new(config)));
    let view = Rc::new(ContactView::locate(document));
    view.render(&channel.borrow());

    let mut listeners = Vec::new();
    for (field, el) in &view.fields {
        let field = *field;
        let channel_edit = channel.clone();
        let el_edit = el.clone();
        if let Some(l) = Listener::new(el, "input", move |_ev| {
            set_custom_validity(&el_edit, "");
            channel_edit
                .borrow_mut()
                .set_field(field, field_value(&el_edit));
        }) {
            listeners.push(l);
        }
    }

    let form_submit = form.clone();
    let on_submit = Listener::new(&form, "submit", move |ev| {
        ev.prevent_default();
        if channel.borrow().status().is_pending() {
            return;
        }
        let checked = channel.borrow().draft().validate();
        if let Err(e) = checked {
            log::warn!("[contact] {e}");
            if let Some(el) = view.field_element(e.field()) {
                set_custom_validity(el, &e.to_string());
            }
            let _ = form_submit.report_validity();
            return;
        }
        let channel = channel.clone();
        let delivery = delivery.clone();
        let view = view.clone();
        spawn_local(async move {
            let outcome = submit(&channel, delivery.as_ref(), |ch| view.render(ch)).await;
            log::info!("[contact] submit finished: {:?}", outcome);
        });
    });
    listeners.extend(on_submit);
    Some(listeners)
}
