use crate::payload;
use portfolio_core::{DeliveryError, DeliveryRequest, MessageDelivery};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Browser `fetch` client for the EmailJS send endpoint.
pub struct EmailJsDelivery {
    endpoint: String,
}

impl EmailJsDelivery {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[inline]
fn network(e: JsValue) -> DeliveryError {
    DeliveryError::Network(format!("{:?}", e))
}

impl MessageDelivery for EmailJsDelivery {
    async fn deliver(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
        let body = payload::encode(request).map_err(|e| DeliveryError::Encode(e.to_string()))?;

        let init = web::RequestInit::new();
        init.set_method("POST");
        init.set_mode(web::RequestMode::Cors);
        init.set_body(&JsValue::from_str(&body));
        let http_request =
            web::Request::new_with_str_and_init(&self.endpoint, &init).map_err(network)?;
        http_request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(network)?;

        let window = web::window().ok_or_else(|| DeliveryError::Network("no window".into()))?;
        let response: web::Response = JsFuture::from(window.fetch_with_request(&http_request))
            .await
            .map_err(network)?
            .dyn_into()
            .map_err(network)?;
        if response.ok() {
            log::info!("[emailjs] message accepted");
            return Ok(());
        }
        let status = response.status();
        let text = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        Err(DeliveryError::Rejected { status, body: text })
    }
}
