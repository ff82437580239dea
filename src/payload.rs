// EmailJS REST request body. Pure so it can be tested off-browser.
use portfolio_core::DeliveryRequest;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct EmailJsPayload<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// EmailJS calls the public key `user_id` on the wire.
    pub user_id: &'a str,
    pub template_params: &'a BTreeMap<String, String>,
}

impl<'a> From<&'a DeliveryRequest> for EmailJsPayload<'a> {
    fn from(request: &'a DeliveryRequest) -> Self {
        Self {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.public_key,
            template_params: &request.template_params,
        }
    }
}

pub fn encode(request: &DeliveryRequest) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EmailJsPayload::from(request))
}
