//! Message-delivery collaborator seam.
//!
//! The contact channel only knows how to package a [`DeliveryRequest`] and
//! await a [`MessageDelivery`]. The browser build plugs in the EmailJS REST
//! client; tests plug in fakes.

use crate::config::DeliveryConfig;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// One outbound message: service routing plus named template fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub template_params: BTreeMap<String, String>,
}

impl DeliveryRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.template_params.get(key).map(String::as_str)
    }

    pub(crate) fn from_config(config: &DeliveryConfig, params: BTreeMap<String, String>) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            template_params: params,
        }
    }
}

/// Opaque remote call. Single-threaded callers only, so the returned future
/// is not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait MessageDelivery {
    async fn deliver(&self, request: &DeliveryRequest) -> Result<(), DeliveryError>;
}
