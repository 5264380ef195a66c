use crate::error::QuickPayError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A ready-to-submit quickpay form: the validated field map plus the hosted
/// payment page URL the caller's own HTTP layer should submit it to.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentForm {
    pub form: Map<String, Value>,
    pub url: String,
}

/// Decode a raw `application/x-www-form-urlencoded` notification body into
/// the field map consumed by the signature check.
///
/// YooMoney delivers payment notifications form-urlencoded; this is the
/// adapter between the caller's HTTP layer and the pure verifier.
pub fn notification_from_urlencoded(raw: &str) -> Result<BTreeMap<String, String>, QuickPayError> {
    serde_urlencoded::from_str(raw).map_err(|e| QuickPayError::InvalidNotification(e.to_string()))
}
