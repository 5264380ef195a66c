//! YooMoney quickpay provider client.
//!
//! Builds redirect forms for the hosted payment page and verifies the
//! keyed-hash signature of asynchronous payment notifications.

use crate::config::{QuickPayConfig, SignatureAlgorithm};
use crate::dtos::PaymentForm;
use crate::error::QuickPayError;
use md5::Md5;
use rust_decimal::{Decimal, RoundingStrategy};
use secrecy::ExposeSecret;
use serde_json::{Map, Value};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use std::collections::BTreeMap;

/// The hosted payment page endpoint. The produced form is POSTed here by
/// the caller; this crate never performs the request itself.
pub const PAY_URL: &str = "https://yoomoney.ru/quickpay/confirm.xml";

/// Fields every quickpay form must carry, in template order.
pub const REQUIRED_FORM_FIELDS: [&str; 5] =
    ["receiver", "quickpay-form", "paymentType", "targets", "sum"];

/// Canonical notification field order. The provider signs the values joined
/// in exactly this order; reordering breaks every signature.
pub const NOTIFICATION_FIELDS: [&str; 9] = [
    "notification_type",
    "operation_id",
    "amount",
    "currency",
    "datetime",
    "sender",
    "codepro",
    "notification_secret",
    "label",
];

const NOTIFICATION_SECRET_FIELD: &str = "notification_secret";
const AMOUNT_FIELD: &str = "amount";

/// Client for the YooMoney quickpay button flow.
///
/// Immutable after construction; safe to share across threads.
#[derive(Clone)]
pub struct QuickPayClient {
    config: QuickPayConfig,
}

impl QuickPayClient {
    pub fn new(config: QuickPayConfig) -> Self {
        Self { config }
    }

    /// Build the redirect form for the hosted payment page.
    ///
    /// Caller fields are overlaid onto a template of the required fields
    /// (nested objects merge recursively, caller values win), then every
    /// field of the merged form must be non-empty.
    ///
    /// KNOWN QUIRK: emptiness follows PHP truthiness, so `0`, `"0"`, `false`
    /// and empty collections are all rejected — including a legitimately
    /// zero-valued field. Deployments rely on this, so it is preserved.
    pub fn create_form(&self, data: &Map<String, Value>) -> Result<PaymentForm, QuickPayError> {
        let mut form = Map::new();
        for key in REQUIRED_FORM_FIELDS {
            form.insert(key.to_string(), Value::Null);
        }
        merge_values(&mut form, data);

        // Template fields are validated first, in template order, then any
        // caller-introduced extras.
        for key in REQUIRED_FORM_FIELDS {
            let empty = form.get(key).map(is_empty_value).unwrap_or(true);
            if empty {
                return Err(QuickPayError::ParamEmpty(key.to_string()));
            }
        }
        for (key, value) in &form {
            if !REQUIRED_FORM_FIELDS.contains(&key.as_str()) && is_empty_value(value) {
                return Err(QuickPayError::ParamEmpty(key.clone()));
            }
        }

        // Union with the caller's non-empty fields. The overlay above already
        // carried them over; kept to mirror the provider SDK's final
        // `form += filter(data)` step.
        for (key, value) in data {
            if !is_empty_value(value) {
                form.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }

        Ok(PaymentForm {
            form,
            url: PAY_URL.to_string(),
        })
    }

    /// Verify a payment notification's signature.
    ///
    /// The digest is recomputed over the notification fields joined with the
    /// configured separator in the canonical order, with `notification_secret`
    /// taken from the stored secret key — never from the payload, so a forged
    /// notification cannot supply its own secret.
    ///
    /// Returns `Ok(false)` on mismatch; `Err(ParamMissing)` when the payload
    /// lacks a required field.
    pub fn check_notification_signature(
        &self,
        signature: &str,
        body: &BTreeMap<String, String>,
    ) -> Result<bool, QuickPayError> {
        let mut values: Vec<String> = Vec::with_capacity(NOTIFICATION_FIELDS.len());
        for key in NOTIFICATION_FIELDS {
            if key == NOTIFICATION_SECRET_FIELD {
                values.push(self.config.secret_key.expose_secret().clone());
                continue;
            }

            let value = body
                .get(key)
                .ok_or_else(|| QuickPayError::ParamMissing(key.to_string()))?;

            if key == AMOUNT_FIELD {
                values.push(normalize_amount(value));
            } else {
                values.push(value.clone());
            }
        }

        let payload = values.join(&self.config.separator);
        let is_valid = self.compute_signature(&payload) == signature;

        if is_valid {
            tracing::debug!(
                operation_id = %body["operation_id"],
                "notification signature verified"
            );
        } else {
            tracing::warn!(
                operation_id = %body["operation_id"],
                "notification signature mismatch"
            );
        }

        Ok(is_valid)
    }

    /// Hex digest of the canonical string under the configured algorithm.
    fn compute_signature(&self, payload: &str) -> String {
        match self.config.algorithm {
            SignatureAlgorithm::Sha1 => hex::encode(Sha1::digest(payload.as_bytes())),
            SignatureAlgorithm::Sha256 => hex::encode(Sha256::digest(payload.as_bytes())),
            SignatureAlgorithm::Md5 => hex::encode(Md5::digest(payload.as_bytes())),
        }
    }
}

/// Canonicalize an amount the way the provider does before signing: exact
/// decimal parse (garbage counts as zero), round half toward zero at two
/// decimals, always two fractional digits.
///
/// The rounding is decimal round-half-down, never binary-float rounding:
/// `1.005 → "1.00"`, `1.015 → "1.01"`, `1.545 → "1.54"`.
fn normalize_amount(raw: &str) -> String {
    let amount: Decimal = raw.trim().parse().unwrap_or_default();
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointTowardZero);
    format!("{:.2}", rounded)
}

/// PHP-style truthiness: `null`, `false`, numeric zero, `""`, `"0"` and
/// empty collections all count as empty.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Overlay `incoming` onto `base`, caller values winning. Nested objects
/// merge recursively, everything else replaces wholesale.
fn merge_values(base: &mut Map<String, Value>, incoming: &Map<String, Value>) {
    for (key, value) in incoming {
        match (base.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(new)) => merge_values(existing, new),
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}
