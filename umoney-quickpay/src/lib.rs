//! YooMoney ("ЮMoney") quickpay SDK.
//!
//! Two responsibilities, both pure and synchronous: build the field set and
//! redirect URL for the hosted payment button, and verify the keyed-hash
//! signature of asynchronous payment notifications. Transport, rendering and
//! secret storage stay with the caller.
//!
//! ```
//! use serde_json::{json, Map, Value};
//! use umoney_quickpay::{QuickPayClient, QuickPayConfig, PAY_URL};
//!
//! let client = QuickPayClient::new(QuickPayConfig::new("SECRET"));
//!
//! let data: Map<String, Value> = json!({
//!     "receiver": "410011161616877",
//!     "quickpay-form": "shop",
//!     "paymentType": "SB",
//!     "targets": "Order 37",
//!     "sum": "100.50",
//! })
//! .as_object()
//! .cloned()
//! .unwrap();
//!
//! let result = client.create_form(&data).unwrap();
//! assert_eq!(result.url, PAY_URL);
//! ```

pub mod config;
pub mod dtos;
pub mod error;
pub mod services;

pub use config::{QuickPayConfig, SignatureAlgorithm, DEFAULT_SEPARATOR};
pub use dtos::{notification_from_urlencoded, PaymentForm};
pub use error::QuickPayError;
pub use services::quickpay::{NOTIFICATION_FIELDS, PAY_URL, REQUIRED_FORM_FIELDS};
pub use services::QuickPayClient;
