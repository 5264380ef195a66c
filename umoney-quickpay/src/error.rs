use thiserror::Error;

/// Errors returned by the quickpay SDK.
///
/// A failed signature check is not an error: `check_notification_signature`
/// reports it as `Ok(false)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuickPayError {
    /// A form field resolved to an empty value during form creation.
    ///
    /// Zero, `"0"` and empty collections count as empty, matching the
    /// provider's truthiness rule.
    #[error("Form parameter is empty: {0}")]
    ParamEmpty(String),

    /// A required field is absent from the notification payload. The
    /// notification should be rejected as malformed.
    #[error("Notification parameter is missing: {0}")]
    ParamMissing(String),

    /// The raw notification body could not be decoded.
    #[error("Invalid notification body: {0}")]
    InvalidNotification(String),
}

impl QuickPayError {
    /// Stable machine-readable code, matching the upstream SDK's exception
    /// identifiers.
    pub fn code(&self) -> &'static str {
        match self {
            QuickPayError::ParamEmpty(_) => "PARAM_IS_EMPTY",
            QuickPayError::ParamMissing(_) => "PARAM_IS_MISSING",
            QuickPayError::InvalidNotification(_) => "INVALID_NOTIFICATION",
        }
    }

    /// The offending field name, when the error names one.
    pub fn field(&self) -> Option<&str> {
        match self {
            QuickPayError::ParamEmpty(field) | QuickPayError::ParamMissing(field) => Some(field),
            QuickPayError::InvalidNotification(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(
            QuickPayError::ParamEmpty("sum".to_string()).code(),
            "PARAM_IS_EMPTY"
        );
        assert_eq!(
            QuickPayError::ParamMissing("label".to_string()).code(),
            "PARAM_IS_MISSING"
        );
    }

    #[test]
    fn field_accessor_names_the_offender() {
        let err = QuickPayError::ParamMissing("datetime".to_string());
        assert_eq!(err.field(), Some("datetime"));
        assert!(err.to_string().contains("datetime"));

        let err = QuickPayError::InvalidNotification("truncated".to_string());
        assert_eq!(err.field(), None);
    }
}
