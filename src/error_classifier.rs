use crate::logging::LogLevel;
use crate::source::error::UsageSourceError;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &UsageSourceError) -> LogLevel {
        match error {
            // Critical: Auth
            UsageSourceError::Http { status, .. } if *status == 401 => LogLevel::Error,
            UsageSourceError::Http { status, .. } if *status == 403 => LogLevel::Error,

            // Non-critical: Temporary server issues
            UsageSourceError::Http { status, .. } if *status == 429 => LogLevel::Warn,
            UsageSourceError::Http { status, .. } if (500..=599).contains(status) => {
                LogLevel::Warn
            }

            // Wrong endpoint or request shape
            UsageSourceError::Http { .. } => LogLevel::Error,

            // Malformed responses
            UsageSourceError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            UsageSourceError::Reqwest(_) => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> UsageSourceError {
        UsageSourceError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn classifies_http_statuses() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(401)), LogLevel::Error);
        assert_eq!(classifier.classify_fetch_error(&http(403)), LogLevel::Error);
        assert_eq!(classifier.classify_fetch_error(&http(404)), LogLevel::Error);
        assert_eq!(classifier.classify_fetch_error(&http(429)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(502)), LogLevel::Warn);
    }

    #[test]
    fn malformed_body_is_an_error() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let classifier = ErrorClassifier::default();
        assert_eq!(
            classifier.classify_fetch_error(&UsageSourceError::Decode(decode)),
            LogLevel::Error
        );
    }
}
