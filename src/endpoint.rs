use crate::consts::cli_consts::DEFAULT_BASE_URL;
use reqwest::Url;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BaseUrlError {
    #[error("Invalid base URL '{input}': {reason}")]
    Invalid { input: String, reason: String },

    #[error("Unsupported scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
}

/// Root URL of the service that serves `/usage`.
#[derive(Clone, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Full URL for an endpoint below the base, keeping any path prefix on the base.
    pub fn join(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.0.as_str().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        DEFAULT_BASE_URL
            .parse()
            .expect("Default base URL must be valid")
    }
}

impl FromStr for BaseUrl {
    type Err = BaseUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(s.trim()).map_err(|e| BaseUrlError::Invalid {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(BaseUrl(url)),
            other => Err(BaseUrlError::UnsupportedScheme(other.to_string())),
        }
    }
}

impl Display for BaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.as_str().trim_end_matches('/'))
    }
}

impl Debug for BaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BaseUrl({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        assert_eq!(BaseUrl::default().join("usage"), "http://localhost:8000/usage");
    }

    #[test]
    fn join_keeps_path_prefix() {
        let base: BaseUrl = "https://billing.example.com/api/".parse().unwrap();
        assert_eq!(base.join("usage"), "https://billing.example.com/api/usage");
        assert_eq!(base.to_string(), "https://billing.example.com/api");
    }

    #[test]
    fn rejects_bad_urls() {
        assert!(matches!(
            "not a url".parse::<BaseUrl>(),
            Err(BaseUrlError::Invalid { .. })
        ));
        assert_eq!(
            "ftp://example.com".parse::<BaseUrl>(),
            Err(BaseUrlError::UnsupportedScheme("ftp".to_string()))
        );
    }
}
