//! API endpoint configuration

use crate::error::ConfigurationError;

/// Backend used when no override is compiled in
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const LOGIN_PATH: &str = "/login/";
pub const SIGNUP_PATH: &str = "/seller-register/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Validates and normalizes `base_url`; trailing slashes are dropped.
    ///
    /// # Errors
    /// [`ConfigurationError::InvalidBaseUrl`] for blank or non-http(s) URLs.
    pub fn new(base_url: &str) -> Result<Self, ConfigurationError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
        if !has_host {
            return Err(ConfigurationError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Uses `value` when present, the default otherwise.
    pub fn from_override(value: Option<&str>) -> Result<Self, ConfigurationError> {
        match value {
            Some(url) => Self::new(url),
            None => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL with exactly one slash between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn login_url(&self) -> String {
        self.endpoint(LOGIN_PATH)
    }

    pub fn signup_url(&self) -> String {
        self.endpoint(SIGNUP_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:8000/api", "http://localhost:8000/api")]
    #[case("https://api.blinkbuy.com/", "https://api.blinkbuy.com")]
    #[case("  https://api.blinkbuy.com/v1// ", "https://api.blinkbuy.com/v1")]
    fn normalizes_base_url(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(ApiConfig::new(input).unwrap().base_url(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("ftp://files.example.com")]
    #[case("http://")]
    #[case("localhost:8000")]
    fn rejects_invalid_base_url(#[case] input: &str) {
        assert_eq!(
            ApiConfig::new(input),
            Err(ConfigurationError::InvalidBaseUrl(input.to_string()))
        );
    }

    #[test]
    fn default_endpoints() {
        let config = ApiConfig::default();
        assert_eq!(config.login_url(), "http://localhost:8000/api/login/");
        assert_eq!(config.signup_url(), "http://localhost:8000/api/seller-register/");
    }

    #[test]
    fn override_wins_over_default() {
        let config = ApiConfig::from_override(Some("https://shop.example.com/api/")).unwrap();
        assert_eq!(config.login_url(), "https://shop.example.com/api/login/");
        assert_eq!(ApiConfig::from_override(None).unwrap(), ApiConfig::default());
    }
}
