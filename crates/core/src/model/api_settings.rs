use std::fmt;
use thiserror::Error;
use url::Url;

/// Default chat-completions endpoint (DeepSeek-compatible).
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
/// Default model requested from the endpoint.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Connection settings for the chat relay.
///
/// The key is pasted by the user for the session; it is never logged and
/// never persisted to disk.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSettings {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
}

#[derive(Clone, Default)]
pub struct ApiSettingsDraft {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

impl fmt::Debug for ApiSettingsDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSettingsDraft")
            .field("api_key_set", &self.api_key.is_some())
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiSettingsError {
    #[error("invalid base URL")]
    InvalidBaseUrl,
}

impl ApiSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft.
    ///
    /// # Errors
    ///
    /// Returns `ApiSettingsError::InvalidBaseUrl` if a base URL is present
    /// but does not parse.
    pub fn validate(self) -> Result<ApiSettings, ApiSettingsError> {
        let api_key = normalize_optional(self.api_key);
        let base_url = normalize_optional(self.base_url);
        let model = normalize_optional(self.model);

        if let Some(url) = base_url.as_ref() {
            if Url::parse(url).is_err() {
                return Err(ApiSettingsError::InvalidBaseUrl);
            }
        }

        Ok(ApiSettings {
            api_key,
            base_url,
            model,
        })
    }
}

impl ApiSettings {
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The configured base URL, falling back to the DeepSeek default.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// The configured model, falling back to the default.
    #[must_use]
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: None,
        }
    }
}

// The key must not surface in logs or debug dumps.
impl fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSettings")
            .field("api_key_set", &self.api_key.is_some())
            .field("base_url", &self.base_url())
            .field("model", &self.model())
            .finish()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let settings = ApiSettingsDraft::new().validate().unwrap();
        assert_eq!(settings.api_key(), None);
        assert_eq!(settings.base_url(), DEFAULT_BASE_URL);
        assert_eq!(settings.model(), DEFAULT_MODEL);
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let settings = ApiSettingsDraft {
            api_key: Some("   ".to_string()),
            ..ApiSettingsDraft::new()
        }
        .validate()
        .unwrap();
        assert_eq!(settings.api_key(), None);
    }

    #[test]
    fn rejects_malformed_base_url() {
        let err = ApiSettingsDraft {
            base_url: Some("not a url".to_string()),
            ..ApiSettingsDraft::new()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ApiSettingsError::InvalidBaseUrl));
    }

    #[test]
    fn debug_never_shows_the_key() {
        let settings = ApiSettingsDraft {
            api_key: Some("sk-demo-123".to_string()),
            ..ApiSettingsDraft::new()
        }
        .validate()
        .unwrap();
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("sk-demo-123"));
    }
}
