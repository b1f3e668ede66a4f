use thiserror::Error;

pub const DEFAULT_RELAY_URL: &str = "https://api.web3forms.com/submit";
pub const DEFAULT_RECIPIENT: &str = "codewithrahul23@gmail.com";
pub const DEFAULT_GITHUB_USER: &str = "Bunnyvalluri";
const PLACEHOLDER_ACCESS_KEY: &str = "YOUR_WEB3FORMS_ACCESS_KEY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Server-side settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub access_key: String,
    pub relay_url: String,
    pub recipient: String,
    pub github_username: String,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let access_key =
            get("WEB3FORMS_ACCESS_KEY").unwrap_or_else(|| PLACEHOLDER_ACCESS_KEY.to_string());
        let relay_url = get("CONTACT_RELAY_URL").unwrap_or_else(|| DEFAULT_RELAY_URL.to_string());
        if !(relay_url.starts_with("https://") || relay_url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl {
                var: "CONTACT_RELAY_URL",
                value: relay_url,
            });
        }

        Ok(Self {
            access_key,
            relay_url,
            recipient: get("CONTACT_RECIPIENT").unwrap_or_else(|| DEFAULT_RECIPIENT.to_string()),
            github_username: get("GITHUB_USERNAME")
                .unwrap_or_else(|| DEFAULT_GITHUB_USER.to_string()),
        })
    }

    /// False while the relay key is still the placeholder; the relay will
    /// reject every submission until it is set.
    pub fn has_access_key(&self) -> bool {
        self.access_key != PLACEHOLDER_ACCESS_KEY
    }
}
