use reqwest::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Where the photo API lives and who is looking at it.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub images_url: String,
    pub logged_in_user_id: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = env_or("PHOTO_API_BASE_URL", DEFAULT_API_BASE_URL);
        Self::from_parts(
            &api_base_url,
            std::env::var("PHOTO_IMAGES_URL").ok(),
            std::env::var("PHOTO_LOGGED_IN_USER_ID").ok(),
        )
    }

    fn from_parts(
        api_base_url: &str,
        images_url: Option<String>,
        logged_in_user_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        Url::parse(api_base_url).map_err(|err| ConfigError::Invalid {
            key: "PHOTO_API_BASE_URL",
            reason: err.to_string(),
        })?;

        let mut config = Self::with_base_url(api_base_url);
        if let Some(images_url) = images_url.filter(|u| !u.trim().is_empty()) {
            config.images_url = images_url.trim_end_matches('/').to_string();
        }
        config.logged_in_user_id = logged_in_user_id.filter(|id| !id.trim().is_empty());
        Ok(config)
    }

    pub fn with_base_url(api_base_url: &str) -> Self {
        let api_base_url = api_base_url.trim_end_matches('/').to_string();
        Self {
            images_url: format!("{}/images", api_base_url),
            api_base_url,
            logged_in_user_id: None,
        }
    }

    pub fn image_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.images_url, file_name)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
