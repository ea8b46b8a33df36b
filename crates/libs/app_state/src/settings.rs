use serde::Deserialize;

/// Runtime settings for the whole application.
///
/// Loaded once at startup from `config/settings.yaml` plus `APP__`-prefixed
/// environment overrides; see [`crate::load_app_settings`].
#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub secrets: SecretSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub rate_limiting: RateLimitingSettings,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            allowed_origins: vec![],
            rate_limiting: RateLimitingSettings::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RateLimitingSettings {
    pub req_per_second: u64,
    pub burst_size: u32,
}

impl Default for RateLimitingSettings {
    fn default() -> Self {
        Self {
            req_per_second: 2,
            burst_size: 10,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SecretSettings {
    pub database_url: String,
    pub jwt: String,
}

impl Default for SecretSettings {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/postgres".to_owned(),
            jwt: String::new(),
        }
    }
}
