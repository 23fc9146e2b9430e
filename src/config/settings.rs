use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub store: StoreSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    /// Origin allowed to call the server from a browser. Unset means no CORS headers.
    #[serde(default)]
    pub cors_allow_origin: Option<String>,
    #[serde(default = "default_cors_methods")]
    pub cors_allow_methods: String,
    #[serde(default = "default_cors_headers")]
    pub cors_allow_headers: String,
}

// Default functions for CORS settings
fn default_cors_methods() -> String {
    "GET, POST, PUT, DELETE, OPTIONS".to_string()
}

fn default_cors_headers() -> String {
    "Content-Type".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    /// Directory holding one subdirectory per category.
    #[serde(default = "default_store_root")]
    pub root: PathBuf,
}

fn default_store_root() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_ROOT)
}

pub const DEFAULT_STORE_ROOT: &str = "templates/html_templates";

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(Environment::default().separator("__"))
            .set_default("application.host", "127.0.0.1")?
            .set_default("application.port", 8501)?
            .set_default("store.root", DEFAULT_STORE_ROOT)?
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_root_defaults_to_legacy_layout() {
        let settings: StoreSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.root, PathBuf::from("templates/html_templates"));
    }

    #[test]
    fn test_cors_origin_is_unset_by_default() {
        let settings: ApplicationSettings =
            serde_json::from_str(r#"{"port": 9000, "host": "0.0.0.0"}"#).unwrap();
        assert_eq!(settings.port, 9000);
        assert!(settings.cors_allow_methods.contains("DELETE"));
        assert_eq!(settings.cors_allow_origin, None);
    }
}
