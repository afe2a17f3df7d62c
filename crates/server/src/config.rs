use std::collections::HashMap;

use galxe_integration::DEFAULT_GRAPHQL_ENDPOINT;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub galxe_endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "0.0.0.0:8080".into(),
            galxe_endpoint: DEFAULT_GRAPHQL_ENDPOINT.into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = std::fs::read_to_string("server.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("galxe_endpoint") {
                settings.galxe_endpoint = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("PORT") {
        if !v.is_empty() {
            settings.server_bind = format!("0.0.0.0:{v}");
        }
    }
    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }

    if let Ok(v) = std::env::var("GALXE_GRAPHQL_URL") {
        settings.galxe_endpoint = v;
    }

    settings
}
