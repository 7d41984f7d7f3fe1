/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tonearm_catalog::CatalogConfig;
use tonearm_core::StreamQuality;
use tonearm_session::{FailurePolicy, SessionConfig, StopPolicy};

/// Config file looked up in the working directory when no path is given
const DEFAULT_CONFIG_NAME: &str = "tonearm";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_catalog")]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionSettings {
    /// Voice applications allowed to drive the session; empty allows all
    #[serde(default)]
    pub application_ids: Vec<String>,

    #[serde(default)]
    pub stop_policy: StopPolicy,

    #[serde(default)]
    pub failure_policy: FailurePolicy,

    #[serde(default)]
    pub quality: StreamQuality,
}

impl SessionSettings {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            stop_policy: self.stop_policy,
            failure_policy: self.failure_policy,
            quality: self.quality,
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `tonearm.toml` in the
    /// working directory is used when present. Environment variables
    /// prefixed with `TONEARM_` override both, with `__` between sections
    /// (e.g. `TONEARM_CATALOG__URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(config::File::from(path).required(true)),
            None => settings.add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        settings = settings.add_source(
            config::Environment::with_prefix("TONEARM")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("session.application_ids")
                .try_parsing(true),
        );

        let config = settings.build()?;

        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.catalog.url.trim().is_empty() {
            return Err(ServerError::Config(
                "Catalog URL is required (set TONEARM_CATALOG__URL)".to_string(),
            ));
        }

        if self.catalog.username.is_empty() != self.catalog.password.is_empty() {
            return Err(ServerError::Config(
                "Catalog username and password must be set together".to_string(),
            ));
        }

        if self.server.host.parse::<std::net::IpAddr>().is_err() {
            return Err(ServerError::Config(format!(
                "Invalid listen address: {}",
                self.server.host
            )));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_catalog() -> CatalogConfig {
    CatalogConfig::new("")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            catalog: default_catalog(),
            session: SessionSettings::default(),
        }
    }
}
