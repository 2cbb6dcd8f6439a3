use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub engine: EngineConfig,
    pub frontend: FrontendConfig,
}

/// Where the external workflow engine lives and how long each relayed
/// operation may take. The engine performs all actual content generation;
/// the timeouts reflect how expensive each webhook is on its side.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub base_url: String,
    pub generate_timeout: Duration,
    pub status_timeout: Duration,
    pub download_timeout: Duration,
}

impl EngineConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            generate_timeout: Duration::from_secs(10),
            status_timeout: Duration::from_secs(5),
            download_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Origin allowed by CORS, i.e. where the form UI is served from.
    pub allowed_origin: String,
    /// Directory holding the built form UI, served as a SPA fallback.
    pub static_dir: String,
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(RelayConfig {
            common,
            engine: EngineConfig::new(get_env(
                "ENGINE_BASE_URL",
                Some("http://localhost:5678"),
                is_prod,
            )?),
            frontend: FrontendConfig {
                allowed_origin: get_env(
                    "FRONTEND_ORIGIN",
                    Some("http://localhost:3000"),
                    is_prod,
                )?,
                static_dir: get_env("STATIC_DIR", Some("public"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
