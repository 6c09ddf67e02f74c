use crate::services::prompt::DEFAULT_CHAR_BUDGET;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct StatementConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub transcriber: TranscriberConfig,
    pub extractor: ExtractorConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriberConfig {
    pub provider: TranscriberProvider,
    pub model: String,
    pub api_key: String,
    pub mock_response: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TranscriberProvider {
    Gemini,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
    pub backend: ExtractorBackend,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorBackend {
    Http,
    Utf8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub max_upload_bytes: usize,
    pub transcription_char_budget: usize,
}

impl StatementConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and the APP__ prefix).
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(StatementConfig {
            common: common_config,
            transcriber: TranscriberConfig {
                provider: get_env("TRANSCRIBER_PROVIDER", Some("gemini"), is_prod)?
                    .parse()
                    .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
                model: get_env("TRANSCRIBER_MODEL", Some("gemini-2.0-flash"), is_prod)?,
                api_key: get_env("GOOGLE_API_KEY", Some(""), is_prod)?,
                mock_response: env::var("TRANSCRIBER_MOCK_RESPONSE").ok(),
            },
            extractor: ExtractorConfig {
                backend: get_env("EXTRACTOR_BACKEND", Some("utf8"), is_prod)?
                    .parse()
                    .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
                url: get_env(
                    "EXTRACTOR_URL",
                    Some("http://extractor:8090/extract"),
                    is_prod,
                )?,
            },
            limits: LimitsConfig {
                max_upload_bytes: get_env(
                    "MAX_UPLOAD_BYTES",
                    Some(&DEFAULT_MAX_UPLOAD_BYTES.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
                transcription_char_budget: get_env(
                    "TRANSCRIPTION_CHAR_BUDGET",
                    Some(&DEFAULT_CHAR_BUDGET.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_CHAR_BUDGET),
            },
        })
    }
}

impl std::str::FromStr for TranscriberProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(TranscriberProvider::Gemini),
            "mock" => Ok(TranscriberProvider::Mock),
            _ => Err(format!("Invalid transcriber provider: {}", s)),
        }
    }
}

impl std::str::FromStr for ExtractorBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(ExtractorBackend::Http),
            "utf8" => Ok(ExtractorBackend::Utf8),
            _ => Err(format!("Invalid extractor backend: {}", s)),
        }
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
