use axum::http::HeaderValue;
use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Model used when `GROQ_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Everything the gateway needs, built once in `main` and shared read-only.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub common: core_config::Config,
    pub groq: GroqConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: Secret<String>,
    /// Base URL of the OpenAI-compatible API, without trailing slash.
    pub api_base: String,
    pub model: String,
    /// Upper bound on a single generation call, connect through body.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl SummarizerConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let api_key = get_env("GROQ_API_KEY", None)?;
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "GROQ_API_KEY is set but empty"
            )));
        }

        let timeout_secs = get_env("GROQ_TIMEOUT_SECS", Some(&DEFAULT_TIMEOUT_SECS.to_string()))?
            .parse::<u64>()
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("GROQ_TIMEOUT_SECS is not a number: {}", e))
            })?;

        Ok(SummarizerConfig {
            common,
            groq: GroqConfig {
                api_key: Secret::new(api_key),
                api_base: get_env("GROQ_API_BASE", Some(DEFAULT_API_BASE))?
                    .trim_end_matches('/')
                    .to_string(),
                model: get_env("GROQ_MODEL", Some(DEFAULT_MODEL))?,
                timeout_secs,
            },
            security: SecurityConfig {
                allowed_origins: validate_origins(parse_origins(&get_env(
                    "ALLOWED_ORIGINS",
                    Some(DEFAULT_ALLOWED_ORIGINS),
                )?))?,
            },
        })
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check one CORS origin. A wildcard cannot be combined with credentialed
/// requests, so it is refused like any value that is not a valid header.
pub fn parse_origin(origin: &str) -> Result<HeaderValue, String> {
    if origin.contains('*') {
        return Err(format!(
            "wildcard origin '{}' is not allowed with credentials",
            origin
        ));
    }
    origin
        .parse::<HeaderValue>()
        .map_err(|e| format!("invalid origin '{}': {}", origin, e))
}

fn validate_origins(origins: Vec<String>) -> Result<Vec<String>, AppError> {
    for origin in &origins {
        parse_origin(origin)
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("ALLOWED_ORIGINS: {}", e)))?;
    }
    Ok(origins)
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}
