use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::collections::HashMap;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

const DEMO_COLLECTION_API_URL: &str = "https://jsonserver-1-etxz.onrender.com";
const DEMO_EMAIL_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Environment variables holding full per-collection URLs.
const COLLECTION_OVERRIDES: [(&str, &str); 5] = [
    ("candidates", "CANDIDATES_API_URL"),
    ("assessments", "ASSESSMENTS_API_URL"),
    ("evaluations", "EVALUATIONS_API_URL"),
    ("interviewSchedules", "INTERVIEW_SCHEDULES_API_URL"),
    ("offerTemplates", "OFFER_TEMPLATES_API_URL"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionBackendKind {
    Http,
    Memory,
}

#[derive(Debug, Clone)]
pub struct CollectionConfig {
    pub backend: CollectionBackendKind,
    pub base_url: Url,
    /// Collection name to full collection URL.
    pub overrides: HashMap<String, Url>,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub api_url: Url,
    pub user_id: String,
    pub service_id: String,
    pub interview_template_id: String,
    pub offer_template_id: String,
    pub interview_location: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub collections: CollectionConfig,
    pub email: EmailConfig,
    pub identity_token_secret: String,
    pub log_json: bool,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let backend = match get_env_or("COLLECTION_BACKEND", "http").to_lowercase().as_str() {
            "http" => CollectionBackendKind::Http,
            "memory" => CollectionBackendKind::Memory,
            other => {
                return Err(Error::Config(format!(
                    "Invalid value for COLLECTION_BACKEND: {}",
                    other
                )))
            }
        };

        let mut overrides = HashMap::new();
        for (collection, var) in COLLECTION_OVERRIDES {
            if let Ok(raw) = env::var(var) {
                if !raw.trim().is_empty() {
                    overrides.insert(collection.to_string(), parse_url(var, &raw)?);
                }
            }
        }

        let timeout_secs: u64 = get_env_parse_or("REQUEST_TIMEOUT_SECS", 60)?;

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "127.0.0.1:8080"),
            collections: CollectionConfig {
                backend,
                base_url: parse_url(
                    "COLLECTION_API_URL",
                    &get_env_or("COLLECTION_API_URL", DEMO_COLLECTION_API_URL),
                )?,
                overrides,
                request_timeout: Duration::from_secs(timeout_secs),
            },
            email: EmailConfig {
                api_url: parse_url("EMAIL_API_URL", &get_env_or("EMAIL_API_URL", DEMO_EMAIL_API_URL))?,
                user_id: get_env_or("EMAILJS_USER_ID", "demo_user_id"),
                service_id: get_env_or("EMAILJS_SERVICE_ID", "demo_service"),
                interview_template_id: get_env_or("EMAILJS_INTERVIEW_TEMPLATE_ID", "demo_template"),
                offer_template_id: get_env_or("EMAILJS_OFFER_TEMPLATE_ID", "demo_template"),
                interview_location: get_env_or("INTERVIEW_LOCATION", "Company Office"),
            },
            identity_token_secret: get_env_or("IDENTITY_TOKEN_SECRET", "demo_identity_secret"),
            log_json: get_env_or("LOG_FORMAT", "text").eq_ignore_ascii_case("json"),
        })
    }
}

/// Reads a variable, falling back to the demo value when unset or blank.
fn get_env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

fn parse_url(name: &str, raw: &str) -> Result<Url> {
    Url::parse(raw.trim()).map_err(|e| Error::Config(format!("Invalid URL in {}: {}", name, e)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
