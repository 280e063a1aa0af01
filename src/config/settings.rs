// Service settings, loaded from environment variables with sane defaults.
// The response constants (email, exam) live here rather than in the handler
// so they are injected state, not module-level globals.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceSettings {
    pub host: String,
    pub port: u16,
    pub email: String,
    pub exam: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        ServiceSettings {
            host: "0.0.0.0".to_string(),
            port: 8000,
            email: "example@domain.com".to_string(),
            exam: "tds-2025-05-roe".to_string(),
        }
    }
}

impl ServiceSettings {
    // Environment variables override the defaults; anything unset or
    // unparsable falls back to the default value.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        ServiceSettings {
            host: std::env::var("ANALYZER_HOST").unwrap_or(defaults.host),
            port: std::env::var("ANALYZER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            email: std::env::var("ANALYZER_EMAIL").unwrap_or(defaults.email),
            exam: std::env::var("ANALYZER_EXAM").unwrap_or(defaults.exam),
        }
    }
}
