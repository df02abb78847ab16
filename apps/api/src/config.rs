use anyhow::{Context, Result};

/// Application configuration loaded from environment variables once at startup.
///
/// The Gemini key is optional here: a deployment without it still boots and
/// answers script requests with a configuration error.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Empty values are treated the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_unset_is_none() {
        assert_eq!(optional_env("OUTREACH_TEST_SURELY_UNSET_VARIABLE"), None);
    }

    #[test]
    fn test_optional_env_blank_is_none() {
        std::env::set_var("OUTREACH_TEST_BLANK_VARIABLE", "   ");
        assert_eq!(optional_env("OUTREACH_TEST_BLANK_VARIABLE"), None);
    }

    #[test]
    fn test_optional_env_trims_value() {
        std::env::set_var("OUTREACH_TEST_KEY_VARIABLE", " abc123 \n");
        assert_eq!(
            optional_env("OUTREACH_TEST_KEY_VARIABLE"),
            Some("abc123".to_string())
        );
    }
}
