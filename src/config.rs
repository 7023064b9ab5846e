use std::env;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::anyhow;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,

    /// Base URL of a hosted inference API. When unset the offline lexicon
    /// backend is used instead.
    pub sentiment_api_url: Option<String>,
    pub sentiment_api_token: Option<String>,
    pub sentiment_model: String,
    pub sentiment_timeout_secs: u64,

    pub demo_seed_enabled: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://mood_tracker.db".into()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parse_var("PORT", 5000)?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),

            sentiment_api_url: optional_var("SENTIMENT_API_URL"),
            sentiment_api_token: optional_var("SENTIMENT_API_TOKEN"),
            sentiment_model: env::var("SENTIMENT_MODEL")
                .unwrap_or_else(|_| "distilbert-base-uncased-finetuned-sst-2-english".into()),
            sentiment_timeout_secs: parse_var("SENTIMENT_TIMEOUT_SECS", 30)?,

            demo_seed_enabled: parse_var("DEMO_SEED_ENABLED", true)?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match optional_var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{key} has an invalid value {raw:?}: {e}")),
        None => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 0,
            frontend_url: "http://localhost:3000".into(),
            sentiment_api_url: None,
            sentiment_api_token: None,
            sentiment_model: "distilbert-base-uncased-finetuned-sst-2-english".into(),
            sentiment_timeout_secs: 5,
            demo_seed_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr() {
        let mut config = Config::for_tests();
        config.host = "0.0.0.0".into();
        config.port = 5000;
        assert_eq!(config.listen_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_parse_var_uses_default_when_unset() {
        let port: u16 = parse_var("MOODFLOW_TEST_UNSET_PORT", 5000).unwrap();
        assert_eq!(port, 5000);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("MOODFLOW_TEST_BAD_TIMEOUT", "soon");
        let result: anyhow::Result<u64> = parse_var("MOODFLOW_TEST_BAD_TIMEOUT", 30);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("MOODFLOW_TEST_BAD_TIMEOUT"), "unexpected error: {err}");
    }
}
