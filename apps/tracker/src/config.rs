use std::{env::var, time::Duration};

use anyhow::{Context, Result, ensure};
use stock::DEFAULT_BASE_API;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub quote_api: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let quote_api = get("QUOTE_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_API.to_string());

        let timeout_secs = match get("QUOTE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("QUOTE_TIMEOUT_SECS is not a number: {raw:?}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        ensure!(timeout_secs > 0, "QUOTE_TIMEOUT_SECS must be positive");

        Ok(Self {
            quote_api,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.quote_api, DEFAULT_BASE_API);
        assert_eq!(cfg.timeout, Duration::from_secs(10));
    }

    #[test]
    fn overrides() {
        let cfg = config(&[
            ("QUOTE_API_BASE_URL", "http://localhost:8080/quotes.csv"),
            ("QUOTE_TIMEOUT_SECS", " 3 "),
        ])
        .unwrap();
        assert_eq!(cfg.quote_api, "http://localhost:8080/quotes.csv");
        assert_eq!(cfg.timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_bad_timeout() {
        assert!(config(&[("QUOTE_TIMEOUT_SECS", "soon")]).is_err());
        assert!(config(&[("QUOTE_TIMEOUT_SECS", "0")]).is_err());
    }
}
