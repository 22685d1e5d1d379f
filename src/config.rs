/// Service configuration.
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HOST | 0.0.0.0 | bind address |
/// | PORT | 8000 | bind port |
/// | LOG_LEVEL | info | tracing level (`RUST_LOG` wins when set) |
/// | FORECAST_SEED | unset | fixed RNG seed, makes responses reproducible |
/// | WORKERS | actix default | HTTP worker count |
///
/// Values that fail to parse fall back to the default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub forecast_seed: Option<u64>,
    pub workers: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            log_level: "info".into(),
            forecast_seed: None,
            workers: None,
        }
    }
}

impl Config {
    /// Load from the process environment. Call `dotenv` before this to pick up `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            forecast_seed: lookup("FORECAST_SEED").and_then(|s| s.parse().ok()),
            workers: lookup("WORKERS")
                .and_then(|w| w.parse().ok())
                .filter(|w| *w > 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("LOG_LEVEL", "debug"),
            ("FORECAST_SEED", "7"),
            ("WORKERS", "2"),
        ]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.forecast_seed, Some(7));
        assert_eq!(config.workers, Some(2));
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = config_from(&[("PORT", "http"), ("FORECAST_SEED", "-1"), ("WORKERS", "0")]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.forecast_seed, None);
        assert_eq!(config.workers, None);
    }
}
