use std::time::Duration;

pub const ENV_HTTP_TIMEOUT_SECS: &str = "TILESCOPE_HTTP_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "TILESCOPE_USER_AGENT";

/// Transport settings for document loaders.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("tilescope/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl LoaderConfig {
    /// Defaults overridden by `TILESCOPE_HTTP_TIMEOUT_SECS` and
    /// `TILESCOPE_USER_AGENT` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!(
                    "Ignoring invalid {}={:?}; using {}s",
                    ENV_HTTP_TIMEOUT_SECS,
                    raw,
                    config.timeout.as_secs()
                ),
            }
        }

        if let Some(agent) = lookup(ENV_USER_AGENT).filter(|a| !a.trim().is_empty()) {
            config.user_agent = agent;
        }

        config
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let config = LoaderConfig::from_lookup(lookup(&[
            (ENV_HTTP_TIMEOUT_SECS, "5"),
            (ENV_USER_AGENT, "catalog-bot/2"),
        ]));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "catalog-bot/2");
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = LoaderConfig::from_lookup(lookup(&[
            (ENV_HTTP_TIMEOUT_SECS, "soon"),
            (ENV_USER_AGENT, "  "),
        ]));
        assert_eq!(config, LoaderConfig::default());

        let zero = LoaderConfig::from_lookup(lookup(&[(ENV_HTTP_TIMEOUT_SECS, "0")]));
        assert_eq!(zero.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_with_timeout_overrides_env_value() {
        let config = LoaderConfig::from_lookup(lookup(&[(ENV_HTTP_TIMEOUT_SECS, "5")]))
            .with_timeout(Duration::from_secs(12));
        assert_eq!(config.timeout, Duration::from_secs(12));
        assert_eq!(config.user_agent, LoaderConfig::default().user_agent);
    }
}
