use std::sync::Arc;
use std::time::Duration;
use tilescope_api::CapabilitiesService;
use tilescope_core::{CapabilitiesGateway, LoadError, LoaderConfig, SourceLoader};

/// Bootstraps the default capabilities service.
///
/// The returned service owns its memo table: keep one instance for the
/// lifetime of the application (or session) so repeated lookups of the same
/// URL share a single fetch.
pub fn build_default_gateway(config: &LoaderConfig) -> Result<Arc<dyn CapabilitiesService>, LoadError> {
    let loader = SourceLoader::new(config)?;
    tracing::debug!(
        "Capabilities gateway ready (timeout {}s, user agent {})",
        config.timeout.as_secs(),
        config.user_agent
    );
    Ok(Arc::new(CapabilitiesGateway::new(loader)))
}

/// Loader settings from the environment. A timeout given on the command line
/// wins over `TILESCOPE_HTTP_TIMEOUT_SECS`.
pub fn load_config(timeout_override: Option<Duration>) -> LoaderConfig {
    let config = LoaderConfig::from_env();
    match timeout_override {
        Some(timeout) if !timeout.is_zero() => config.with_timeout(timeout),
        _ => config,
    }
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(tilescope_core::logging::init_logging(component, to_stderr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_override() {
        let config = load_config(Some(Duration::from_secs(7)));
        assert_eq!(config.timeout, Duration::from_secs(7));

        let zero = load_config(Some(Duration::ZERO));
        assert!(!zero.timeout.is_zero());
    }

    #[test]
    fn test_default_gateway_builds() {
        let config = load_config(None).with_timeout(Duration::from_secs(3));
        assert!(build_default_gateway(&config).is_ok());
    }
}
