use std::sync::Arc;

/// Failure of a capabilities fetch.
///
/// The enum is `Clone` so that a single in-flight failure can be handed to
/// every caller that attached to the same fetch.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CapabilitiesError {
    #[error("Invalid capabilities: the document at {url} has no ServiceIdentification section")]
    InvalidCapabilities { url: String },
    #[error("Network error while loading {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
    #[error("Malformed capabilities XML at {url}: {message}")]
    MalformedXml { url: String, message: String },
}

impl CapabilitiesError {
    pub fn network(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        CapabilitiesError::Network {
            url: url.into(),
            source: Arc::new(source),
        }
    }

    /// The URL whose fetch failed.
    pub fn url(&self) -> &str {
        match self {
            CapabilitiesError::InvalidCapabilities { url }
            | CapabilitiesError::Network { url, .. }
            | CapabilitiesError::MalformedXml { url, .. } => url,
        }
    }
}

pub type CapabilitiesResult<T> = std::result::Result<T, CapabilitiesError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_capabilities_message_names_url() {
        let err = CapabilitiesError::InvalidCapabilities {
            url: "https://example.com/wmts".to_string(),
        };
        assert!(err.to_string().contains("https://example.com/wmts"));
        assert_eq!(err.url(), "https://example.com/wmts");
    }

    #[test]
    fn test_network_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = CapabilitiesError::network("https://example.com/wmts", io);

        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("refused"));

        let CapabilitiesError::Network { source, .. } = &err else {
            panic!("expected a network error");
        };
        let io = source
            .downcast_ref::<std::io::Error>()
            .expect("source keeps its concrete type");
        assert_eq!(io.kind(), std::io::ErrorKind::ConnectionRefused);
    }
}
