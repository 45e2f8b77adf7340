//! Document loaders.
//!
//! The gateway never talks to a transport directly; it goes through a
//! [`DocumentLoader`]. [`SourceLoader`] is the default, picking HTTP or the
//! local filesystem from the shape of the source string.

mod file;
mod http;

pub use file::FileLoader;
pub use http::HttpLoader;

use crate::config::LoaderConfig;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("unsupported source {0}")]
    UnsupportedScheme(String),
}

/// Fetches the raw text of a capabilities document.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self, url: &str) -> Result<String, LoadError>;
}

#[async_trait]
impl<L: DocumentLoader + ?Sized> DocumentLoader for Arc<L> {
    async fn load(&self, url: &str) -> Result<String, LoadError> {
        (**self).load(url).await
    }
}

/// Dispatches `http(s)://` sources to HTTP and everything else to the
/// filesystem.
pub struct SourceLoader {
    http: HttpLoader,
    file: FileLoader,
}

impl SourceLoader {
    pub fn new(config: &LoaderConfig) -> Result<Self, LoadError> {
        Ok(Self {
            http: HttpLoader::new(config)?,
            file: FileLoader::new(),
        })
    }
}

pub(crate) fn is_http(source: &str) -> bool {
    let lower = source.get(..8).unwrap_or(source).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[async_trait]
impl DocumentLoader for SourceLoader {
    async fn load(&self, url: &str) -> Result<String, LoadError> {
        if is_http(url) {
            self.http.load(url).await
        } else {
            self.file.load(url).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_http() {
        assert!(is_http("http://example.com/wmts"));
        assert!(is_http("HTTPS://example.com/wmts"));
        assert!(!is_http("file:///tmp/caps.xml"));
        assert!(!is_http("./caps.xml"));
        assert!(!is_http("ftp://example.com"));
    }
}
