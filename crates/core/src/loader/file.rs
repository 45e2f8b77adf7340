use super::{DocumentLoader, LoadError};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads capabilities documents from disk, from a plain path or a `file://` URL.
#[derive(Debug, Default)]
pub struct FileLoader {
    _private: (),
}

impl FileLoader {
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn resolve(source: &str) -> Result<PathBuf, LoadError> {
        if !source.contains("://") {
            return Ok(PathBuf::from(source));
        }
        url::Url::parse(source)
            .ok()
            .filter(|url| url.scheme() == "file")
            .and_then(|url| url.to_file_path().ok())
            .ok_or_else(|| LoadError::UnsupportedScheme(source.to_string()))
    }
}

#[async_trait]
impl DocumentLoader for FileLoader {
    async fn load(&self, url: &str) -> Result<String, LoadError> {
        let path = Self::resolve(url)?;
        tracing::debug!("Reading {}", path.display());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LoadError::Io { path, source })
    }
}
