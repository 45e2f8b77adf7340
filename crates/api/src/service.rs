use crate::error::CapabilitiesResult;
use crate::models::CapabilitiesDocument;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of parsed capabilities documents.
///
/// Implementations memoize per URL: repeated and concurrent requests for the
/// same URL observe the same document instance.
#[async_trait]
pub trait CapabilitiesService: Send + Sync {
    /// Fetch and parse the capabilities document at `url`.
    async fn fetch_capabilities(&self, url: &str) -> CapabilitiesResult<Arc<CapabilitiesDocument>>;
}
