//! Single-flight, per-URL memoizing capabilities fetcher.
//!
//! Each distinct URL maps to one shared fetch future. Callers arriving while a
//! fetch is pending attach to it; callers arriving after it succeeded replay
//! the stored document. A fetch that fails removes its own entry before it
//! resolves, so the next request for that URL loads again.

use crate::capabilities;
use crate::loader::DocumentLoader;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::sync::Arc;
use tilescope_api::models::CapabilitiesDocument;
use tilescope_api::{CapabilitiesError, CapabilitiesResult, CapabilitiesService};

type SharedFetch = Shared<BoxFuture<'static, CapabilitiesResult<Arc<CapabilitiesDocument>>>>;

pub struct CapabilitiesGateway<L> {
    loader: Arc<L>,
    memo: Arc<DashMap<String, SharedFetch>>,
}

impl<L> CapabilitiesGateway<L>
where
    L: DocumentLoader + 'static,
{
    pub fn new(loader: L) -> Self {
        Self {
            loader: Arc::new(loader),
            memo: Arc::new(DashMap::new()),
        }
    }

    pub async fn fetch_capabilities(&self, url: &str) -> CapabilitiesResult<Arc<CapabilitiesDocument>> {
        // The entry API holds the shard lock across check-then-insert, so two
        // racing callers cannot both start a load.
        let fetch = match self.memo.entry(url.to_string()) {
            Entry::Occupied(entry) => {
                tracing::debug!("Reusing capabilities fetch for {}", url);
                entry.get().clone()
            }
            Entry::Vacant(entry) => entry.insert(self.start_fetch(url)).clone(),
        };
        fetch.await
    }

    /// Number of URLs with a pending or completed fetch.
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.memo.contains_key(url)
    }

    fn start_fetch(&self, url: &str) -> SharedFetch {
        let loader = Arc::clone(&self.loader);
        let memo = Arc::clone(&self.memo);
        let url = url.to_string();

        async move {
            let result = fetch_document(loader.as_ref(), &url).await;
            if let Err(e) = &result {
                tracing::warn!("Capabilities fetch failed: {}", e);
                // Only this future can occupy the entry while it is pending.
                memo.remove(&url);
            }
            result
        }
        .boxed()
        .shared()
    }
}

async fn fetch_document<L: DocumentLoader + ?Sized>(
    loader: &L,
    url: &str,
) -> CapabilitiesResult<Arc<CapabilitiesDocument>> {
    tracing::info!("Fetching capabilities from {}", url);
    let text = loader
        .load(url)
        .await
        .map_err(|e| CapabilitiesError::network(url, e))?;
    let document = capabilities::parse_capabilities(url, &text)?;
    tracing::info!(
        "Loaded capabilities from {}: {} layers, {} tile matrix sets",
        url,
        document.layers().len(),
        document.tile_matrix_sets().len()
    );
    Ok(Arc::new(document))
}

#[async_trait]
impl<L> CapabilitiesService for CapabilitiesGateway<L>
where
    L: DocumentLoader + 'static,
{
    async fn fetch_capabilities(&self, url: &str) -> CapabilitiesResult<Arc<CapabilitiesDocument>> {
        CapabilitiesGateway::fetch_capabilities(self, url).await
    }
}
