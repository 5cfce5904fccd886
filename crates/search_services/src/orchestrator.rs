use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use places::{MapBounds, Place, PlaceType};
use tracing::{debug, warn};

use crate::types::{SearchError, SearchRequest};

/// Trait for search providers (HTTP backend, test mocks)
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Runs the query and returns the matching places in provider order.
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Place>, SearchError>;
}

/// Issues searches against the provider and enforces that only the most
/// recently issued search can be applied.
///
/// Every call takes a sequence number from a monotonically increasing
/// counter before suspending on the provider. After the response arrives,
/// it is applied only if its number still equals the highest issued;
/// otherwise a newer search has been issued in the meantime and the
/// response is discarded, even if it arrived last. Nothing is physically
/// cancelled; superseded work simply has its effects ignored.
pub struct SearchOrchestrator {
    provider: Arc<dyn SearchProvider>,
    issued: AtomicU64,
}

impl SearchOrchestrator {
    /// Creates an orchestrator backed by the given provider.
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            provider,
            issued: AtomicU64::new(0),
        }
    }

    /// Runs a search and returns the places to apply.
    ///
    /// Returns `None` when the response was superseded by a newer search and
    /// must be discarded. A provider failure is recoverable: it degrades to
    /// an empty result (with a warning) so the UI shows no candidates rather
    /// than crashing, and previously selected places are untouched.
    pub async fn run_search(
        &self,
        text: &str,
        place_type: PlaceType,
        bounds: Option<MapBounds>,
    ) -> Option<Vec<Place>> {
        let request = SearchRequest::new(text, place_type, bounds);
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        debug!(seq, text, ?place_type, filtered = request.bounds.is_some(), "Issuing search");

        let outcome = self.provider.search(&request).await;

        if self.issued.load(Ordering::SeqCst) != seq {
            debug!(seq, "Discarding superseded search response");
            return None;
        }

        match outcome {
            Ok(places) => {
                debug!(seq, count = places.len(), "Applying search results");
                Some(places)
            }
            Err(e) => {
                warn!(seq, error = %e, "Search failed, degrading to empty result");
                Some(Vec::new())
            }
        }
    }

    /// Number of searches issued so far.
    pub fn issued_count(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}
