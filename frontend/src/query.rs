use leptos::{logging::error, prelude::*};
use shared::{DehydratedState, Query, QueryCache};

/// Reactive wrapper around [`QueryCache`], shared through context.
///
/// On the server it only serves the prefetched snapshot. In the browser every
/// `query` also refetches in the background, so the snapshot is the initial
/// value and live results replace it once they land.
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: RwSignal<QueryCache>,
}

impl QueryClient {
    pub fn from_snapshot(state: &DehydratedState) -> Self {
        Self {
            cache: RwSignal::new(QueryCache::from_snapshot(state)),
        }
    }

    pub fn expect() -> Self {
        expect_context::<QueryClient>()
    }

    pub fn query<Q: Query + 'static>(&self) -> Signal<Option<Q::Output>> {
        #[cfg(feature = "csr")]
        self.refetch::<Q>();
        let cache = self.cache;
        Signal::derive(move || {
            cache.with(|c| {
                c.get::<Q>().unwrap_or_else(|e| {
                    error!("Cached {} does not decode: {}", Q::key(), e);
                    None
                })
            })
        })
    }

    /// True while the query has no data or was invalidated and the refetch has
    /// not landed yet.
    pub fn is_stale<Q: Query + 'static>(&self) -> bool {
        self.cache.with(|c| c.is_stale(Q::key()))
    }

    /// Marks the query stale and fetches it again. Cached data stays visible
    /// until the new result arrives.
    pub fn invalidate<Q: Query + 'static>(&self) {
        self.cache.update(|c| {
            c.invalidate(Q::key());
        });
        #[cfg(feature = "csr")]
        self.refetch::<Q>();
    }

    #[cfg(feature = "csr")]
    fn refetch<Q: Query + 'static>(&self) {
        use leptos::task::spawn_local;

        let cache = self.cache;
        spawn_local(async move {
            match crate::rpc::fetch_query::<Q>().await {
                Ok(value) => cache.update(|c| {
                    if let Err(e) = c.set::<Q>(&value, chrono::Utc::now()) {
                        error!("Failed to cache {}: {}", Q::key(), e);
                    }
                }),
                Err(e) => error!("Failed to fetch {}: {}", Q::key(), e),
            }
        });
    }
}
