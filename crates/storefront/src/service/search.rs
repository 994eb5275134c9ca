use crate::service::debounce::Debouncer;
use apiclient::{abstract_trait::DynSearchApi, client::MIN_QUERY_CHARS};
use chrono::Duration as CacheTtl;
use shared::{cache::CacheStore, domain::responses::ProductResponse, model::Product};
use std::{sync::Arc, time::Duration};
use tokio::sync::watch;
use tracing::warn;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

const SEARCH_DEBOUNCE_KEY: &str = "search";
const SEARCH_STALE_SECS: i64 = 60;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Product>,
    pub open: bool,
    pub loading: bool,
}

/// Search-as-you-type: keystrokes update the state immediately, the network
/// is hit at most once per 300 ms of inactivity, and sub-2-char queries are
/// treated as an empty result set without a request.
#[derive(Clone)]
pub struct SearchTypeahead {
    api: DynSearchApi,
    cache: Arc<CacheStore>,
    debouncer: Arc<Debouncer>,
    tx: Arc<watch::Sender<SearchState>>,
}

impl SearchTypeahead {
    pub fn new(api: DynSearchApi, cache: Arc<CacheStore>) -> Self {
        let (tx, _rx) = watch::channel(SearchState::default());

        Self {
            api,
            cache,
            debouncer: Arc::new(Debouncer::new(SEARCH_DEBOUNCE)),
            tx: Arc::new(tx),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> SearchState {
        self.tx.borrow().clone()
    }

    pub fn set_query(&self, query: &str) {
        let long_enough = query.chars().count() >= MIN_QUERY_CHARS;

        self.tx.send_modify(|state| {
            state.query = query.to_string();
            state.open = long_enough;
            state.loading = long_enough;
            if !long_enough {
                state.results.clear();
            }
        });

        if !long_enough {
            self.debouncer.cancel(SEARCH_DEBOUNCE_KEY);
            return;
        }

        let service = self.clone();
        let query = query.to_string();

        self.debouncer.call(SEARCH_DEBOUNCE_KEY, async move {
            service.run_search(query).await;
        });
    }

    async fn run_search(&self, query: String) {
        let cache_key = format!("search:{query}");

        if let Some(cached) = self.cache.get_from_cache::<Vec<ProductResponse>>(&cache_key) {
            self.apply_results(&query, cached.into_iter().map(Product::from).collect());
            return;
        }

        match self.api.search(&query).await {
            Ok(response) => {
                self.cache.set_to_cache(
                    &cache_key,
                    &response.data,
                    CacheTtl::seconds(SEARCH_STALE_SECS),
                );
                self.apply_results(&query, response.data.into_iter().map(Product::from).collect());
            }
            Err(e) => {
                warn!("❌ Search failed for '{query}': {e}");
                self.tx.send_modify(|state| {
                    if state.query == query {
                        state.loading = false;
                    }
                });
            }
        }
    }

    /// A dispatched request is never aborted; a stale completion is simply
    /// not applied over a newer query.
    fn apply_results(&self, query: &str, results: Vec<Product>) {
        self.tx.send_modify(|state| {
            if state.query == query {
                state.results = results;
                state.loading = false;
            }
        });
    }

    /// Selecting a result clears the query, closes the dropdown and returns
    /// the navigation target for the caller.
    pub fn select(&self, product_id: &str) -> String {
        self.tx.send_modify(|state| {
            state.query.clear();
            state.results.clear();
            state.open = false;
            state.loading = false;
        });
        self.debouncer.cancel(SEARCH_DEBOUNCE_KEY);

        format!("/products/{product_id}")
    }

    /// Focus left the search control.
    pub fn dismiss(&self) {
        self.tx.send_modify(|state| state.open = false);
    }
}
