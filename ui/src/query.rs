//! # Query cache — fetch-once data cache with dehydrate/hydrate support
//!
//! The handshake between server rendering and client hydration. A page that
//! renders on the server builds a fresh [`QueryCache`], prefetches under a
//! fixed key, and serializes the settled entries into a [`DehydratedState`]
//! snapshot. The snapshot travels to the client inside the rendered payload,
//! where [`HydrationBoundary`] seeds an equivalent cache before any component
//! reads it — so a hydrated component renders its data without refetching.
//!
//! ## Entry lifecycle
//!
//! An entry is created on the first fetch attempt for its key (`loading`),
//! then settles as `success` or `error`. A hydrated entry starts settled and
//! triggers no fetch; there is no transition back to `loading` unless the
//! entry is explicitly invalidated. The presence of a `loading` entry is the
//! de-duplication marker: at most one fetch is in flight per key.
//!
//! ## Scope
//!
//! One cache per [`HydrationBoundary`] instance, owned for the lifetime of
//! the page. Concurrent server renders each build their own cache, so
//! entries never leak between requests.

use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Cache key used by the server-rendered authors page.
pub const SSR_AUTHORS_KEY: &str = "ssr-key";

/// Presentation state of a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Loading,
    Success,
    Error,
}

/// One cache slot: the latest known outcome of the fetch bound to a key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    pub status: QueryStatus,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    /// Milliseconds since the Unix epoch at which the entry was last written.
    pub updated_at: u64,
}

/// Keyed map of query outcomes, shared through context for one page render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryCache {
    entries: HashMap<String, QueryState>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&QueryState> {
        self.entries.get(key)
    }

    /// Reserve the slot for an in-flight fetch.
    pub fn set_loading(&mut self, key: &str) {
        self.insert(key, QueryStatus::Loading, None, None);
    }

    pub fn set_success(&mut self, key: &str, data: serde_json::Value) {
        self.insert(key, QueryStatus::Success, Some(data), None);
    }

    pub fn set_error(&mut self, key: &str, message: impl Into<String>) {
        self.insert(key, QueryStatus::Error, None, Some(message.into()));
    }

    fn insert(
        &mut self,
        key: &str,
        status: QueryStatus,
        data: Option<serde_json::Value>,
        error: Option<String>,
    ) {
        self.entries.insert(
            key.to_string(),
            QueryState {
                status,
                data,
                error,
                updated_at: now_millis(),
            },
        );
    }

    /// Run `fetch` under `key`, recording the outcome in the cache. A failed
    /// fetch settles the entry as an error instead of propagating, so a
    /// prefetching page never aborts its own construction.
    pub async fn prefetch<T, E, F>(&mut self, key: &str, fetch: F)
    where
        T: Serialize,
        E: Display,
        F: Future<Output = Result<T, E>>,
    {
        self.set_loading(key);
        match fetch.await {
            Ok(value) => match serde_json::to_value(&value) {
                Ok(json) => self.set_success(key, json),
                Err(err) => self.set_error(key, err.to_string()),
            },
            Err(err) => self.set_error(key, err.to_string()),
        }
    }

    /// Serialize every settled entry into a transportable snapshot. Loading
    /// entries never cross the server/client boundary: a prefetch completes
    /// before dehydration runs.
    pub fn dehydrate(&self) -> DehydratedState {
        DehydratedState {
            queries: self
                .entries
                .iter()
                .filter(|(_, state)| state.status != QueryStatus::Loading)
                .map(|(key, state)| DehydratedQuery {
                    key: key.clone(),
                    state: state.clone(),
                })
                .collect(),
        }
    }

    /// Seed entries from a snapshot produced by [`QueryCache::dehydrate`].
    pub fn hydrate(&mut self, snapshot: DehydratedState) {
        for query in snapshot.queries {
            self.entries.insert(query.key, query.state);
        }
    }
}

/// Transportable snapshot of a cache, embedded in the server-rendered payload
/// and used to reconstruct the client cache before its first read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DehydratedState {
    pub queries: Vec<DehydratedQuery>,
}

/// One serialized cache entry: `{key, status, data, error, updated_at}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DehydratedQuery {
    pub key: String,
    #[serde(flatten)]
    pub state: QueryState,
}

/// Snapshot of a cache entry, decoded for the consuming component.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult<T> {
    Loading,
    Error(String),
    Success(T),
}

/// Get the page-scoped cache provided by [`HydrationBoundary`].
pub fn use_query_cache() -> Signal<QueryCache> {
    use_context::<Signal<QueryCache>>()
}

/// Subscribe to the cache entry under `key`, starting `fetcher` only when
/// the slot is empty. A hydrated `success` or `error` entry is terminal and
/// triggers no fetch; an existing `loading` entry means a fetch is already
/// in flight and no second one starts.
pub fn use_query<T, E, F, Fut>(key: &'static str, fetcher: F) -> QueryResult<T>
where
    T: Serialize + DeserializeOwned + 'static,
    E: Display + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let mut cache = use_query_cache();

    use_hook(move || {
        if cache.peek().get(key).is_none() {
            cache.write().set_loading(key);
            spawn(async move {
                match fetcher().await {
                    Ok(value) => match serde_json::to_value(&value) {
                        Ok(json) => cache.write().set_success(key, json),
                        Err(err) => cache.write().set_error(key, err.to_string()),
                    },
                    Err(err) => cache.write().set_error(key, err.to_string()),
                }
            });
        }
    });

    let cache_ref = cache.read();
    match cache_ref.get(key) {
        None
        | Some(QueryState {
            status: QueryStatus::Loading,
            ..
        }) => QueryResult::Loading,
        Some(QueryState {
            status: QueryStatus::Error,
            error,
            ..
        }) => QueryResult::Error(
            error
                .clone()
                .unwrap_or_else(|| "unknown error".to_string()),
        ),
        Some(QueryState {
            status: QueryStatus::Success,
            data,
            ..
        }) => {
            // Decode at the trust boundary; a shape mismatch is an error
            // state, not a panic.
            let value = data.clone().unwrap_or(serde_json::Value::Null);
            match serde_json::from_value(value) {
                Ok(decoded) => QueryResult::Success(decoded),
                Err(err) => QueryResult::Error(err.to_string()),
            }
        }
    }
}

/// Provides a fresh cache, seeded from a server-produced snapshot, to its
/// children. Each boundary instance owns its own cache for the lifetime of
/// the page, so concurrent server renders never share entries.
#[component]
pub fn HydrationBoundary(state: DehydratedState, children: Element) -> Element {
    use_context_provider(move || {
        let mut cache = QueryCache::new();
        cache.hydrate(state);
        Signal::new(cache)
    });

    rsx! {
        {children}
    }
}

fn now_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}
