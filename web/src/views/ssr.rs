use dioxus::prelude::*;
use ui::{AuthorCard, HydrationBoundary, QueryCache, SSR_AUTHORS_KEY};

/// Server-rendered authors page.
///
/// The prefetch runs during server-side rendering inside a request-scoped
/// cache; the fetch fully settles before the cache is dehydrated. The
/// snapshot travels to the client in the hydration payload, so the card
/// below renders from a warm cache without a second request. A failed fetch
/// is carried in the snapshot as an error entry rather than aborting the
/// page.
#[component]
pub fn SsrAuthors() -> Element {
    let snapshot = use_server_future(|| async {
        let mut cache = QueryCache::new();
        cache.prefetch(SSR_AUTHORS_KEY, api::get_authors()).await;
        cache.dehydrate()
    })?;

    match snapshot() {
        Some(state) => rsx! {
            HydrationBoundary {
                state,
                AuthorCard {}
            }
        },
        None => rsx! {
            p { "Loading..." }
        },
    }
}
