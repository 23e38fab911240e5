//! Card grid for the authors collection, driven by the shared query cache.

use api::models::Author;
use dioxus::prelude::*;

use crate::query::{use_query, QueryResult, SSR_AUTHORS_KEY};

const AUTHORS_CSS: Asset = asset!("/assets/authors.css");

/// Renders the cache entry under the SSR key: a loading indicator, the error
/// message, or one card per author keyed by its stable `id`.
#[component]
pub fn AuthorCard() -> Element {
    let authors: QueryResult<Vec<Author>> = use_query(SSR_AUTHORS_KEY, api::get_authors);

    let content = match authors {
        QueryResult::Loading => rsx! {
            p { "Loading..." }
        },
        QueryResult::Error(message) => rsx! {
            p { "An error occurred: {message}" }
        },
        QueryResult::Success(authors) => rsx! {
            div {
                class: "author-cards",
                for author in authors {
                    div {
                        key: "{author.id}",
                        class: "author-card",
                        img { src: "{author.image}", alt: "Image of {author.name}" }
                        div {
                            class: "author-card-body",
                            div { class: "author-card-name", "{author.name}" }
                            p { class: "author-card-bio", "{author.bio}" }
                        }
                        span { class: "author-card-location", "{author.location}" }
                    }
                }
            }
        },
    };

    rsx! {
        document::Stylesheet { href: AUTHORS_CSS }

        {content}
    }
}
