//! This crate contains all shared UI for the workspace.

mod query;
pub use query::{
    use_query, use_query_cache, DehydratedQuery, DehydratedState, HydrationBoundary, QueryCache,
    QueryResult, QueryState, QueryStatus, SSR_AUTHORS_KEY,
};

mod author_card;
pub use author_card::AuthorCard;

mod user_list;
pub use user_list::UserList;
