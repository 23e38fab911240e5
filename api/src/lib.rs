//! # API crate — shared fullstack server functions for Bylines
//!
//! This crate is the backbone of the Bylines fullstack architecture. It
//! defines the Dioxus server functions the frontend calls, along with the
//! supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) and the liveness probe |
//! | [`models`] | — | The synthetic `User`/`Author` collections and their generator |
//! | [`routes`] | `server` | The JSON data endpoints mounted in front of the Dioxus application |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` and compiled twice: once with the real body
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that
//! forwards the call over HTTP and deserializes the typed response.
//!
//! - `get_authors` — the authors collection, used by the server-rendered
//!   authors page and its card component.
//! - `get_users` — the users collection, used by the home view's list.

use dioxus::prelude::*;

pub mod db;
pub mod models;
#[cfg(feature = "server")]
pub mod routes;

pub use models::{Author, MockData, User};

/// Fetch the full authors collection.
#[cfg(feature = "server")]
#[get("/api/authors")]
pub async fn get_authors() -> Result<Vec<Author>, ServerFnError> {
    Ok(models::mock_authors(models::AUTHOR_COUNT))
}

#[cfg(not(feature = "server"))]
#[get("/api/authors")]
pub async fn get_authors() -> Result<Vec<Author>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch the full users collection.
#[cfg(feature = "server")]
#[get("/api/users")]
pub async fn get_users() -> Result<Vec<User>, ServerFnError> {
    Ok(models::mock_users(models::USER_COUNT))
}

#[cfg(not(feature = "server"))]
#[get("/api/users")]
pub async fn get_users() -> Result<Vec<User>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
