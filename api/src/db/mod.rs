//! # Database module — PostgreSQL liveness probe
//!
//! This module provides the shared PostgreSQL connection pool and the single
//! query the application runs against it. It is entirely gated behind
//! `#[cfg(feature = "server")]` so that client (WASM) builds never pull in
//! SQLx or Tokio networking code.
//!
//! ## Design
//!
//! The pool is a **lazy, process-wide singleton** backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] reads
//! `DATABASE_URL` from the environment (via `dotenvy`), opens a connection
//! pool with up to 5 connections, and caches the result for all subsequent
//! callers. The backing store is only ever used for the liveness probe; there
//! is no schema dependency.
//!
//! ## Re-exports
//!
//! - [`get_pool`] — returns `&'static PgPool`, initialising it on first use.
//! - [`probe_time`] — one `SELECT NOW()` round trip, the health check's query.
//! - [`DbError`] — pool initialisation and query failures.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::{get_pool, probe_time, DbError};
