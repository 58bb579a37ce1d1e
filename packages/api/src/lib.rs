//! # API crate — REST client for the user directory
//!
//! This crate owns everything that crosses the network boundary between the
//! browser view and the users REST service. Every frontend call goes through the
//! [`UsersApi`] trait so the same view logic runs against the real HTTP service
//! or an in-memory backend in tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`UsersApi`] async trait (list, delete, update) |
//! | [`config`] | [`ApiConfig`] — base URL and notice lifetime, TOML + environment |
//! | [`error`] | [`ApiError`], the failure type of every call |
//! | [`http`] | [`HttpUsersApi`], the `reqwest` backend with bearer authentication |
//! | [`memory`] | [`MemoryUsersApi`], an in-memory backend that records requests |
//! | [`models`] | Wire models: [`User`], [`UserUpdate`], [`UserPatch`] |
//!
//! ## Endpoints
//!
//! - `GET /users` — the full collection
//! - `DELETE /users/{id}` — delete one user
//! - `PUT /users/{id}` — update one user, responds with the (possibly partial) user

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod models;

pub use client::UsersApi;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::HttpUsersApi;
pub use memory::{MemoryUsersApi, RecordedRequest};
pub use models::{User, UserPatch, UserUpdate};
