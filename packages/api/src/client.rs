//! The [`UsersApi`] trait.
//!
//! Futures carry no `Send` bound so the browser backend can implement it.
//! A `None` or blank token fails with [`ApiError::MissingToken`] before any
//! request is issued.

use std::future::Future;

use crate::error::ApiError;
use crate::models::{User, UserPatch, UserUpdate};

/// Async interface to the users service.
pub trait UsersApi {
    /// `GET /users`
    fn list_users(
        &self,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Vec<User>, ApiError>>;

    /// `DELETE /users/{id}`
    fn delete_user(
        &self,
        token: Option<&str>,
        id: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// `PUT /users/{id}`
    fn update_user(
        &self,
        token: Option<&str>,
        id: &str,
        update: &UserUpdate,
    ) -> impl Future<Output = Result<UserPatch, ApiError>>;
}
