//! # HTTP backend — [`HttpUsersApi`]
//!
//! Talks to the users service with `reqwest`, which compiles to `fetch` on
//! WASM and to hyper on native targets. Every request carries
//! `Authorization: Bearer <token>`.
//!
//! URLs are built from the configured base with path-segment pushes, so a base
//! with a path prefix (`https://host/api/`) works and user identifiers are
//! percent-encoded. A malformed base URL is reported per call as
//! [`ApiError::InvalidBaseUrl`] rather than at construction, so the view can
//! always hold a client.
//!
//! Response bodies are decoded leniently, matching what the service actually
//! sends:
//!
//! | Endpoint | Body | Result |
//! |----------|------|--------|
//! | `GET /users` | JSON array | the users, in order |
//! | `GET /users` | empty or `null` | an empty list |
//! | `GET /users` | entry with a `null` name, email or location | that field empty |
//! | `PUT /users/{id}` | JSON object | a [`UserPatch`] of the fields present |
//! | `PUT /users/{id}` | empty, non-object JSON, or not JSON | an empty patch |

use reqwest::{Client, RequestBuilder, Url};

use crate::client::UsersApi;
use crate::config::ApiConfig;
use crate::error::{require_token, ApiError};
use crate::models::{User, UserPatch, UserUpdate};

#[derive(Clone, Debug)]
pub struct HttpUsersApi {
    client: Client,
    base_url: String,
}

impl HttpUsersApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    /// `{base}/users`
    pub fn users_url(&self) -> Result<Url, ApiError> {
        self.endpoint(None)
    }

    /// `{base}/users/{id}`
    pub fn user_url(&self, id: &str) -> Result<Url, ApiError> {
        self.endpoint(Some(id))
    }

    fn endpoint(&self, id: Option<&str>) -> Result<Url, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let mut url = Url::parse(self.base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| invalid("cannot be a base".to_string()))?;
            segments.pop_if_empty().push("users");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder, token: &str) -> Result<String, ApiError> {
        let response = request.bearer_auth(token).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

impl UsersApi for HttpUsersApi {
    async fn list_users(&self, token: Option<&str>) -> Result<Vec<User>, ApiError> {
        let token = require_token(token)?;
        let url = self.users_url()?;
        tracing::debug!("GET {url}");
        let body = self.send(self.client.get(url), token).await?;
        parse_user_list(&body)
    }

    async fn delete_user(&self, token: Option<&str>, id: &str) -> Result<(), ApiError> {
        let token = require_token(token)?;
        let url = self.user_url(id)?;
        tracing::debug!("DELETE {url}");
        self.send(self.client.delete(url), token).await?;
        Ok(())
    }

    async fn update_user(
        &self,
        token: Option<&str>,
        id: &str,
        update: &UserUpdate,
    ) -> Result<UserPatch, ApiError> {
        let token = require_token(token)?;
        let url = self.user_url(id)?;
        tracing::debug!("PUT {url}");
        let body = self.send(self.client.put(url).json(update), token).await?;
        Ok(parse_user_patch(&body))
    }
}

/// Decode a `GET /users` body. An empty body or `null` is an empty list.
pub(crate) fn parse_user_list(body: &str) -> Result<Vec<User>, ApiError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let users: Option<Vec<User>> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(users.unwrap_or_default())
}

/// Decode a `PUT /users/{id}` body. Anything but a JSON object is an empty patch.
pub(crate) fn parse_user_patch(body: &str) -> UserPatch {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value @ serde_json::Value::Object(_)) => serde_json::from_value(value)
            .unwrap_or_else(|e| {
                tracing::debug!("Update response did not match user fields: {e}");
                UserPatch::default()
            }),
        Ok(_) | Err(_) => UserPatch::default(),
    }
}
