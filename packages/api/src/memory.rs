use std::cell::RefCell;
use std::rc::Rc;

use crate::client::UsersApi;
use crate::error::{require_token, ApiError};
use crate::models::{User, UserPatch, UserUpdate};

/// A request as seen by [`MemoryUsersApi`].
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedRequest {
    List,
    Delete { id: String },
    Update { id: String, update: UserUpdate },
}

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    requests: Vec<RecordedRequest>,
    unavailable: bool,
    update_response: Option<UserPatch>,
}

/// In-memory users service for tests and offline demos.
///
/// Accepts exactly one bearer token. Clones share state.
#[derive(Clone, Debug)]
pub struct MemoryUsersApi {
    token: String,
    state: Rc<RefCell<State>>,
}

impl MemoryUsersApi {
    pub fn new(token: impl Into<String>, users: Vec<User>) -> Self {
        Self {
            token: token.into(),
            state: Rc::new(RefCell::new(State {
                users,
                ..State::default()
            })),
        }
    }

    /// Users currently held by the service.
    pub fn users(&self) -> Vec<User> {
        self.state.borrow().users.clone()
    }

    /// Every request received so far, authorized or not.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.borrow().requests.clone()
    }

    /// While unavailable, every call fails with a 503.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.borrow_mut().unavailable = unavailable;
    }

    /// Answer updates with `patch` instead of the full stored user.
    pub fn set_update_response(&self, patch: Option<UserPatch>) {
        self.state.borrow_mut().update_response = patch;
    }

    fn authorize(&self, token: Option<&str>, request: RecordedRequest) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request);
        let token = require_token(token)?;
        if state.unavailable {
            return Err(ApiError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            });
        }
        if token != self.token {
            return Err(ApiError::Status {
                status: 401,
                body: "invalid token".to_string(),
            });
        }
        Ok(())
    }
}

impl UsersApi for MemoryUsersApi {
    async fn list_users(&self, token: Option<&str>) -> Result<Vec<User>, ApiError> {
        self.authorize(token, RecordedRequest::List)?;
        Ok(self.users())
    }

    async fn delete_user(&self, token: Option<&str>, id: &str) -> Result<(), ApiError> {
        self.authorize(token, RecordedRequest::Delete { id: id.to_string() })?;
        let mut state = self.state.borrow_mut();
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        if state.users.len() == before {
            return Err(ApiError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn update_user(
        &self,
        token: Option<&str>,
        id: &str,
        update: &UserUpdate,
    ) -> Result<UserPatch, ApiError> {
        self.authorize(
            token,
            RecordedRequest::Update {
                id: id.to_string(),
                update: update.clone(),
            },
        )?;
        let mut state = self.state.borrow_mut();
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        user.merge(UserPatch::from_update(id, update));
        let response = state
            .update_response
            .clone()
            .unwrap_or_else(|| UserPatch::from_update(id, update));
        Ok(response)
    }
}
