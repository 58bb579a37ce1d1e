//! The edit modal and its draft.

use api::{User, UserUpdate};

use crate::collection::UserCollection;

/// One editable field of an [`EditDraft`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    FullName,
    Email,
    Password,
    Location,
}

/// Not-yet-submitted edits to one user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub location: String,
}

impl EditDraft {
    /// Copy the editable fields of `user`. The password starts blank.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            password: String::new(),
            location: user.location.clone(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::FullName => self.full_name = value,
            DraftField::Email => self.email = value,
            DraftField::Password => self.password = value,
            DraftField::Location => self.location = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FullName => &self.full_name,
            DraftField::Email => &self.email,
            DraftField::Password => &self.password,
            DraftField::Location => &self.location,
        }
    }

    /// The full request body, blank password included.
    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            location: self.location.clone(),
        }
    }
}

/// The modal is open exactly when a draft is held.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditorState {
    draft: Option<EditDraft>,
}

impl EditorState {
    pub fn begin(&mut self, user: &User) {
        self.draft = Some(EditDraft::from_user(user));
    }

    pub fn close(&mut self) -> Option<EditDraft> {
        self.draft.take()
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    /// Update one field of the open draft. Ignored when the modal is closed.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        if let Some(draft) = self.draft.as_mut() {
            draft.set(field, value);
        }
    }

    /// Close the modal if its user is no longer in `users`.
    pub fn retain_in(&mut self, users: &UserCollection) -> bool {
        match &self.draft {
            Some(draft) if !users.contains(&draft.id) => {
                tracing::debug!("Closing edit draft for vanished user {}", draft.id);
                self.draft = None;
                false
            }
            _ => true,
        }
    }
}
