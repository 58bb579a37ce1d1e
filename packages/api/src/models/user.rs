//! # User wire models
//!
//! Three shapes of a user travel over the wire:
//!
//! ## [`User`]
//!
//! One entry of `GET /users`. The service names its fields in camelCase and its
//! identifier `_id`; serde renames map them onto Rust field names. String
//! fields the service omits or sends as `null` deserialize as empty strings.
//! Passwords are write-only and never appear here.
//!
//! ## [`UserUpdate`]
//!
//! The body of `PUT /users/{id}`. The password is always sent, even when blank,
//! because the service decides what a blank password means.
//!
//! ## [`UserPatch`]
//!
//! The response of `PUT /users/{id}`. Every field is optional; [`User::merge`]
//! overwrites the fields the service returned and keeps the rest.

use serde::{Deserialize, Deserializer, Serialize};

/// A user as listed by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            location: location.into(),
        }
    }

    /// Apply an update response. The local identifier is never rewritten.
    pub fn merge(&mut self, patch: UserPatch) {
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
    }
}

/// Request body of `PUT /users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub location: String,
}

/// Response of `PUT /users/{id}`; absent fields keep their previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl UserPatch {
    /// A patch carrying every field of `update` except the password.
    pub fn from_update(id: &str, update: &UserUpdate) -> Self {
        Self {
            id: Some(id.to_string()),
            full_name: Some(update.full_name.clone()),
            email: Some(update.email.clone()),
            location: Some(update.location.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_uses_service_field_names() {
        let json = r#"{"_id":"64a1","fullName":"Ada Lovelace","email":"ada@example.com","location":"London","__v":0}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user, User::new("64a1", "Ada Lovelace", "ada@example.com", "London"));
    }

    #[test]
    fn test_user_missing_fields_default_to_empty() {
        let user: User = serde_json::from_str(r#"{"_id":"1","email":"x@example.com"}"#).unwrap();
        assert_eq!(user.full_name, "");
        assert_eq!(user.location, "");
        assert_eq!(user.email, "x@example.com");
    }

    #[test]
    fn test_update_always_sends_password() {
        let update = UserUpdate {
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: String::new(),
            location: "London".to_string(),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fullName": "Ada",
                "email": "ada@example.com",
                "password": "",
                "location": "London",
            })
        );
    }

    #[test]
    fn test_merge_keeps_omitted_fields() {
        let mut user = User::new("1", "Ada", "ada@example.com", "London");
        let patch: UserPatch = serde_json::from_str(r#"{"_id":"other","location":"Paris"}"#).unwrap();
        user.merge(patch);

        assert_eq!(user.id, "1");
        assert_eq!(user.full_name, "Ada");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.location, "Paris");
    }

    #[test]
    fn test_patch_null_field_keeps_previous_value() {
        let mut user = User::new("1", "Ada", "ada@example.com", "London");
        let patch: UserPatch = serde_json::from_str(r#"{"fullName":null,"email":"new@example.com"}"#).unwrap();
        user.merge(patch);
        assert_eq!(user.full_name, "Ada");
        assert_eq!(user.email, "new@example.com");
    }
}
