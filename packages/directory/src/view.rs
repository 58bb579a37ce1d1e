//! # DirectoryView — transitions of the user directory
//!
//! The view owns the editor, the notice board and the in-flight set; the user
//! collection belongs to shared application state and is passed in. Every
//! network interaction is split in two so the caller never holds state across
//! an `await`:
//!
//! | Interaction | Before the call | After the call |
//! |-------------|-----------------|----------------|
//! | Load | — | [`finish_load`](DirectoryView::finish_load) |
//! | Delete | [`begin_delete`](DirectoryView::begin_delete) | [`finish_delete`](DirectoryView::finish_delete) |
//! | Submit edit | [`begin_submit`](DirectoryView::begin_submit) | [`finish_submit`](DirectoryView::finish_submit) |
//!
//! `begin_*` refuses a write for a user that already has one outstanding.
//! `finish_*` applies a success (and returns the generation of the notice it
//! showed, for the caller to arm a clear) or logs the failure and leaves the
//! collection, the draft and the modal exactly as they were.

use api::{ApiError, User, UserPatch, UserUpdate};

use crate::collection::UserCollection;
use crate::draft::{DraftField, EditDraft, EditorState};
use crate::in_flight::InFlight;
use crate::notice::{Notice, NoticeBoard};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryView {
    pub editor: EditorState,
    pub notices: NoticeBoard,
    pub in_flight: InFlight,
}

impl DirectoryView {
    /// Apply the result of `GET /users`. Returns the row count on success.
    pub fn finish_load(
        &mut self,
        users: &mut UserCollection,
        result: Result<Vec<User>, ApiError>,
    ) -> Option<usize> {
        match result {
            Ok(listing) => {
                let count = users.replace_all(listing);
                self.editor.retain_in(users);
                tracing::info!("Loaded {count} users");
                Some(count)
            }
            Err(e) => {
                log_failure("fetching users", &e);
                None
            }
        }
    }

    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.in_flight.try_begin(id) {
            true
        } else {
            tracing::debug!("Skipping delete of user {id}: a request is already in flight");
            false
        }
    }

    /// Apply the result of `DELETE /users/{id}`.
    pub fn finish_delete(
        &mut self,
        users: &mut UserCollection,
        id: &str,
        name: &str,
        result: Result<(), ApiError>,
    ) -> Option<u64> {
        self.in_flight.finish(id);
        match result {
            Ok(()) => {
                users.remove(id);
                self.editor.retain_in(users);
                tracing::info!("Deleted user {id}");
                Some(self.notices.show(Notice::deleted(name)))
            }
            Err(e) => {
                log_failure(&format!("deleting user {id}"), &e);
                None
            }
        }
    }

    pub fn begin_edit(&mut self, user: &User) {
        self.editor.begin(user);
    }

    pub fn set_draft_field(&mut self, field: DraftField, value: String) {
        self.editor.set_field(field, value);
    }

    pub fn close_edit(&mut self) {
        self.editor.close();
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.editor.draft()
    }

    /// Claim the open draft's user and build the request body.
    pub fn begin_submit(&mut self) -> Option<(String, UserUpdate)> {
        let draft = self.editor.draft()?;
        let id = draft.id.clone();
        let update = draft.to_update();
        if !self.in_flight.try_begin(&id) {
            tracing::debug!("Skipping update of user {id}: a request is already in flight");
            return None;
        }
        Some((id, update))
    }

    /// Apply the result of `PUT /users/{id}`; `name` is the submitted name.
    ///
    /// No notice is shown if the user left the collection while the request
    /// was out.
    pub fn finish_submit(
        &mut self,
        users: &mut UserCollection,
        id: &str,
        name: &str,
        result: Result<UserPatch, ApiError>,
    ) -> Option<u64> {
        self.in_flight.finish(id);
        match result {
            Ok(patch) => {
                if self.editor.draft().is_some_and(|d| d.id == id) {
                    self.editor.close();
                }
                if users.merge(id, patch).is_none() {
                    tracing::warn!("Updated user {id} is no longer listed");
                    return None;
                }
                tracing::info!("Updated user {id}");
                Some(self.notices.show(Notice::updated(name)))
            }
            Err(e) => {
                log_failure(&format!("editing user {id}"), &e);
                None
            }
        }
    }

    /// Clear the notice shown at `generation`, if it is still showing.
    pub fn expire_notice(&mut self, generation: u64) -> bool {
        let expired = self.notices.expire(generation);
        if expired {
            tracing::debug!("Notice {generation} expired");
        }
        expired
    }
}

fn log_failure(action: &str, e: &ApiError) {
    if e.is_unauthorized() {
        tracing::error!("Error {action}: bearer token rejected ({e})");
    } else {
        tracing::error!("Error {action}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{MemoryUsersApi, RecordedRequest, UsersApi};

    const TOKEN: &str = "secret";

    fn seed() -> Vec<User> {
        vec![
            User::new("1", "Ada", "ada@example.com", "London"),
            User::new("2", "Grace", "grace@example.com", "Arlington"),
            User::new("3", "Barbara", "barbara@example.com", "Boston"),
        ]
    }

    async fn loaded(api: &MemoryUsersApi) -> (DirectoryView, UserCollection) {
        let mut view = DirectoryView::default();
        let mut users = UserCollection::new();
        let result = api.list_users(Some(TOKEN)).await;
        assert_eq!(view.finish_load(&mut users, result), Some(3));
        (view, users)
    }

    async fn delete(api: &MemoryUsersApi, view: &mut DirectoryView, users: &mut UserCollection, id: &str, name: &str) -> Option<u64> {
        assert!(view.begin_delete(id));
        let result = api.delete_user(Some(TOKEN), id).await;
        view.finish_delete(users, id, name, result)
    }

    async fn submit(api: &MemoryUsersApi, view: &mut DirectoryView, users: &mut UserCollection) -> Option<u64> {
        let (id, update) = view.begin_submit().unwrap();
        let result = api.update_user(Some(TOKEN), &id, &update).await;
        view.finish_submit(users, &id, &update.full_name, result)
    }

    #[tokio::test]
    async fn test_load_replaces_collection_in_order() {
        let api = MemoryUsersApi::new(TOKEN, seed());
        let (_, users) = loaded(&api).await;
        assert_eq!(users.as_slice(), seed().as_slice());
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_state() {
        let api = MemoryUsersApi::new(TOKEN, seed());
        let (mut view, mut users) = loaded(&api).await;

        api.set_unavailable(true);
        let result = api.list_users(Some(TOKEN)).await;
        assert_eq!(view.finish_load(&mut users, result), None);
        assert_eq!(users.len(), 3);

        let result = api.list_users(None).await;
        assert_eq!(view.finish_load(&mut users, result), None);
        assert_eq!(users.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_removes_row_and_shows_notice() {
        let api = MemoryUsersApi::new(TOKEN, seed());
        let (mut view, mut users) = loaded(&api).await;

        let generation = delete(&api, &mut view, &mut users, "2", "Grace").await.unwrap();

        let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        let notice = view.notices.current().unwrap();
        assert_eq!(notice.message, "Grace deleted successfully");
        assert_eq!(notice.generation, generation);
        assert!(view.in_flight.is_empty());

        assert!(view.expire_notice(generation));
        assert!(view.notices.current().is_none());
    }

    #[tokio::test]
    async fn test_failed_delete_changes_nothing() {
        let api = MemoryUsersApi::new(TOKEN, seed());
        let (mut view, mut users) = loaded(&api).await;
        api.set_unavailable(true);

        assert_eq!(delete(&api, &mut view, &mut users, "2", "Grace").await, None);
        assert_eq!(users.as_slice(), seed().as_slice());
        assert!(view.notices.current().is_none());
        assert!(view.in_flight.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_delete_is_skipped_while_in_flight() {
        let api = MemoryUsersApi::new(TOKEN, seed());
        let (mut view, _) = loaded(&api).await;

        assert!(view.begin_delete("1"));
        assert!(!view.begin_delete("1"));
        assert!(view.begin_delete("2"));
    }

    #[tokio::test]
    async fn test_delete_of_edited_user_closes_modal() {
        let api = MemoryUsersApi::new(TOKEN, seed());
        let (mut view, mut users) = loaded(&api).await;
        view.begin_edit(&seed()[0]);

        delete(&api, &mut view, &mut users, "1", "Ada").await.unwrap();
        assert!(!view.editor.is_open());
    }

    #[tokio::test]
    async fn test_close_edit_leaves_collection_untouched() {
        let api = MemoryUsersApi::new(TOKEN, seed());
        let (mut view, users) = loaded(&api).await;

        view.begin_edit(&seed()[1]);
        view.set_draft_field(DraftField::FullName, "Rear Admiral Hopper".to_string());
        view.close_edit();

        assert!(!view.editor.is_open());
        assert_eq!(users.as_slice(), seed().as_slice());
        assert_eq!(api.requests(), vec![RecordedRequest::List]);
    }

    #[tokio::test]
    async fn test_submit_updates_only_target_and_closes_modal() {
        let api = MemoryUsersApi::new(TOKEN, seed());
        let (mut view, mut users) = loaded(&api).await;

        view.begin_edit(&seed()[1]);
        view.set_draft_field(DraftField::FullName, "Grace Hopper".to_string());
        view.set_draft_field(DraftField::Location, "New York".to_string());
        submit(&api, &mut view, &mut users).await.unwrap();

        let updated = users.get("2").unwrap();
        assert_eq!(updated.full_name, "Grace Hopper");
        assert_eq!(updated.location, "New York");
        assert_eq!(users.get("1"), Some(&seed()[0]));
        assert_eq!(users.get("3"), Some(&seed()[2]));
        assert!(!view.editor.is_open());
        assert_eq!(view.notices.current().unwrap().message, "Grace Hopper updated successfully");

        match &api.requests()[1] {
            RecordedRequest::Update { id, update } => {
                assert_eq!(id, "2");
                assert_eq!(update.password, "");
            }
            other => panic!("unexpected request {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_merges_partial_response() {
        let api = MemoryUsersApi::new(TOKEN, seed());
        let (mut view, mut users) = loaded(&api).await;
        api.set_update_response(Some(UserPatch {
            email: Some("server@example.com".to_string()),
            ..UserPatch::default()
        }));

        view.begin_edit(&seed()[0]);
        view.set_draft_field(DraftField::FullName, "Augusta Ada".to_string());
        submit(&api, &mut view, &mut users).await.unwrap();

        let updated = users.get("1").unwrap();
        assert_eq!(updated.email, "server@example.com");
        assert_eq!(updated.full_name, "Ada");
        assert_eq!(updated.location, "London");
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_modal_and_draft() {
        let api = MemoryUsersApi::new(TOKEN, seed());
        let (mut view, mut users) = loaded(&api).await;
        api.set_unavailable(true);

        view.begin_edit(&seed()[0]);
        view.set_draft_field(DraftField::Email, "new@example.com".to_string());
        let draft_before = view.draft().cloned();

        assert_eq!(submit(&api, &mut view, &mut users).await, None);
        assert_eq!(users.as_slice(), seed().as_slice());
        assert!(view.editor.is_open());
        assert_eq!(view.draft().cloned(), draft_before);
        assert!(view.notices.current().is_none());
        assert!(view.in_flight.is_empty());
    }

    #[tokio::test]
    async fn test_second_notice_supersedes_first() {
        let api = MemoryUsersApi::new(TOKEN, seed());
        let (mut view, mut users) = loaded(&api).await;

        let first = delete(&api, &mut view, &mut users, "3", "Barbara").await.unwrap();
        view.begin_edit(&seed()[0]);
        let second = submit(&api, &mut view, &mut users).await.unwrap();

        assert!(!view.expire_notice(first));
        assert_eq!(view.notices.current().unwrap().message, "Ada updated successfully");
        assert!(view.expire_notice(second));
    }

    #[tokio::test]
    async fn test_submit_for_vanished_user_shows_no_notice() {
        let api = MemoryUsersApi::new(TOKEN, seed());
        let (mut view, mut users) = loaded(&api).await;

        view.begin_edit(&seed()[2]);
        let (id, update) = view.begin_submit().unwrap();
        let result = api.update_user(Some(TOKEN), &id, &update).await;
        users.remove("3");

        assert_eq!(view.finish_submit(&mut users, &id, &update.full_name, result), None);
        assert!(view.notices.current().is_none());
        assert!(!view.editor.is_open());
        assert!(view.in_flight.is_empty());
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn test_submit_without_draft() {
        let mut view = DirectoryView::default();
        assert!(view.begin_submit().is_none());
    }
}
