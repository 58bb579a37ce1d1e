use std::time::Duration;

use api::{User, UsersApi};
use directory::{DirectoryView, DraftField};
use dioxus::prelude::*;

use crate::{
    use_api_config, use_app_state, use_notice_timer, use_users_api, AppState, EditUserModal,
    NoticeBanner, NoticeTimer, UsersTable,
};

/// The user directory: loads users on mount, lists them, and lets the
/// operator delete or edit them.
///
/// Failed calls are logged and otherwise leave the view as it was.
#[component]
pub fn UsersList() -> Element {
    let directory = use_users_directory(use_users_api());
    directory_page(directory)
}

/// A mounted user directory backed by `A`: its state and the actions the
/// table and the modal trigger.
#[derive(Clone)]
pub struct UsersDirectory<A: 'static> {
    api: A,
    app: Signal<AppState>,
    view: Signal<DirectoryView>,
    timer: Signal<NoticeTimer>,
    lifetime: Duration,
}

/// Load the shared collection through `api` and return the directory handle.
///
/// The load re-runs when the token changes, not on every collection update.
pub fn use_users_directory<A: UsersApi + Clone + 'static>(api: A) -> UsersDirectory<A> {
    let mut app = use_app_state();
    let lifetime = use_api_config().notice_lifetime();
    let mut view = use_signal(DirectoryView::default);
    let timer = use_notice_timer();

    let token = use_memo(move || app.read().token.clone());
    let loader = api.clone();
    let _ = use_resource(move || {
        let api = loader.clone();
        async move {
            let token = token();
            let result = api.list_users(token.as_deref()).await;
            let mut state = app.write();
            view.write().finish_load(&mut state.users, result);
        }
    });

    UsersDirectory {
        api,
        app,
        view,
        timer,
        lifetime,
    }
}

impl<A: UsersApi + Clone + 'static> UsersDirectory<A> {
    pub fn delete(&self, id: String, name: String) {
        let mut view = self.view;
        if !view.write().begin_delete(&id) {
            return;
        }
        let api = self.api.clone();
        let (mut app, mut timer, lifetime) = (self.app, self.timer, self.lifetime);
        spawn(async move {
            let token = app.peek().token.clone();
            let result = api.delete_user(token.as_deref(), &id).await;
            let generation = {
                let mut state = app.write();
                view.write().finish_delete(&mut state.users, &id, &name, result)
            };
            if let Some(generation) = generation {
                timer.write().arm(view, generation, lifetime);
            }
        });
    }

    pub fn edit(&self, user: &User) {
        let mut view = self.view;
        view.write().begin_edit(user);
    }

    pub fn set_field(&self, field: DraftField, value: String) {
        let mut view = self.view;
        view.write().set_draft_field(field, value);
    }

    pub fn close(&self) {
        let mut view = self.view;
        view.write().close_edit();
    }

    pub fn submit(&self) {
        let mut view = self.view;
        let Some((id, update)) = view.write().begin_submit() else {
            return;
        };
        let api = self.api.clone();
        let (mut app, mut timer, lifetime) = (self.app, self.timer, self.lifetime);
        spawn(async move {
            let token = app.peek().token.clone();
            let result = api.update_user(token.as_deref(), &id, &update).await;
            let generation = {
                let mut state = app.write();
                view.write().finish_submit(&mut state.users, &id, &update.full_name, result)
            };
            if let Some(generation) = generation {
                timer.write().arm(view, generation, lifetime);
            }
        });
    }
}

fn directory_page<A: UsersApi + Clone + 'static>(directory: UsersDirectory<A>) -> Element {
    let users = directory.app.read().users.as_slice().to_vec();
    let current = directory.view.read();
    let notice = current.notices.current().map(|n| n.message.clone());
    let pending: Vec<String> = current.in_flight.ids().map(str::to_string).collect();
    let draft = current.draft().cloned();
    let draft_busy = draft.as_ref().is_some_and(|d| current.in_flight.contains(&d.id));
    drop(current);

    let on_delete = directory.clone();
    let on_edit = directory.clone();
    let on_change = directory.clone();
    let on_close = directory.clone();
    let on_submit = directory;

    rsx! {
        div {
            class: "users-page",

            if let Some(message) = notice {
                NoticeBanner { message: message }
            }

            UsersTable {
                users: users,
                pending: pending,
                on_delete: move |(id, name): (String, String)| on_delete.delete(id, name),
                on_edit: move |user: User| on_edit.edit(&user),
            }

            if let Some(draft) = draft {
                EditUserModal {
                    draft: draft,
                    busy: draft_busy,
                    on_change: move |(field, value): (DraftField, String)| on_change.set_field(field, value),
                    on_close: move |_: ()| on_close.close(),
                    on_submit: move |_: ()| on_submit.submit(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiConfig, MemoryUsersApi};

    use crate::notice_timer::tests::settle;
    use crate::AppStateProvider;

    const TOKEN: &str = "secret";
    const LIFETIME: Duration = Duration::from_millis(3000);

    fn memory_api() -> MemoryUsersApi {
        MemoryUsersApi::new(
            TOKEN,
            vec![
                User::new("1", "Ada Lovelace", "ada@example.com", "London"),
                User::new("2", "Grace Hopper", "grace@example.com", "Arlington"),
                User::new("3", "Barbara Liskov", "barbara@example.com", "Boston"),
            ],
        )
    }

    #[component]
    fn MemoryDirectory() -> Element {
        directory_page(use_users_directory(use_context::<MemoryUsersApi>()))
    }

    /// Deletes user 1 as soon as it is listed.
    #[component]
    fn DeleteOnceLoaded() -> Element {
        let directory = use_users_directory(use_context::<MemoryUsersApi>());
        let app = use_app_state();
        let mut fired = use_signal(|| false);
        let deleter = directory.clone();
        use_effect(move || {
            if !*fired.peek() && app.read().users.contains("1") {
                fired.set(true);
                deleter.delete("1".to_string(), "Ada Lovelace".to_string());
            }
        });
        directory_page(directory)
    }

    #[component]
    fn ListApp() -> Element {
        let token = Some(TOKEN.to_string());
        rsx! {
            AppStateProvider { config: ApiConfig::default(), token: token, MemoryDirectory {} }
        }
    }

    #[component]
    fn DeleteApp() -> Element {
        let token = Some(TOKEN.to_string());
        rsx! {
            AppStateProvider { config: ApiConfig::default(), token: token, DeleteOnceLoaded {} }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_renders_one_row_per_user() {
        let mut dom = VirtualDom::new(ListApp).with_root_context(memory_api());
        dom.rebuild_in_place();
        settle(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches("data-user-id=").count(), 3);
        let positions: Vec<usize> = ["Ada Lovelace", "Grace Hopper", "Barbara Liskov"]
            .iter()
            .map(|name| html.find(name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_notice_shows_then_clears() {
        let api = memory_api();
        let mut dom = VirtualDom::new(DeleteApp).with_root_context(api.clone());
        dom.rebuild_in_place();
        settle(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Ada Lovelace deleted successfully"));
        assert!(!html.contains("data-user-id=\"1\""));
        assert_eq!(html.matches("data-user-id=").count(), 2);
        assert_eq!(api.users().len(), 2);

        tokio::time::advance(LIFETIME - Duration::from_millis(1)).await;
        settle(&mut dom).await;
        assert!(dioxus_ssr::render(&dom).contains("deleted successfully"));

        tokio::time::advance(Duration::from_millis(1)).await;
        settle(&mut dom).await;
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("deleted successfully"));
        assert_eq!(html.matches("data-user-id=").count(), 2);
    }
}
