//! Shared application state and the users service handle.

use api::{ApiConfig, HttpUsersApi};
use directory::UserCollection;
use dioxus::prelude::*;

/// State shared by every view: the bearer token and the cached users.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub token: Option<String>,
    pub users: UserCollection,
}

impl AppState {
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            token,
            users: UserCollection::new(),
        }
    }
}

/// Get the shared application state.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Get the users service client.
pub fn use_users_api() -> HttpUsersApi {
    use_context::<HttpUsersApi>()
}

/// Get the client configuration.
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>()
}

/// Provides [`AppState`], the [`HttpUsersApi`] client and the [`ApiConfig`]
/// to everything below it.
#[component]
pub fn AppStateProvider(config: ApiConfig, token: Option<String>, children: Element) -> Element {
    let state = use_signal(|| AppState::with_token(token.clone()));
    let api_config = config.clone();
    use_context_provider(move || HttpUsersApi::from_config(&api_config));
    use_context_provider(move || config);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}
