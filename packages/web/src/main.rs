use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use api::ApiConfig;
use ui::AppStateProvider;
use views::Users;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/users")]
    Users {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// localStorage key the login flow stores the bearer token under.
#[cfg(target_arch = "wasm32")]
const TOKEN_STORAGE_KEY: &str = "token";

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus::logger::init(level).expect("Failed to initialize logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let token = use_hook(load_token);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppStateProvider {
            config: config,
            token: token,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/users`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Users {});
    rsx! {}
}

fn load_config() -> ApiConfig {
    #[cfg(target_arch = "wasm32")]
    let config = ApiConfig::default().with_overrides(|key| match key {
        "USERS_API_BASE_URL" => option_env!("USERS_API_BASE_URL").map(str::to_string),
        "USERS_NOTICE_LIFETIME_MS" => option_env!("USERS_NOTICE_LIFETIME_MS").map(str::to_string),
        _ => None,
    });
    #[cfg(not(target_arch = "wasm32"))]
    let config = ApiConfig::from_env();

    tracing::info!("Users service at {}", config.api.base_url);
    config
}

fn load_token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    let token = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten());
    #[cfg(not(target_arch = "wasm32"))]
    let token = std::env::var("USERS_API_TOKEN").ok();

    if token.is_none() {
        tracing::warn!("No bearer token found; users service calls will fail");
    }
    token
}
