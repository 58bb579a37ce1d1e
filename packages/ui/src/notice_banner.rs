use dioxus::prelude::*;

/// Success notice shown above the users table.
#[component]
pub fn NoticeBanner(message: String) -> Element {
    rsx! {
        div {
            class: "notice notice-success",
            role: "alert",
            "{message}"
        }
    }
}
