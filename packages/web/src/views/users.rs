use dioxus::prelude::*;

use ui::views::UsersList;

#[component]
pub fn Users() -> Element {
    rsx! {
        main {
            class: "users-main",
            h1 { class: "users-title", "Users" }
            UsersList {}
        }
    }
}
