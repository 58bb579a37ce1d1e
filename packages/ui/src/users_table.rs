use api::User;
use dioxus::prelude::*;

const HEADERS: [&str; 5] = ["S. No.", "User Name", "User Location", "User Email", "Actions"];

/// The users table. Rows follow the order of `users`.
///
/// Rows whose id is in `pending` have their actions disabled.
#[component]
pub fn UsersTable(
    users: Vec<User>,
    #[props(default)] pending: Vec<String>,
    on_delete: EventHandler<(String, String)>,
    on_edit: EventHandler<User>,
) -> Element {
    rsx! {
        table {
            class: "users-table",
            thead {
                tr {
                    for header in HEADERS {
                        th { scope: "col", "{header}" }
                    }
                }
            }
            tbody {
                for (serial, user) in users.iter().enumerate().map(|(i, u)| (i + 1, u)) {
                    UserRow {
                        key: "{user.id}",
                        serial: serial,
                        busy: pending.contains(&user.id),
                        user: user.clone(),
                        on_delete: on_delete,
                        on_edit: on_edit,
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(
    serial: usize,
    user: User,
    busy: bool,
    on_delete: EventHandler<(String, String)>,
    on_edit: EventHandler<User>,
) -> Element {
    let id = user.id.clone();
    let name = user.full_name.clone();
    let edited = user.clone();

    rsx! {
        tr {
            "data-user-id": "{user.id}",
            th { scope: "row", "{serial}" }
            td { "{user.full_name}" }
            td { "{user.location}" }
            td { "{user.email}" }
            td {
                class: "row-actions",
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_delete.call((id.clone(), name.clone())),
                    "Delete"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_edit.call(edited.clone()),
                    "Edit"
                }
            }
        }
    }
}
