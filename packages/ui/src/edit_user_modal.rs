use directory::{DraftField, EditDraft};
use dioxus::prelude::*;

use crate::views::ModalOverlay;

/// Modal form editing one user's draft.
#[component]
pub fn EditUserModal(
    draft: EditDraft,
    #[props(default)] busy: bool,
    on_change: EventHandler<(DraftField, String)>,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            title: "Edit User Details",
            on_close: on_close,
            form {
                class: "modal-body",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                DraftInput {
                    id: "formFullName",
                    label: "Full Name",
                    input_type: "text",
                    placeholder: "Enter full name",
                    value: draft.full_name.clone(),
                    field: DraftField::FullName,
                    on_change: on_change,
                }
                DraftInput {
                    id: "formEmail",
                    label: "Email",
                    input_type: "email",
                    placeholder: "Enter email",
                    value: draft.email.clone(),
                    field: DraftField::Email,
                    on_change: on_change,
                }
                DraftInput {
                    id: "formPassword",
                    label: "Password",
                    input_type: "password",
                    placeholder: "Enter password (optional)",
                    value: draft.password.clone(),
                    field: DraftField::Password,
                    on_change: on_change,
                }
                DraftInput {
                    id: "formLocation",
                    label: "Location",
                    input_type: "text",
                    placeholder: "Enter location",
                    value: draft.location.clone(),
                    field: DraftField::Location,
                    on_change: on_change,
                }

                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: busy,
                        "Save Changes"
                    }
                }
            }
        }
    }
}

#[component]
fn DraftInput(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
    field: DraftField,
    on_change: EventHandler<(DraftField, String)>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { class: "form-label", r#for: id, "{label}" }
            input {
                id: id,
                class: "form-input",
                r#type: input_type,
                placeholder: placeholder,
                value: value,
                oninput: move |evt: FormEvent| on_change.call((field, evt.value())),
            }
        }
    }
}
