use admin_types::FieldOption;
use admin_ui::{Button, ButtonVariant, Checkbox, Dialog, RadioGroup, Select, Switch};
use dioxus::prelude::*;

fn role_options() -> Vec<FieldOption> {
    vec![
        FieldOption::new("Admin", "admin"),
        FieldOption::new("Editor", "editor"),
        FieldOption::new("Viewer", "viewer"),
        FieldOption::new("Owner", "owner").disabled(),
    ]
}

fn status_options() -> Vec<FieldOption> {
    vec![
        FieldOption::new("Active", "active"),
        FieldOption::new("Draft", "draft"),
        FieldOption::new("Archived", "archived").disabled(),
    ]
}

#[component]
pub fn FormsStory() -> Element {
    let mut role = use_signal(String::new);
    let mut status = use_signal(|| "active".to_string());
    let mut notify = use_signal(|| true);
    let mut dense = use_signal(|| false);
    let mut dialog_open = use_signal(|| false);

    let role_error = role.read().is_empty().then(|| "Role is required".to_string());

    rsx! {
        section { class: "story",
            h2 { "Form controls" }
            div { class: "story-row",
                Select {
                    label: "Role",
                    required: true,
                    options: role_options(),
                    value: role(),
                    placeholder: "Pick a role".to_string(),
                    error: role_error,
                    on_change: move |value: String| role.set(value),
                }
                Select {
                    label: "Locked",
                    options: role_options(),
                    value: "viewer",
                    disabled: true,
                }
            }
            RadioGroup {
                label: "Status",
                row: true,
                options: status_options(),
                value: status(),
                on_change: move |value: String| status.set(value),
            }
            Checkbox {
                label: "Email me about changes",
                checked: notify(),
                on_change: move |value: bool| notify.set(value),
            }
            Switch {
                label: "Dense rows",
                checked: dense(),
                on_change: move |value: bool| dense.set(value),
            }
            p { class: "story-note",
                "role={role} status={status} notify={notify} dense={dense}"
            }

            h2 { "Dialog" }
            Button {
                variant: ButtonVariant::Contained,
                onclick: move |_| dialog_open.set(true),
                "Open dialog"
            }
            Dialog {
                open: dialog_open(),
                on_close: move |_| dialog_open.set(false),
                title: "Discard changes?".to_string(),
                dividers: true,
                full_screen: dense(),
                footer: rsx! {
                    Button { onclick: move |_| dialog_open.set(false), "Cancel" }
                    Button {
                        variant: ButtonVariant::Contained,
                        onclick: move |_| {
                            role.set(String::new());
                            status.set("active".to_string());
                            dialog_open.set(false);
                        },
                        "Discard"
                    }
                },
                p { "Role and status go back to their defaults." }
            }
        }
    }
}
