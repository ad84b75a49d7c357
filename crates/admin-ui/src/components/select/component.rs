use admin_types::{field_label, is_selectable, FieldOption};
use dioxus::prelude::*;

/// Native `<select>` over a list of [`FieldOption`]s.
///
/// `on_change` only fires for options that can be picked; disabled options
/// and a disabled field never report a change.
#[component]
pub fn Select(
    #[props(default)] label: String,
    #[props(default = false)] required: bool,
    options: Vec<FieldOption>,
    #[props(default)] value: String,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_change: EventHandler<String>,
) -> Element {
    let caption = field_label(&label, required);
    let invalid = error.as_deref().is_some_and(|e| !e.is_empty());
    let choices = options.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "admin-select", "data-invalid": invalid,
            if !label.is_empty() {
                label { class: "admin-select-label", "{caption}" }
            }
            select {
                class: "admin-select-input",
                value: "{value}",
                disabled,
                required,
                "aria-invalid": invalid,
                onchange: move |evt| {
                    let picked = evt.value();
                    if is_selectable(&choices, &picked, disabled) {
                        on_change.call(picked);
                    }
                },
                if let Some(placeholder) = placeholder.as_ref() {
                    option { value: "", disabled: true, "{placeholder}" }
                }
                for choice in options.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        disabled: choice.disabled,
                        selected: choice.value == value,
                        "{choice.label}"
                    }
                }
            }
            if invalid {
                if let Some(message) = error.as_ref() {
                    span { class: "admin-select-error", role: "alert", "{message}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn roles() -> Vec<FieldOption> {
        vec![
            FieldOption::new("Admin", "admin"),
            FieldOption::new("Editor", "editor"),
            FieldOption::new("Owner", "owner").disabled(),
        ]
    }

    #[test]
    fn renders_options_with_selection_and_required_marker() {
        fn app() -> Element {
            rsx! {
                Select { label: "Role", required: true, options: roles(), value: "editor" }
            }
        }
        let html = render(app);
        assert!(html.contains("Role *"));
        assert_eq!(html.matches("<option").count(), 3);
        assert!(html.contains("selected=true") || html.contains("selected=\"true\""));
        assert!(html.contains(">Owner</option>"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn error_message_marks_field_invalid() {
        fn app() -> Element {
            rsx! {
                Select {
                    label: "Role",
                    options: roles(),
                    placeholder: "Pick a role".to_string(),
                    error: "Role is required".to_string(),
                }
            }
        }
        let html = render(app);
        assert!(html.contains("Role is required"));
        assert!(html.contains("aria-invalid=true") || html.contains("aria-invalid=\"true\""));
        assert!(html.contains(">Pick a role</option>"));
    }
}
