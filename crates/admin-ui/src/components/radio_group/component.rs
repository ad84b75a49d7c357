use admin_types::{field_label, is_selectable, FieldOption};
use dioxus::prelude::*;
use dioxus_primitives::radio_group as prim;

#[component]
pub fn RadioGroup(
    #[props(default)] label: String,
    #[props(default = false)] required: bool,
    options: Vec<FieldOption>,
    #[props(default)] value: String,
    /// Lay the options out on one line.
    #[props(default = false)]
    row: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_change: EventHandler<String>,
) -> Element {
    let caption = field_label(&label, required);
    let choices = options.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        fieldset { class: "admin-radio-group", "data-row": row, disabled,
            if !label.is_empty() {
                legend { class: "admin-radio-group-label", "{caption}" }
            }
            prim::RadioGroup {
                class: "admin-radio-group-items",
                default_value: value.clone(),
                on_value_change: move |picked: String| {
                    if is_selectable(&choices, &picked, disabled) {
                        on_change.call(picked);
                    }
                },
                for (index, choice) in options.iter().enumerate() {
                    label {
                        key: "{choice.value}",
                        class: "admin-radio-option",
                        "data-disabled": disabled || choice.disabled,
                        prim::RadioItem {
                            class: "admin-radio-item".to_string(),
                            value: choice.value.clone(),
                            index,
                            disabled: disabled || choice.disabled,
                        }
                        span { "{choice.label}" }
                    }
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

    #[test]
    fn renders_each_option_in_a_row() {
        fn app() -> Element {
            rsx! {
                RadioGroup {
                    label: "Status",
                    required: true,
                    row: true,
                    value: "draft",
                    options: vec![
                        FieldOption::new("Active", "active"),
                        FieldOption::new("Draft", "draft"),
                        FieldOption::new("Archived", "archived").disabled(),
                    ],
                }
            }
        }
        let html = render(app);
        assert!(html.contains("Status *"));
        assert_eq!(html.matches("admin-radio-option").count(), 3);
        assert!(html.contains("data-row=true") || html.contains("data-row=\"true\""));
        assert!(html.contains(">Archived</span>"));
    }
}
