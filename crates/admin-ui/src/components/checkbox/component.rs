use dioxus::prelude::*;
use dioxus_primitives::checkbox as prim;

use prim::CheckboxState;

/// Labelled checkbox reporting plain `bool` changes.
#[component]
pub fn Checkbox(
    label: String,
    #[props(default = false)] checked: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "admin-checkbox", "data-disabled": disabled,
            prim::Checkbox {
                class: "admin-checkbox-box",
                default_checked: if checked { CheckboxState::Checked } else { CheckboxState::Unchecked },
                disabled,
                on_checked_change: move |state: CheckboxState| {
                    on_change.call(matches!(state, CheckboxState::Checked));
                },
                prim::CheckboxIndicator { class: "admin-checkbox-indicator", "\u{2713}" }
            }
            span { class: "admin-checkbox-label", "{label}" }
        }
    }
}
