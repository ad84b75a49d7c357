use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// Labelled on/off switch. Controlled: the owner keeps `checked`.
#[component]
pub fn Switch(
    label: String,
    checked: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "admin-switch", "data-disabled": disabled,
            prim::Switch {
                class: "admin-switch-track",
                checked: Some(checked),
                disabled,
                on_checked_change: move |value: bool| on_change.call(value),
                prim::SwitchThumb { class: "admin-switch-thumb" }
            }
            span { class: "admin-switch-label", "{label}" }
        }
    }
}
