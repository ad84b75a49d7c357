use std::rc::Rc;

use dioxus::prelude::*;

/// Borderless `type="date"` input used inside composite date fields.
///
/// `on_mounted` hands out the element so the owner can move focus to it.
#[component]
pub fn DateInput(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<String>,
    #[props(default)] on_mounted: EventHandler<Rc<MountedData>>,
    #[props(default = "date".to_string())] input_type: String,
    #[props(default)] test_id: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "date-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value: value,
            disabled: disabled,
            "data-testid": "{test_id}",
            onmounted: move |evt: MountedEvent| on_mounted.call(evt.data()),
            oninput: move |evt: FormEvent| on_input.call(evt.value()),
            ..merged,
        }
    }
}
