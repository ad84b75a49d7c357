use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Text,
    Contained,
    Outlined,
    /// Square button holding a single icon.
    Icon,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Text => "text",
            ButtonVariant::Contained => "contained",
            ButtonVariant::Outlined => "outlined",
            ButtonVariant::Icon => "icon",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub title: String,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Plain `type="button"` button; never submits a surrounding form.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "admin-button", None, false),
        Attribute::new("data-variant", props.variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let disabled = props.disabled;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            disabled,
            title: "{props.title}",
            onclick: move |evt| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}
