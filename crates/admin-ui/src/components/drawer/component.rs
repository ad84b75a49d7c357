use admin_types::DrawerState;
use dioxus::prelude::*;

/// Shares one [`DrawerState`] between a navbar and a drawer.
#[component]
pub fn AppShell(
    #[props(default = false)] default_collapsed: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_signal(|| DrawerState {
        mobile_open: false,
        collapsed: default_collapsed,
    });
    use_context_provider(|| state);

    let base = vec![Attribute::new("class", "app-shell", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "data-collapsed": state().collapsed,
            ..merged,
            {children}
        }
    }
}

/// Drawer state of the surrounding [`AppShell`].
pub fn use_drawer() -> Signal<DrawerState> {
    use_context::<Signal<DrawerState>>()
}

/// Side navigation. A permanent rail on wide screens and an overlay with
/// a backdrop on narrow ones.
#[component]
pub fn Drawer(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_drawer();
    let DrawerState {
        mobile_open,
        collapsed,
    } = state();

    let base = vec![
        Attribute::new("class", "drawer", None, false),
        Attribute::new(
            "data-state",
            if mobile_open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if mobile_open {
            div {
                class: "drawer-backdrop",
                "data-testid": "drawer-backdrop",
                onclick: move |_| state.write().close_mobile(),
            }
        }
        nav {
            "data-collapsed": collapsed,
            ..merged,
            {children}
            div { class: "drawer-spacer" }
            button {
                class: "drawer-collapse",
                r#type: "button",
                "aria-label": if collapsed { "Expand menu" } else { "Collapse menu" },
                onclick: move |_| state.write().toggle_collapsed(),
                if collapsed { "\u{00bb}" } else { "\u{00ab}" }
            }
        }
    }
}

/// One destination in a [`Drawer`]. Choosing it closes the mobile overlay.
#[component]
pub fn DrawerItem(
    text: String,
    #[props(default = false)] active: bool,
    /// Icon above the text instead of beside it.
    #[props(default = false)]
    horizontal: bool,
    #[props(default)] icon: Option<Element>,
    #[props(default)] on_click: EventHandler<()>,
) -> Element {
    let mut state = use_drawer();
    let collapsed = state().collapsed;

    rsx! {
        button {
            class: "drawer-item",
            r#type: "button",
            title: "{text}",
            "data-active": active,
            "data-horizontal": horizontal,
            "aria-current": if active { "page" } else { "false" },
            onclick: move |_| {
                state.write().close_mobile();
                on_click.call(());
            },
            if let Some(icon) = icon {
                span { class: "drawer-item-icon", {icon} }
            }
            if !collapsed {
                span { class: "drawer-item-text", "{text}" }
            }
        }
    }
}
