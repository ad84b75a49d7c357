use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;
use dioxus_primitives::dialog as prim;

use crate::components::button::{Button, ButtonVariant};

/// Modal dialog with an optional title bar, body and action footer.
///
/// The owner holds the open flag; Escape and the close button both end up
/// in `on_close`. Narrow screens always get the full-screen layout.
#[component]
pub fn Dialog(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] title: Option<String>,
    /// Rule lines above and below the body.
    #[props(default = false)]
    dividers: bool,
    #[props(default = false)] full_screen: bool,
    #[props(default)] footer: Option<Element>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }
    let content_class = if full_screen {
        "admin-dialog admin-dialog-full-screen"
    } else {
        "admin-dialog"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot {
            class: "admin-dialog-overlay",
            open,
            on_open_change: move |next: bool| {
                if !next {
                    on_close.call(());
                }
            },
            prim::DialogContent {
                class: content_class,
                if let Some(title) = title {
                    div { class: "admin-dialog-header",
                        prim::DialogTitle { class: "admin-dialog-title", "{title}" }
                        Button {
                            variant: ButtonVariant::Icon,
                            title: "Close",
                            onclick: move |_| on_close.call(()),
                            Icon { width: 14, height: 14, icon: FaXmark }
                        }
                    }
                }
                div {
                    class: "admin-dialog-body",
                    "data-dividers": dividers,
                    {children}
                }
                if let Some(footer) = footer {
                    div { class: "admin-dialog-actions", {footer} }
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
    fn closed_dialog_renders_nothing() {
        fn app() -> Element {
            rsx! {
                Dialog { open: false, on_close: |_| {}, title: "Delete user", "Are you sure?" }
            }
        }
        let html = render(app);
        assert!(!html.contains("Delete user"));
        assert!(!html.contains("Are you sure?"));
    }

    #[test]
    fn open_dialog_renders_title_body_and_footer() {
        fn app() -> Element {
            rsx! {
                Dialog {
                    open: true,
                    on_close: |_| {},
                    title: "Delete user",
                    dividers: true,
                    footer: rsx! {
                        Button { "Cancel" }
                    },
                    "Are you sure?"
                }
            }
        }
        let html = render(app);
        assert!(html.contains("Delete user"));
        assert!(html.contains("title=\"Close\""));
        assert!(html.contains("Are you sure?"));
        assert!(html.contains("admin-dialog-actions"));
        assert!(html.contains("Cancel"));
    }

    #[test]
    fn untitled_dialog_has_no_header() {
        fn app() -> Element {
            rsx! {
                Dialog { open: true, on_close: |_| {}, "Body only" }
            }
        }
        let html = render(app);
        assert!(html.contains("Body only"));
        assert!(!html.contains("admin-dialog-header"));
        assert!(!html.contains("admin-dialog-actions"));
    }

    #[test]
    fn full_screen_dialog_gets_full_screen_class() {
        fn app() -> Element {
            rsx! {
                Dialog { open: true, on_close: |_| {}, full_screen: true, "Body" }
            }
        }
        let html = render(app);
        assert!(html.contains("admin-dialog-full-screen"));
    }
}
