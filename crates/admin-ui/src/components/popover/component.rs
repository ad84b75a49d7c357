use dioxus::prelude::*;
use dioxus_primitives::popover as prim;
use dioxus_primitives::{ContentAlign, ContentSide};

/// Controlled popover hanging below its positioned parent.
///
/// Open state lives with the owner: the primitive reports Escape through
/// `on_open_change`, and a transparent backdrop turns outside clicks into
/// `on_close`. Clicks inside the panel do not reach the anchor.
#[component]
pub fn Popover(
    open: bool,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "popover-backdrop",
            "data-testid": "popover-backdrop",
            onclick: move |evt| {
                evt.stop_propagation();
                on_close.call(());
            },
        }
        prim::PopoverRoot {
            class: "popover-root",
            open,
            on_open_change: move |next: bool| {
                if !next {
                    on_close.call(());
                }
            },
            prim::PopoverContent {
                class: "popover-panel",
                side: ContentSide::Bottom,
                align: ContentAlign::Start,
                div {
                    class: "popover-body",
                    role: "presentation",
                    onclick: move |evt| evt.stop_propagation(),
                    {children}
                }
            }
        }
    }
}
