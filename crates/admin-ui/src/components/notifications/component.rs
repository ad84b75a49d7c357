use admin_types::{badge_content, NOTIFICATION_BADGE_MAX};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBell;
use dioxus_free_icons::Icon;

/// Bell button with an unread-count badge.
#[component]
pub fn Notifications(
    count: u32,
    #[props(default = NOTIFICATION_BADGE_MAX)] max: u32,
    #[props(default)] on_click: EventHandler<()>,
) -> Element {
    let badge = badge_content(count, max);
    let label = match count {
        0 => "Notifications".to_string(),
        1 => "1 unread notification".to_string(),
        n => format!("{n} unread notifications"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            class: "notifications",
            r#type: "button",
            "aria-label": "{label}",
            onclick: move |_| on_click.call(()),
            Icon { width: 18, height: 18, icon: FaBell }
            if let Some(badge) = badge {
                span { class: "notifications-badge", "data-testid": "badge", "{badge}" }
            }
        }
    }
}
