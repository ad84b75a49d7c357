use admin_types::account_initials;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBars;
use dioxus_free_icons::Icon;
use dioxus_primitives::navbar as prim;

use crate::components::notifications::Notifications;

/// Signed-in account shown at the right of the [`Navbar`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavbarAccount {
    pub name: String,
    pub subtext: Option<String>,
    pub avatar_url: Option<String>,
}

#[component]
pub fn Navbar(
    #[props(default)] title: String,
    /// Shows the hamburger button when set.
    #[props(default)]
    on_drawer_toggle: Option<EventHandler<()>>,
    #[props(default = false)] show_notifications: bool,
    #[props(default)] notification_count: u32,
    #[props(default)] on_notifications: EventHandler<()>,
    #[props(default)] account: Option<NavbarAccount>,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Navbar { class: "admin-navbar",
            div { class: "admin-navbar-start",
                if let Some(toggle) = on_drawer_toggle {
                    button {
                        class: "admin-navbar-toggle",
                        r#type: "button",
                        "aria-label": "Open drawer",
                        onclick: move |_| toggle.call(()),
                        Icon { width: 18, height: 18, icon: FaBars }
                    }
                }
                if !title.is_empty() {
                    span { class: "admin-navbar-title", "{title}" }
                }
            }
            div { class: "admin-navbar-content", {children} }
            div { class: "admin-navbar-end",
                if show_notifications && notification_count > 0 {
                    Notifications {
                        count: notification_count,
                        on_click: move |_| on_notifications.call(()),
                    }
                }
                if let Some(account) = account {
                    AccountBlock { account }
                }
            }
        }
    }
}

#[component]
fn AccountBlock(account: NavbarAccount) -> Element {
    let initials = account_initials(&account.name);

    rsx! {
        div { class: "admin-navbar-account",
            if let Some(url) = account.avatar_url.as_ref() {
                img { class: "admin-navbar-avatar", src: "{url}", alt: "{account.name}" }
            } else {
                span { class: "admin-navbar-avatar", "aria-hidden": "true", "{initials}" }
            }
            div { class: "admin-navbar-account-text",
                span { class: "admin-navbar-account-name", "{account.name}" }
                if let Some(subtext) = account.subtext.as_ref() {
                    span { class: "admin-navbar-account-subtext", "{subtext}" }
                }
            }
        }
    }
}
