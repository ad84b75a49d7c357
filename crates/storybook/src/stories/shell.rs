use admin_ui::{use_drawer, AppShell, Drawer, DrawerItem, Navbar, NavbarAccount};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChartLine, FaGear, FaUsers};
use dioxus_free_icons::Icon;

const SECTIONS: [&str; 3] = ["Dashboard", "Users", "Settings"];

#[component]
pub fn ShellStory() -> Element {
    rsx! {
        section { class: "story",
            h2 { "App shell" }
            p { "Narrow the window to turn the drawer into an overlay." }
            div { class: "story-frame",
                AppShell { ShellFrame {} }
            }
        }
    }
}

#[component]
fn ShellFrame() -> Element {
    let mut drawer = use_drawer();
    let mut active = use_signal(|| 0usize);
    let mut unread = use_signal(|| 7u32);
    let horizontal = drawer().collapsed;
    let title = SECTIONS[active()];

    rsx! {
        Drawer {
            for (index, section) in SECTIONS.iter().enumerate() {
                DrawerItem {
                    key: "{section}",
                    text: section.to_string(),
                    active: active() == index,
                    horizontal,
                    icon: rsx! { SectionIcon { index } },
                    on_click: move |_| active.set(index),
                }
            }
        }
        div { class: "story-shell-main",
            Navbar {
                title: title.to_string(),
                on_drawer_toggle: move |_| drawer.write().toggle_mobile(),
                show_notifications: true,
                notification_count: unread(),
                on_notifications: move |_| unread.set(0),
                account: NavbarAccount {
                    name: "Ada Lovelace".to_string(),
                    subtext: Some("Administrator".to_string()),
                    avatar_url: None,
                },
            }
            div { class: "story-shell-body",
                p { "{title} content" }
                button {
                    r#type: "button",
                    onclick: move |_| unread += 1,
                    "New notification"
                }
            }
        }
    }
}

#[component]
fn SectionIcon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon { width: 16, height: 16, icon: FaChartLine } },
        1 => rsx! { Icon { width: 16, height: 16, icon: FaUsers } },
        _ => rsx! { Icon { width: 16, height: 16, icon: FaGear } },
    }
}
