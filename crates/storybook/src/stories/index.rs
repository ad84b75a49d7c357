use dioxus::prelude::*;

use super::Route;

#[component]
pub fn Index() -> Element {
    rsx! {
        section { class: "story",
            h2 { "Admin UI components" }
            p {
                "Form widgets, tables and popovers for dashboard screens. "
                "Each story renders a component against live state."
            }
            ul { class: "story-list",
                li {
                    Link { to: Route::DateRangeStory {}, "Date range picker" }
                    ": typed inputs plus a paired calendar popover."
                }
                li {
                    Link { to: Route::TableStory {}, "Table" }
                    ": sorting, filters and paging kept in the URL."
                }
                li {
                    Link { to: Route::FormsStory {}, "Forms and dialog" }
                    ": select, radio, checkbox and switch plus a modal dialog."
                }
                li {
                    Link { to: Route::ShellStory {}, "App shell" }
                    ": drawer navigation with a navbar and notification badge."
                }
            }
        }
    }
}
