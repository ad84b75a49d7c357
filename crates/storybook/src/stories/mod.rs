pub mod date_range;
pub mod forms;
pub mod index;
pub mod shell;
pub mod table;

use dioxus::prelude::*;

use date_range::DateRangeStory;
use forms::FormsStory;
use index::Index;
use shell::ShellStory;
use table::TableStory;

/// Storybook routes, one per story.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(StoryLayout)]
    #[route("/")]
    Index {},
    #[route("/date-range-picker")]
    DateRangeStory {},
    #[route("/table")]
    TableStory {},
    #[route("/forms")]
    FormsStory {},
    #[route("/shell")]
    ShellStory {},
}

/// Sidebar with story links around the active story.
#[component]
fn StoryLayout() -> Element {
    rsx! {
        div { class: "storybook",
            nav { class: "storybook-nav",
                h1 { class: "storybook-brand", "Admin UI" }
                Link { to: Route::Index {}, "Overview" }
                Link { to: Route::DateRangeStory {}, "Date range picker" }
                Link { to: Route::TableStory {}, "Table" }
                Link { to: Route::FormsStory {}, "Forms and dialog" }
                Link { to: Route::ShellStory {}, "App shell" }
            }
            main { class: "storybook-main",
                Outlet::<Route> {}
            }
        }
    }
}
