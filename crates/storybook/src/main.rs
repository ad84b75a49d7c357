use admin_types::MemorySettingsStore;
use dioxus::prelude::*;

mod config;
mod stories;
mod url_query;

use stories::Route;

const STORYBOOK_CSS: Asset = asset!("/assets/storybook.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Remembered table settings for every story; lives as long as the tab.
    use_context_provider(|| Signal::new(MemorySettingsStore::new()));

    rsx! {
        document::Link { rel: "stylesheet", href: STORYBOOK_CSS }
        Router::<Route> {}
    }
}
