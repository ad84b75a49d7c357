use admin_types::TableQuery;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

use crate::components::button::{Button, ButtonVariant};

/// Visual treatment of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PaginationVariant {
    #[default]
    Clean,
    Contained,
    Outlined,
}

impl PaginationVariant {
    fn class(&self) -> &'static str {
        match self {
            PaginationVariant::Clean => "clean",
            PaginationVariant::Contained => "contained",
            PaginationVariant::Outlined => "outlined",
        }
    }
}

/// Page controls bound to a table's query state.
///
/// Pages are 1-based. Changing the page size returns to the first page.
#[component]
pub fn TablePagination(
    query: Signal<TableQuery>,
    total: usize,
    #[props(default = vec![5, 10, 25])] rows_per_page_options: Vec<u32>,
    #[props(default)] variant: PaginationVariant,
    #[props(default)] on_rows_per_page_change: EventHandler<u32>,
) -> Element {
    let mut query = query;
    let (page, rows_per_page) = {
        let current = query.read();
        (current.page, current.rows_per_page)
    };
    let page_count = query.read().page_count(total);
    let (first, last) = query.read().row_window(total);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "table-pagination",
            "data-variant": variant.class(),
            "data-testid": "table-pagination",
            label { class: "table-pagination-label",
                "Rows per page:"
                select {
                    class: "table-pagination-select",
                    value: "{rows_per_page}",
                    onchange: move |evt: FormEvent| {
                        match evt.value().parse::<u32>() {
                            Ok(n) => {
                                query.write().set_rows_per_page(n);
                                on_rows_per_page_change.call(n);
                            }
                            Err(e) => tracing::warn!(error = %e, "ignoring rows per page value"),
                        }
                    },
                    for choice in rows_per_page_options {
                        option {
                            key: "{choice}",
                            value: "{choice}",
                            selected: choice == rows_per_page,
                            "{choice}"
                        }
                    }
                }
            }
            span { class: "table-pagination-info", "{first}–{last} of {total}" }
            Button {
                variant: ButtonVariant::Icon,
                title: "Previous page",
                disabled: page <= 1,
                onclick: move |_| query.write().set_page(page.saturating_sub(1)),
                Icon { width: 12, height: 12, icon: FaChevronLeft }
            }
            Button {
                variant: ButtonVariant::Icon,
                title: "Next page",
                disabled: page >= page_count,
                onclick: move |_| query.write().set_page(page.saturating_add(1)),
                Icon { width: 12, height: 12, icon: FaChevronRight }
            }
        }
    }
}
