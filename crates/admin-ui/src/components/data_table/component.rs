use admin_types::{Order, TableQuery};
use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "data-table", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged,
            table {
                {children}
            }
        }
    }
}

/// Table header section. Wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header cell without sorting.
#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Column header that sorts the table by `column` when clicked.
///
/// Clicking the active column flips the direction; any other column starts
/// ascending.
#[component]
pub fn SortableColumn(column: String, query: Signal<TableQuery>, children: Element) -> Element {
    let current = query.read();
    let active = current.order_by == column;
    let aria_sort = match (active, current.order) {
        (false, _) => "none",
        (true, Order::Asc) => "ascending",
        (true, Order::Desc) => "descending",
    };
    let arrow = match (active, current.order) {
        (false, _) => "",
        (true, Order::Asc) => "\u{2191}",
        (true, Order::Desc) => "\u{2193}",
    };
    drop(current);
    let mut query = query;

    rsx! {
        th { "aria-sort": aria_sort,
            button {
                r#type: "button",
                class: "data-table-sort",
                "data-active": active,
                onclick: move |_| {
                    query.write().sort_by(&column);
                    tracing::debug!(column = %column, "table sort changed");
                },
                {children}
                span { class: "data-table-sort-arrow", "{arrow}" }
            }
        }
    }
}

/// Table row; clickable when `onclick` is set.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Full-width row shown when there is nothing to list.
#[component]
pub fn DataTableEmpty(columns: usize, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{columns}", {children} }
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
    fn sortable_column_marks_active_direction() {
        fn app() -> Element {
            let query = use_signal(|| {
                let mut query = TableQuery::default();
                query.sort_by("name");
                query.sort_by("name");
                query
            });
            rsx! {
                DataTable {
                    DataTableHeader {
                        SortableColumn { column: "id", query, "ID" }
                        SortableColumn { column: "name", query, "Name" }
                        DataTableColumn { "Email" }
                    }
                    DataTableBody {
                        DataTableEmpty { columns: 3, "No rows" }
                    }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("aria-sort=\"descending\""));
        assert_eq!(html.matches("aria-sort=\"none\"").count(), 1);
        assert!(html.contains("colspan=\"3\""));
        assert!(html.contains("No rows"));
    }
}
