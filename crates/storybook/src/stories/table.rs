use admin_types::{
    sort_rows, MemorySettingsStore, Order, TableQuery, TableQueryOptions, TableSettings,
};
use admin_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, PaginationVariant, SortableColumn, TablePagination,
};
use dioxus::prelude::*;
use serde_json::json;

use crate::config::load_ui_config;
use crate::url_query::{read_location_query, replace_location_query};

const TABLE_ID: &str = "storybook-users";

/// Filter condition prefix for an equality match.
const EQ: &str = "||$eq||";

#[derive(Debug, Clone, PartialEq)]
struct SampleUser {
    id: u32,
    name: &'static str,
    email: &'static str,
    role: &'static str,
}

const USERS: &[SampleUser] = &[
    SampleUser { id: 1, name: "Ada Lovelace", email: "ada@example.com", role: "admin" },
    SampleUser { id: 2, name: "Grace Hopper", email: "grace@example.com", role: "editor" },
    SampleUser { id: 3, name: "Alan Turing", email: "alan@example.com", role: "viewer" },
    SampleUser { id: 4, name: "Katherine Johnson", email: "katherine@example.com", role: "editor" },
    SampleUser { id: 5, name: "Edsger Dijkstra", email: "edsger@example.com", role: "viewer" },
    SampleUser { id: 6, name: "Barbara Liskov", email: "barbara@example.com", role: "admin" },
    SampleUser { id: 7, name: "Donald Knuth", email: "donald@example.com", role: "viewer" },
    SampleUser { id: 8, name: "Margaret Hamilton", email: "margaret@example.com", role: "editor" },
    SampleUser { id: 9, name: "John Backus", email: "john@example.com", role: "viewer" },
    SampleUser { id: 10, name: "Frances Allen", email: "frances@example.com", role: "admin" },
    SampleUser { id: 11, name: "Ken Thompson", email: "ken@example.com", role: "viewer" },
    SampleUser { id: 12, name: "Radia Perlman", email: "radia@example.com", role: "editor" },
];

/// The `$cont` term of the name search, if any.
fn name_search(query: &TableQuery) -> Option<&str> {
    query
        .search
        .as_ref()
        .and_then(|s| s.get("name"))
        .and_then(|v| v.get("$cont"))
        .and_then(|v| v.as_str())
}

/// Apply the query's filter, search and sort to the in-memory rows.
fn visible_rows(query: &TableQuery) -> Vec<SampleUser> {
    let role = query
        .simple_filter
        .as_ref()
        .and_then(|f| f.get("role"))
        .and_then(|cond| cond.strip_prefix(EQ))
        .map(str::to_string);
    let needle = name_search(query).map(str::to_lowercase);

    let mut rows: Vec<SampleUser> = USERS
        .iter()
        .filter(|u| role.as_deref().map_or(true, |r| u.role == r))
        .filter(|u| {
            needle
                .as_deref()
                .map_or(true, |n| u.name.to_lowercase().contains(n))
        })
        .cloned()
        .collect();

    match query.order_by.as_str() {
        "name" => sort_rows(&mut rows, query.order, |u| u.name),
        "role" => sort_rows(&mut rows, query.order, |u| u.role),
        _ => sort_rows(&mut rows, query.order, |u| u.id),
    }
    rows
}

#[component]
pub fn TableStory() -> Element {
    let config = load_ui_config();
    let mut store = use_context::<Signal<MemorySettingsStore>>();
    let mut settings = use_signal(|| TableSettings::load(&*store.peek(), TABLE_ID));
    let mut query = use_signal(|| {
        let mut query = TableQuery::from_defaults(&config.table);
        if let Some(rows) = settings.peek().rows_per_page {
            query.set_rows_per_page(rows);
        }
        query
    });
    let mut loaded = use_signal(|| false);

    // Pick up state from the URL once, then keep the URL in step.
    use_future(move || async move {
        let location = read_location_query().await;
        let options = TableQueryOptions {
            rows_per_page: settings.peek().rows_per_page,
            ..TableQueryOptions::default()
        };
        query.set(TableQuery::resolve(&location, &options, &config.table));
        loaded.set(true);
    });

    use_effect(move || {
        let current = query.read().clone();
        if !loaded() {
            return;
        }
        spawn(async move {
            let existing = read_location_query().await;
            match current.sync_query_string(&existing) {
                Ok(next) if next != existing => replace_location_query(&next),
                Ok(_) => {}
                Err(e) => tracing::warn!(error = %e, "could not write table state to the URL"),
            }
        });
    });

    let snapshot = query.read().clone();
    let rows = visible_rows(&snapshot);
    let total = rows.len();
    let page_rows = snapshot.page_slice(&rows).to_vec();
    let request_preview = match snapshot.request_params(false) {
        Ok(params) => params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("\n"),
        Err(e) => e.to_string(),
    };
    let show_email = !settings.read().is_hidden("email");
    let search_text = name_search(&snapshot).unwrap_or("").to_string();
    let columns = if show_email { 4 } else { 3 };
    let role_value = snapshot
        .simple_filter
        .as_ref()
        .and_then(|f| f.get("role"))
        .and_then(|c| c.strip_prefix(EQ))
        .unwrap_or("")
        .to_string();
    let order_label = match snapshot.order {
        Order::Asc => "ascending",
        Order::Desc => "descending",
    };

    rsx! {
        section { class: "story",
            h2 { "Table" }
            p { "Sorted by {snapshot.order_by} ({order_label}). Page state is mirrored into the address bar." }

            div { class: "story-toolbar",
                input {
                    class: "story-search",
                    placeholder: "Search by name",
                    value: "{search_text}",
                    oninput: move |evt: FormEvent| {
                        let text = evt.value();
                        let value = (!text.is_empty()).then(|| json!({ "$cont": text }));
                        query.write().update_search([("name".to_string(), value)], true);
                    },
                }
                select {
                    class: "story-select",
                    value: "{role_value}",
                    onchange: move |evt: FormEvent| {
                        let role = evt.value();
                        let condition = (!role.is_empty()).then(|| format!("{EQ}{role}"));
                        query.write().update_simple_filter([("role".to_string(), condition)], true);
                    },
                    option { value: "", "All roles" }
                    option { value: "admin", "Admin" }
                    option { value: "editor", "Editor" }
                    option { value: "viewer", "Viewer" }
                }
                label { class: "story-toggle",
                    input {
                        r#type: "checkbox",
                        checked: show_email,
                        onchange: move |_| {
                            settings.write().toggle_column("email");
                            if let Err(e) = settings.peek().save(&mut *store.write(), TABLE_ID) {
                                tracing::warn!(error = %e, "could not remember table columns");
                            }
                        },
                    }
                    "Show email"
                }
            }

            DataTable {
                DataTableHeader {
                    SortableColumn { column: "id", query, "ID" }
                    SortableColumn { column: "name", query, "Name" }
                    if show_email {
                        DataTableColumn { "Email" }
                    }
                    SortableColumn { column: "role", query, "Role" }
                }
                DataTableBody {
                    if page_rows.is_empty() {
                        DataTableEmpty { columns, "No users match." }
                    }
                    for user in page_rows {
                        DataTableRow { key: "{user.id}",
                            DataTableCell { "{user.id}" }
                            DataTableCell { "{user.name}" }
                            if show_email {
                                DataTableCell { "{user.email}" }
                            }
                            DataTableCell { "{user.role}" }
                        }
                    }
                }
            }
            TablePagination {
                query,
                total,
                rows_per_page_options: config.table.rows_per_page_options.clone(),
                variant: PaginationVariant::Outlined,
                on_rows_per_page_change: move |rows: u32| {
                    settings.write().rows_per_page = Some(rows);
                    if let Err(e) = settings.peek().save(&mut *store.write(), TABLE_ID) {
                        tracing::warn!(error = %e, "could not remember rows per page");
                    }
                },
            }

            h3 { "Request parameters" }
            pre { class: "story-code", "{request_preview}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_query_lists_everyone_by_id() {
        let rows = visible_rows(&TableQuery::default());
        assert_eq!(rows.len(), USERS.len());
        assert_eq!(rows[0].id, 1);
    }

    #[test]
    fn role_filter_and_name_search_combine() {
        let mut query = TableQuery::default();
        query.update_simple_filter([("role".to_string(), Some(format!("{EQ}admin")))], true);
        assert_eq!(visible_rows(&query).len(), 3);

        query.update_search([("name".to_string(), Some(json!({ "$cont": "ADA" })))], true);
        let rows = visible_rows(&query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ada Lovelace");
    }

    #[test]
    fn name_search_reads_back_restored_term() {
        let query = TableQuery::resolve(
            "search=%7B%22name%22%3A%7B%22%24cont%22%3A%22grace%22%7D%7D",
            &TableQueryOptions::default(),
            &Default::default(),
        );
        assert_eq!(name_search(&query), Some("grace"));
        assert_eq!(visible_rows(&query).len(), 1);
        assert_eq!(name_search(&TableQuery::default()), None);
    }

    #[test]
    fn sorts_by_requested_column() {
        let mut query = TableQuery::default();
        query.sort_by("name");
        query.sort_by("name");
        let rows = visible_rows(&query);
        assert_eq!(rows[0].name, "Radia Perlman");
        assert_eq!(rows.last().map(|u| u.name), Some("Ada Lovelace"));
    }
}
