use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::config::TableDefaults;
use crate::error::UiError;

/// Column filters, `column -> condition` (e.g. `"status" -> "||$eq||open"`).
pub type SimpleFilter = BTreeMap<String, String>;

/// Free-form search object sent as JSON.
pub type Search = BTreeMap<String, Value>;

// URL parameter names.
const ORDER: &str = "order";
const ORDER_BY: &str = "orderBy";
const ROWS_PER_PAGE: &str = "rowsPerPage";
const PAGE: &str = "page";
const SIMPLE_FILTER: &str = "simpleFilter";
const SEARCH: &str = "search";

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Order::Asc),
            "desc" => Some(Order::Desc),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Order::Asc => Order::Desc,
            Order::Desc => Order::Asc,
        }
    }

    /// Keyword used in the `sort` request parameter.
    pub fn sort_keyword(&self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Values a caller may pin when a table mounts. URL parameters still win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableQueryOptions {
    pub order: Option<Order>,
    pub order_by: Option<String>,
    pub rows_per_page: Option<u32>,
    pub page: Option<u32>,
    pub simple_filter: Option<SimpleFilter>,
    pub search: Option<Search>,
}

/// Paging, sorting and filtering state of a data table.
///
/// `page` is 1-based. Empty filter/search maps are stored as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableQuery {
    pub order: Order,
    pub order_by: String,
    pub rows_per_page: u32,
    pub page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_filter: Option<SimpleFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<Search>,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self::from_defaults(&TableDefaults::default())
    }
}

impl TableQuery {
    pub fn from_defaults(defaults: &TableDefaults) -> Self {
        Self {
            order: defaults.order,
            order_by: defaults.order_by.clone(),
            rows_per_page: defaults.rows_per_page,
            page: 1,
            simple_filter: None,
            search: None,
        }
    }

    /// Build the initial state from a URL query string.
    ///
    /// Each field takes the URL value, then the caller's option, then the
    /// default. A zero or malformed number counts as absent, and so does
    /// filter JSON that does not parse.
    pub fn resolve(query_string: &str, options: &TableQueryOptions, defaults: &TableDefaults) -> Self {
        let params = parse_query_string(query_string);
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .filter(|v| !v.is_empty())
        };
        let number = |key: &str| match get(key).map(str::parse::<u32>) {
            Some(Ok(n)) if n > 0 => Some(n),
            Some(_) => {
                tracing::warn!(key, "ignoring malformed table query parameter");
                None
            }
            None => None,
        };

        Self {
            order: get(ORDER)
                .and_then(Order::from_key)
                .or(options.order)
                .unwrap_or(defaults.order),
            order_by: get(ORDER_BY)
                .map(str::to_string)
                .or_else(|| options.order_by.clone())
                .unwrap_or_else(|| defaults.order_by.clone()),
            rows_per_page: number(ROWS_PER_PAGE)
                .or(options.rows_per_page.filter(|n| *n > 0))
                .unwrap_or(defaults.rows_per_page),
            page: number(PAGE)
                .or(options.page.filter(|n| *n > 0))
                .unwrap_or(1),
            simple_filter: get(SIMPLE_FILTER)
                .and_then(|raw| parse_json_param(SIMPLE_FILTER, raw).ok())
                .or_else(|| options.simple_filter.clone())
                .filter(|f: &SimpleFilter| !f.is_empty()),
            search: get(SEARCH)
                .and_then(|raw| parse_json_param(SEARCH, raw).ok())
                .or_else(|| options.search.clone())
                .filter(|s: &Search| !s.is_empty()),
        }
    }

    /// Header click: a new column sorts ascending, the current one flips.
    pub fn sort_by(&mut self, column: &str) {
        if self.order_by == column {
            self.order = self.order.toggled();
        } else {
            self.order_by = column.to_string();
            self.order = Order::Asc;
        }
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Changing the page size starts over from the first page.
    pub fn set_rows_per_page(&mut self, rows_per_page: u32) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 1;
    }

    /// Merge filter changes. `None` or empty values drop the column.
    pub fn update_simple_filter<I>(&mut self, patch: I, reset_page: bool)
    where
        I: IntoIterator<Item = (String, Option<String>)>,
    {
        let mut filter = self.simple_filter.take().unwrap_or_default();
        for (key, value) in patch {
            match value.filter(|v| !v.is_empty()) {
                Some(value) => {
                    filter.insert(key, value);
                }
                None => {
                    filter.remove(&key);
                }
            }
        }
        self.simple_filter = Some(filter).filter(|f| !f.is_empty());
        if reset_page {
            self.page = 1;
        }
    }

    /// Merge search changes. `None`, `null` and `""` drop the key.
    pub fn update_search<I>(&mut self, patch: I, reset_page: bool)
    where
        I: IntoIterator<Item = (String, Option<Value>)>,
    {
        let mut search = self.search.take().unwrap_or_default();
        for (key, value) in patch {
            match value.filter(|v| !is_blank(v)) {
                Some(value) => {
                    search.insert(key, value);
                }
                None => {
                    search.remove(&key);
                }
            }
        }
        self.search = Some(search).filter(|s| !s.is_empty());
        if reset_page {
            self.page = 1;
        }
    }

    /// Write this state into `existing`, keeping unrelated parameters.
    ///
    /// Returns the new query string without a leading `?`.
    pub fn sync_query_string(&self, existing: &str) -> Result<String, UiError> {
        let simple_filter = self
            .simple_filter
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let search = self.search.as_ref().map(serde_json::to_string).transpose()?;

        let updates = [
            (ORDER, Some(self.order.as_str().to_string())),
            (ORDER_BY, Some(self.order_by.clone())),
            (ROWS_PER_PAGE, Some(self.rows_per_page.to_string())),
            (PAGE, Some(self.page.to_string())),
            (SIMPLE_FILTER, simple_filter),
            (SEARCH, search),
        ];
        Ok(merge_query_string(existing, &updates))
    }

    /// Parameters for the list request backing the table.
    pub fn request_params(&self, no_pagination: bool) -> Result<Vec<(String, String)>, UiError> {
        let mut params = Vec::new();
        if !no_pagination {
            params.push(("limit".to_string(), self.rows_per_page.to_string()));
        }
        params.push(("page".to_string(), self.page.to_string()));
        if !self.order_by.is_empty() {
            params.push((
                "sort".to_string(),
                format!("{},{}", self.order_by, self.order.sort_keyword()),
            ));
        }
        if let Some(filter) = &self.simple_filter {
            for (key, condition) in filter {
                params.push(("filter".to_string(), format!("{key}{condition}")));
            }
        }
        if let Some(search) = &self.search {
            params.push(("s".to_string(), serde_json::to_string(search)?));
        }
        Ok(params)
    }

    /// Number of pages for `total` rows. Never less than one.
    pub fn page_count(&self, total: usize) -> u32 {
        if self.rows_per_page == 0 {
            return 1;
        }
        let pages = total.div_ceil(self.rows_per_page as usize);
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    /// The rows of the current page out of an already sorted list.
    pub fn page_slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let per_page = self.rows_per_page as usize;
        let start = (self.page.saturating_sub(1) as usize)
            .saturating_mul(per_page)
            .min(rows.len());
        let end = start.saturating_add(per_page).min(rows.len());
        &rows[start..end]
    }

    /// 1-based positions of the first and last row on the current page,
    /// `(0, 0)` for an empty table.
    pub fn row_window(&self, total: usize) -> (usize, usize) {
        if total == 0 {
            return (0, 0);
        }
        let per_page = self.rows_per_page as usize;
        let skipped = (self.page.saturating_sub(1) as usize).saturating_mul(per_page);
        let first = skipped.saturating_add(1).min(total);
        let last = skipped.saturating_add(per_page).min(total);
        (first, last)
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn parse_json_param<T: serde::de::DeserializeOwned>(key: &str, raw: &str) -> Result<T, UiError> {
    serde_json::from_str(raw).map_err(|e| {
        tracing::warn!(key, error = %e, "ignoring malformed JSON query parameter");
        UiError::invalid_query(format!("{key}: {e}"))
    })
}

/// Split `a=1&b=2` (leading `?` allowed) into decoded pairs.
pub fn parse_query_string(query_string: &str) -> Vec<(String, String)> {
    query_string
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Some((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(e) => {
            tracing::warn!(raw, error = %e, "dropping undecodable query component");
            None
        }
    }
}

/// Set or delete keys in a query string, keeping everything else in place.
/// New keys are appended in the order given.
pub fn merge_query_string(existing: &str, updates: &[(&str, Option<String>)]) -> String {
    let mut pairs = parse_query_string(existing);
    for (key, value) in updates {
        match value {
            Some(value) => match pairs.iter_mut().find(|(k, _)| k == key) {
                Some(pair) => pair.1 = value.clone(),
                None => pairs.push((key.to_string(), value.clone())),
            },
            None => pairs.retain(|(k, _)| k != key),
        }
    }

    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Orders `a` before `b` when `a` is the larger value.
pub fn descending_comparator<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    if b < a {
        Ordering::Less
    } else if b > a {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Stable in-memory sort for tables without a backing service.
pub fn sort_rows<T, K, F>(rows: &mut [T], order: Order, key: F)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    rows.sort_by(|a, b| {
        let desc = descending_comparator(&key(a), &key(b));
        match order {
            Order::Desc => desc,
            Order::Asc => desc.reverse(),
        }
    });
}
