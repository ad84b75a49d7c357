//! Bridge to the browser location for query-string synchronisation.
//!
//! Goes through `document::eval`, so desktop builds see an empty query and
//! ignore writes.

use dioxus::prelude::*;

/// The current `location.search` without the leading `?`.
pub async fn read_location_query() -> String {
    let eval = document::eval(
        r#"
        return window.location.search.replace(/^\?/, '');
        "#,
    );
    match eval.join::<String>().await {
        Ok(query) => query,
        Err(e) => {
            tracing::debug!(error = ?e, "location query unavailable");
            String::new()
        }
    }
}

/// Replace the query string of the current history entry.
pub fn replace_location_query(query: &str) {
    let encoded = serde_json::to_string(query).unwrap_or_else(|_| "\"\"".to_string());
    document::eval(&format!(
        r#"
        (function() {{
            var query = {encoded};
            var url = window.location.pathname + (query ? '?' + query : '') + window.location.hash;
            window.history.replaceState(window.history.state, '', url);
        }})();
        "#,
    ));
}
