use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::UiError;

/// Keyed string storage for remembered UI settings.
///
/// Components receive an implementation instead of reaching for browser
/// storage directly.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// Process-local store. Used by the storybook and in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Read a JSON value. A missing key is `Ok(None)`; unreadable JSON is an error.
pub fn load_json<T: DeserializeOwned>(
    store: &impl SettingsStore,
    key: &str,
) -> Result<Option<T>, UiError> {
    store
        .get(key)
        .map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(UiError::from)
}

pub fn save_json<T: Serialize>(
    store: &mut impl SettingsStore,
    key: &str,
    value: &T,
) -> Result<(), UiError> {
    store.set(key, serde_json::to_string(value)?);
    Ok(())
}

/// Per-table preferences that survive a page reload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows_per_page: Option<u32>,
    #[serde(default)]
    pub hidden_columns: Vec<String>,
}

impl TableSettings {
    pub fn storage_key(table_id: &str) -> String {
        format!("table-settings:{table_id}")
    }

    /// Stored settings for `table_id`, or defaults when none are stored or
    /// the stored value is unreadable.
    pub fn load(store: &impl SettingsStore, table_id: &str) -> Self {
        match load_json(store, &Self::storage_key(table_id)) {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(table_id, error = %e, "discarding unreadable table settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut impl SettingsStore, table_id: &str) -> Result<(), UiError> {
        save_json(store, &Self::storage_key(table_id), self)
    }

    pub fn is_hidden(&self, column: &str) -> bool {
        self.hidden_columns.iter().any(|c| c == column)
    }

    pub fn toggle_column(&mut self, column: &str) {
        if self.is_hidden(column) {
            self.hidden_columns.retain(|c| c != column);
        } else {
            self.hidden_columns.push(column.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn memory_store_get_set_remove() {
        let mut store = MemorySettingsStore::new();
        assert!(store.is_empty());
        store.set("k", "v".to_string());
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn load_json_missing_key_is_none() {
        let store = MemorySettingsStore::new();
        let value: Option<u32> = load_json(&store, "nothing").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn load_json_bad_value_is_storage_error() {
        let mut store = MemorySettingsStore::new();
        store.set("n", "not json".to_string());
        let err = load_json::<u32>(&store, "n").unwrap_err();
        assert_eq!(err.kind, UiErrorKind::Storage);
    }

    #[test]
    fn table_settings_persist_per_table() {
        let mut store = MemorySettingsStore::new();
        let mut users = TableSettings {
            rows_per_page: Some(25),
            ..Default::default()
        };
        users.toggle_column("email");
        users.save(&mut store, "users").unwrap();

        assert_eq!(
            store.get("table-settings:users").as_deref(),
            Some(r#"{"rowsPerPage":25,"hiddenColumns":["email"]}"#)
        );
        assert_eq!(TableSettings::load(&store, "users"), users);
        assert_eq!(TableSettings::load(&store, "orders"), TableSettings::default());
    }

    #[test]
    fn unreadable_table_settings_fall_back_to_defaults() {
        let mut store = MemorySettingsStore::new();
        store.set("table-settings:users", "{".to_string());
        assert_eq!(TableSettings::load(&store, "users"), TableSettings::default());
    }

    #[test]
    fn toggle_column_round_trips() {
        let mut settings = TableSettings::default();
        settings.toggle_column("name");
        assert!(settings.is_hidden("name"));
        settings.toggle_column("name");
        assert!(!settings.is_hidden("name"));
    }
}
