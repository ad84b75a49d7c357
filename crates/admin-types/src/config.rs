use serde::{Deserialize, Serialize};

use crate::table_query::Order;

/// What a calendar click does when it would put the bounds out of order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Leave the clicked bound unchanged and raise "Invalid range".
    #[default]
    Reject,
    /// Accept the click and clear the opposite bound.
    ClearOpposite,
}

impl RangePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangePolicy::Reject => "reject",
            RangePolicy::ClearOpposite => "clear_opposite",
        }
    }
}

/// Date range picker behavior.
///
/// Every field defaults so that a missing or partial `[picker]` table
/// yields the stock picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickerConfig {
    #[serde(default)]
    pub invalid_range_policy: RangePolicy,
    /// Days added to a date typed into one of the text inputs.
    #[serde(default = "default_input_day_offset")]
    pub input_day_offset: i64,
    /// `chrono` format used for the text inputs. The browser date control
    /// only speaks `%Y-%m-%d`; any other format switches the inputs to
    /// plain text (see [`PickerConfig::input_type`]).
    #[serde(default = "default_input_format")]
    pub input_format: String,
    #[serde(default = "default_popover_title")]
    pub popover_title: String,
}

/// The only format a native `type="date"` input reads and writes.
pub const NATIVE_DATE_FORMAT: &str = "%Y-%m-%d";

impl PickerConfig {
    /// HTML input type for the typed bounds.
    pub fn input_type(&self) -> &'static str {
        if self.input_format == NATIVE_DATE_FORMAT {
            "date"
        } else {
            "text"
        }
    }
}

fn default_input_day_offset() -> i64 {
    1
}

fn default_input_format() -> String {
    NATIVE_DATE_FORMAT.to_string()
}

fn default_popover_title() -> String {
    "Select Date Range".to_string()
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            invalid_range_policy: RangePolicy::default(),
            input_day_offset: default_input_day_offset(),
            input_format: default_input_format(),
            popover_title: default_popover_title(),
        }
    }
}

/// Initial table query values used when neither the URL nor the caller
/// provides one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableDefaults {
    #[serde(default)]
    pub order: Order,
    #[serde(default = "default_order_by")]
    pub order_by: String,
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: u32,
    #[serde(default = "default_rows_per_page_options")]
    pub rows_per_page_options: Vec<u32>,
}

fn default_order_by() -> String {
    "id".to_string()
}

fn default_rows_per_page() -> u32 {
    5
}

fn default_rows_per_page_options() -> Vec<u32> {
    vec![5, 10, 25]
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            order: Order::default(),
            order_by: default_order_by(),
            rows_per_page: default_rows_per_page(),
            rows_per_page_options: default_rows_per_page_options(),
        }
    }
}

/// Top-level config file structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UiConfig {
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub table: TableDefaults,
}

impl UiConfig {
    /// Parse a TOML document, falling back to defaults for anything missing.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = UiConfig::from_toml_str("").unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.picker.input_day_offset, 1);
        assert_eq!(config.picker.invalid_range_policy, RangePolicy::Reject);
        assert_eq!(config.table.rows_per_page, 5);
        assert_eq!(config.table.order_by, "id");
    }

    #[test]
    fn partial_picker_table_keeps_other_defaults() {
        let config = UiConfig::from_toml_str(
            r#"
            [picker]
            invalid_range_policy = "clear_opposite"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.picker.invalid_range_policy,
            RangePolicy::ClearOpposite
        );
        assert_eq!(config.picker.input_day_offset, 1);
        assert_eq!(config.picker.input_format, "%Y-%m-%d");
        assert_eq!(config.picker.input_type(), "date");
        assert_eq!(config.table, TableDefaults::default());
    }

    #[test]
    fn full_toml() {
        let config = UiConfig::from_toml_str(
            r#"
            [picker]
            invalid_range_policy = "reject"
            input_day_offset = 0
            input_format = "%d/%m/%Y"
            popover_title = "Pick dates"

            [table]
            order = "desc"
            order_by = "name"
            rows_per_page = 10
            rows_per_page_options = [10, 50]
            "#,
        )
        .unwrap();
        assert_eq!(config.picker.input_day_offset, 0);
        assert_eq!(config.picker.input_format, "%d/%m/%Y");
        assert_eq!(config.picker.input_type(), "text");
        assert_eq!(config.picker.popover_title, "Pick dates");
        assert_eq!(config.table.order, Order::Desc);
        assert_eq!(config.table.order_by, "name");
        assert_eq!(config.table.rows_per_page_options, vec![10, 50]);
    }

    #[test]
    fn unknown_policy_is_an_error() {
        let result = UiConfig::from_toml_str(
            r#"
            [picker]
            invalid_range_policy = "shrug"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn policy_keys_match_serde_names() {
        for policy in [RangePolicy::Reject, RangePolicy::ClearOpposite] {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy.as_str()));
        }
    }
}
