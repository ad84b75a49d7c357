use admin_types::UiConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<UiConfig> = OnceLock::new();

/// Embedded so the same settings reach web and desktop builds.
const CONFIG_TOML: &str = include_str!("../storybook.toml");

/// Parse the embedded `storybook.toml` once. Safe to call repeatedly; only
/// the first call has an effect.
///
/// A file that does not parse falls back to the stock configuration.
pub fn load_ui_config() -> &'static UiConfig {
    CONFIG.get_or_init(|| match UiConfig::from_toml_str(CONFIG_TOML) {
        Ok(config) => {
            tracing::info!(
                policy = config.picker.invalid_range_policy.as_str(),
                rows_per_page = config.table.rows_per_page,
                "storybook config loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "storybook.toml did not parse, using defaults");
            UiConfig::default()
        }
    })
}
