pub mod config;
pub mod error;

// Date range selector state
pub mod date_range;
pub mod month_pager;
pub mod popover;
pub mod range_selection;
pub mod selector;

// Forms and navigation
pub mod app_shell;
pub mod field;
pub mod notifications;

// Data table state
pub mod settings_store;
pub mod table_query;

pub use app_shell::*;
pub use config::*;
pub use date_range::*;
pub use error::*;
pub use field::*;
pub use month_pager::*;
pub use notifications::*;
pub use popover::*;
pub use range_selection::*;
pub use selector::*;
pub use settings_store::*;
pub use table_query::*;
