// Primitives
pub mod button;
pub mod date_input;
pub mod dialog;
pub mod popover;

// Date range selection
pub mod date_range_picker;
pub mod range_calendar;

// Tables
pub mod data_table;
pub mod pagination;

// Forms
pub mod checkbox;
pub mod radio_group;
pub mod select;
pub mod switch;

// App shell
pub mod drawer;
pub mod navbar;
pub mod notifications;

pub use button::*;
pub use checkbox::*;
pub use data_table::*;
pub use date_input::*;
pub use date_range_picker::*;
pub use dialog::*;
pub use drawer::*;
pub use navbar::*;
pub use notifications::*;
pub use pagination::*;
pub use popover::*;
pub use radio_group::*;
pub use range_calendar::*;
pub use select::*;
pub use switch::*;
