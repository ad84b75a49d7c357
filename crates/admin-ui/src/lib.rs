//! Dioxus components for admin and dashboard screens.
//!
//! State machines live in `admin-types`; these components own one instance
//! each in a `Signal` and render from it.

pub mod components;

pub use admin_types;
pub use components::*;
