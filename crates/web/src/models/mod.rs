//! Session-scoped models for the order form.

pub mod session;

pub use session::{clear_order_form, load_order_form, load_theme, save_order_form, save_theme};
