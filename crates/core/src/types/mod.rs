//! Core types for Order Billing.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod status;
pub mod tracking;

pub use email::{Email, EmailError};
pub use status::*;
pub use tracking::TrackingNumber;
