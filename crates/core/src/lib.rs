//! Order Billing Core - Form state and validation library.
//!
//! This crate provides the logic behind the order billing form:
//! - `web` - Server-rendered form, sessions and theme toggle
//! - `integration-tests` - End-to-end tests against the web router
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! persistence. Every operation is a synchronous computation over the
//! current form snapshot.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails, tracking numbers, statuses and themes
//! - [`form`] - The [`FormController`] with its field state, derived full name and validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod form;
pub mod types;

pub use form::{
    Field, FieldError, FormController, FormPhase, OrderFormState, Receipt, SUCCESS_MESSAGE,
    SubmitError, ValidationError, ValidationErrors, ZIP_LENGTH,
};
pub use types::*;
