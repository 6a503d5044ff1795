//! Session-related types.
//!
//! Each browser session owns one order form and one theme preference. Both
//! live in the in-memory session store and vanish with the session.

use order_billing_core::{FormController, Theme};
use tower_sessions::Session;

/// Session keys for order form data.
mod keys {
    /// Key for the visitor's order form controller.
    pub const ORDER_FORM: &str = "order_form";

    /// Key for the visitor's theme preference.
    pub const THEME: &str = "theme";
}

/// Load the session's order form, creating and storing a fresh one on first visit.
///
/// The tracking number is generated here, once per form.
///
/// # Errors
///
/// Returns an error if the session cannot be read or written.
pub async fn load_order_form(
    session: &Session,
) -> Result<FormController, tower_sessions::session::Error> {
    if let Some(form) = session.get::<FormController>(keys::ORDER_FORM).await? {
        return Ok(form);
    }

    let form = FormController::new();
    tracing::debug!(tracking = %form.state().tracking(), "Created order form");
    save_order_form(session, &form).await?;
    Ok(form)
}

/// Store the order form back into the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_order_form(
    session: &Session,
    form: &FormController,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::ORDER_FORM, form).await
}

/// Discard the session's order form; the next visit starts a new one.
///
/// A session left with nothing in it is deleted from the store outright.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_order_form(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<FormController>(keys::ORDER_FORM).await?;
    if session.is_empty().await {
        session.flush().await?;
    }
    Ok(())
}

/// Current theme, defaulting to light.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn load_theme(session: &Session) -> Result<Theme, tower_sessions::session::Error> {
    Ok(session
        .get::<Theme>(keys::THEME)
        .await?
        .unwrap_or_default())
}

/// Store the theme preference.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_theme(
    session: &Session,
    theme: Theme,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::THEME, theme).await
}
