//! Theme toggle handler.

use axum::response::Redirect;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::{load_theme, save_theme};

/// Flip between light and dark, then return to the form.
///
/// POST /theme
///
/// Form values are untouched.
#[instrument(skip_all)]
pub async fn toggle(session: Session) -> Result<Redirect> {
    let theme = load_theme(&session).await?.toggled();
    save_theme(&session, theme).await?;

    tracing::debug!(%theme, "Theme toggled");

    Ok(Redirect::to("/"))
}
