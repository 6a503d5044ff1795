//! Order billing form route handlers.
//!
//! The page is server-rendered; the input-handler script only calls
//! [`update_field`] so the read-only full name follows each keystroke.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use order_billing_core::{
    Field, FieldError, FormController, Receipt, SubmitError, Theme, ZIP_LENGTH,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::{clear_order_form, load_order_form, load_theme, save_order_form};

/// Display data for one form input.
#[derive(Debug, Clone)]
pub struct FieldView {
    pub name: &'static str,
    pub label: String,
    pub value: String,
    pub input_type: &'static str,
    pub readonly: bool,
    pub maxlength: Option<usize>,
    pub pattern: Option<&'static str>,
    pub error: Option<String>,
}

impl FieldView {
    fn new(field: Field, form: &FormController) -> Self {
        let label = if field.is_required() {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };
        let is_zip = field == Field::Zip;

        Self {
            name: field.as_str(),
            label,
            value: form.state().value(field).to_string(),
            input_type: if field == Field::Email { "email" } else { "text" },
            readonly: !field.is_editable(),
            maxlength: is_zip.then_some(ZIP_LENGTH),
            pattern: is_zip.then_some("[0-9]*"),
            error: form.errors().message(field),
        }
    }
}

/// Order billing form page template.
#[derive(Template, WebTemplate)]
#[template(path = "order_form/index.html")]
pub struct OrderFormTemplate {
    pub theme: Theme,
    pub basic_fields: Vec<FieldView>,
    pub address_fields: Vec<FieldView>,
}

impl OrderFormTemplate {
    fn new(form: &FormController, theme: Theme) -> Self {
        Self {
            theme,
            basic_fields: Field::BASIC
                .into_iter()
                .map(|field| FieldView::new(field, form))
                .collect(),
            address_fields: Field::ADDRESS
                .into_iter()
                .map(|field| FieldView::new(field, form))
                .collect(),
        }
    }
}

/// Acknowledgment page shown after a successful submission.
#[derive(Template, WebTemplate)]
#[template(path = "order_form/submitted.html")]
pub struct SubmittedTemplate {
    pub theme: Theme,
    pub receipt: Receipt,
}

/// Posted order form. Read-only inputs are posted by browsers too and are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormInput {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub county: Option<String>,
}

impl OrderFormInput {
    /// Posted values paired with their fields; absent inputs are skipped.
    fn into_updates(self) -> impl Iterator<Item = (Field, String)> {
        [
            (Field::Email, self.email),
            (Field::FirstName, self.first_name),
            (Field::LastName, self.last_name),
            (Field::Address, self.address),
            (Field::Address2, self.address2),
            (Field::City, self.city),
            (Field::State, self.state),
            (Field::Zip, self.zip),
            (Field::County, self.county),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

/// Single field edit sent by the input handler.
#[derive(Debug, Deserialize)]
pub struct FieldUpdate {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Derived values returned after a field edit.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedFields {
    pub full_name: String,
}

/// Display the order form.
///
/// GET /
#[instrument(skip_all)]
pub async fn show(session: Session) -> Result<impl IntoResponse> {
    let form = load_order_form(&session).await?;
    let theme = load_theme(&session).await?;

    Ok(OrderFormTemplate::new(&form, theme))
}

/// Apply one field edit.
///
/// POST /fields
///
/// No validation runs here; errors only change on submit.
#[instrument(skip_all, fields(field = %update.name))]
pub async fn update_field(
    session: Session,
    Form(update): Form<FieldUpdate>,
) -> Result<Json<DerivedFields>> {
    let mut form = load_order_form(&session).await?;
    let field = form.update_field_by_name(&update.name, update.value)?;
    save_order_form(&session, &form).await?;

    tracing::debug!(%field, "Order form field updated");

    Ok(Json(DerivedFields {
        full_name: form.state().full_name().to_string(),
    }))
}

/// Submit the order form.
///
/// POST /
///
/// Valid forms render the acknowledgment and are discarded; nothing is sent
/// anywhere. Invalid forms are re-rendered with inline errors and 422.
#[instrument(skip_all)]
pub async fn submit(session: Session, Form(input): Form<OrderFormInput>) -> Result<Response> {
    let mut form = load_order_form(&session).await?;
    let theme = load_theme(&session).await?;

    for (field, value) in input.into_updates() {
        form.update_field(field, value)?;
    }

    match form.submit() {
        Ok(receipt) => {
            clear_order_form(&session).await?;
            tracing::info!(tracking = %receipt.tracking, "Order form submitted");
            add_breadcrumb(
                "order_form",
                "Submitted order form",
                Some(&[("tracking", receipt.tracking.as_str())]),
            );
            Ok(SubmittedTemplate { theme, receipt }.into_response())
        }
        Err(SubmitError::Invalid { count }) => {
            save_order_form(&session, &form).await?;
            let failed: Vec<&str> = form
                .errors()
                .iter()
                .map(|(field, _)| field.as_str())
                .collect();
            tracing::info!(error_count = count, fields = ?failed, "Order form rejected");
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                OrderFormTemplate::new(&form, theme),
            )
                .into_response())
        }
        Err(SubmitError::AlreadySubmitted) => Err(AppError::Field(FieldError::AlreadySubmitted)),
    }
}
