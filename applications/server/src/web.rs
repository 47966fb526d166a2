/// Server-rendered portfolio page
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use folio_core::{
    render_page, CategoryFilter, ContactForm, ContactSubmission, FolioError, PageState,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub category: Option<String>,
}

/// Fields posted by the contact form
#[derive(Debug, Default, Deserialize)]
pub struct ContactFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,

    /// Gallery filter active when the form was posted
    pub category: Option<String>,
}

impl ContactFormInput {
    fn into_parts(self) -> (ContactSubmission, Option<String>) {
        (
            ContactSubmission::new(self.name, self.email, self.subject, self.message),
            self.category,
        )
    }
}

/// GET /?category=AI/ML
/// The full page, project gallery narrowed to `category`
pub async fn index(
    State(app_state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let filter = CategoryFilter::from_query(query.category.as_deref())?;
    let state = PageState::default().with_filter(filter);

    Ok(Html(render_page(app_state.record, &state)))
}

/// POST /contact
/// Run the contact form cycle and render the page with its outcome
pub async fn submit_form(
    State(app_state): State<AppState>,
    Form(input): Form<ContactFormInput>,
) -> (StatusCode, Html<String>) {
    let (fields, category) = input.into_parts();
    // An unknown label from a hand-crafted post falls back to "All"
    let filter = CategoryFilter::from_query(category.as_deref()).unwrap_or_default();

    let mut form = ContactForm::with_fields(fields);
    let status = match form.submit(app_state.sender.as_ref()).await {
        Ok(_) => StatusCode::OK,
        Err(FolioError::MissingField(field)) => {
            tracing::debug!(field, "Contact form posted with an empty field");
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Err(e) => {
            tracing::warn!(error = %e, "Contact form rejected");
            StatusCode::BAD_REQUEST
        }
    };

    let state = PageState::default().with_filter(filter).with_form(form);
    (status, Html(render_page(app_state.record, &state)))
}
