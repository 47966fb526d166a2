/// Contact submission routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use folio_core::{ContactAck, ContactSubmission, StoredSubmission};
use uuid::Uuid;

/// POST /api/contact
/// Deliver a contact message; every field is required
pub async fn submit_contact(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ContactAck>> {
    let Json(submission) = payload?;
    submission.validate()?;

    let ack = app_state.sender.send(submission).await?;
    Ok(Json(ack))
}

/// GET /api/contact/submissions
/// Delivered messages, newest first
pub async fn list_submissions(State(app_state): State<AppState>) -> Json<Vec<StoredSubmission>> {
    Json(app_state.inbox.list())
}

/// POST /api/contact/submissions/:id/read
/// Flag a delivered message as read
pub async fn mark_submission_read(
    Path(id): Path<Uuid>,
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    if !app_state.inbox.mark_read(id) {
        return Err(ServerError::NotFound("Submission not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "success": true })))
}
