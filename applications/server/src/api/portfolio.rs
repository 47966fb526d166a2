/// Read-only portfolio record routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use folio_core::{
    Award, Certification, EducationEntry, ExperienceEntry, Patent, PortfolioRecord,
    PortfolioStats, Profile, Skills,
};

/// GET /api/portfolio
/// The whole record
pub async fn get_portfolio(State(app_state): State<AppState>) -> Json<PortfolioRecord> {
    Json(app_state.record.clone())
}

/// GET /api/profile
pub async fn get_profile(State(app_state): State<AppState>) -> Json<Profile> {
    Json(app_state.record.personal.clone())
}

/// GET /api/education
pub async fn list_education(State(app_state): State<AppState>) -> Json<Vec<EducationEntry>> {
    Json(app_state.record.education.clone())
}

/// GET /api/patents
pub async fn list_patents(State(app_state): State<AppState>) -> Json<Vec<Patent>> {
    Json(app_state.record.patents.clone())
}

/// GET /api/experience
pub async fn list_experience(State(app_state): State<AppState>) -> Json<Vec<ExperienceEntry>> {
    Json(app_state.record.experience.clone())
}

/// GET /api/experience/:id
pub async fn get_experience(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<ExperienceEntry>> {
    let entry = app_state
        .record
        .experience_by_id(&id)
        .ok_or_else(|| ServerError::NotFound("Experience entry not found".to_string()))?;

    Ok(Json(entry.clone()))
}

/// GET /api/skills
pub async fn get_skills(State(app_state): State<AppState>) -> Json<Skills> {
    Json(app_state.record.skills.clone())
}

/// GET /api/certifications
pub async fn list_certifications(
    State(app_state): State<AppState>,
) -> Json<Vec<Certification>> {
    Json(app_state.record.certifications.clone())
}

/// GET /api/awards
pub async fn list_awards(State(app_state): State<AppState>) -> Json<Vec<Award>> {
    Json(app_state.record.awards.clone())
}

/// GET /api/stats
/// Counters shown in the page summaries
pub async fn get_stats(State(app_state): State<AppState>) -> Json<PortfolioStats> {
    Json(app_state.record.stats())
}
