/// Project gallery routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use folio_core::{CategoryFilter, ProjectEntry, ProjectFilter};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    /// Category label, or "All"
    pub category: Option<String>,
}

/// GET /api/projects?category=AI/ML
/// Projects narrowed to one category; absent or "All" returns every project
pub async fn list_projects(
    State(app_state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Result<Json<Vec<ProjectEntry>>> {
    let filter = CategoryFilter::from_query(query.category.as_deref())?;

    let projects = ProjectFilter::new(filter)
        .apply(&app_state.record.projects)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(projects))
}

/// GET /api/projects/:id
pub async fn get_project(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<ProjectEntry>> {
    let project = app_state
        .record
        .project_by_id(&id)
        .ok_or_else(|| ServerError::NotFound("Project not found".to_string()))?;

    Ok(Json(project.clone()))
}
