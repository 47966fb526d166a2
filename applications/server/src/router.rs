/// HTTP routing
use crate::{api, state::AppState, web};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router: JSON API under `/api`, the page at `/`
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        // Portfolio record
        .route("/portfolio", get(api::portfolio::get_portfolio))
        .route("/profile", get(api::portfolio::get_profile))
        .route("/education", get(api::portfolio::list_education))
        .route("/patents", get(api::portfolio::list_patents))
        .route("/experience", get(api::portfolio::list_experience))
        .route("/experience/:id", get(api::portfolio::get_experience))
        .route("/skills", get(api::portfolio::get_skills))
        .route("/certifications", get(api::portfolio::list_certifications))
        .route("/awards", get(api::portfolio::list_awards))
        .route("/stats", get(api::portfolio::get_stats))
        // Projects
        .route("/projects", get(api::projects::list_projects))
        .route("/projects/:id", get(api::projects::get_project))
        // Contact
        .route("/contact", post(api::contact::submit_contact))
        .route("/contact/submissions", get(api::contact::list_submissions))
        .route(
            "/contact/submissions/:id/read",
            post(api::contact::mark_submission_read),
        );

    let page_routes = Router::new()
        .route("/", get(web::index))
        .route("/contact", post(web::submit_form));

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
