pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::enrich;
use crate::interview;
use crate::jobs::handlers as job_handlers;
use crate::search::handlers as search_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs
        .route(
            "/api/v1/jobs",
            post(job_handlers::handle_create_job).get(job_handlers::handle_list_jobs),
        )
        .route("/api/v1/jobs/:id", get(job_handlers::handle_get_job))
        // Analysis pipeline
        .route(
            "/api/v1/jobs/:id/analyze",
            post(analysis_handlers::handle_analyze),
        )
        .route(
            "/api/v1/jobs/:id/output",
            get(analysis_handlers::handle_get_output),
        )
        .route("/api/v1/runs/:id", get(analysis_handlers::handle_get_run))
        // Sourcing
        .route(
            "/api/v1/jobs/:id/search-string",
            post(search_handlers::handle_search_string),
        )
        .route(
            "/api/v1/jobs/:id/candidates",
            post(search_handlers::handle_candidate_page),
        )
        // Interview prep
        .route(
            "/api/v1/jobs/:id/interview-questions",
            post(interview::handle_interview_questions),
        )
        // Contact enrichment
        .route("/api/v1/enrich", post(enrich::handle_enrich))
        .with_state(state)
}
