//! Axum route handlers for sourcing: search-string generation and
//! paginated candidate search.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::websearch::{SearchResult, PAGE_SIZE};
use super::{generate_search_string, SearchMode};
use crate::errors::AppError;
use crate::jobs::find_job;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchStringRequest {
    pub mode: SearchMode,
    pub company_name: Option<String>,
    pub metro_area: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchStringResponse {
    pub job_id: Uuid,
    pub search_string: String,
}

/// POST /api/v1/jobs/:id/search-string
pub async fn handle_search_string(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Json(req): Json<SearchStringRequest>,
) -> Result<Json<SearchStringResponse>, AppError> {
    let job = find_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let company_name = req.company_name.as_deref().map(str::trim).filter(|c| !c.is_empty());
    if req.mode == SearchMode::CandidatesAtCompany && company_name.is_none() {
        return Err(AppError::Validation(
            "company_name is required for candidates-at-company searches".to_string(),
        ));
    }

    let search_string = generate_search_string(
        &state.llm,
        &state.db,
        &job,
        req.mode,
        company_name,
        req.metro_area.as_deref().map(str::trim).filter(|m| !m.is_empty()),
    )
    .await?;

    Ok(Json(SearchStringResponse {
        job_id,
        search_string,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CandidatePageRequest {
    #[serde(default)]
    pub page: u32,
}

#[derive(Debug, Serialize)]
pub struct CandidatePageResponse {
    pub job_id: Uuid,
    pub page: u32,
    /// Every result accumulated for this job so far, not just the new page.
    pub results: Vec<SearchResult>,
}

/// POST /api/v1/jobs/:id/candidates
///
/// Runs one page of the job's boolean search. Page 0 starts a fresh result
/// list for the job; later pages append to it.
pub async fn handle_candidate_page(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Json(req): Json<CandidatePageRequest>,
) -> Result<Json<CandidatePageResponse>, AppError> {
    let job = find_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let query = job
        .search_string
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| {
            AppError::Validation(
                "job has no search string; generate one before searching".to_string(),
            )
        })?
        .to_string();

    let page_results = state.websearch.search(&query, req.page * PAGE_SIZE).await?;

    if req.page == 0 {
        state.cache.set_search_results(job_id, page_results);
    } else {
        state.cache.add_to_search_results(job_id, page_results);
    }

    Ok(Json(CandidatePageResponse {
        job_id,
        page: req.page,
        results: state.cache.get_search_results(job_id),
    }))
}
