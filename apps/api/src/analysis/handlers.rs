//! Axum route handlers for the analysis pipeline.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use super::content_fingerprint;
use super::runner::{find_output, persist_output, run_analysis};
use super::tracker::{RunRecord, SaveStatus};
use crate::errors::AppError;
use crate::jobs::find_job;
use crate::models::output::AgentOutput;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Present when a fresh run was started; poll `/api/v1/runs/:id`.
    pub run_id: Option<Uuid>,
    /// Present when an up-to-date output already existed.
    pub output: Option<AgentOutput>,
    pub reused: bool,
}

/// POST /api/v1/jobs/:id/analyze
///
/// Starts an analysis run for the job, unless an output for the job's
/// current content already exists (cache first, then database), in which
/// case that output is returned without any model calls.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let job = find_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let content_hash = content_fingerprint(&job.content);

    if let Some(cached) = state.cache.get(job_id) {
        if cached.content_hash == content_hash {
            info!("Reusing cached analysis output for job {job_id}");
            return Ok(Json(AnalyzeResponse {
                run_id: None,
                output: Some(cached),
                reused: true,
            }));
        }
    }

    if let Some(existing) = find_output(&state.db, job_id).await? {
        if existing.content_hash == content_hash {
            info!("Reusing persisted analysis output for job {job_id}");
            state.cache.set(job_id, existing.clone());
            return Ok(Json(AnalyzeResponse {
                run_id: None,
                output: Some(existing),
                reused: true,
            }));
        }
    }

    let run_id = state.tracker.create_run(job_id);

    let executor = state.executor.clone();
    let tracker = state.tracker.clone();
    let cache = state.cache.clone();
    let db = state.db.clone();
    let content = job.content.clone();

    tokio::spawn(async move {
        match run_analysis(
            executor.as_ref(),
            &tracker,
            run_id,
            job_id,
            &content,
            content_hash,
        )
        .await
        {
            Ok(output) => {
                // Display-ready: result visible immediately, before the
                // database write is confirmed.
                cache.set(job_id, output.clone());
                tracker.run_complete(run_id);

                tracker.set_save_status(run_id, SaveStatus::Saving);
                match persist_output(&db, &output).await {
                    Ok(()) => tracker.set_save_status(run_id, SaveStatus::Saved),
                    Err(e) => {
                        error!("Persisting output for job {job_id} failed: {e}");
                        tracker.set_save_status(run_id, SaveStatus::Failed);
                    }
                }
            }
            Err(e) => {
                error!("Analysis run {run_id} for job {job_id} failed: {e}");
                tracker.run_failed(run_id, &e.to_string());
            }
        }
    });

    Ok(Json(AnalyzeResponse {
        run_id: Some(run_id),
        output: None,
        reused: false,
    }))
}

/// GET /api/v1/runs/:id
pub async fn handle_get_run(
    State(state): State<AppState>,
    Path(run_id): Path<Uuid>,
) -> Result<Json<RunRecord>, AppError> {
    state
        .tracker
        .get(run_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Run {run_id} not found")))
}

/// GET /api/v1/jobs/:id/output
///
/// Cache first, then database; a database hit warms the cache.
pub async fn handle_get_output(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<AgentOutput>, AppError> {
    if let Some(cached) = state.cache.get(job_id) {
        return Ok(Json(cached));
    }

    let output = find_output(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No analysis output for job {job_id}")))?;
    state.cache.set(job_id, output.clone());
    Ok(Json(output))
}
