//! Runs the four analysis steps concurrently and assembles the combined
//! output, then persists it.
//!
//! Flow: fan out all steps -> join barrier -> assemble `AgentOutput` ->
//! caller caches it (display-ready) -> upsert to `agent_outputs` as a
//! separate task reporting its own save status.
//!
//! The steps share no data, so a step failure does not interrupt its
//! siblings: every step reaches its own terminal status, and the run as a
//! whole fails if any step failed.

use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::executor::{StepExecutor, StepOutput};
use super::tracker::RunTracker;
use super::StepKind;
use crate::errors::AppError;
use crate::models::output::{AgentOutput, AgentOutputRow};

pub async fn run_analysis(
    executor: &dyn StepExecutor,
    tracker: &RunTracker,
    run_id: Uuid,
    job_id: Uuid,
    content: &str,
    content_hash: String,
) -> Result<AgentOutput, AppError> {
    info!("Starting analysis run {run_id} for job {job_id}");

    let (terms, compensation, enhanced, summary) = tokio::join!(
        run_step(executor, tracker, run_id, StepKind::ExtractTerms, content),
        run_step(
            executor,
            tracker,
            run_id,
            StepKind::AnalyzeCompensation,
            content
        ),
        run_step(
            executor,
            tracker,
            run_id,
            StepKind::EnhanceDescription,
            content
        ),
        run_step(executor, tracker, run_id, StepKind::Summarize, content),
    );

    let terms = match terms? {
        StepOutput::Terms(terms) => terms,
        _ => return Err(mismatched(StepKind::ExtractTerms)),
    };
    let compensation_analysis = match compensation? {
        StepOutput::Compensation(text) => text,
        _ => return Err(mismatched(StepKind::AnalyzeCompensation)),
    };
    let enhanced_description = match enhanced? {
        StepOutput::Enhanced(text) => text,
        _ => return Err(mismatched(StepKind::EnhanceDescription)),
    };
    let job_summary = match summary? {
        StepOutput::Summary(text) => text,
        _ => return Err(mismatched(StepKind::Summarize)),
    };

    info!("Analysis run {run_id} completed all steps for job {job_id}");

    Ok(AgentOutput {
        id: Uuid::new_v4(),
        job_id,
        content_hash,
        terms,
        compensation_analysis,
        enhanced_description,
        job_summary,
        created_at: Utc::now(),
    })
}

async fn run_step(
    executor: &dyn StepExecutor,
    tracker: &RunTracker,
    run_id: Uuid,
    step: StepKind,
    content: &str,
) -> Result<StepOutput, AppError> {
    tracker.step_processing(run_id, step);
    match executor.execute(step, content).await {
        Ok(output) => {
            tracker.step_complete(run_id, step);
            Ok(output)
        }
        Err(e) => {
            tracker.step_error(run_id, step);
            Err(e)
        }
    }
}

fn mismatched(step: StepKind) -> AppError {
    AppError::Internal(anyhow::anyhow!(
        "step {} returned a mismatched output variant",
        step.as_str()
    ))
}

/// Upserts the combined output, keyed by job id. Re-running analysis for a
/// job replaces its row instead of inserting a duplicate.
pub async fn persist_output(pool: &PgPool, output: &AgentOutput) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO agent_outputs
            (id, job_id, content_hash, terms, compensation_analysis,
             enhanced_description, job_summary, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (job_id) DO UPDATE SET
            content_hash = EXCLUDED.content_hash,
            terms = EXCLUDED.terms,
            compensation_analysis = EXCLUDED.compensation_analysis,
            enhanced_description = EXCLUDED.enhanced_description,
            job_summary = EXCLUDED.job_summary,
            created_at = EXCLUDED.created_at
        "#,
    )
    .bind(output.id)
    .bind(output.job_id)
    .bind(&output.content_hash)
    .bind(Json(&output.terms))
    .bind(&output.compensation_analysis)
    .bind(&output.enhanced_description)
    .bind(&output.job_summary)
    .bind(output.created_at)
    .execute(pool)
    .await?;

    info!("Persisted analysis output for job {}", output.job_id);
    Ok(())
}

pub async fn find_output(pool: &PgPool, job_id: Uuid) -> Result<Option<AgentOutput>, AppError> {
    let row: Option<AgentOutputRow> =
        sqlx::query_as("SELECT * FROM agent_outputs WHERE job_id = $1")
            .bind(job_id)
            .fetch_optional(pool)
            .await?;
    Ok(row.map(AgentOutput::from))
}
