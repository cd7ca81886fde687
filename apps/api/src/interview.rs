//! Interview question generation from job content.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::find_job;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::prompts::render::{param_map, render};
use crate::prompts::templates::INTERVIEW_QUESTIONS;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
struct QuestionsEnvelope {
    questions: Vec<InterviewQuestion>,
}

pub async fn generate_interview_questions(
    llm: &LlmClient,
    content: &str,
) -> Result<Vec<InterviewQuestion>, AppError> {
    let prompt = render(
        INTERVIEW_QUESTIONS.template,
        &param_map(&[("content", content)]),
    );
    let envelope: QuestionsEnvelope = llm
        .call_json(&prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("interview question generation failed: {e}")))?;
    Ok(envelope.questions)
}

#[derive(Debug, Serialize)]
pub struct InterviewQuestionsResponse {
    pub job_id: Uuid,
    pub questions: Vec<InterviewQuestion>,
}

/// POST /api/v1/jobs/:id/interview-questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<InterviewQuestionsResponse>, AppError> {
    let job = find_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let questions = generate_interview_questions(&state.llm, &job.content).await?;
    Ok(Json(InterviewQuestionsResponse { job_id, questions }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_envelope_deserializes() {
        let json = r#"{
            "questions": [
                {"question": "How would you shard a Postgres table?", "category": "technical"},
                {"question": "Describe a conflict you resolved.", "category": "behavioral"}
            ]
        }"#;
        let envelope: QuestionsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.questions.len(), 2);
        assert_eq!(envelope.questions[0].category, "technical");
    }

    #[test]
    fn test_envelope_without_questions_field_is_malformed() {
        let result: Result<QuestionsEnvelope, _> = serde_json::from_str(r#"{"items": []}"#);
        assert!(result.is_err());
    }
}
