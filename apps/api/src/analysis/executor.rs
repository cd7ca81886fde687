//! Step execution behind a trait so the pipeline's state machine is
//! testable without a network.
//!
//! `AppState` carries an `Arc<dyn StepExecutor>`; the production
//! implementation renders the step's template and makes one LLM call,
//! extracting the step's named response field.

use async_trait::async_trait;
use serde::Deserialize;

use super::StepKind;
use crate::errors::AppError;
use crate::llm_client::prompts::RECRUITING_ANALYST_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::output::Terms;
use crate::prompts::render::{param_map, render};

/// The typed result of one analysis step.
#[derive(Debug, Clone)]
pub enum StepOutput {
    Terms(Terms),
    Compensation(String),
    Enhanced(String),
    Summary(String),
}

#[async_trait]
pub trait StepExecutor: Send + Sync {
    async fn execute(&self, step: StepKind, content: &str) -> Result<StepOutput, AppError>;
}

/// Executes steps against the generative-model API through the prompt store.
pub struct LlmStepExecutor {
    llm: LlmClient,
}

impl LlmStepExecutor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

// Per-step response envelopes. Field names are the model contract; a
// response missing its field is a malformed step result and fails the step.

#[derive(Debug, Deserialize)]
struct TermsEnvelope {
    terms: Terms,
}

#[derive(Debug, Deserialize)]
struct CompensationEnvelope {
    analysis: String,
}

#[derive(Debug, Deserialize)]
struct EnhanceEnvelope {
    #[serde(rename = "enhancedDescription")]
    enhanced_description: String,
}

#[derive(Debug, Deserialize)]
struct SummaryEnvelope {
    summary: String,
}

#[async_trait]
impl StepExecutor for LlmStepExecutor {
    async fn execute(&self, step: StepKind, content: &str) -> Result<StepOutput, AppError> {
        let prompt = render(step.template().template, &param_map(&[("content", content)]));
        let step_name = step.as_str();
        let map_err =
            |e: crate::llm_client::LlmError| AppError::Llm(format!("step {step_name} failed: {e}"));

        match step {
            StepKind::ExtractTerms => {
                let envelope: TermsEnvelope = self
                    .llm
                    .call_json(&prompt, RECRUITING_ANALYST_SYSTEM)
                    .await
                    .map_err(map_err)?;
                Ok(StepOutput::Terms(envelope.terms))
            }
            StepKind::AnalyzeCompensation => {
                let envelope: CompensationEnvelope = self
                    .llm
                    .call_json(&prompt, RECRUITING_ANALYST_SYSTEM)
                    .await
                    .map_err(map_err)?;
                Ok(StepOutput::Compensation(envelope.analysis))
            }
            StepKind::EnhanceDescription => {
                let envelope: EnhanceEnvelope = self
                    .llm
                    .call_json(&prompt, RECRUITING_ANALYST_SYSTEM)
                    .await
                    .map_err(map_err)?;
                Ok(StepOutput::Enhanced(envelope.enhanced_description))
            }
            StepKind::Summarize => {
                let envelope: SummaryEnvelope = self
                    .llm
                    .call_json(&prompt, RECRUITING_ANALYST_SYSTEM)
                    .await
                    .map_err(map_err)?;
                Ok(StepOutput::Summary(envelope.summary))
            }
        }
    }
}
