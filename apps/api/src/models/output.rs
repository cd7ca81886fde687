use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Terms extracted from job content, used to seed sourcing searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terms {
    pub skills: Vec<String>,
    pub titles: Vec<String>,
    pub keywords: Vec<String>,
}

/// The combined result of one analysis run for one job.
/// At most one per job: `agent_outputs.job_id` is UNIQUE and writes are upserts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentOutput {
    pub id: Uuid,
    pub job_id: Uuid,
    pub content_hash: String,
    pub terms: Terms,
    pub compensation_analysis: String,
    pub enhanced_description: String,
    pub job_summary: String,
    pub created_at: DateTime<Utc>,
}

/// Database row shape for `agent_outputs` (`terms` stored as JSONB).
#[derive(Debug, Clone, FromRow)]
pub struct AgentOutputRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub content_hash: String,
    pub terms: Json<Terms>,
    pub compensation_analysis: String,
    pub enhanced_description: String,
    pub job_summary: String,
    pub created_at: DateTime<Utc>,
}

impl From<AgentOutputRow> for AgentOutput {
    fn from(row: AgentOutputRow) -> Self {
        AgentOutput {
            id: row.id,
            job_id: row.job_id,
            content_hash: row.content_hash,
            terms: row.terms.0,
            compensation_analysis: row.compensation_analysis,
            enhanced_description: row.enhanced_description,
            job_summary: row.job_summary,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_deserialize_requires_all_fields() {
        // The model contract is strict: a response missing any of the three
        // lists is a malformed step result, not a partial success.
        let bad = r#"{"skills": ["Rust"], "titles": ["Engineer"]}"#;
        let result: Result<Terms, _> = serde_json::from_str(bad);
        assert!(result.is_err());
    }

    #[test]
    fn test_agent_output_round_trips_through_json() {
        let output = AgentOutput {
            id: Uuid::new_v4(),
            job_id: Uuid::new_v4(),
            content_hash: "abc123".to_string(),
            terms: Terms {
                skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
                titles: vec!["Backend Engineer".to_string()],
                keywords: vec!["distributed systems".to_string()],
            },
            compensation_analysis: "Market range is $150k to $190k.".to_string(),
            enhanced_description: "## About the Role".to_string(),
            job_summary: "Senior backend role.".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&output).unwrap();
        let recovered: AgentOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.job_id, output.job_id);
        assert_eq!(recovered.terms, output.terms);
        assert_eq!(recovered.job_summary, output.job_summary);
    }
}
