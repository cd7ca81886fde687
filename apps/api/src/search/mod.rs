//! Boolean/X-Ray search string generation for sourcing.
//!
//! This module assembles prompts deterministically; the boolean string
//! itself comes from the model, which is instructed to emit only the string.

pub mod handlers;
pub mod websearch;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jobs;
use crate::llm_client::LlmClient;
use crate::models::job::JobRow;
use crate::prompts::render::{param_map, render};
use crate::prompts::{templates, PromptTemplate};

/// System prompt for boolean-string generation. The response is used as a
/// raw web-search query, so anything beyond the string is a defect.
const SEARCH_STRING_SYSTEM: &str = "You are an expert sourcing recruiter who writes \
    boolean X-Ray search strings. \
    You MUST respond with the search string only, on a single line. \
    Do NOT include explanations, labels, markdown, or code fences.";

/// What kind of profile the search should surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    Candidates,
    Companies,
    CandidatesAtCompany,
}

impl SearchMode {
    pub fn template(self) -> &'static PromptTemplate {
        match self {
            SearchMode::Candidates => &templates::BOOLEAN_SEARCH_CANDIDATES,
            SearchMode::Companies => &templates::BOOLEAN_SEARCH_COMPANIES,
            SearchMode::CandidatesAtCompany => &templates::BOOLEAN_SEARCH_CANDIDATES_AT_COMPANY,
        }
    }
}

/// Renders the boolean-search prompt for a mode. Absent optional params
/// drop their template clause entirely.
pub fn build_search_prompt(
    mode: SearchMode,
    content: &str,
    company_name: Option<&str>,
    metro_area: Option<&str>,
) -> String {
    let mut pairs = vec![("content", content)];
    if let Some(company) = company_name {
        pairs.push(("companyName", company));
    }
    if let Some(metro) = metro_area {
        pairs.push(("metroArea", metro));
    }
    render(mode.template().template, &param_map(&pairs))
}

/// Generates a boolean search string for the job and persists it on the row.
pub async fn generate_search_string(
    llm: &LlmClient,
    pool: &sqlx::PgPool,
    job: &JobRow,
    mode: SearchMode,
    company_name: Option<&str>,
    metro_area: Option<&str>,
) -> Result<String, AppError> {
    let prompt = build_search_prompt(mode, &job.content, company_name, metro_area);
    let raw = llm
        .call_text(&prompt, SEARCH_STRING_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("search string generation failed: {e}")))?;

    let search_string = normalize_search_string(&raw);
    if search_string.is_empty() {
        return Err(AppError::Llm(
            "search string generation returned an empty string".to_string(),
        ));
    }

    jobs::set_search_string(pool, job.id, &search_string).await?;
    info!("Stored search string for job {}", job.id);
    Ok(search_string)
}

/// Collapses the model's output to one line. Quoting inside the string is
/// meaningful and is left alone.
fn normalize_search_string(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = "Senior backend engineer, Python, AWS, 5 years";

    #[test]
    fn test_mode_deserializes_kebab_case() {
        let mode: SearchMode = serde_json::from_str(r#""candidates-at-company""#).unwrap();
        assert_eq!(mode, SearchMode::CandidatesAtCompany);
    }

    #[test]
    fn test_candidate_prompt_has_no_leftover_placeholders() {
        let prompt = build_search_prompt(SearchMode::Candidates, CONTENT, None, None);
        assert!(prompt.contains("site:linkedin.com/in/"));
        assert!(prompt.contains(CONTENT));
        assert!(!prompt.contains("{{companyName}}"));
        assert!(!prompt.contains("{{metroArea}}"));
        assert!(!prompt.contains("{{#if"));
    }

    #[test]
    fn test_company_mode_selects_company_template() {
        let prompt = build_search_prompt(SearchMode::Companies, CONTENT, None, None);
        assert!(prompt.contains("site:linkedin.com/company/"));
    }

    #[test]
    fn test_optional_params_appear_when_given() {
        let prompt = build_search_prompt(
            SearchMode::CandidatesAtCompany,
            CONTENT,
            Some("Stripe"),
            Some("Austin, TX"),
        );
        assert!(prompt.contains(r#""Stripe""#));
        assert!(prompt.contains(r#""Austin, TX""#));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_normalize_collapses_to_one_line() {
        let raw = "  site:linkedin.com/in/\n(\"SRE\" OR \"DevOps\")   AND Kubernetes \n";
        assert_eq!(
            normalize_search_string(raw),
            r#"site:linkedin.com/in/ ("SRE" OR "DevOps") AND Kubernetes"#
        );
    }

    #[test]
    fn test_normalize_of_blank_output_is_empty() {
        assert_eq!(normalize_search_string("  \n "), "");
    }
}
