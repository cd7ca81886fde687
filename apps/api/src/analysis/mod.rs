//! Content-analysis pipeline: four enrichment steps fanned out over one
//! piece of job content, joined into a single combined output.

pub mod executor;
pub mod handlers;
pub mod runner;
pub mod tracker;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::prompts::{templates, PromptTemplate};

/// The fixed set of analysis steps. The steps are independent of each other
/// and run concurrently; the enum order is only the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    ExtractTerms,
    AnalyzeCompensation,
    EnhanceDescription,
    Summarize,
}

impl StepKind {
    pub const ALL: [StepKind; 4] = [
        StepKind::ExtractTerms,
        StepKind::AnalyzeCompensation,
        StepKind::EnhanceDescription,
        StepKind::Summarize,
    ];

    pub fn template(self) -> &'static PromptTemplate {
        match self {
            StepKind::ExtractTerms => &templates::EXTRACT_TERMS,
            StepKind::AnalyzeCompensation => &templates::ANALYZE_COMPENSATION,
            StepKind::EnhanceDescription => &templates::ENHANCE_DESCRIPTION,
            StepKind::Summarize => &templates::SUMMARIZE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::ExtractTerms => "extract-terms",
            StepKind::AnalyzeCompensation => "analyze-compensation",
            StepKind::EnhanceDescription => "enhance-description",
            StepKind::Summarize => "summarize",
        }
    }
}

/// Hex SHA-256 of the exact content bytes. Guards re-analysis: a job whose
/// content is unchanged reuses its existing output instead of burning four
/// more model calls.
pub fn content_fingerprint(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&StepKind::EnhanceDescription).unwrap();
        assert_eq!(json, r#""enhance-description""#);
    }

    #[test]
    fn test_as_str_matches_template_name() {
        for step in StepKind::ALL {
            assert_eq!(step.as_str(), step.template().name);
        }
    }

    #[test]
    fn test_fingerprint_is_stable_and_content_sensitive() {
        let a = content_fingerprint("Senior backend engineer");
        let b = content_fingerprint("Senior backend engineer");
        let c = content_fingerprint("Senior backend engineer.");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_fingerprint_is_hex_sha256() {
        let hash = content_fingerprint("");
        // SHA-256 of the empty string, a well-known constant
        assert_eq!(
            hash,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(hash.len(), 64);
    }
}
