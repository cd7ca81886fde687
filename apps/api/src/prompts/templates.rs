//! The template registry: one entry per analysis task and sourcing mode.
//!
//! Placeholder syntax is `{{variable}}` plus non-nested
//! `{{#if variable}}...{{/if}}` guards (truthiness-only, see `render`).
//! Bump `version` on any wording change that alters model behavior.

use super::PromptTemplate;

pub static ALL: [&PromptTemplate; 8] = [
    &EXTRACT_TERMS,
    &ANALYZE_COMPENSATION,
    &ENHANCE_DESCRIPTION,
    &SUMMARIZE,
    &INTERVIEW_QUESTIONS,
    &BOOLEAN_SEARCH_CANDIDATES,
    &BOOLEAN_SEARCH_COMPANIES,
    &BOOLEAN_SEARCH_CANDIDATES_AT_COMPANY,
];

pub static EXTRACT_TERMS: PromptTemplate = PromptTemplate {
    name: "extract-terms",
    version: 1,
    description: "Extract skills, titles and sourcing keywords from job content",
    parameters: &["content"],
    template: r#"Analyze the following job content and extract the hiring-relevant terms.

Return a JSON object with this EXACT schema (no extra fields):
{
  "terms": {
    "skills": ["Rust", "PostgreSQL"],
    "titles": ["Backend Engineer", "Software Engineer"],
    "keywords": ["distributed systems", "low latency"]
  }
}

Rules:
- "skills": concrete technologies, languages, tools and certifications.
- "titles": job titles a matching candidate currently holds or has held.
- "keywords": domain concepts and phrases useful in sourcing searches.
- Use the exact casing that appears in the content where possible.
- Do NOT invent terms the content does not support.

JOB CONTENT:
{{content}}"#,
};

pub static ANALYZE_COMPENSATION: PromptTemplate = PromptTemplate {
    name: "analyze-compensation",
    version: 1,
    description: "Assess a role's compensation position against market",
    parameters: &["content"],
    template: r#"Analyze the following job content and assess its compensation position.

Return a JSON object with this EXACT schema:
{
  "analysis": "2-4 sentences on the likely market salary range, how any stated compensation compares to market, and negotiation leverage points."
}

Rules:
- If the content states a salary or range, compare it to the current market for the role and location.
- If no compensation is stated, estimate a market range from the role, seniority and location.
- Be specific: name numbers and ranges, not vague qualifiers.

JOB CONTENT:
{{content}}"#,
};

pub static ENHANCE_DESCRIPTION: PromptTemplate = PromptTemplate {
    name: "enhance-description",
    version: 1,
    description: "Rewrite raw job content as a polished candidate-facing description",
    parameters: &["content"],
    template: r#"Rewrite the following job content as a polished, candidate-facing job description.

Return a JSON object with this EXACT schema:
{
  "enhancedDescription": "the full rewritten description as markdown"
}

Rules:
- Keep every factual requirement from the original content. Do NOT add requirements.
- Structure with sections: About the Role, Responsibilities, Requirements, Nice to Have.
- Write in second person ("you will"), active voice.

JOB CONTENT:
{{content}}"#,
};

pub static SUMMARIZE: PromptTemplate = PromptTemplate {
    name: "summarize",
    version: 1,
    description: "Summarize job content for a recruiter dashboard card",
    parameters: &["content"],
    template: r#"Summarize the following job content for a recruiter's dashboard card.

Return a JSON object with this EXACT schema:
{
  "summary": "2-3 sentences: the role, the must-have qualifications, and anything unusual about the position."
}

JOB CONTENT:
{{content}}"#,
};

pub static INTERVIEW_QUESTIONS: PromptTemplate = PromptTemplate {
    name: "interview-questions",
    version: 1,
    description: "Generate role-specific interview questions from job content",
    parameters: &["content"],
    template: r#"Generate interview questions for the role described in the following job content.

Return a JSON object with this EXACT schema:
{
  "questions": [
    {"question": "Describe a time you had to ...", "category": "behavioral"}
  ]
}

Rules:
- Produce 8 to 10 questions.
- "category" must be one of: "technical", "behavioral", "situational", "culture".
- Technical questions must target the specific skills named in the content, not generic trivia.

JOB CONTENT:
{{content}}"#,
};

pub static BOOLEAN_SEARCH_CANDIDATES: PromptTemplate = PromptTemplate {
    name: "boolean-search-candidates",
    version: 1,
    description: "Build an X-Ray search string for individual candidate profiles",
    parameters: &["content", "metroArea"],
    template: r#"You are building a boolean X-Ray search string to find INDIVIDUAL CANDIDATE profiles on LinkedIn through a general web search engine.

Build ONE search string from the profile below. Respond with ONLY the search string and nothing else.

Rules for the search string:
- Start with site:linkedin.com/in/
- Combine the most important job titles with OR, each quoted: ("Backend Engineer" OR "Software Engineer")
- AND together the 3-5 most important skills, quoting multi-word phrases.
- Exclude recruiters and job ads with negative terms: -recruiter -"we are hiring" -jobs
{{#if metroArea}}- Require the metro area as a quoted phrase: "{{metroArea}}"
{{/if}}- Keep the string under 32 words: search engines truncate longer queries.

TARGET PROFILE:
{{content}}"#,
};

pub static BOOLEAN_SEARCH_COMPANIES: PromptTemplate = PromptTemplate {
    name: "boolean-search-companies",
    version: 1,
    description: "Build an X-Ray search string for company pages",
    parameters: &["content", "metroArea"],
    template: r#"You are building a boolean X-Ray search string to find COMPANY pages on LinkedIn through a general web search engine.

Build ONE search string from the description below. Respond with ONLY the search string and nothing else.

Rules for the search string:
- Start with site:linkedin.com/company/
- Combine the industry and product keywords with AND and OR, quoting multi-word phrases.
{{#if metroArea}}- Require the metro area as a quoted phrase: "{{metroArea}}"
{{/if}}- Keep the string under 32 words: search engines truncate longer queries.

TARGET COMPANY PROFILE:
{{content}}"#,
};

pub static BOOLEAN_SEARCH_CANDIDATES_AT_COMPANY: PromptTemplate = PromptTemplate {
    name: "boolean-search-candidates-at-company",
    version: 1,
    description: "Build an X-Ray search string for candidates at a specific company",
    parameters: &["content", "companyName", "metroArea"],
    template: r#"You are building a boolean X-Ray search string to find INDIVIDUAL CANDIDATE profiles on LinkedIn who work at a specific company.

Build ONE search string from the inputs below. Respond with ONLY the search string and nothing else.

Rules for the search string:
- Start with site:linkedin.com/in/
{{#if companyName}}- Require the company as a quoted phrase: "{{companyName}}"
{{/if}}- Combine the most important job titles with OR, each quoted.
- AND together the 2-3 most important skills, quoting multi-word phrases.
{{#if metroArea}}- Require the metro area as a quoted phrase: "{{metroArea}}"
{{/if}}- Keep the string under 32 words: search engines truncate longer queries.

TARGET PROFILE:
{{content}}"#,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::render::{param_map, render};

    #[test]
    fn test_candidates_template_renders_clean_without_optional_params() {
        let rendered = render(
            BOOLEAN_SEARCH_CANDIDATES.template,
            &param_map(&[("content", "Senior backend engineer, Python, AWS, 5 years")]),
        );
        assert!(rendered.contains("site:linkedin.com/in/"));
        assert!(rendered.contains("Senior backend engineer, Python, AWS, 5 years"));
        assert!(!rendered.contains("{{companyName}}"));
        assert!(!rendered.contains("{{metroArea}}"));
        assert!(!rendered.contains("{{#if"));
    }

    #[test]
    fn test_candidates_template_includes_metro_clause_when_given() {
        let rendered = render(
            BOOLEAN_SEARCH_CANDIDATES.template,
            &param_map(&[("content", "SRE, Kubernetes"), ("metroArea", "Denver")]),
        );
        assert!(rendered.contains(r#""Denver""#));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_company_template_targets_company_pages() {
        let rendered = render(
            BOOLEAN_SEARCH_COMPANIES.template,
            &param_map(&[("content", "Series B fintech infrastructure startups")]),
        );
        assert!(rendered.contains("site:linkedin.com/company/"));
        assert!(!rendered.contains("site:linkedin.com/in/"));
    }

    #[test]
    fn test_candidates_at_company_quotes_the_company() {
        let rendered = render(
            BOOLEAN_SEARCH_CANDIDATES_AT_COMPANY.template,
            &param_map(&[
                ("content", "Staff engineer, Go, gRPC"),
                ("companyName", "Stripe"),
            ]),
        );
        assert!(rendered.contains(r#""Stripe""#));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_analysis_templates_demand_their_response_field() {
        // Each analysis step extracts one named field from the model's JSON;
        // the template must spell that field out.
        assert!(EXTRACT_TERMS.template.contains(r#""terms""#));
        assert!(ANALYZE_COMPENSATION.template.contains(r#""analysis""#));
        assert!(ENHANCE_DESCRIPTION
            .template
            .contains(r#""enhancedDescription""#));
        assert!(SUMMARIZE.template.contains(r#""summary""#));
        assert!(INTERVIEW_QUESTIONS.template.contains(r#""questions""#));
    }
}
