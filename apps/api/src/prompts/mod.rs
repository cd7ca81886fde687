//! Prompt template store and renderer.
//!
//! Every user-facing prompt sent to the LLM is assembled from a named,
//! versioned template registered in `templates`. System prompts are plain
//! constants owned by the module that uses them.

pub mod render;
pub mod templates;

/// A named, versioned prompt template.
///
/// `parameters` declares every placeholder the template references,
/// including variables used only inside `{{#if}}` guards. The registry test
/// in this module enforces the declaration; the renderer itself does not.
#[derive(Debug)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub version: u32,
    pub description: &'static str,
    pub parameters: &'static [&'static str],
    pub template: &'static str,
}

/// Looks up a template by name. Callers that know the template at compile
/// time take the static directly; this is for name-driven callers.
#[allow(dead_code)]
pub fn get(name: &str) -> Option<&'static PromptTemplate> {
    templates::ALL.iter().copied().find(|t| t.name == name)
}
