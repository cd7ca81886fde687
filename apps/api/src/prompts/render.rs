//! Prompt rendering: conditionals first, then variable substitution.
//!
//! Semantics, in order:
//! 1. Every `{{#if VAR}}...{{/if}}` block (non-nested) is replaced by its
//!    inner content when `VAR` maps to a param whose trimmed value is
//!    non-empty, otherwise by the empty string. Guards are truthiness-only:
//!    the first identifier in the tag is the lookup key and anything after
//!    it is ignored. No `{{else}}`.
//! 2. Every `{{key}}` is globally replaced with its param value, keys in
//!    sorted order so rendering is deterministic.
//!
//! Unresolved placeholders are left verbatim. Param values are not escaped,
//! so values containing `{{` can corrupt later substitutions. The renderer
//! never fails.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static IF_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{\{#if\s+([^}]+?)\s*\}\}(.*?)\{\{/if\}\}").unwrap());

pub fn render(template: &str, params: &BTreeMap<String, String>) -> String {
    let resolved = IF_BLOCK.replace_all(template, |caps: &Captures| {
        let key = caps[1].split_whitespace().next().unwrap_or("");
        let truthy = params
            .get(key)
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false);
        if truthy {
            caps[2].to_string()
        } else {
            String::new()
        }
    });

    let mut output = resolved.into_owned();
    for (key, value) in params {
        output = output.replace(&format!("{{{{{key}}}}}"), value);
    }
    output
}

/// Builds a param map from borrowed pairs. Convenience for call sites.
pub fn param_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
