//! Result cache - read-after-write visibility for the current process.
//!
//! Lets callers see a just-computed analysis result immediately, without
//! waiting for the database write to be confirmed, and lets a paginated
//! sourcing search accumulate pages per job without re-fetching prior ones.
//!
//! The cache is an explicit object injected via `AppState`, never ambient
//! module state. Last-write-wins per key; no eviction, no TTL; contents are
//! lost on process restart (the database remains the durable record).

use dashmap::DashMap;
use uuid::Uuid;

use crate::models::output::AgentOutput;
use crate::search::websearch::SearchResult;

#[derive(Default)]
pub struct ResultCache {
    outputs: DashMap<Uuid, AgentOutput>,
    search_results: DashMap<Uuid, Vec<SearchResult>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, job_id: Uuid) -> Option<AgentOutput> {
        self.outputs.get(&job_id).map(|entry| entry.clone())
    }

    pub fn set(&self, job_id: Uuid, output: AgentOutput) {
        self.outputs.insert(job_id, output);
    }

    /// Replaces the accumulated search results for a job (page 0 of a new search).
    pub fn set_search_results(&self, job_id: Uuid, results: Vec<SearchResult>) {
        self.search_results.insert(job_id, results);
    }

    /// Appends a later page to a job's accumulated search results.
    pub fn add_to_search_results(&self, job_id: Uuid, page: Vec<SearchResult>) {
        self.search_results.entry(job_id).or_default().extend(page);
    }

    pub fn get_search_results(&self, job_id: Uuid) -> Vec<SearchResult> {
        self.search_results
            .get(&job_id)
            .map(|entry| entry.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::output::Terms;
    use chrono::Utc;

    fn make_output(job_id: Uuid, summary: &str) -> AgentOutput {
        AgentOutput {
            id: Uuid::new_v4(),
            job_id,
            content_hash: "hash".to_string(),
            terms: Terms::default(),
            compensation_analysis: String::new(),
            enhanced_description: String::new(),
            job_summary: summary.to_string(),
            created_at: Utc::now(),
        }
    }

    fn make_result(title: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            link: format!("https://linkedin.com/in/{title}"),
            snippet: String::new(),
        }
    }

    #[test]
    fn test_get_returns_none_for_unknown_job() {
        let cache = ResultCache::new();
        assert!(cache.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_set_then_get_returns_output() {
        let cache = ResultCache::new();
        let job_id = Uuid::new_v4();
        cache.set(job_id, make_output(job_id, "first"));
        assert_eq!(cache.get(job_id).unwrap().job_summary, "first");
    }

    #[test]
    fn test_last_write_wins() {
        let cache = ResultCache::new();
        let job_id = Uuid::new_v4();
        cache.set(job_id, make_output(job_id, "a"));
        cache.set(job_id, make_output(job_id, "b"));
        assert_eq!(cache.get(job_id).unwrap().job_summary, "b");
    }

    #[test]
    fn test_search_pages_accumulate_in_order() {
        let cache = ResultCache::new();
        let job_id = Uuid::new_v4();
        cache.set_search_results(job_id, vec![make_result("one"), make_result("two")]);
        cache.add_to_search_results(job_id, vec![make_result("three")]);

        let results = cache.get_search_results(job_id);
        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_set_search_results_resets_accumulation() {
        let cache = ResultCache::new();
        let job_id = Uuid::new_v4();
        cache.set_search_results(job_id, vec![make_result("stale")]);
        cache.set_search_results(job_id, vec![make_result("fresh")]);
        let results = cache.get_search_results(job_id);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "fresh");
    }

    #[test]
    fn test_append_to_empty_job_starts_a_list() {
        let cache = ResultCache::new();
        let job_id = Uuid::new_v4();
        cache.add_to_search_results(job_id, vec![make_result("only")]);
        assert_eq!(cache.get_search_results(job_id).len(), 1);
    }

    #[test]
    fn test_jobs_are_isolated() {
        let cache = ResultCache::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        cache.set_search_results(a, vec![make_result("a")]);
        assert!(cache.get_search_results(b).is_empty());
    }
}
