//! Run tracker: per-step and per-run status, observable at any time while a
//! run is in flight.
//!
//! Two signals on a run are deliberately independent: `phase` says whether
//! the combined result exists (display-ready), `save` says whether it has
//! been durably written. A persistence failure is visible on the run record
//! instead of blocking or silently wedging the caller.

use dashmap::DashMap;
use serde::Serialize;
use uuid::Uuid;

use super::StepKind;

const PROGRESS_PENDING: u8 = 0;
const PROGRESS_PROCESSING: u8 = 25;
const PROGRESS_COMPLETE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    Processing,
    Complete,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepState {
    pub kind: StepKind,
    pub status: StepStatus,
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    Running,
    Complete,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStatus {
    NotStarted,
    Saving,
    Saved,
    Failed,
}

/// One analysis run. Ephemeral: lives in the tracker for the process
/// lifetime, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub run_id: Uuid,
    pub job_id: Uuid,
    pub steps: Vec<StepState>,
    pub phase: RunPhase,
    pub save: SaveStatus,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct RunTracker {
    runs: DashMap<Uuid, RunRecord>,
}

impl RunTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new run with every step pending. Returns the run id.
    pub fn create_run(&self, job_id: Uuid) -> Uuid {
        let run_id = Uuid::new_v4();
        let steps = StepKind::ALL
            .iter()
            .map(|&kind| StepState {
                kind,
                status: StepStatus::Pending,
                progress: PROGRESS_PENDING,
            })
            .collect();
        self.runs.insert(
            run_id,
            RunRecord {
                run_id,
                job_id,
                steps,
                phase: RunPhase::Running,
                save: SaveStatus::NotStarted,
                error: None,
            },
        );
        run_id
    }

    pub fn get(&self, run_id: Uuid) -> Option<RunRecord> {
        self.runs.get(&run_id).map(|entry| entry.clone())
    }

    pub fn step_processing(&self, run_id: Uuid, kind: StepKind) {
        self.set_step(run_id, kind, StepStatus::Processing, PROGRESS_PROCESSING);
    }

    pub fn step_complete(&self, run_id: Uuid, kind: StepKind) {
        self.set_step(run_id, kind, StepStatus::Complete, PROGRESS_COMPLETE);
    }

    pub fn step_error(&self, run_id: Uuid, kind: StepKind) {
        self.set_step(run_id, kind, StepStatus::Error, PROGRESS_PENDING);
    }

    pub fn run_complete(&self, run_id: Uuid) {
        if let Some(mut record) = self.runs.get_mut(&run_id) {
            record.phase = RunPhase::Complete;
        }
    }

    /// Marks the run failed. The first recorded message wins; later calls
    /// keep the original error.
    pub fn run_failed(&self, run_id: Uuid, message: &str) {
        if let Some(mut record) = self.runs.get_mut(&run_id) {
            record.phase = RunPhase::Failed;
            if record.error.is_none() {
                record.error = Some(message.to_string());
            }
        }
    }

    pub fn set_save_status(&self, run_id: Uuid, status: SaveStatus) {
        if let Some(mut record) = self.runs.get_mut(&run_id) {
            record.save = status;
        }
    }

    fn set_step(&self, run_id: Uuid, kind: StepKind, status: StepStatus, progress: u8) {
        if let Some(mut record) = self.runs.get_mut(&run_id) {
            if let Some(step) = record.steps.iter_mut().find(|s| s.kind == kind) {
                step.status = status;
                step.progress = progress;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_status(tracker: &RunTracker, run_id: Uuid, kind: StepKind) -> StepStatus {
        tracker
            .get(run_id)
            .unwrap()
            .steps
            .iter()
            .find(|s| s.kind == kind)
            .unwrap()
            .status
    }

    #[test]
    fn test_new_run_has_all_steps_pending() {
        let tracker = RunTracker::new();
        let run_id = tracker.create_run(Uuid::new_v4());
        let record = tracker.get(run_id).unwrap();

        assert_eq!(record.phase, RunPhase::Running);
        assert_eq!(record.save, SaveStatus::NotStarted);
        assert_eq!(record.steps.len(), StepKind::ALL.len());
        for step in &record.steps {
            assert_eq!(step.status, StepStatus::Pending);
            assert_eq!(step.progress, 0);
        }
    }

    #[test]
    fn test_step_walks_pending_processing_complete() {
        let tracker = RunTracker::new();
        let run_id = tracker.create_run(Uuid::new_v4());
        let kind = StepKind::ExtractTerms;

        assert_eq!(step_status(&tracker, run_id, kind), StepStatus::Pending);

        tracker.step_processing(run_id, kind);
        assert_eq!(step_status(&tracker, run_id, kind), StepStatus::Processing);
        let record = tracker.get(run_id).unwrap();
        assert_eq!(record.steps[0].progress, 25);

        tracker.step_complete(run_id, kind);
        assert_eq!(step_status(&tracker, run_id, kind), StepStatus::Complete);
        let record = tracker.get(run_id).unwrap();
        assert_eq!(record.steps[0].progress, 100);
    }

    #[test]
    fn test_step_error_resets_progress() {
        let tracker = RunTracker::new();
        let run_id = tracker.create_run(Uuid::new_v4());
        tracker.step_processing(run_id, StepKind::Summarize);
        tracker.step_error(run_id, StepKind::Summarize);

        let record = tracker.get(run_id).unwrap();
        let step = record.steps.iter().find(|s| s.kind == StepKind::Summarize).unwrap();
        assert_eq!(step.status, StepStatus::Error);
        assert_eq!(step.progress, 0);
    }

    #[test]
    fn test_updating_one_step_leaves_siblings_alone() {
        let tracker = RunTracker::new();
        let run_id = tracker.create_run(Uuid::new_v4());
        tracker.step_processing(run_id, StepKind::AnalyzeCompensation);

        assert_eq!(
            step_status(&tracker, run_id, StepKind::ExtractTerms),
            StepStatus::Pending
        );
        assert_eq!(
            step_status(&tracker, run_id, StepKind::Summarize),
            StepStatus::Pending
        );
    }

    #[test]
    fn test_first_failure_message_wins() {
        let tracker = RunTracker::new();
        let run_id = tracker.create_run(Uuid::new_v4());
        tracker.run_failed(run_id, "first");
        tracker.run_failed(run_id, "second");

        let record = tracker.get(run_id).unwrap();
        assert_eq!(record.phase, RunPhase::Failed);
        assert_eq!(record.error.as_deref(), Some("first"));
    }

    #[test]
    fn test_save_status_is_independent_of_phase() {
        let tracker = RunTracker::new();
        let run_id = tracker.create_run(Uuid::new_v4());
        tracker.run_complete(run_id);
        tracker.set_save_status(run_id, SaveStatus::Failed);

        let record = tracker.get(run_id).unwrap();
        assert_eq!(record.phase, RunPhase::Complete);
        assert_eq!(record.save, SaveStatus::Failed);
    }

    #[test]
    fn test_record_serializes_for_the_status_endpoint() {
        let tracker = RunTracker::new();
        let run_id = tracker.create_run(Uuid::new_v4());
        tracker.step_processing(run_id, StepKind::ExtractTerms);

        let json = serde_json::to_value(tracker.get(run_id).unwrap()).unwrap();
        assert_eq!(json["phase"], "running");
        assert_eq!(json["save"], "not_started");
        assert_eq!(json["steps"][0]["kind"], "extract-terms");
        assert_eq!(json["steps"][0]["status"], "processing");
    }
}
