use std::path::PathBuf;

use crate::analysis::models::{AnalysisResult, ExtractedProfile};

/// Phases of a pipeline run, in the only order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    Reading,
    Extracting,
    Analyzing,
    Done,
}

impl PipelinePhase {
    /// The phase that follows this one. `Done` is terminal.
    pub fn next(self) -> Self {
        match self {
            PipelinePhase::Reading => PipelinePhase::Extracting,
            PipelinePhase::Extracting => PipelinePhase::Analyzing,
            PipelinePhase::Analyzing | PipelinePhase::Done => PipelinePhase::Done,
        }
    }
}

/// What a single stage left in its slot.
#[derive(Debug, Clone, PartialEq)]
pub enum StageOutcome<T> {
    /// The stage has not run yet.
    Pending,
    Produced(T),
    /// The stage ran but its required input was absent; nothing was attempted.
    Skipped,
    /// The stage ran and failed; the string is a diagnostic for logs and tests.
    Failed(String),
}

impl<T> StageOutcome<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            StageOutcome::Produced(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            StageOutcome::Produced(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StageOutcome::Failed(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, StageOutcome::Skipped)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            StageOutcome::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Record threaded through one pipeline run.
///
/// Each slot starts `Pending` and is written by exactly one stage.
pub struct PipelineState {
    // Input
    pub source: PathBuf,
    pub phase: PipelinePhase,

    // Reading result: normalized resume text
    pub resume_text: StageOutcome<String>,

    // Extracting result
    pub profile: StageOutcome<ExtractedProfile>,

    // Analyzing result
    pub analysis: StageOutcome<AnalysisResult>,

    /// Phases visited so far, in order.
    pub history: Vec<PipelinePhase>,
}

impl PipelineState {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            phase: PipelinePhase::Reading,
            resume_text: StageOutcome::Pending,
            profile: StageOutcome::Pending,
            analysis: StageOutcome::Pending,
            history: Vec::new(),
        }
    }

    /// The resume text, if reading produced any.
    pub fn text(&self) -> Option<&str> {
        self.resume_text.value().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_advance_linearly_to_done() {
        let mut phase = PipelinePhase::Reading;
        let mut seen = vec![phase];
        while phase != PipelinePhase::Done {
            phase = phase.next();
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![
                PipelinePhase::Reading,
                PipelinePhase::Extracting,
                PipelinePhase::Analyzing,
                PipelinePhase::Done
            ]
        );
        assert_eq!(PipelinePhase::Done.next(), PipelinePhase::Done);
    }

    #[test]
    fn test_new_state_is_all_pending() {
        let state = PipelineState::new("resume.pdf");
        assert_eq!(state.phase, PipelinePhase::Reading);
        assert_eq!(state.resume_text, StageOutcome::Pending);
        assert_eq!(state.profile, StageOutcome::Pending);
        assert_eq!(state.analysis, StageOutcome::Pending);
        assert!(state.text().is_none());
    }

    #[test]
    fn test_stage_outcome_accessors() {
        let produced: StageOutcome<u8> = StageOutcome::Produced(7);
        assert_eq!(produced.value(), Some(&7));
        assert!(!produced.is_failed());

        let failed: StageOutcome<u8> = StageOutcome::Failed("boom".to_string());
        assert!(failed.is_failed());
        assert_eq!(failed.failure(), Some("boom"));
        assert_eq!(failed.into_value(), None);

        assert!(StageOutcome::<u8>::Skipped.is_skipped());
    }
}
