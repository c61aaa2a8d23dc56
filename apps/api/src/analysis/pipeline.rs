//! Resume Pipeline: reads a PDF, extracts a profile, scores skill gaps.
//!
//! Flow: Reading → Extracting → Analyzing → Done.
//!
//! Every phase runs on every invocation. A stage whose input is missing
//! records `Skipped` instead of being jumped over, and no stage error ever
//! leaves this module: failures live in the `PipelineState` slots and surface
//! to callers as empty objects in the `AnalysisReport`.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use crate::analysis::gaps::analyze_gaps;
use crate::analysis::models::AnalysisReport;
use crate::analysis::skills::extract_skills;
use crate::analysis::state::{PipelinePhase, PipelineState, StageOutcome};
use crate::analysis::text::{extract_pdf_text, normalize_text};
use crate::llm_client::LlmCapability;

pub struct ResumePipeline {
    llm: Arc<dyn LlmCapability>,
}

impl ResumePipeline {
    pub fn new(llm: Arc<dyn LlmCapability>) -> Self {
        Self { llm }
    }

    /// Runs the pipeline on the PDF at `path` and returns the report.
    pub async fn analyze(&self, path: &Path) -> AnalysisReport {
        let state = self.run(path).await;
        AnalysisReport {
            analysis: state.analysis.into_value(),
            extracted_skills: state.profile.into_value(),
        }
    }

    /// Runs every phase and returns the final state, for callers that need
    /// per-stage diagnostics.
    pub async fn run(&self, path: &Path) -> PipelineState {
        let span = info_span!("resume_pipeline", file = %path.display());
        async move {
            let mut state = PipelineState::new(path);
            while state.phase != PipelinePhase::Done {
                state.history.push(state.phase);
                self.step(&mut state).await;
                state.phase = state.phase.next();
            }
            state.history.push(PipelinePhase::Done);
            log_outcome(&state);
            state
        }
        .instrument(span)
        .await
    }

    async fn step(&self, state: &mut PipelineState) {
        match state.phase {
            PipelinePhase::Reading => {
                info!("Reading PDF");
                state.resume_text = read_resume(&state.source).await;
            }
            PipelinePhase::Extracting => {
                info!("Extracting skills");
                state.profile = extract_skills(state.text(), self.llm.as_ref()).await;
            }
            PipelinePhase::Analyzing => {
                info!("Analyzing gaps and score");
                state.analysis =
                    analyze_gaps(state.text(), state.profile.value(), self.llm.as_ref()).await;
            }
            PipelinePhase::Done => {}
        }
    }
}

/// Extracts and normalizes the resume text. A PDF with no text layer counts
/// as a failed read.
async fn read_resume(path: &Path) -> StageOutcome<String> {
    match extract_pdf_text(path).await {
        Ok(raw) => {
            let text = normalize_text(&raw);
            if text.is_empty() {
                warn!("PDF contained no extractable text");
                StageOutcome::Failed("PDF contained no extractable text".to_string())
            } else {
                info!("Extracted {} characters of resume text", text.len());
                StageOutcome::Produced(text)
            }
        }
        Err(e) => {
            warn!("Error reading PDF: {e}");
            StageOutcome::Failed(e.to_string())
        }
    }
}

fn log_outcome(state: &PipelineState) {
    if state.resume_text.is_failed() && state.analysis.is_skipped() {
        warn!("No resume text available, model stages were skipped");
    }

    let failures: Vec<&str> = [
        state.resume_text.failure(),
        state.profile.failure(),
        state.analysis.failure(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if failures.is_empty() {
        info!("Resume pipeline completed");
    } else {
        warn!("Resume pipeline completed with degraded results: {failures:?}");
    }
}
