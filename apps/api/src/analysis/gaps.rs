//! Gap analysis stage: resume text + profile → scored `AnalysisResult`.

use serde::Deserialize;
use tracing::{info, warn};

use crate::analysis::models::{AnalysisResult, ExtractedProfile};
use crate::analysis::prompts::{GAP_ANALYSIS_PROMPT, GAP_ANALYSIS_SYSTEM};
use crate::analysis::state::StageOutcome;
use crate::llm_client::prompts::{render_prompt, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{request_structured, LlmCapability};

const MAX_SCORE: i64 = 100;

/// The model's reply before the score is validated.
#[derive(Debug, Deserialize)]
struct AnalysisReply {
    identified_domain: String,
    score: i64,
    missing_skills: Vec<String>,
    recommended_courses: Vec<String>,
}

impl AnalysisReply {
    /// Clamps the score into 0..=100; the model is asked for that range but
    /// nothing forces it to comply.
    fn into_result(self) -> AnalysisResult {
        let clamped = self.score.clamp(0, MAX_SCORE);
        if clamped != self.score {
            warn!("Model returned out-of-range score {}, clamped to {clamped}", self.score);
        }
        AnalysisResult {
            identified_domain: self.identified_domain,
            score: clamped as u8,
            missing_skills: self.missing_skills,
            recommended_courses: self.recommended_courses,
        }
    }
}

/// Asks the model to score the resume and list skill gaps for its domain.
///
/// Runs whenever text is present, even if skill extraction failed; the
/// profile is then sent as `{}`.
pub async fn analyze_gaps(
    resume_text: Option<&str>,
    profile: Option<&ExtractedProfile>,
    llm: &dyn LlmCapability,
) -> StageOutcome<AnalysisResult> {
    let Some(resume_text) = resume_text else {
        info!("No resume text to process, skipping gap analysis");
        return StageOutcome::Skipped;
    };

    let skills_json = match profile {
        Some(profile) => match serde_json::to_string_pretty(profile) {
            Ok(json) => json,
            Err(e) => return StageOutcome::Failed(format!("failed to serialize profile: {e}")),
        },
        None => "{}".to_string(),
    };

    let system = render_prompt(GAP_ANALYSIS_SYSTEM, &[("json_only", JSON_ONLY_INSTRUCTION)]);
    let prompt = render_prompt(
        GAP_ANALYSIS_PROMPT,
        &[("resume_text", resume_text), ("skills_json", skills_json.as_str())],
    );

    match request_structured::<AnalysisReply>(llm, &system, &prompt).await {
        Ok(reply) => {
            let result = reply.into_result();
            info!(
                "Gap analysis: domain={}, score={}/100",
                result.identified_domain, result.score
            );
            StageOutcome::Produced(result)
        }
        Err(e) => {
            warn!("Gap analysis failed: {e}");
            StageOutcome::Failed(format!("gap analysis failed: {e}"))
        }
    }
}
