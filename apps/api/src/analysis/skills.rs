//! Skill extraction stage: resume text → `ExtractedProfile`.

use tracing::{debug, info, warn};

use crate::analysis::models::ExtractedProfile;
use crate::analysis::prompts::{SKILL_EXTRACT_PROMPT, SKILL_EXTRACT_SYSTEM};
use crate::analysis::state::StageOutcome;
use crate::llm_client::prompts::{render_prompt, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{request_structured, LlmCapability};

/// Asks the model for a structured profile of `resume_text`.
///
/// Without text the model is not called and the stage is `Skipped`. Model
/// errors, shape mismatches and a profile with no skills are all `Failed`.
pub async fn extract_skills(
    resume_text: Option<&str>,
    llm: &dyn LlmCapability,
) -> StageOutcome<ExtractedProfile> {
    let Some(resume_text) = resume_text else {
        info!("No resume text to process, skipping skill extraction");
        return StageOutcome::Skipped;
    };

    let system = render_prompt(SKILL_EXTRACT_SYSTEM, &[("json_only", JSON_ONLY_INSTRUCTION)]);
    let prompt = render_prompt(SKILL_EXTRACT_PROMPT, &[("resume_text", resume_text)]);

    match request_structured::<ExtractedProfile>(llm, &system, &prompt).await {
        Ok(profile) if profile.all_skills.is_empty() => {
            warn!("Skill extraction returned a profile with no skills");
            StageOutcome::Failed("model returned no skills".to_string())
        }
        Ok(profile) => {
            info!("Extracted {} skills", profile.all_skills.len());
            debug!("Skills: {:?}", profile.skill_names().collect::<Vec<_>>());
            StageOutcome::Produced(profile)
        }
        Err(e) => {
            warn!("Skill extraction failed: {e}");
            StageOutcome::Failed(format!("skill extraction failed: {e}"))
        }
    }
}
