// Resume Analysis
// Implements: PDF text extraction, skill extraction, gap analysis, the
// pipeline that sequences them, upload scoping and report storage.
// All LLM calls go through llm_client::LlmCapability.

#[cfg(test)]
pub mod fixtures;
pub mod gaps;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod skills;
pub mod state;
pub mod store;
pub mod text;
pub mod upload;
