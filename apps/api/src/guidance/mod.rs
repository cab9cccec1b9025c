// Career guidance: profile analysis, learning roadmaps, resume evaluation.
// All LLM calls go through llm_client — no direct API calls here.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
