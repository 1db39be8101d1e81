// Resume generation: request validation, prompt assembly, and the single model call.
// All LLM calls go through llm_client; no direct Gemini API calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod validation;
