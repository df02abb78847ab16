// Outreach script generation: typed form inputs, prompt rendering, and the HTTP handler.
// The only provider call goes through llm_client.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod script;
