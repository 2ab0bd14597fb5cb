//! AI suggestion flows for component lookup.
//!
//! Two flows sit on top of a pluggable completion client:
//! - **Component suggestion**: free-text requirements -> one recommended part
//! - **BOM suggestion**: an uploaded bill of materials plus a request -> one suggested change
//!
//! Every input passes the [`guardrails::GuardrailPolicy`] before a prompt is
//! built, so rejected requests never reach the network. Model replies are
//! parsed as JSON; anything unusable surfaces as [`runtime::FlowError::Upstream`].

pub mod guardrails;
pub mod llm;
pub mod prompts;
pub mod runtime;

pub use guardrails::{BomUpload, GuardrailPolicy, ValidationError};
pub use llm::{HttpLlmClient, LlmClient};
pub use runtime::{AgentRuntime, BomSuggestion, ComponentRecommendation, FlowError};
