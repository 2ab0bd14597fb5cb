use std::sync::Arc;

use chipscout_core::errors::{ApplicationError, DomainError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::guardrails::{GuardrailPolicy, ValidationError};
use crate::llm::LlmClient;
use crate::prompts;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecommendation {
    pub recommendation: String,
    pub reasoning: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomSuggestion {
    pub suggested_component: String,
    pub reasoning: String,
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("suggestion service failed: {0}")]
    Upstream(String),
}

impl FlowError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(error) => error.to_string(),
            Self::Upstream(_) => {
                "The suggestion service could not complete the request. Please try again."
                    .to_string()
            }
        }
    }
}

impl From<FlowError> for ApplicationError {
    fn from(value: FlowError) -> Self {
        match value {
            FlowError::Validation(error) => DomainError::Validation(error.to_string()).into(),
            FlowError::Upstream(message) => Self::Upstream(message),
        }
    }
}

/// Runs the AI suggestion flows: validate input, prompt the model, parse the reply.
pub struct AgentRuntime {
    client: Arc<dyn LlmClient>,
    guardrails: GuardrailPolicy,
}

impl AgentRuntime {
    pub fn new(client: Arc<dyn LlmClient>, guardrails: GuardrailPolicy) -> Self {
        Self { client, guardrails }
    }

    pub fn guardrails(&self) -> &GuardrailPolicy {
        &self.guardrails
    }

    pub async fn suggest_component(
        &self,
        description: &str,
    ) -> Result<ComponentRecommendation, FlowError> {
        let description = self
            .guardrails
            .check_description(description)
            .map_err(|error| rejected("ai.suggest.rejected", error))?;

        tracing::info!(
            event_name = "ai.suggest.started",
            description_chars = description.chars().count(),
            "requesting component recommendation"
        );

        let prompt = prompts::build_component_prompt(&description);
        let reply: ComponentRecommendation = self.complete_json("ai.suggest", &prompt).await?;
        if reply.recommendation.trim().is_empty() {
            return Err(upstream("ai.suggest", "reply had an empty recommendation"));
        }
        if reply.reasoning.trim().is_empty() {
            return Err(upstream("ai.suggest", "reply had an empty reasoning"));
        }

        tracing::info!(event_name = "ai.suggest.completed", "component recommendation ready");
        Ok(reply)
    }

    pub async fn suggest_from_bom(
        &self,
        file_data_uri: &str,
        description: &str,
    ) -> Result<BomSuggestion, FlowError> {
        let upload = self
            .guardrails
            .check_bom(file_data_uri, description)
            .map_err(|error| rejected("ai.bom.rejected", error))?;

        tracing::info!(
            event_name = "ai.bom.started",
            mime_type = %upload.mime_type,
            file_bytes = upload.bytes.len(),
            "requesting BOM suggestion"
        );

        let prompt = prompts::build_bom_prompt(&upload);
        let reply: BomSuggestion = self.complete_json("ai.bom", &prompt).await?;
        if reply.suggested_component.trim().is_empty() {
            return Err(upstream("ai.bom", "reply had an empty suggested_component"));
        }
        if reply.reasoning.trim().is_empty() {
            return Err(upstream("ai.bom", "reply had an empty reasoning"));
        }

        tracing::info!(event_name = "ai.bom.completed", "BOM suggestion ready");
        Ok(reply)
    }

    async fn complete_json<T: DeserializeOwned>(
        &self,
        flow: &'static str,
        prompt: &str,
    ) -> Result<T, FlowError> {
        let reply = self
            .client
            .complete(prompt)
            .await
            .map_err(|error| upstream(flow, &format!("completion failed: {error:#}")))?;

        serde_json::from_str(prompts::extract_json(&reply))
            .map_err(|error| upstream(flow, &format!("reply was not the expected JSON: {error}")))
    }
}

fn rejected(event_name: &'static str, error: ValidationError) -> FlowError {
    tracing::info!(event_name, reason_code = error.reason_code(), "suggestion input rejected");
    FlowError::Validation(error)
}

fn upstream(flow: &'static str, detail: &str) -> FlowError {
    tracing::warn!(event_name = "ai.upstream.failed", flow, detail, "suggestion flow failed");
    FlowError::Upstream(detail.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use chipscout_core::errors::{ApplicationError, InterfaceError};

    use super::{AgentRuntime, BomSuggestion, ComponentRecommendation, FlowError};
    use crate::guardrails::{GuardrailPolicy, ValidationError};
    use crate::llm::LlmClient;

    struct ScriptedClient {
        replies: Mutex<VecDeque<Result<String>>>,
        prompts: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    impl ScriptedClient {
        fn new(replies: Vec<Result<String>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmClient for ScriptedClient {
        async fn complete(&self, prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().expect("prompt log").push(prompt.to_string());
            self.replies
                .lock()
                .expect("reply script")
                .pop_front()
                .unwrap_or_else(|| Err(anyhow!("script exhausted")))
        }
    }

    fn runtime(client: Arc<ScriptedClient>) -> AgentRuntime {
        AgentRuntime::new(client, GuardrailPolicy::default())
    }

    fn csv_uri(contents: &str) -> String {
        format!("data:text/csv;base64,{}", STANDARD.encode(contents))
    }

    #[tokio::test]
    async fn fenced_reply_becomes_recommendation() {
        let client = ScriptedClient::new(vec![Ok(
            "```json\n{\"recommendation\":\"TLV70033 3.3V LDO\",\"reasoning\":\"200mA, SOT-23-5\"}\n```"
                .to_string(),
        )]);
        let runtime = runtime(client.clone());

        let result = runtime.suggest_component("  3.3V LDO for a battery sensor  ").await;

        assert_eq!(
            result.expect("flow should succeed"),
            ComponentRecommendation {
                recommendation: "TLV70033 3.3V LDO".to_string(),
                reasoning: "200mA, SOT-23-5".to_string(),
            }
        );
        let prompts = client.prompts.lock().expect("prompt log");
        assert!(prompts[0].contains("3.3V LDO for a battery sensor"));
    }

    #[tokio::test]
    async fn blank_description_never_reaches_the_model() {
        let client = ScriptedClient::new(vec![]);
        let runtime = runtime(client.clone());

        let error = runtime.suggest_component("   ").await.expect_err("blank should fail");

        assert!(matches!(error, FlowError::Validation(ValidationError::EmptyDescription)));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn unparseable_reply_is_an_upstream_failure() {
        let client = ScriptedClient::new(vec![Ok("I think you want an LDO.".to_string())]);
        let error = runtime(client)
            .suggest_component("3.3V LDO")
            .await
            .expect_err("prose reply should fail");

        assert!(matches!(error, FlowError::Upstream(_)));
        assert_eq!(
            error.user_message(),
            "The suggestion service could not complete the request. Please try again."
        );
    }

    #[tokio::test]
    async fn incomplete_reply_is_an_upstream_failure() {
        let client =
            ScriptedClient::new(vec![Ok("{\"recommendation\":\"\",\"reasoning\":\"?\"}".to_string())]);
        let error = runtime(client).suggest_component("3.3V LDO").await.expect_err("empty field");
        assert!(matches!(error, FlowError::Upstream(_)));

        let client = ScriptedClient::new(vec![Ok("{\"recommendation\":\"LM317T\"}".to_string())]);
        let error = runtime(client).suggest_component("3.3V LDO").await.expect_err("missing field");
        assert!(matches!(error, FlowError::Upstream(_)));

        let client = ScriptedClient::new(vec![Ok(
            "{\"recommendation\":\"LM317T\",\"reasoning\":\"  \"}".to_string(),
        )]);
        let error = runtime(client).suggest_component("3.3V LDO").await.expect_err("blank reasoning");
        assert!(matches!(error, FlowError::Upstream(_)));
    }

    #[tokio::test]
    async fn bom_reply_without_reasoning_is_an_upstream_failure() {
        let client = ScriptedClient::new(vec![Ok(
            "{\"suggested_component\":\"TPS563200\",\"reasoning\":\"\"}".to_string(),
        )]);
        let error = runtime(client)
            .suggest_from_bom(&csv_uri("ref,part\nU2,LM317T\n"), "improve efficiency")
            .await
            .expect_err("empty reasoning");

        assert!(matches!(error, FlowError::Upstream(_)));
    }

    #[tokio::test]
    async fn client_error_maps_to_bad_gateway_class() {
        let client = ScriptedClient::new(vec![Err(anyhow!("connection reset"))]);
        let error = runtime(client).suggest_component("buck converter 3A").await.expect_err("fails");

        let interface = ApplicationError::from(error).into_interface("req-ai-1");
        assert!(matches!(interface, InterfaceError::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn bom_flow_returns_suggestion() {
        let client = ScriptedClient::new(vec![Ok(
            "Here you go: {\"suggested_component\":\"TPS563200\",\"reasoning\":\"replaces the linear U2 stage\"}"
                .to_string(),
        )]);
        let runtime = runtime(client.clone());

        let result = runtime
            .suggest_from_bom(&csv_uri("ref,part\nU2,LM317T\n"), "improve efficiency")
            .await
            .expect("bom flow should succeed");

        assert_eq!(
            result,
            BomSuggestion {
                suggested_component: "TPS563200".to_string(),
                reasoning: "replaces the linear U2 stage".to_string(),
            }
        );
        let prompts = client.prompts.lock().expect("prompt log");
        assert!(prompts[0].contains("U2,LM317T"));
    }

    #[tokio::test]
    async fn bom_validation_failures_skip_the_model() {
        let client = ScriptedClient::new(vec![]);
        let runtime = runtime(client.clone());

        let oversized = format!(
            "data:text/csv;base64,{}",
            STANDARD.encode(vec![b'a'; 5 * 1024 * 1024 + 1])
        );
        let error = runtime.suggest_from_bom(&oversized, "check").await.expect_err("too large");
        assert!(matches!(error, FlowError::Validation(ValidationError::FileTooLarge { .. })));

        let png = format!("data:image/png;base64,{}", STANDARD.encode(b"png"));
        let error = runtime.suggest_from_bom(&png, "check").await.expect_err("wrong type");
        assert!(matches!(error, FlowError::Validation(ValidationError::UnsupportedFileType(_))));

        let error = runtime.suggest_from_bom(&csv_uri("a,b"), "").await.expect_err("no text");
        let interface = ApplicationError::from(error).into_interface("req-ai-2");
        assert!(matches!(interface, InterfaceError::BadRequest { .. }));

        assert_eq!(client.calls(), 0);
    }
}
