use std::sync::Arc;

use chipscout_agent::{AgentRuntime, LlmClient};
use chipscout_core::config::AppConfig;

use crate::commands::{
    agent_runtime, agent_runtime_with_client, block_on, load_config, CommandResult,
};

pub fn run(description: &str) -> CommandResult {
    let config = match load_config("suggest") {
        Ok(config) => config,
        Err(failure) => return failure,
    };
    let runtime = match agent_runtime("suggest", &config) {
        Ok(runtime) => runtime,
        Err(failure) => return failure,
    };

    execute(&runtime, description)
}

/// Same as [`run`] with an explicit completion client.
pub fn run_with_client(
    config: &AppConfig,
    client: Arc<dyn LlmClient>,
    description: &str,
) -> CommandResult {
    execute(&agent_runtime_with_client(config, client), description)
}

fn execute(runtime: &AgentRuntime, description: &str) -> CommandResult {
    match block_on("suggest", runtime.suggest_component(description)) {
        Ok(Ok(recommendation)) => CommandResult::success_with_data(
            "suggest",
            recommendation.recommendation.clone(),
            &recommendation,
        ),
        Ok(Err(error)) => CommandResult::flow_failure("suggest", error),
        Err(failure) => failure,
    }
}
