use std::fs;
use std::path::Path;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chipscout_agent::{AgentRuntime, LlmClient};
use chipscout_core::config::AppConfig;

use crate::commands::{
    agent_runtime, agent_runtime_with_client, block_on, load_config, CommandResult,
    EXIT_INVALID_INPUT,
};

pub fn run(path: &Path, description: &str, mime: Option<&str>) -> CommandResult {
    let config = match load_config("bom") {
        Ok(config) => config,
        Err(failure) => return failure,
    };
    let runtime = match agent_runtime("bom", &config) {
        Ok(runtime) => runtime,
        Err(failure) => return failure,
    };

    execute(&config, &runtime, path, description, mime)
}

/// Same as [`run`] with an explicit completion client.
pub fn run_with_client(
    config: &AppConfig,
    client: Arc<dyn LlmClient>,
    path: &Path,
    description: &str,
    mime: Option<&str>,
) -> CommandResult {
    execute(config, &agent_runtime_with_client(config, client), path, description, mime)
}

/// `data:<mime>;base64,<payload>` for a file on disk. The mime type comes from
/// the extension unless given explicitly.
pub fn file_data_uri(path: &Path, mime: Option<&str>) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    let mime = match mime {
        Some(mime) => mime.to_string(),
        None => mime_guess::from_path(path).first_raw().unwrap_or("application/octet-stream").to_string(),
    };
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

fn execute(
    config: &AppConfig,
    runtime: &AgentRuntime,
    path: &Path,
    description: &str,
    mime: Option<&str>,
) -> CommandResult {
    let size = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(error) => {
            return CommandResult::invalid_input(
                "bom",
                format!("cannot read `{}`: {error}", path.display()),
            )
        }
    };
    if size > config.uploads.max_bom_bytes as u64 {
        return CommandResult::failure(
            "bom",
            "file_too_large",
            format!("file is {size} bytes, the limit is {}", config.uploads.max_bom_bytes),
            EXIT_INVALID_INPUT,
        );
    }

    let data_uri = match file_data_uri(path, mime) {
        Ok(data_uri) => data_uri,
        Err(error) => {
            return CommandResult::invalid_input(
                "bom",
                format!("cannot read `{}`: {error}", path.display()),
            )
        }
    };

    match block_on("bom", runtime.suggest_from_bom(&data_uri, description)) {
        Ok(Ok(suggestion)) => CommandResult::success_with_data(
            "bom",
            suggestion.suggested_component.clone(),
            &suggestion,
        ),
        Ok(Err(error)) => CommandResult::flow_failure("bom", error),
        Err(failure) => failure,
    }
}
