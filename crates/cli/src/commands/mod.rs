pub mod bom;
pub mod categories;
pub mod chip;
pub mod config;
pub mod doctor;
pub mod filter;
pub mod order;
pub mod recent;
pub mod search;
pub mod suggest;

use std::env;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use chipscout_agent::{AgentRuntime, FlowError, GuardrailPolicy, HttpLlmClient, LlmClient};
use chipscout_core::catalog::CatalogError;
use chipscout_core::config::{AppConfig, LoadOptions};
use chipscout_core::history::{FileSearchHistory, InMemorySearchHistory, SearchHistory};
use serde::Serialize;
use serde_json::Value;

pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_RUNTIME: u8 = 3;
pub const EXIT_NOT_FOUND: u8 = 4;
pub const EXIT_INVALID_INPUT: u8 = 5;
pub const EXIT_UPSTREAM: u8 = 6;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data: None,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn success_with_data(
        command: &str,
        message: impl Into<String>,
        data: &impl Serialize,
    ) -> Self {
        let data = match serde_json::to_value(data) {
            Ok(data) => data,
            Err(error) => {
                return Self::failure(command, "serialization", error.to_string(), EXIT_RUNTIME)
            }
        };
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data: Some(data),
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub(crate) fn not_found(command: &str, error: CatalogError) -> Self {
        Self::failure(command, "not_found", error.to_string(), EXIT_NOT_FOUND)
    }

    pub(crate) fn invalid_input(command: &str, message: impl Into<String>) -> Self {
        Self::failure(command, "invalid_input", message, EXIT_INVALID_INPUT)
    }

    pub(crate) fn flow_failure(command: &str, error: FlowError) -> Self {
        match error {
            FlowError::Validation(validation) => Self::failure(
                command,
                validation.reason_code(),
                validation.to_string(),
                EXIT_INVALID_INPUT,
            ),
            upstream @ FlowError::Upstream(_) => Self::failure(
                command,
                "upstream_unavailable",
                format!("{} ({upstream})", upstream.user_message()),
                EXIT_UPSTREAM,
            ),
        }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

pub(crate) fn load_config(command: &str) -> Result<AppConfig, CommandResult> {
    AppConfig::load(LoadOptions::default()).map_err(|error| {
        CommandResult::failure(
            command,
            "config_validation",
            format!("configuration issue: {error}"),
            EXIT_CONFIG,
        )
    })
}

pub const DEFAULT_HISTORY_DIR: &str = ".chipscout";
pub const DEFAULT_HISTORY_FILE: &str = "history.json";

/// Where CLI searches are remembered: `search.history_path` when set, else
/// `~/.chipscout/history.json`. `None` only when no home directory is known.
pub fn history_path(config: &AppConfig) -> Option<PathBuf> {
    config.search.history_path.clone().or_else(|| {
        ["HOME", "USERPROFILE"]
            .into_iter()
            .filter_map(env::var_os)
            .find(|home| !home.is_empty())
            .map(|home| PathBuf::from(home).join(DEFAULT_HISTORY_DIR).join(DEFAULT_HISTORY_FILE))
    })
}

pub(crate) fn open_history(config: &AppConfig) -> Box<dyn SearchHistory> {
    match history_path(config) {
        Some(path) => Box::new(FileSearchHistory::new(path, config.search.history_capacity)),
        None => Box::new(InMemorySearchHistory::new(config.search.history_capacity)),
    }
}

pub(crate) fn agent_runtime(
    command: &str,
    config: &AppConfig,
) -> Result<AgentRuntime, CommandResult> {
    let client = HttpLlmClient::from_config(&config.llm).map_err(|error| {
        CommandResult::failure(command, "llm_client", error.to_string(), EXIT_RUNTIME)
    })?;
    Ok(agent_runtime_with_client(config, Arc::new(client)))
}

pub fn agent_runtime_with_client(config: &AppConfig, client: Arc<dyn LlmClient>) -> AgentRuntime {
    AgentRuntime::new(client, GuardrailPolicy::from(&config.uploads))
}

pub(crate) fn block_on<F: Future>(command: &str, future: F) -> Result<F::Output, CommandResult> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().map_err(
        |error| {
            CommandResult::failure(
                command,
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                EXIT_RUNTIME,
            )
        },
    )?;
    Ok(runtime.block_on(future))
}
