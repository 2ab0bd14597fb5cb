use std::sync::Arc;

use axum::Router;
use chipscout_agent::{AgentRuntime, GuardrailPolicy, HttpLlmClient};
use chipscout_core::catalog::StaticCatalog;
use chipscout_core::config::{AppConfig, ConfigError, LoadOptions};
use chipscout_core::history::{FileSearchHistory, InMemorySearchHistory, SearchHistory};
use thiserror::Error;
use tracing::info;

use crate::{api, health};

pub struct Application {
    pub config: AppConfig,
    pub api_state: api::ApiState,
}

impl Application {
    pub fn router(&self) -> Router {
        api::router(self.api_state.clone()).merge(health::router())
    }
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("completion client setup failed: {0}")]
    LlmClient(#[source] anyhow::Error),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let catalog = StaticCatalog::global();
    info!(
        event_name = "system.bootstrap.catalog_loaded",
        correlation_id = "bootstrap",
        chips = catalog.chips().len(),
        categories = catalog.categories().len(),
        "component catalog loaded"
    );

    let history = search_history(&config);

    let client = HttpLlmClient::from_config(&config.llm).map_err(BootstrapError::LlmClient)?;
    info!(
        event_name = "system.bootstrap.llm_configured",
        correlation_id = "bootstrap",
        provider = client.provider().as_str(),
        model = client.model(),
        "completion client configured"
    );
    let agent = AgentRuntime::new(Arc::new(client), GuardrailPolicy::from(&config.uploads));

    let api_state = api::ApiState::new(history, Arc::new(agent), config.search.clone());
    Ok(Application { config, api_state })
}

fn search_history(config: &AppConfig) -> Arc<dyn SearchHistory> {
    match &config.search.history_path {
        Some(path) => {
            info!(
                event_name = "system.bootstrap.history_file",
                correlation_id = "bootstrap",
                path = %path.display(),
                "search history persisted to file"
            );
            Arc::new(FileSearchHistory::new(path.clone(), config.search.history_capacity))
        }
        None => Arc::new(InMemorySearchHistory::new(config.search.history_capacity)),
    }
}
