use std::env;
use std::fs;
use std::path::Path;

use chipscout_core::config::{detect_config_path, AppConfig, LoadOptions};
use toml::Value;

struct Field {
    key: &'static str,
    env: &'static str,
    value: String,
}

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in fields(&config) {
        let source =
            field_source(field.key, field.env, config_file_doc.as_ref(), config_file_path.as_deref());
        lines.push(render_line(field.key, &field.value, source));
    }

    lines.join("\n")
}

fn fields(config: &AppConfig) -> Vec<Field> {
    let llm_api_key = if config.llm.api_key.is_some() { "<redacted>" } else { "<unset>" };
    let history_path = crate::commands::history_path(config)
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<in-memory>".to_string());

    vec![
        Field {
            key: "llm.provider",
            env: "CHIPSCOUT_LLM_PROVIDER",
            value: config.llm.provider.as_str().to_string(),
        },
        Field { key: "llm.model", env: "CHIPSCOUT_LLM_MODEL", value: config.llm.model.clone() },
        Field {
            key: "llm.base_url",
            env: "CHIPSCOUT_LLM_BASE_URL",
            value: config.llm.base_url.clone().unwrap_or_else(|| "<provider default>".to_string()),
        },
        Field { key: "llm.api_key", env: "CHIPSCOUT_LLM_API_KEY", value: llm_api_key.to_string() },
        Field {
            key: "llm.timeout_secs",
            env: "CHIPSCOUT_LLM_TIMEOUT_SECS",
            value: config.llm.timeout_secs.to_string(),
        },
        Field {
            key: "llm.max_retries",
            env: "CHIPSCOUT_LLM_MAX_RETRIES",
            value: config.llm.max_retries.to_string(),
        },
        Field {
            key: "server.bind_address",
            env: "CHIPSCOUT_SERVER_BIND_ADDRESS",
            value: config.server.bind_address.clone(),
        },
        Field {
            key: "server.port",
            env: "CHIPSCOUT_SERVER_PORT",
            value: config.server.port.to_string(),
        },
        Field {
            key: "server.graceful_shutdown_secs",
            env: "CHIPSCOUT_SERVER_GRACEFUL_SHUTDOWN_SECS",
            value: config.server.graceful_shutdown_secs.to_string(),
        },
        Field {
            key: "search.default_limit",
            env: "CHIPSCOUT_SEARCH_DEFAULT_LIMIT",
            value: config.search.default_limit.to_string(),
        },
        Field {
            key: "search.max_limit",
            env: "CHIPSCOUT_SEARCH_MAX_LIMIT",
            value: config.search.max_limit.to_string(),
        },
        Field { key: "search.history_path", env: "CHIPSCOUT_SEARCH_HISTORY_PATH", value: history_path },
        Field {
            key: "search.history_capacity",
            env: "CHIPSCOUT_SEARCH_HISTORY_CAPACITY",
            value: config.search.history_capacity.to_string(),
        },
        Field {
            key: "uploads.max_bom_bytes",
            env: "CHIPSCOUT_UPLOADS_MAX_BOM_BYTES",
            value: config.uploads.max_bom_bytes.to_string(),
        },
        Field {
            key: "uploads.max_description_chars",
            env: "CHIPSCOUT_UPLOADS_MAX_DESCRIPTION_CHARS",
            value: config.uploads.max_description_chars.to_string(),
        },
        Field {
            key: "logging.level",
            env: "CHIPSCOUT_LOGGING_LEVEL",
            value: config.logging.level.clone(),
        },
        Field {
            key: "logging.format",
            env: "CHIPSCOUT_LOGGING_FORMAT",
            value: config.logging.format.as_str().to_string(),
        },
    ]
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_key: &str,
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if env::var_os(env_key).is_some() {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

#[cfg(test)]
mod tests {
    use toml::Value;

    use super::contains_path;

    #[test]
    fn nested_key_paths_are_found() {
        let doc: Value = "[llm]\nmodel = \"x\"\n[search]\nmax_limit = 10\n"
            .parse()
            .expect("toml should parse");

        assert!(contains_path(&doc, "llm.model"));
        assert!(contains_path(&doc, "search.max_limit"));
        assert!(!contains_path(&doc, "search.history_path"));
        assert!(!contains_path(&doc, "uploads"));
    }
}
