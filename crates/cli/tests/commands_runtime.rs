use std::env;
use std::fs;
use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use chipscout_agent::LlmClient;
use chipscout_cli::commands::filter::FilterArgs;
use chipscout_cli::commands::{bom, chip, filter, order, recent, search, suggest};
use chipscout_core::config::AppConfig;
use serde_json::Value;
use tempfile::TempDir;

struct CannedClient {
    reply: &'static str,
}

#[async_trait]
impl LlmClient for CannedClient {
    async fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok(self.reply.to_string())
    }
}

struct DownClient;

#[async_trait]
impl LlmClient for DownClient {
    async fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

#[test]
fn search_returns_ranked_suggestions_and_matching_chips() {
    with_env(&[], || {
        let result = search::run("STM32", Some(5));
        assert_eq!(result.exit_code, 0, "{}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "search");
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["data"]["query"], "STM32");

        let suggestions = payload["data"]["suggestions"].as_array().cloned().unwrap_or_default();
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 5);

        let chips = payload["data"]["chips"].as_array().cloned().unwrap_or_default();
        assert!(chips.iter().any(|chip| chip["id"] == "stm32f407vgt6"));
    });
}

#[test]
fn search_limit_is_capped_by_configured_maximum() {
    with_env(&[("CHIPSCOUT_SEARCH_MAX_LIMIT", "2"), ("CHIPSCOUT_SEARCH_DEFAULT_LIMIT", "1")], || {
        let result = search::run("s", Some(40));
        assert_eq!(result.exit_code, 0, "{}", result.output);

        let payload = parse_payload(&result.output);
        let suggestions = payload["data"]["suggestions"].as_array().cloned().unwrap_or_default();
        assert!(suggestions.len() <= 2);
    });
}

#[test]
fn recent_reflects_searches_persisted_to_history_file() {
    let dir = TempDir::new().expect("temp dir");
    let history_path = dir.path().join("history.json");
    let history_path = history_path.to_string_lossy().into_owned();

    with_env(&[("CHIPSCOUT_SEARCH_HISTORY_PATH", history_path.as_str())], || {
        let seeded = parse_payload(&recent::run().output);
        assert_eq!(seeded["status"], "ok");
        assert!(!seeded["data"].as_array().cloned().unwrap_or_default().is_empty());

        assert_eq!(search::run("rp2040", None).exit_code, 0);
        assert_eq!(search::run("lm317", None).exit_code, 0);

        let payload = parse_payload(&recent::run().output);
        assert_eq!(payload["data"][0]["text"], "lm317");
        assert_eq!(payload["data"][1]["text"], "rp2040");
        assert_eq!(payload["data"][0]["kind"], "recent");
    });
}

#[test]
fn searches_persist_under_home_when_no_history_path_is_configured() {
    let home = TempDir::new().expect("temp home");
    let home_path = home.path().to_string_lossy().into_owned();

    with_env(&[("HOME", home_path.as_str())], || {
        assert_eq!(search::run("bme280", None).exit_code, 0);

        let stored = home.path().join(".chipscout").join("history.json");
        let raw = fs::read_to_string(&stored).expect("history file written under home");
        assert!(raw.contains("bme280"));

        let payload = parse_payload(&recent::run().output);
        assert_eq!(payload["data"][0]["text"], "bme280");
    });
}

#[test]
fn chip_lookup_includes_alternatives() {
    with_env(&[], || {
        let result = chip::run("stm32f103c8t6");
        assert_eq!(result.exit_code, 0, "{}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "chip");
        assert_eq!(payload["data"]["chip"]["part_number"], "STM32F103C8T6");
        let alternatives = payload["data"]["alternatives"].as_array().cloned().unwrap_or_default();
        assert!(alternatives.iter().any(|chip| chip["id"] == "gd32f103c8t6"));
    });
}

#[test]
fn unknown_chip_returns_not_found_code() {
    with_env(&[], || {
        let result = chip::run("no-such-part");
        assert_eq!(result.exit_code, 4);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "not_found");
    });
}

#[test]
fn order_quotes_cheapest_offer_for_quantity() {
    with_env(&[], || {
        let result = order::run("lm317t", Some(100));
        assert_eq!(result.exit_code, 0, "{}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["data"]["quantity"], 100);
        assert_eq!(payload["data"]["order"]["chip_id"], "lm317t");
        assert!(payload["data"]["quote"].is_object());
    });
}

#[test]
fn filter_flags_produce_estimated_result_count() {
    with_env(&[], || {
        let result = filter::run(&FilterArgs {
            brands: vec!["STMicroelectronics".to_string()],
            packages: vec!["LQFP-100".to_string()],
            ..FilterArgs::default()
        });
        assert_eq!(result.exit_code, 0, "{}", result.output);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["data"]["result_count"], 9500);
        assert_eq!(payload["data"]["selected_facets"], 2);

        let serialized = payload["data"]["serialized"].as_str().unwrap_or_default().to_string();
        let resumed = filter::run(&FilterArgs {
            state: Some(serialized),
            packages: vec!["LQFP-100".to_string()],
            ops: Some(r#"[{"op":"toggle_package","package":"LQFP-100","included":false}]"#.to_string()),
            ..FilterArgs::default()
        });
        let payload = parse_payload(&resumed.output);
        assert_eq!(payload["data"]["result_count"], 9700);
    });
}

#[test]
fn filter_rejects_malformed_ops_json() {
    with_env(&[], || {
        let result =
            filter::run(&FilterArgs { ops: Some("not json".to_string()), ..FilterArgs::default() });
        assert_eq!(result.exit_code, 5);
        assert_eq!(parse_payload(&result.output)["error_class"], "invalid_input");
    });
}

#[test]
fn missing_api_key_is_a_config_failure() {
    with_env(&[("CHIPSCOUT_LLM_PROVIDER", "openai")], || {
        let result = search::run("stm32", None);
        assert_eq!(result.exit_code, 2);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "config_validation");
    });
}

#[test]
fn suggest_returns_model_recommendation() {
    let client = Arc::new(CannedClient {
        reply: "```json\n{\"recommendation\":\"ESP32-WROOM-32E\",\"reasoning\":\"WiFi and BLE in one module\"}\n```",
    });

    let result = suggest::run_with_client(
        &AppConfig::default(),
        client,
        "wifi microcontroller for a sensor node",
    );
    assert_eq!(result.exit_code, 0, "{}", result.output);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["message"], "ESP32-WROOM-32E");
    assert_eq!(payload["data"]["reasoning"], "WiFi and BLE in one module");
}

#[test]
fn suggest_rejects_blank_description_before_calling_model() {
    let result = suggest::run_with_client(&AppConfig::default(), Arc::new(DownClient), "   ");
    assert_eq!(result.exit_code, 5);
    assert_eq!(parse_payload(&result.output)["error_class"], "description_empty");
}

#[test]
fn suggest_maps_model_outage_to_upstream_code() {
    let result =
        suggest::run_with_client(&AppConfig::default(), Arc::new(DownClient), "3.3V LDO, 500mA");
    assert_eq!(result.exit_code, 6);
    assert_eq!(parse_payload(&result.output)["error_class"], "upstream_unavailable");
}

#[test]
fn bom_file_is_sent_as_data_uri_and_suggestion_returned() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("parts.csv");
    fs::write(&path, "ref,part,qty\nU1,AMS1117-3.3,1\nU2,STM32F103C8T6,1\n").expect("write bom");

    let uri = bom::file_data_uri(&path, None).expect("data uri");
    assert!(uri.starts_with("data:text/csv;base64,"));

    let client = Arc::new(CannedClient {
        reply: r#"{"suggested_component":"TLV70033DDCR","reasoning":"lower dropout than AMS1117"}"#,
    });
    let result = bom::run_with_client(
        &AppConfig::default(),
        client,
        &path,
        "replace the regulator with a low-dropout part",
        None,
    );
    assert_eq!(result.exit_code, 0, "{}", result.output);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["data"]["suggested_component"], "TLV70033DDCR");
}

#[test]
fn bom_rejects_unsupported_file_type() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("board.png");
    fs::write(&path, [0x89, b'P', b'N', b'G']).expect("write file");

    let result = bom::run_with_client(
        &AppConfig::default(),
        Arc::new(DownClient),
        &path,
        "find a cheaper part",
        None,
    );
    assert_eq!(result.exit_code, 5);
    assert_eq!(parse_payload(&result.output)["error_class"], "file_type_unsupported");
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid json")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env lock poisoned");

    let keys = [
        "CHIPSCOUT_LLM_PROVIDER",
        "CHIPSCOUT_LLM_API_KEY",
        "CHIPSCOUT_LLM_BASE_URL",
        "CHIPSCOUT_LLM_MODEL",
        "CHIPSCOUT_LLM_TIMEOUT_SECS",
        "CHIPSCOUT_LLM_MAX_RETRIES",
        "CHIPSCOUT_SERVER_BIND_ADDRESS",
        "CHIPSCOUT_SERVER_PORT",
        "CHIPSCOUT_SERVER_GRACEFUL_SHUTDOWN_SECS",
        "CHIPSCOUT_SEARCH_DEFAULT_LIMIT",
        "CHIPSCOUT_SEARCH_MAX_LIMIT",
        "CHIPSCOUT_SEARCH_HISTORY_PATH",
        "CHIPSCOUT_SEARCH_HISTORY_CAPACITY",
        "CHIPSCOUT_UPLOADS_MAX_BOM_BYTES",
        "CHIPSCOUT_UPLOADS_MAX_DESCRIPTION_CHARS",
        "CHIPSCOUT_LOGGING_LEVEL",
        "CHIPSCOUT_LOGGING_FORMAT",
        "CHIPSCOUT_LOG_LEVEL",
        "CHIPSCOUT_LOG_FORMAT",
        "HOME",
        "USERPROFILE",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
