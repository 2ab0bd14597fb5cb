use std::collections::HashSet;

use chipscout_agent::HttpLlmClient;
use chipscout_core::catalog::StaticCatalog;
use chipscout_core::config::{AppConfig, LoadOptions};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = vec![check_catalog_integrity(StaticCatalog::global())];

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.push(check_history_store(&config));
            checks.push(check_llm_readiness(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            for name in ["history_store", "llm_readiness"] {
                checks.push(DoctorCheck {
                    name,
                    status: CheckStatus::Skipped,
                    details: "skipped because configuration did not load".to_string(),
                });
            }
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_catalog_integrity(catalog: &StaticCatalog) -> DoctorCheck {
    let problems = catalog_problems(catalog);
    if problems.is_empty() {
        DoctorCheck {
            name: "catalog_integrity",
            status: CheckStatus::Pass,
            details: format!(
                "{} chips in {} categories, all references resolve",
                catalog.chips().len(),
                catalog.categories().len()
            ),
        }
    } else {
        DoctorCheck {
            name: "catalog_integrity",
            status: CheckStatus::Fail,
            details: problems.join("; "),
        }
    }
}

fn catalog_problems(catalog: &StaticCatalog) -> Vec<String> {
    let mut problems = Vec::new();
    if catalog.chips().is_empty() {
        problems.push("catalog has no chips".to_string());
    }
    if catalog.categories().is_empty() {
        problems.push("catalog has no categories".to_string());
    }

    let category_ids: HashSet<&str> =
        catalog.categories().iter().map(|category| category.id.as_str()).collect();
    let chip_ids: HashSet<&str> = catalog.chips().iter().map(|chip| chip.id.as_str()).collect();

    for category in catalog.categories() {
        if let Some(parent) = &category.parent_id {
            if !category_ids.contains(parent.as_str()) {
                problems.push(format!("category `{}` has unknown parent `{parent}`", category.id));
            }
        }
    }

    for chip in catalog.chips() {
        if !category_ids.contains(chip.category_id.as_str()) {
            problems.push(format!("chip `{}` has unknown category `{}`", chip.id, chip.category_id));
        }
        for alternative in &chip.alternative_ids {
            if !chip_ids.contains(alternative.as_str()) {
                problems.push(format!("chip `{}` lists unknown alternative `{alternative}`", chip.id));
            }
        }
    }

    problems
}

fn check_history_store(config: &AppConfig) -> DoctorCheck {
    let Some(path) = crate::commands::history_path(config) else {
        return DoctorCheck {
            name: "history_store",
            status: CheckStatus::Pass,
            details: "in-memory history, nothing persisted between runs".to_string(),
        };
    };

    // The directory is created on the first recorded search.
    let parent_blocked = path.parent().is_some_and(|parent| parent.exists() && !parent.is_dir());
    if parent_blocked {
        return DoctorCheck {
            name: "history_store",
            status: CheckStatus::Fail,
            details: format!("parent of `{}` is not a directory", path.display()),
        };
    }
    if path.is_dir() {
        return DoctorCheck {
            name: "history_store",
            status: CheckStatus::Fail,
            details: format!("`{}` is a directory", path.display()),
        };
    }

    DoctorCheck {
        name: "history_store",
        status: CheckStatus::Pass,
        details: format!("history persisted to `{}`", path.display()),
    }
}

fn check_llm_readiness(config: &AppConfig) -> DoctorCheck {
    match HttpLlmClient::from_config(&config.llm) {
        Ok(client) => DoctorCheck {
            name: "llm_readiness",
            status: CheckStatus::Pass,
            details: format!(
                "{} model `{}` at {} (not contacted)",
                client.provider().as_str(),
                client.model(),
                client.endpoint()
            ),
        },
        Err(error) => DoctorCheck {
            name: "llm_readiness",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
