use axum::{http::StatusCode, routing::get, Json, Router};
use chipscout_core::catalog::StaticCatalog;
use chrono::Utc;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub checked_at: String,
}

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    let catalog = catalog_check(StaticCatalog::global());
    let ready = catalog.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "chipscout-server runtime initialized".to_string(),
        },
        catalog,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn catalog_check(catalog: &StaticCatalog) -> HealthCheck {
    let chips = catalog.chips().len();
    let categories = catalog.categories().len();
    if chips > 0 && categories > 0 {
        HealthCheck {
            status: "ready",
            detail: format!("{chips} chips in {categories} categories loaded"),
        }
    } else {
        HealthCheck { status: "degraded", detail: "component catalog is empty".to_string() }
    }
}
