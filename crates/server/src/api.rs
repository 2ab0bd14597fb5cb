//! JSON API for component lookup.
//!
//! Endpoints:
//! - `GET    /api/v1/suggestions?q=&limit=`        ranked search suggestions
//! - `GET    /api/v1/suggestions/recent`           recent searches
//! - `POST   /api/v1/search/history`               remember a submitted search
//! - `DELETE /api/v1/search/history`               forget all searches
//! - `GET    /api/v1/chips?q=&filter=&category=`   faceted chip search
//! - `GET    /api/v1/chips/{id}`                   chip detail
//! - `GET    /api/v1/chips/{id}/order?quantity=`   distributor offers and price quote
//! - `GET    /api/v1/chips/{id}/alternatives`      alternative parts
//! - `GET    /api/v1/categories`                   category tree
//! - `GET    /api/v1/categories/{id}`              category detail with its chips
//! - `POST   /api/v1/filters/apply`                run filter operations
//! - `POST   /api/v1/ai/suggest`                   AI component recommendation
//! - `POST   /api/v1/ai/bom`                       AI suggestion from a BOM upload

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chipscout_agent::{AgentRuntime, BomSuggestion, ComponentRecommendation, FlowError};
use chipscout_core::catalog::{Category, CatalogError, Chip, OrderDetails, StaticCatalog};
use chipscout_core::config::SearchConfig;
use chipscout_core::errors::{ApplicationError, DomainError, InterfaceError};
use chipscout_core::filter::{FilterOp, FilterState};
use chipscout_core::history::SearchHistory;
use chipscout_core::suggestions::{
    rank_suggestions, recent_suggestions, record_query, SuggestionEntry,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct ApiState {
    history: Arc<dyn SearchHistory>,
    agent: Arc<AgentRuntime>,
    search: SearchConfig,
}

impl ApiState {
    pub fn new(
        history: Arc<dyn SearchHistory>,
        agent: Arc<AgentRuntime>,
        search: SearchConfig,
    ) -> Self {
        Self { history, agent, search }
    }
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/v1/suggestions", get(suggestions))
        .route("/api/v1/suggestions/recent", get(recent))
        .route("/api/v1/search/history", post(record_search).delete(clear_history))
        .route("/api/v1/chips", get(search_chips))
        .route("/api/v1/chips/{id}", get(chip_detail))
        .route("/api/v1/chips/{id}/order", get(order_details))
        .route("/api/v1/chips/{id}/alternatives", get(alternatives))
        .route("/api/v1/categories", get(categories))
        .route("/api/v1/categories/{id}", get(category_detail))
        .route("/api/v1/filters/apply", post(apply_filters))
        .route("/api/v1/ai/suggest", post(ai_suggest))
        .route("/api/v1/ai/bom", post(ai_bom))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    pub correlation_id: String,
}

#[derive(Debug)]
pub struct ApiError(InterfaceError);

impl From<ApplicationError> for ApiError {
    fn from(value: ApplicationError) -> Self {
        Self(value.into_interface(Uuid::new_v4().to_string()))
    }
}

impl From<CatalogError> for ApiError {
    fn from(value: CatalogError) -> Self {
        ApplicationError::from(value).into()
    }
}

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        ApplicationError::from(value).into()
    }
}

impl From<FlowError> for ApiError {
    fn from(value: FlowError) -> Self {
        ApplicationError::from(value).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0;
        let status = match &error {
            InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            InterfaceError::NotFound { .. } => StatusCode::NOT_FOUND,
            InterfaceError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
            InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &error {
            InterfaceError::BadRequest { message, .. } | InterfaceError::NotFound { message, .. } => {
                message.clone()
            }
            InterfaceError::UpstreamUnavailable { .. } | InterfaceError::Internal { .. } => {
                error.user_message().to_string()
            }
        };

        warn!(
            event_name = "api.request.failed",
            correlation_id = %error.correlation_id(),
            error_class = error.error_class(),
            status = status.as_u16(),
            detail = %error.message(),
            "request failed"
        );

        let body = ErrorBody {
            error: error.error_class().to_string(),
            message,
            correlation_id: error.correlation_id().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Suggestions and search history
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct SuggestionQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub query: String,
    pub suggestions: Vec<SuggestionEntry>,
}

pub async fn suggestions(
    State(state): State<ApiState>,
    Query(query): Query<SuggestionQuery>,
) -> Json<SuggestionsResponse> {
    let text = query.q.unwrap_or_default();
    let limit = query.limit.unwrap_or(state.search.default_limit).min(state.search.max_limit);
    let suggestions = rank_suggestions(&text, limit);

    Json(SuggestionsResponse { query: text, suggestions })
}

pub async fn recent(State(state): State<ApiState>) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        query: String::new(),
        suggestions: recent_suggestions(state.history.as_ref()),
    })
}

#[derive(Debug, Deserialize)]
pub struct RecordSearchRequest {
    pub query: String,
}

pub async fn record_search(
    State(state): State<ApiState>,
    Json(request): Json<RecordSearchRequest>,
) -> Result<StatusCode, ApiError> {
    if request.query.trim().is_empty() {
        return Err(DomainError::Validation("query must not be empty".to_string()).into());
    }

    record_query(state.history.as_ref(), &request.query);
    Ok(StatusCode::ACCEPTED)
}

pub async fn clear_history(State(state): State<ApiState>) -> Result<StatusCode, ApiError> {
    state
        .history
        .clear()
        .map_err(|error| ApplicationError::Configuration(error.to_string()))?;

    info!(event_name = "search.history.cleared", "search history cleared");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ChipSearchQuery {
    pub q: Option<String>,
    /// Serialized filter state.
    pub filter: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChipSearchResponse {
    pub total: usize,
    pub chips: Vec<Chip>,
    pub filter: FilterState,
    pub summary: Vec<String>,
    pub query_string: String,
}

pub async fn search_chips(
    State(state): State<ApiState>,
    Query(query): Query<ChipSearchQuery>,
) -> Result<Json<ChipSearchResponse>, ApiError> {
    let catalog = StaticCatalog::global();
    let category = query.category.as_deref().map(str::trim).filter(|value| !value.is_empty());

    let mut filter = query.filter.as_deref().map(FilterState::deserialize).unwrap_or_default();
    if let Some(text) = query.q.as_deref().map(str::trim).filter(|text| !text.is_empty()) {
        filter = filter.set_query(text);
        record_query(state.history.as_ref(), text);
    }

    let mut chips = catalog.search_chips(&filter);
    if let Some(category) = category {
        let in_category: Vec<&str> =
            catalog.chips_in_category(category)?.into_iter().map(|chip| chip.id.as_str()).collect();
        chips.retain(|chip| in_category.contains(&chip.id.as_str()));
    }

    info!(
        event_name = "catalog.search.completed",
        matches = chips.len(),
        selected_facets = filter.count_selected_facets(),
        "chip search completed"
    );

    Ok(Json(ChipSearchResponse {
        total: chips.len(),
        chips: chips.into_iter().cloned().collect(),
        summary: filter.summarize(),
        query_string: filter.to_query_string(category),
        filter,
    }))
}

pub async fn chip_detail(Path(id): Path<String>) -> Result<Json<Chip>, ApiError> {
    Ok(Json(StaticCatalog::global().chip(&id)?.clone()))
}

#[derive(Debug, Default, Deserialize)]
pub struct OrderQuery {
    pub quantity: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderQuote {
    pub quantity: u32,
    pub distributor: String,
    pub sku: String,
    pub currency: String,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order: OrderDetails,
    pub total_stock: u64,
    pub quote: Option<OrderQuote>,
}

pub async fn order_details(
    Path(id): Path<String>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<OrderResponse>, ApiError> {
    let details = StaticCatalog::global().order_details(&id)?;
    let quantity = query.quantity.unwrap_or(details.min_order_quantity);

    let quote = details.best_offer(quantity).map(|(offer, unit_price)| OrderQuote {
        quantity,
        distributor: offer.distributor.clone(),
        sku: offer.sku.clone(),
        currency: offer.currency.clone(),
        unit_price,
        total_price: unit_price * Decimal::from(quantity),
    });

    Ok(Json(OrderResponse { order: details.clone(), total_stock: details.total_stock(), quote }))
}

#[derive(Debug, Serialize)]
pub struct AlternativesResponse {
    pub chip_id: String,
    pub alternatives: Vec<Chip>,
}

pub async fn alternatives(Path(id): Path<String>) -> Result<Json<AlternativesResponse>, ApiError> {
    let catalog = StaticCatalog::global();
    let chip = catalog.chip(&id)?;
    let alternatives = catalog.alternatives(&chip.id)?.into_iter().cloned().collect();

    Ok(Json(AlternativesResponse { chip_id: chip.id.clone(), alternatives }))
}

#[derive(Debug, Serialize)]
pub struct CategoryNode {
    #[serde(flatten)]
    pub category: Category,
    pub subcategories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryNode>,
}

pub async fn categories() -> Result<Json<CategoriesResponse>, ApiError> {
    let catalog = StaticCatalog::global();
    let categories = catalog
        .root_categories()
        .into_iter()
        .map(|root| -> Result<CategoryNode, CatalogError> {
            Ok(CategoryNode {
                category: root.clone(),
                subcategories: catalog.subcategories(&root.id)?.into_iter().cloned().collect(),
            })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    Ok(Json(CategoriesResponse { categories }))
}

#[derive(Debug, Serialize)]
pub struct CategoryDetailResponse {
    pub category: Category,
    pub subcategories: Vec<Category>,
    pub chips: Vec<Chip>,
}

pub async fn category_detail(
    Path(id): Path<String>,
) -> Result<Json<CategoryDetailResponse>, ApiError> {
    let catalog = StaticCatalog::global();
    let category = catalog.category(&id)?;

    Ok(Json(CategoryDetailResponse {
        category: category.clone(),
        subcategories: catalog.subcategories(&category.id)?.into_iter().cloned().collect(),
        chips: catalog.chips_in_category(&category.id)?.into_iter().cloned().collect(),
    }))
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ApplyFiltersRequest {
    /// Serialized filter state to start from; the empty state when absent.
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub ops: Vec<FilterOp>,
}

#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub state: FilterState,
    pub result_count: u32,
    pub selected_facets: usize,
    pub summary: Vec<String>,
    pub serialized: String,
    pub query_string: String,
}

impl FilterResponse {
    fn new(state: FilterState, category: Option<&str>) -> Self {
        Self {
            result_count: state.result_count(),
            selected_facets: state.count_selected_facets(),
            summary: state.summarize(),
            serialized: state.serialize(),
            query_string: state.to_query_string(category),
            state,
        }
    }
}

pub async fn apply_filters(Json(request): Json<ApplyFiltersRequest>) -> Json<FilterResponse> {
    let base = request.state.as_deref().map(FilterState::deserialize).unwrap_or_default();
    let next = base.apply_all(&request.ops);

    Json(FilterResponse::new(next, request.category.as_deref()))
}

// ---------------------------------------------------------------------------
// AI suggestions
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct BomRequest {
    pub file_data_uri: String,
    pub description: String,
}

pub async fn ai_suggest(
    State(state): State<ApiState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<ComponentRecommendation>, ApiError> {
    Ok(Json(state.agent.suggest_component(&request.description).await?))
}

pub async fn ai_bom(
    State(state): State<ApiState>,
    Json(request): Json<BomRequest>,
) -> Result<Json<BomSuggestion>, ApiError> {
    Ok(Json(state.agent.suggest_from_bom(&request.file_data_uri, &request.description).await?))
}
