// HTTP request handlers
use crate::application::api_client::ApiError;
use crate::application::page_loader::{load_page, PageLoadError};
use crate::domain::dashboard::{DashboardData, FilterOptions, HeadcountSummary, PageData};
use crate::domain::filters::FilterSet;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

/// Raw query pairs in request order.
type FilterQuery = Query<Vec<(String, String)>>;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Initial page data for server-side rendering
pub async fn load_index(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageData>, PageLoadError> {
    load_page(&state.api_client, state.transport.as_ref())
        .await
        .map(Json)
}

/// Dashboard refresh after the user changes filters
pub async fn get_dashboard(
    Query(pairs): FilterQuery,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardData>, ApiError> {
    let filters: FilterSet = pairs.into_iter().collect();
    state
        .api_client
        .fetch_dashboard(&filters, state.transport.as_ref())
        .await
        .map(Json)
}

pub async fn get_drilldown(
    Path(kpi_key): Path<String>,
    Query(pairs): FilterQuery,
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let filters: FilterSet = pairs.into_iter().collect();
    state
        .api_client
        .fetch_drilldown(&kpi_key, &filters, state.transport.as_ref())
        .await
        .map(Json)
}

pub async fn get_filter_options(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FilterOptions>, ApiError> {
    state
        .api_client
        .fetch_filter_options(state.transport.as_ref())
        .await
        .map(Json)
}

pub async fn get_headcount(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HeadcountSummary>, ApiError> {
    state
        .api_client
        .fetch_headcount_summary(state.transport.as_ref())
        .await
        .map(Json)
}
