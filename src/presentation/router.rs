use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_dashboard, get_drilldown, get_filter_options, get_headcount, health_check, load_index,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(load_index))
        .route("/healthz", get(health_check))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/drilldown/:kpi_key", get(get_drilldown))
        .route("/api/filters", get(get_filter_options))
        .route("/api/headcount", get(get_headcount))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
