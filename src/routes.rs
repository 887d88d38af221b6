use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    app_state::AppState,
    data::handlers::{get_data, get_data_filtered},
    health::health_check,
};

/// The read proxy surface: health plus the two record endpoints.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/data", get(get_data))
        .route("/api/data/filtered", get(get_data_filtered))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
