use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::{
    app_state::AppState,
    data::dtos::{DataResponse, ErrorResponse, FilteredParams},
    view,
};

#[utoipa::path(
    get,
    path = "/api/data",
    tag = "data",
    responses(
        (status = 200, description = "Full record set", body = DataResponse),
        (status = 500, description = "Read view unavailable", body = ErrorResponse)
    )
)]
pub async fn get_data(State(state): State<AppState>) -> Response {
    match view::fetch_all(&state.db_pool).await {
        Ok(data) => (StatusCode::OK, Json(DataResponse::new(data))).into_response(),
        Err(err) => {
            error!(%err, "failed to read view");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(err.to_string())),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/data/filtered",
    tag = "data",
    params(FilteredParams),
    responses(
        (status = 200, description = "Filtered record set", body = DataResponse),
        (status = 500, description = "Read view unavailable", body = ErrorResponse)
    )
)]
pub async fn get_data_filtered(
    State(state): State<AppState>,
    Query(params): Query<FilteredParams>,
) -> Response {
    match view::fetch_filtered(&state.db_pool, &params.into()).await {
        Ok(data) => (StatusCode::OK, Json(DataResponse::new(data))).into_response(),
        Err(err) => {
            error!(%err, "failed to read filtered view");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(err.to_string())),
            )
                .into_response()
        }
    }
}
