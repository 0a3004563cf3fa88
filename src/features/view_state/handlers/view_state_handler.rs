use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::view_state::models::{ViewState, ViewTransition};
use crate::features::view_state::services::ViewStateService;
use crate::shared::types::ApiResponse;

/// Current dashboard view state
#[utoipa::path(
    get,
    path = "/api/view-state",
    responses(
        (status = 200, description = "Current view state", body = ApiResponse<ViewState>),
    ),
    tag = "view-state"
)]
pub async fn get_view_state(
    State(service): State<Arc<ViewStateService>>,
) -> Result<Json<ApiResponse<ViewState>>> {
    let state = service.current().await;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}

/// Apply a named transition and return the new state
#[utoipa::path(
    post,
    path = "/api/view-state/transitions",
    request_body = ViewTransition,
    responses(
        (status = 200, description = "State after the transition", body = ApiResponse<ViewState>),
        (status = 400, description = "Unknown or malformed transition")
    ),
    tag = "view-state"
)]
pub async fn apply_transition(
    State(service): State<Arc<ViewStateService>>,
    AppJson(transition): AppJson<ViewTransition>,
) -> Result<Json<ApiResponse<ViewState>>> {
    let state = service.apply(transition).await;
    Ok(Json(ApiResponse::success(Some(state), None, None)))
}
