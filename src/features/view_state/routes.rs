use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::view_state::handlers;
use crate::features::view_state::services::ViewStateService;

pub fn routes(service: Arc<ViewStateService>) -> Router {
    Router::new()
        .route("/api/view-state", get(handlers::get_view_state))
        .route(
            "/api/view-state/transitions",
            post(handlers::apply_transition),
        )
        .with_state(service)
}
