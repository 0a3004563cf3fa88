use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

pub fn routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard/admins", get(handlers::get_current_page))
        .route(
            "/api/dashboard/admins/{id}",
            delete(handlers::delete_admin),
        )
        .route(
            "/api/dashboard/admins/{id}/view",
            post(handlers::view_admin),
        )
        .with_state(service)
}
