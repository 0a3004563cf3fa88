use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::admins::handlers;
use crate::features::admins::services::AdminService;

/// Create routes for admin records and societies
pub fn routes(service: Arc<AdminService>) -> Router {
    Router::new()
        .route("/api/societies", get(handlers::list_societies))
        .route(
            "/api/admins",
            get(handlers::list_admins).post(handlers::create_admin),
        )
        .route("/api/admins/search", get(handlers::search_admins))
        .route("/api/admins/filter", get(handlers::filter_admins))
        .route("/api/admins/stats", get(handlers::get_admin_stats))
        .route(
            "/api/admins/{id}",
            get(handlers::get_admin)
                .put(handlers::update_admin)
                .delete(handlers::delete_admin),
        )
        .route("/api/admins/{id}/activities", get(handlers::list_activities))
        .route("/api/admins/{id}/status", patch(handlers::update_admin_status))
        .with_state(service)
}
