use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::{ApiResponse, Meta};

/// Admin page for the current view-state filters and pagination
#[utoipa::path(
    get,
    path = "/api/dashboard/admins",
    responses(
        (status = 200, description = "Current listing page", body = ApiResponse<DashboardPageDto>),
        (status = 400, description = "Current pagination is invalid")
    ),
    tag = "dashboard"
)]
pub async fn get_current_page(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardPageDto>>> {
    let current = service.current_page().await?;
    let total = current.page.total as i64;

    Ok(Json(ApiResponse::success(
        Some(current),
        None,
        Some(Meta { total }),
    )))
}

/// Open an admin's detail view
#[utoipa::path(
    post,
    path = "/api/dashboard/admins/{id}/view",
    params(
        ("id" = i64, Path, description = "Admin id")
    ),
    responses(
        (status = 200, description = "Admin and updated view state", body = ApiResponse<AdminViewDto>),
        (status = 404, description = "Admin not found")
    ),
    tag = "dashboard"
)]
pub async fn view_admin(
    State(service): State<Arc<DashboardService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<AdminViewDto>>> {
    let viewed = service.view_admin(id).await?;
    Ok(Json(ApiResponse::success(Some(viewed), None, None)))
}

/// Delete an admin and clear it from the selection and current view
#[utoipa::path(
    delete,
    path = "/api/dashboard/admins/{id}",
    params(
        ("id" = i64, Path, description = "Admin id")
    ),
    responses(
        (status = 200, description = "Admin deleted", body = ApiResponse<AdminDeletedDto>),
        (status = 404, description = "Admin not found")
    ),
    tag = "dashboard"
)]
pub async fn delete_admin(
    State(service): State<Arc<DashboardService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<AdminDeletedDto>>> {
    let deleted = service.delete_admin(id).await?;
    Ok(Json(ApiResponse::success(
        Some(deleted),
        Some("Admin deleted successfully".to_string()),
        None,
    )))
}
