use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::admins::dtos::*;
use crate::features::admins::models::{Activity, Admin, Society};
use crate::features::admins::services::{AdminQuery, AdminService};
use crate::shared::types::{ApiResponse, Meta};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Admin {} not found", id))
}

/// List all societies
#[utoipa::path(
    get,
    path = "/api/societies",
    responses(
        (status = 200, description = "List of societies", body = ApiResponse<Vec<Society>>),
    ),
    tag = "societies"
)]
pub async fn list_societies(
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<Vec<Society>>>> {
    let societies = service.get_societies().await?;
    let total = societies.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(societies),
        None,
        Some(Meta { total }),
    )))
}

/// List admins (search, status filter, sort, paginated)
#[utoipa::path(
    get,
    path = "/api/admins",
    params(AdminQueryParams),
    responses(
        (status = 200, description = "One page of admins", body = ApiResponse<AdminPageDto>),
        (status = 400, description = "Invalid pagination")
    ),
    tag = "admins"
)]
pub async fn list_admins(
    State(service): State<Arc<AdminService>>,
    Query(params): Query<AdminQueryParams>,
) -> Result<Json<ApiResponse<AdminPageDto>>> {
    let query = AdminQuery::from(params);
    let page = service.list_admins(&query).await?;
    let total = page.total as i64;

    Ok(Json(ApiResponse::success(
        Some(page),
        None,
        Some(Meta { total }),
    )))
}

/// Quick search on name or email
#[utoipa::path(
    get,
    path = "/api/admins/search",
    params(AdminSearchParams),
    responses(
        (status = 200, description = "Matching admins", body = ApiResponse<Vec<Admin>>),
    ),
    tag = "admins"
)]
pub async fn search_admins(
    State(service): State<Arc<AdminService>>,
    Query(params): Query<AdminSearchParams>,
) -> Result<Json<ApiResponse<Vec<Admin>>>> {
    let admins = service.search_admins(&params.q).await?;
    let total = admins.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(admins),
        None,
        Some(Meta { total }),
    )))
}

/// All admins with the given status, in store order
#[utoipa::path(
    get,
    path = "/api/admins/filter",
    params(AdminStatusParams),
    responses(
        (status = 200, description = "Admins with the status", body = ApiResponse<Vec<Admin>>),
    ),
    tag = "admins"
)]
pub async fn filter_admins(
    State(service): State<Arc<AdminService>>,
    Query(params): Query<AdminStatusParams>,
) -> Result<Json<ApiResponse<Vec<Admin>>>> {
    let admins = service.filter_admins_by_status(params.status).await?;
    let total = admins.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(admins),
        None,
        Some(Meta { total }),
    )))
}

/// Counts by status and total society assignments
#[utoipa::path(
    get,
    path = "/api/admins/stats",
    responses(
        (status = 200, description = "Admin statistics", body = ApiResponse<AdminStatsDto>),
    ),
    tag = "admins"
)]
pub async fn get_admin_stats(
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<AdminStatsDto>>> {
    let stats = service.get_admin_stats().await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// Get admin by id
#[utoipa::path(
    get,
    path = "/api/admins/{id}",
    params(
        ("id" = i64, Path, description = "Admin id")
    ),
    responses(
        (status = 200, description = "Admin found", body = ApiResponse<Admin>),
        (status = 404, description = "Admin not found")
    ),
    tag = "admins"
)]
pub async fn get_admin(
    State(service): State<Arc<AdminService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Admin>>> {
    let admin = service
        .get_admin_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::success(Some(admin), None, None)))
}

/// Full activity history: recorded activities plus generated session and ticket events
#[utoipa::path(
    get,
    path = "/api/admins/{id}/activities",
    params(
        ("id" = i64, Path, description = "Admin id")
    ),
    responses(
        (status = 200, description = "Activities, newest first", body = ApiResponse<Vec<Activity>>),
    ),
    tag = "admins"
)]
pub async fn list_activities(
    State(service): State<Arc<AdminService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<Activity>>>> {
    let activities = service.get_all_activities(id).await?;
    let total = activities.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(activities),
        None,
        Some(Meta { total }),
    )))
}

/// Create an admin
#[utoipa::path(
    post,
    path = "/api/admins",
    request_body = AdminFormDto,
    responses(
        (status = 201, description = "Admin created", body = ApiResponse<Admin>),
        (status = 400, description = "Invalid form")
    ),
    tag = "admins"
)]
pub async fn create_admin(
    State(service): State<Arc<AdminService>>,
    AppJson(dto): AppJson<AdminFormDto>,
) -> Result<(StatusCode, Json<ApiResponse<Admin>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let admin = service.create_admin(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(admin),
            Some("Admin created successfully".to_string()),
            None,
        )),
    ))
}

/// Update an admin's profile and society assignments
#[utoipa::path(
    put,
    path = "/api/admins/{id}",
    params(
        ("id" = i64, Path, description = "Admin id")
    ),
    request_body = AdminFormDto,
    responses(
        (status = 200, description = "Admin updated", body = ApiResponse<Admin>),
        (status = 400, description = "Invalid form"),
        (status = 404, description = "Admin not found")
    ),
    tag = "admins"
)]
pub async fn update_admin(
    State(service): State<Arc<AdminService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<AdminFormDto>,
) -> Result<Json<ApiResponse<Admin>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let admin = service
        .update_admin(id, dto)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::success(
        Some(admin),
        Some("Admin updated successfully".to_string()),
        None,
    )))
}

/// Change an admin's status
#[utoipa::path(
    patch,
    path = "/api/admins/{id}/status",
    params(
        ("id" = i64, Path, description = "Admin id")
    ),
    request_body = UpdateAdminStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<Admin>),
        (status = 404, description = "Admin not found")
    ),
    tag = "admins"
)]
pub async fn update_admin_status(
    State(service): State<Arc<AdminService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateAdminStatusDto>,
) -> Result<Json<ApiResponse<Admin>>> {
    let admin = service
        .update_admin_status(id, dto.status)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::success(Some(admin), None, None)))
}

/// Delete an admin
#[utoipa::path(
    delete,
    path = "/api/admins/{id}",
    params(
        ("id" = i64, Path, description = "Admin id")
    ),
    responses(
        (status = 200, description = "Admin deleted"),
        (status = 404, description = "Admin not found")
    ),
    tag = "admins"
)]
pub async fn delete_admin(
    State(service): State<Arc<AdminService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    if !service.delete_admin(id).await? {
        return Err(not_found(id));
    }

    Ok(Json(ApiResponse::success(
        None,
        Some("Admin deleted successfully".to_string()),
        None,
    )))
}
