use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::admins::dtos::AdminPageDto;
use crate::features::admins::models::Admin;
use crate::features::view_state::models::ViewState;

/// Listing page for the current filters, with the state that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardPageDto {
    pub page: AdminPageDto,
    pub state: ViewState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminViewDto {
    pub admin: Admin,
    pub state: ViewState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminDeletedDto {
    pub id: i64,
    pub state: ViewState,
}
