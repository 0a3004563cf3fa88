//! Coordinates the admin data service with the shared view state

use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::admins::AdminService;
use crate::features::dashboard::dtos::{AdminDeletedDto, AdminViewDto, DashboardPageDto};
use crate::features::view_state::models::ViewTransition;
use crate::features::view_state::ViewStateService;

pub struct DashboardService {
    admins: Arc<AdminService>,
    view_state: Arc<ViewStateService>,
}

impl DashboardService {
    pub fn new(admins: Arc<AdminService>, view_state: Arc<ViewStateService>) -> Self {
        Self { admins, view_state }
    }

    /// The listing page selected by the current filters and pagination
    pub async fn current_page(&self) -> Result<DashboardPageDto> {
        let state = self.view_state.current().await;
        let page = self.admins.list_admins(&state.admin_query()).await?;
        Ok(DashboardPageDto { page, state })
    }

    /// Open the detail view of an existing admin
    pub async fn view_admin(&self, id: i64) -> Result<AdminViewDto> {
        let admin = self
            .admins
            .get_admin_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Admin {} not found", id)))?;

        let state = self
            .view_state
            .apply(ViewTransition::ViewAdmin { admin_id: id })
            .await;

        Ok(AdminViewDto { admin, state })
    }

    /// Delete an admin and drop it from the selection and current view.
    ///
    /// State is left untouched when the admin does not exist.
    pub async fn delete_admin(&self, id: i64) -> Result<AdminDeletedDto> {
        if !self.admins.delete_admin(id).await? {
            return Err(AppError::NotFound(format!("Admin {} not found", id)));
        }

        let state = self
            .view_state
            .apply(ViewTransition::AdminDeleted { admin_id: id })
            .await;
        tracing::debug!(
            "Dashboard cleaned up after delete: id={}, selected={}",
            id,
            state.selected_admins.len()
        );

        Ok(AdminDeletedDto { id, state })
    }
}
