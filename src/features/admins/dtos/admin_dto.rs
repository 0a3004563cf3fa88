use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::admins::models::{Admin, AdminStatus};
use crate::shared::constants::DEFAULT_PAGE_SIZE;

// =============================================================================
// LISTING ENUMS
// =============================================================================

/// Status filter of the admin table; `all` disables the filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdminStatusFilter {
    #[default]
    All,
    Active,
    Inactive,
    Pending,
}

impl AdminStatusFilter {
    pub fn matches(&self, status: AdminStatus) -> bool {
        match self {
            AdminStatusFilter::All => true,
            AdminStatusFilter::Active => status == AdminStatus::Active,
            AdminStatusFilter::Inactive => status == AdminStatus::Inactive,
            AdminStatusFilter::Pending => status == AdminStatus::Pending,
        }
    }
}

impl From<AdminStatus> for AdminStatusFilter {
    fn from(status: AdminStatus) -> Self {
        match status {
            AdminStatus::Active => AdminStatusFilter::Active,
            AdminStatus::Inactive => AdminStatusFilter::Inactive,
            AdminStatus::Pending => AdminStatusFilter::Pending,
        }
    }
}

/// Sort fields for the admin table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdminSortBy {
    #[default]
    Name,
    LastActivity,
    SocietyCount,
    LoginCount,
    TicketsResolved,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

// =============================================================================
// QUERY DTOs
// =============================================================================

/// Query params for listing admins
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AdminQueryParams {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: u32,
    /// Items per page
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: u32,
    /// Case-insensitive match on name or email
    pub search: Option<String>,
    /// Filter by status (default: all)
    #[serde(default)]
    pub status: AdminStatusFilter,
    /// Sort by field (default: name)
    #[serde(default)]
    pub sort_by: AdminSortBy,
    /// Sort direction (default: asc)
    #[serde(default)]
    pub sort_order: SortOrder,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Query params for the quick search endpoint
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AdminSearchParams {
    /// Text matched against name or email
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct AdminStatusParams {
    #[serde(default)]
    pub status: AdminStatusFilter,
}

/// One page of the admin table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminPageDto {
    pub items: Vec<Admin>,
    pub total: usize,
    pub page: u32,
    pub total_pages: usize,
}

// =============================================================================
// FORM DTOs
// =============================================================================

/// Statuses selectable on the admin form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Active,
    Pending,
}

impl From<FormStatus> for AdminStatus {
    fn from(status: FormStatus) -> Self {
        match status {
            FormStatus::Active => AdminStatus::Active,
            FormStatus::Pending => AdminStatus::Pending,
        }
    }
}

/// Request DTO for creating or editing an admin
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AdminFormDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        regex(
            path = "*crate::shared::validation::EMAIL_REGEX",
            message = "Invalid email address"
        )
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,

    #[serde(default)]
    pub status: FormStatus,

    /// Society ids; unknown ids are dropped
    #[serde(default)]
    pub assigned_societies: Vec<i64>,

    /// Collected by the form but not stored
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Request DTO for changing only the status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAdminStatusDto {
    pub status: AdminStatus,
}

/// Aggregate counts for the dashboard header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminStatsDto {
    pub active_count: usize,
    pub inactive_count: usize,
    pub pending_count: usize,
    /// Sum of assigned societies over all admins
    pub total_assignments: usize,
}
