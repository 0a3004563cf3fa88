//! Search, filter, sort and paginate over the admin list.
//!
//! Everything here is a pure function of its inputs.

use std::cmp::Ordering;

use crate::core::error::{AppError, Result};
use crate::features::admins::dtos::{
    AdminPageDto, AdminQueryParams, AdminSortBy, AdminStatusFilter, SortOrder,
};
use crate::features::admins::models::Admin;
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::shared::types::{page_offset, total_pages};

/// A complete listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub status: AdminStatusFilter,
    pub sort_by: AdminSortBy,
    pub sort_order: SortOrder,
}

impl Default for AdminQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            status: AdminStatusFilter::All,
            sort_by: AdminSortBy::Name,
            sort_order: SortOrder::Asc,
        }
    }
}

impl From<AdminQueryParams> for AdminQuery {
    fn from(params: AdminQueryParams) -> Self {
        Self {
            page: params.page,
            page_size: params.page_size,
            search: params.search.unwrap_or_default(),
            status: params.status,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
        }
    }
}

impl AdminQuery {
    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(AppError::Validation("page must be at least 1".to_string()));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(AppError::Validation(format!(
                "page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }
}

/// Case-insensitive substring match on name or email; empty text matches everything
pub fn matches_search(admin: &Admin, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    admin.name.to_lowercase().contains(&needle) || admin.email.to_lowercase().contains(&needle)
}

pub fn search_admins(admins: Vec<Admin>, search: &str) -> Vec<Admin> {
    admins
        .into_iter()
        .filter(|a| matches_search(a, search))
        .collect()
}

pub fn filter_by_status(admins: Vec<Admin>, status: AdminStatusFilter) -> Vec<Admin> {
    admins
        .into_iter()
        .filter(|a| status.matches(a.status))
        .collect()
}

fn compare_by(a: &Admin, b: &Admin, sort_by: AdminSortBy) -> Ordering {
    match sort_by {
        AdminSortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        AdminSortBy::LastActivity => a.last_activity.sort_key().cmp(&b.last_activity.sort_key()),
        AdminSortBy::SocietyCount => a
            .assigned_societies
            .len()
            .cmp(&b.assigned_societies.len()),
        AdminSortBy::LoginCount => a.login_count.cmp(&b.login_count),
        AdminSortBy::TicketsResolved => a.tickets_resolved.cmp(&b.tickets_resolved),
    }
}

/// Stable sort: ties keep their incoming order in both directions
pub fn sort_admins(admins: &mut [Admin], sort_by: AdminSortBy, sort_order: SortOrder) {
    admins.sort_by(|a, b| {
        let ordering = compare_by(a, b, sort_by);
        match sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Run a listing request. Pages past the end come back empty.
pub fn query_admins(admins: Vec<Admin>, query: &AdminQuery) -> Result<AdminPageDto> {
    query.validate()?;

    let mut matching: Vec<Admin> = admins
        .into_iter()
        .filter(|a| matches_search(a, &query.search) && query.status.matches(a.status))
        .collect();
    sort_admins(&mut matching, query.sort_by, query.sort_order);

    let total = matching.len();
    let items = matching
        .into_iter()
        .skip(page_offset(query.page, query.page_size))
        .take(query.page_size as usize)
        .collect();

    Ok(AdminPageDto {
        items,
        total,
        page: query.page,
        total_pages: total_pages(total, query.page_size),
    })
}
