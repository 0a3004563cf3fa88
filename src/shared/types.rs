use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Number of pages needed to show `total` items, `page_size` per page.
///
/// Callers reject a zero page size before getting here; a zero size yields zero pages.
pub fn total_pages(total: usize, page_size: u32) -> usize {
    match page_size {
        0 => 0,
        size => total.div_ceil(size as usize),
    }
}

/// Zero-based start offset of a 1-indexed page
pub fn page_offset(page: u32, page_size: u32) -> usize {
    (page.max(1) as usize - 1).saturating_mul(page_size as usize)
}
