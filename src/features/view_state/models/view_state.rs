use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::admins::dtos::{AdminSortBy, AdminStatusFilter, SortOrder};
use crate::features::admins::services::AdminQuery;
use crate::shared::constants::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Filters {
    pub search: String,
    pub status: AdminStatusFilter,
    pub sort_by: AdminSortBy,
    pub sort_order: SortOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    pub current_page: u32,
    pub items_per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
}

/// Which dashboard screen is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DashboardView {
    #[default]
    List,
    Detail {
        admin_id: i64,
    },
    Create,
    Edit {
        admin_id: i64,
    },
}

impl DashboardView {
    /// Admin the current screen is about, if any
    pub fn admin_id(&self) -> Option<i64> {
        match self {
            DashboardView::Detail { admin_id } | DashboardView::Edit { admin_id } => {
                Some(*admin_id)
            }
            DashboardView::List | DashboardView::Create => None,
        }
    }
}

/// Shared dashboard state; changed only through [`ViewTransition`]s
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ViewState {
    pub filters: Filters,
    pub pagination: Pagination,
    /// Selected admin ids in selection order, no duplicates
    pub selected_admins: Vec<i64>,
    pub preferences: Preferences,
    pub search_focused: bool,
    pub view: DashboardView,
}

/// Named state transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewTransition {
    SetSearch {
        search: String,
    },
    SetStatusFilter {
        status: AdminStatusFilter,
    },
    SetSort {
        sort_by: AdminSortBy,
        sort_order: SortOrder,
    },
    SetPage {
        page: u32,
    },
    SetItemsPerPage {
        items_per_page: u32,
    },
    ToggleSelect {
        admin_id: i64,
    },
    SelectAll {
        admin_ids: Vec<i64>,
    },
    ClearSelection,
    SetTheme {
        theme: Theme,
    },
    ToggleSidebar,
    SetSearchFocused {
        focused: bool,
    },
    ResetFilters,
    ViewAdmin {
        admin_id: i64,
    },
    CreateAdmin,
    EditAdmin {
        admin_id: i64,
    },
    BackToList,
    AdminDeleted {
        admin_id: i64,
    },
}

fn dedup_in_order(ids: Vec<i64>) -> Vec<i64> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

impl ViewState {
    pub fn apply(mut self, transition: ViewTransition) -> Self {
        match transition {
            ViewTransition::SetSearch { search } => {
                self.filters.search = search;
                self.pagination.current_page = 1;
            }
            ViewTransition::SetStatusFilter { status } => {
                self.filters.status = status;
                self.pagination.current_page = 1;
            }
            ViewTransition::SetSort {
                sort_by,
                sort_order,
            } => {
                self.filters.sort_by = sort_by;
                self.filters.sort_order = sort_order;
            }
            ViewTransition::SetPage { page } => {
                self.pagination.current_page = page;
            }
            ViewTransition::SetItemsPerPage { items_per_page } => {
                self.pagination.items_per_page = items_per_page;
                self.pagination.current_page = 1;
            }
            ViewTransition::ToggleSelect { admin_id } => {
                if let Some(pos) = self.selected_admins.iter().position(|id| *id == admin_id) {
                    self.selected_admins.remove(pos);
                } else {
                    self.selected_admins.push(admin_id);
                }
            }
            ViewTransition::SelectAll { admin_ids } => {
                self.selected_admins = dedup_in_order(admin_ids);
            }
            ViewTransition::ClearSelection => {
                self.selected_admins.clear();
            }
            ViewTransition::SetTheme { theme } => {
                self.preferences.theme = theme;
            }
            ViewTransition::ToggleSidebar => {
                self.preferences.sidebar_collapsed = !self.preferences.sidebar_collapsed;
            }
            ViewTransition::SetSearchFocused { focused } => {
                self.search_focused = focused;
            }
            ViewTransition::ResetFilters => {
                self.filters = Filters::default();
                self.pagination.current_page = 1;
            }
            ViewTransition::ViewAdmin { admin_id } => {
                self.view = DashboardView::Detail { admin_id };
            }
            ViewTransition::CreateAdmin => {
                self.view = DashboardView::Create;
            }
            ViewTransition::EditAdmin { admin_id } => {
                self.view = DashboardView::Edit { admin_id };
            }
            ViewTransition::BackToList => {
                self.view = DashboardView::List;
            }
            ViewTransition::AdminDeleted { admin_id } => {
                self.selected_admins.retain(|id| *id != admin_id);
                if self.view.admin_id() == Some(admin_id) {
                    self.view = DashboardView::List;
                }
            }
        }
        self
    }

    /// Listing request for the current filters and page
    pub fn admin_query(&self) -> AdminQuery {
        AdminQuery {
            page: self.pagination.current_page,
            page_size: self.pagination.items_per_page,
            search: self.filters.search.clone(),
            status: self.filters.status,
            sort_by: self.filters.sort_by,
            sort_order: self.filters.sort_order,
        }
    }
}

/// The part of [`ViewState`] that survives restarts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedViewState {
    pub filters: Filters,
    pub preferences: Preferences,
}

impl From<&ViewState> for PersistedViewState {
    fn from(state: &ViewState) -> Self {
        Self {
            filters: state.filters.clone(),
            preferences: state.preferences,
        }
    }
}

impl PersistedViewState {
    /// Fresh state carrying the persisted filters and preferences
    pub fn into_view_state(self) -> ViewState {
        ViewState {
            filters: self.filters,
            preferences: self.preferences,
            ..ViewState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(transitions: Vec<ViewTransition>) -> ViewState {
        transitions
            .into_iter()
            .fold(ViewState::default(), ViewState::apply)
    }

    #[test]
    fn test_defaults() {
        let state = ViewState::default();
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.pagination.items_per_page, DEFAULT_PAGE_SIZE);
        assert_eq!(state.filters.status, AdminStatusFilter::All);
        assert_eq!(state.filters.sort_by, AdminSortBy::Name);
        assert_eq!(state.filters.sort_order, SortOrder::Asc);
        assert_eq!(state.preferences.theme, Theme::Light);
        assert_eq!(state.view, DashboardView::List);
    }

    #[test]
    fn test_search_resets_pagination() {
        let state = run(vec![
            ViewTransition::SetSearch {
                search: "a".to_string(),
            },
            ViewTransition::SetPage { page: 5 },
            ViewTransition::SetSearch {
                search: "ab".to_string(),
            },
        ]);
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.filters.search, "ab");
    }

    #[test]
    fn test_status_filter_resets_pagination_but_sort_does_not() {
        let state = run(vec![
            ViewTransition::SetPage { page: 3 },
            ViewTransition::SetSort {
                sort_by: AdminSortBy::TicketsResolved,
                sort_order: SortOrder::Desc,
            },
        ]);
        assert_eq!(state.pagination.current_page, 3);
        assert_eq!(state.filters.sort_by, AdminSortBy::TicketsResolved);

        let state = state.apply(ViewTransition::SetStatusFilter {
            status: AdminStatusFilter::Pending,
        });
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.filters.status, AdminStatusFilter::Pending);
    }

    #[test]
    fn test_set_page_is_unchecked() {
        let state = run(vec![ViewTransition::SetPage { page: 999 }]);
        assert_eq!(state.pagination.current_page, 999);
    }

    #[test]
    fn test_items_per_page_resets_page() {
        let state = run(vec![
            ViewTransition::SetPage { page: 4 },
            ViewTransition::SetItemsPerPage { items_per_page: 24 },
        ]);
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.pagination.items_per_page, 24);
    }

    #[test]
    fn test_toggle_select() {
        let state = run(vec![
            ViewTransition::ToggleSelect { admin_id: 3 },
            ViewTransition::ToggleSelect { admin_id: 1 },
        ]);
        assert_eq!(state.selected_admins, vec![3, 1]);

        let state = state.apply(ViewTransition::ToggleSelect { admin_id: 3 });
        assert_eq!(state.selected_admins, vec![1]);
    }

    #[test]
    fn test_select_all_and_clear() {
        let state = run(vec![
            ViewTransition::ToggleSelect { admin_id: 9 },
            ViewTransition::SelectAll {
                admin_ids: vec![1, 2, 2, 3],
            },
        ]);
        assert_eq!(state.selected_admins, vec![1, 2, 3]);

        let state = state.apply(ViewTransition::ClearSelection);
        assert!(state.selected_admins.is_empty());
    }

    #[test]
    fn test_preferences() {
        let state = run(vec![
            ViewTransition::SetTheme { theme: Theme::Dark },
            ViewTransition::ToggleSidebar,
        ]);
        assert_eq!(state.preferences.theme, Theme::Dark);
        assert!(state.preferences.sidebar_collapsed);

        let state = state.apply(ViewTransition::ToggleSidebar);
        assert!(!state.preferences.sidebar_collapsed);
    }

    #[test]
    fn test_reset_filters_keeps_preferences() {
        let state = run(vec![
            ViewTransition::SetTheme { theme: Theme::Dark },
            ViewTransition::SetSearch {
                search: "zoya".to_string(),
            },
            ViewTransition::SetPage { page: 2 },
            ViewTransition::ResetFilters,
        ]);
        assert_eq!(state.filters, Filters::default());
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.preferences.theme, Theme::Dark);
    }

    #[test]
    fn test_deleting_viewed_and_selected_admin_returns_to_list() {
        let state = run(vec![
            ViewTransition::SelectAll {
                admin_ids: vec![1, 4, 5],
            },
            ViewTransition::ViewAdmin { admin_id: 4 },
            ViewTransition::AdminDeleted { admin_id: 4 },
        ]);
        assert_eq!(state.selected_admins, vec![1, 5]);
        assert_eq!(state.view, DashboardView::List);
    }

    #[test]
    fn test_deleting_other_admin_keeps_view() {
        let state = run(vec![
            ViewTransition::EditAdmin { admin_id: 2 },
            ViewTransition::AdminDeleted { admin_id: 3 },
        ]);
        assert_eq!(state.view, DashboardView::Edit { admin_id: 2 });

        let state = state.apply(ViewTransition::BackToList);
        assert_eq!(state.view, DashboardView::List);
    }

    #[test]
    fn test_transition_wire_format() {
        let raw = r#"{"type":"set_sort","sort_by":"society_count","sort_order":"desc"}"#;
        let transition: ViewTransition = serde_json::from_str(raw).unwrap();
        assert_eq!(
            transition,
            ViewTransition::SetSort {
                sort_by: AdminSortBy::SocietyCount,
                sort_order: SortOrder::Desc,
            }
        );

        let transition: ViewTransition =
            serde_json::from_str(r#"{"type":"toggle_sidebar"}"#).unwrap();
        assert_eq!(transition, ViewTransition::ToggleSidebar);
    }

    #[test]
    fn test_persisted_subset_excludes_pagination_and_selection() {
        let state = run(vec![
            ViewTransition::SetSearch {
                search: "meera".to_string(),
            },
            ViewTransition::SetPage { page: 3 },
            ViewTransition::ToggleSelect { admin_id: 3 },
            ViewTransition::SetTheme { theme: Theme::Dark },
        ]);

        let restored = PersistedViewState::from(&state).into_view_state();

        assert_eq!(restored.filters, state.filters);
        assert_eq!(restored.preferences, state.preferences);
        assert_eq!(restored.pagination, Pagination::default());
        assert!(restored.selected_admins.is_empty());
    }

    #[test]
    fn test_admin_query_mirrors_state() {
        let state = run(vec![
            ViewTransition::SetSearch {
                search: "ar".to_string(),
            },
            ViewTransition::SetPage { page: 2 },
        ]);
        let query = state.admin_query();
        assert_eq!(query.search, "ar");
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    }
}
