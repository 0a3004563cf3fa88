use axum::Router;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::SwaggerConfig;

use crate::features::admins::{
    dtos as admins_dtos, handlers as admins_handlers, models as admins_models,
};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::view_state::{
    handlers as view_state_handlers, models as view_state_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Societies
        admins_handlers::list_societies,
        // Admins
        admins_handlers::list_admins,
        admins_handlers::search_admins,
        admins_handlers::filter_admins,
        admins_handlers::get_admin_stats,
        admins_handlers::get_admin,
        admins_handlers::list_activities,
        admins_handlers::create_admin,
        admins_handlers::update_admin,
        admins_handlers::update_admin_status,
        admins_handlers::delete_admin,
        // View state
        view_state_handlers::get_view_state,
        view_state_handlers::apply_transition,
        // Dashboard
        dashboard_handlers::get_current_page,
        dashboard_handlers::view_admin,
        dashboard_handlers::delete_admin,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Admins
            admins_models::Society,
            admins_models::Admin,
            admins_models::AdminStatus,
            admins_models::Activity,
            admins_models::ActivityType,
            admins_dtos::AdminStatusFilter,
            admins_dtos::AdminSortBy,
            admins_dtos::SortOrder,
            admins_dtos::AdminPageDto,
            admins_dtos::FormStatus,
            admins_dtos::AdminFormDto,
            admins_dtos::UpdateAdminStatusDto,
            admins_dtos::AdminStatsDto,
            ApiResponse<Vec<admins_models::Society>>,
            ApiResponse<admins_models::Admin>,
            ApiResponse<Vec<admins_models::Admin>>,
            ApiResponse<Vec<admins_models::Activity>>,
            ApiResponse<admins_dtos::AdminPageDto>,
            ApiResponse<admins_dtos::AdminStatsDto>,
            // View state
            view_state_models::ViewState,
            view_state_models::Filters,
            view_state_models::Pagination,
            view_state_models::Preferences,
            view_state_models::Theme,
            view_state_models::DashboardView,
            view_state_models::ViewTransition,
            ApiResponse<view_state_models::ViewState>,
            // Dashboard
            dashboard_dtos::DashboardPageDto,
            dashboard_dtos::AdminViewDto,
            dashboard_dtos::AdminDeletedDto,
            ApiResponse<dashboard_dtos::DashboardPageDto>,
            ApiResponse<dashboard_dtos::AdminViewDto>,
            ApiResponse<dashboard_dtos::AdminDeletedDto>,
        )
    ),
    tags(
        (name = "societies", description = "Housing societies an admin can be assigned to"),
        (name = "admins", description = "Society admin records, listing and activity history"),
        (name = "view-state", description = "Shared dashboard filters, selection, preferences and navigation"),
        (name = "dashboard", description = "Dashboard actions spanning admin records and view state"),
    ),
    info(
        title = "Society Admin API",
        version = "0.1.0",
        description = "API documentation for the society admin dashboard",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

/// Swagger UI at `/swagger-ui`, serving the document at `/api-docs/openapi.json`
pub fn swagger_router(config: &SwaggerConfig) -> Router {
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    }
    .modify(&mut openapi);

    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/societies",
            "/api/admins",
            "/api/admins/search",
            "/api/admins/filter",
            "/api/admins/stats",
            "/api/admins/{id}",
            "/api/admins/{id}/activities",
            "/api/admins/{id}/status",
            "/api/view-state",
            "/api/view-state/transitions",
            "/api/dashboard/admins",
            "/api/dashboard/admins/{id}",
            "/api/dashboard/admins/{id}/view",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Docs".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Docs"));
    }

    #[tokio::test]
    async fn test_swagger_router_serves_document_without_credentials() {
        let server = TestServer::new(swagger_router(&SwaggerConfig {
            title: "Society Admin API".to_string(),
            version: "2.0.0".to_string(),
            description: "Docs".to_string(),
        }))
        .unwrap();

        let response = server.get("/api-docs/openapi.json").await;
        response.assert_status_ok();

        let doc = response.json::<serde_json::Value>();
        assert_eq!(doc["info"]["version"], "2.0.0");
        assert!(doc["paths"]["/api/admins"].is_object());
    }
}
