use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::features::view_state::models::{PersistedViewState, ViewState, ViewTransition};
use crate::features::view_state::services::storage::KeyValueStorage;
use crate::shared::constants::VIEW_STATE_STORAGE_KEY;

/// Holds the shared dashboard view state and persists its durable subset
pub struct ViewStateService {
    state: RwLock<ViewState>,
    storage: Arc<dyn KeyValueStorage>,
}

impl ViewStateService {
    /// Rehydrate from storage. Missing or unreadable state leaves the defaults in place.
    pub async fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let state = match storage.load(VIEW_STATE_STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<PersistedViewState>(&raw) {
                Ok(persisted) => {
                    tracing::debug!("Restored persisted view state");
                    persisted.into_view_state()
                }
                Err(e) => {
                    tracing::warn!("Ignoring malformed persisted view state: {}", e);
                    ViewState::default()
                }
            },
            Ok(None) => ViewState::default(),
            Err(e) => {
                tracing::warn!("Failed to read persisted view state: {}", e);
                ViewState::default()
            }
        };

        Self {
            state: RwLock::new(state),
            storage,
        }
    }

    pub async fn current(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Apply a transition and persist the result.
    ///
    /// The write lock is held until the save finishes, so stored snapshots
    /// land in transition order. A failed write is logged; the transition
    /// stays applied.
    pub async fn apply(&self, transition: ViewTransition) -> ViewState {
        let mut state = self.state.write().await;
        let next = std::mem::take(&mut *state).apply(transition);
        *state = next.clone();

        if let Err(e) = self.persist(&next).await {
            tracing::warn!("Failed to persist view state: {}", e);
        }

        next
    }

    async fn persist(&self, state: &ViewState) -> Result<()> {
        let value = serde_json::to_string(&PersistedViewState::from(state))?;
        self.storage.save(VIEW_STATE_STORAGE_KEY, &value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::features::admins::dtos::{AdminSortBy, AdminStatusFilter, SortOrder};
    use crate::features::view_state::models::Theme;
    use crate::features::view_state::services::storage::{
        FileKeyValueStorage, MemoryKeyValueStorage,
    };
    use async_trait::async_trait;

    struct FailingStorage;

    #[async_trait]
    impl KeyValueStorage for FailingStorage {
        async fn load(&self, _key: &str) -> Result<Option<String>> {
            Err(AppError::Internal("storage offline".to_string()))
        }

        async fn save(&self, _key: &str, _value: &str) -> Result<()> {
            Err(AppError::Internal("storage offline".to_string()))
        }
    }

    /// Memory storage that stalls saves of an expanded sidebar
    struct SlowStorage {
        inner: MemoryKeyValueStorage,
    }

    #[async_trait]
    impl KeyValueStorage for SlowStorage {
        async fn load(&self, key: &str) -> Result<Option<String>> {
            self.inner.load(key).await
        }

        async fn save(&self, key: &str, value: &str) -> Result<()> {
            if !value.contains(r#""sidebar_collapsed":true"#) {
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
            self.inner.save(key, value).await
        }
    }

    #[tokio::test]
    async fn test_concurrent_transitions_persist_in_order() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(SlowStorage {
            inner: MemoryKeyValueStorage::new(),
        });
        let service = ViewStateService::load(Arc::clone(&storage)).await;

        tokio::join!(
            service.apply(ViewTransition::SetTheme { theme: Theme::Dark }),
            async {
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                service.apply(ViewTransition::ToggleSidebar).await
            }
        );

        let live = service.current().await.preferences;
        let restored = ViewStateService::load(storage)
            .await
            .current()
            .await
            .preferences;

        assert_eq!(live.theme, Theme::Dark);
        assert!(live.sidebar_collapsed);
        assert_eq!(restored, live);
    }

    #[tokio::test]
    async fn test_empty_storage_gives_defaults() {
        let service = ViewStateService::load(Arc::new(MemoryKeyValueStorage::new())).await;
        assert_eq!(service.current().await, ViewState::default());
    }

    #[tokio::test]
    async fn test_malformed_storage_gives_defaults() {
        for raw in [
            "not json",
            r#"{"filters":{"status":"archived"}}"#,
            r#"{"preferences":{"theme":"sepia"}}"#,
        ] {
            let storage = MemoryKeyValueStorage::with_value(VIEW_STATE_STORAGE_KEY, raw);
            let service = ViewStateService::load(Arc::new(storage)).await;
            assert_eq!(service.current().await, ViewState::default(), "raw={}", raw);
        }
    }

    #[tokio::test]
    async fn test_partial_storage_fills_defaults() {
        let storage = MemoryKeyValueStorage::with_value(
            VIEW_STATE_STORAGE_KEY,
            r#"{"preferences":{"theme":"dark"}}"#,
        );
        let service = ViewStateService::load(Arc::new(storage)).await;

        let state = service.current().await;
        assert_eq!(state.preferences.theme, Theme::Dark);
        assert!(!state.preferences.sidebar_collapsed);
        assert_eq!(state.filters.status, AdminStatusFilter::All);
    }

    #[tokio::test]
    async fn test_transitions_persist_and_rehydrate() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryKeyValueStorage::new());
        let service = ViewStateService::load(Arc::clone(&storage)).await;

        service
            .apply(ViewTransition::SetSearch {
                search: "rao".to_string(),
            })
            .await;
        service
            .apply(ViewTransition::SetSort {
                sort_by: AdminSortBy::LoginCount,
                sort_order: SortOrder::Desc,
            })
            .await;
        service.apply(ViewTransition::SetPage { page: 4 }).await;
        service.apply(ViewTransition::ToggleSidebar).await;
        service.apply(ViewTransition::ToggleSelect { admin_id: 2 }).await;

        let restored = ViewStateService::load(storage).await.current().await;

        assert_eq!(restored.filters.search, "rao");
        assert_eq!(restored.filters.sort_by, AdminSortBy::LoginCount);
        assert_eq!(restored.filters.sort_order, SortOrder::Desc);
        assert!(restored.preferences.sidebar_collapsed);
        assert_eq!(restored.pagination.current_page, 1);
        assert!(restored.selected_admins.is_empty());
    }

    #[tokio::test]
    async fn test_file_storage_survives_restart() {
        let dir = tempfile::tempdir().unwrap();

        let service =
            ViewStateService::load(Arc::new(FileKeyValueStorage::new(dir.path()))).await;
        service
            .apply(ViewTransition::SetTheme { theme: Theme::Dark })
            .await;
        drop(service);

        let service =
            ViewStateService::load(Arc::new(FileKeyValueStorage::new(dir.path()))).await;
        assert_eq!(service.current().await.preferences.theme, Theme::Dark);
    }

    #[tokio::test]
    async fn test_write_failure_keeps_transition() {
        let service = ViewStateService::load(Arc::new(FailingStorage)).await;

        let state = service
            .apply(ViewTransition::SetTheme { theme: Theme::Dark })
            .await;

        assert_eq!(state.preferences.theme, Theme::Dark);
        assert_eq!(service.current().await.preferences.theme, Theme::Dark);
    }
}
