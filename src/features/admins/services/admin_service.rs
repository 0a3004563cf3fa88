//! Admin data service - the in-memory store behind simulated network latency

use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{Mutex, RwLock};

use crate::core::config::DataServiceConfig;
use crate::core::error::Result;
use crate::features::admins::dtos::{AdminFormDto, AdminPageDto, AdminStatsDto, AdminStatusFilter};
use crate::features::admins::models::{Activity, Admin, AdminStatus, Society};
use crate::features::admins::services::activity_synthesizer::all_activities;
use crate::features::admins::services::query::{
    filter_by_status, query_admins, search_admins, AdminQuery,
};
use crate::features::admins::services::AdminStore;

/// Per-operation delays in milliseconds
mod latency {
    pub const SOCIETIES: u64 = 100;
    pub const LIST: u64 = 200;
    pub const GET: u64 = 150;
    pub const SEARCH: u64 = 300;
    pub const FILTER: u64 = 100;
    pub const STATS: u64 = 50;
    pub const CREATE: u64 = 500;
    pub const UPDATE: u64 = 400;
    pub const DELETE: u64 = 300;
    pub const UPDATE_STATUS: u64 = 200;
    pub const ACTIVITIES: u64 = 300;
}

/// Service owning the admin record store
pub struct AdminService {
    store: RwLock<AdminStore>,
    rng: Mutex<StdRng>,
    simulated_latency: bool,
}

impl AdminService {
    pub fn new(store: AdminStore, simulated_latency: bool, rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            store: RwLock::new(store),
            rng: Mutex::new(rng),
            simulated_latency,
        }
    }

    pub async fn from_config(config: &DataServiceConfig) -> Result<Self> {
        let store = AdminStore::load(config.seed_data_path.as_deref()).await?;
        Ok(Self::new(
            store,
            config.simulated_latency,
            config.activity_rng_seed,
        ))
    }

    async fn delay(&self, millis: u64) {
        if self.simulated_latency {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }

    pub async fn get_societies(&self) -> Result<Vec<Society>> {
        self.delay(latency::SOCIETIES).await;
        Ok(self.store.read().await.societies().to_vec())
    }

    /// One page of admins for a listing request
    pub async fn list_admins(&self, query: &AdminQuery) -> Result<AdminPageDto> {
        self.delay(latency::LIST).await;
        let admins = self.store.read().await.admins();
        query_admins(admins, query)
    }

    pub async fn get_admin_by_id(&self, id: i64) -> Result<Option<Admin>> {
        self.delay(latency::GET).await;
        Ok(self.store.read().await.get(id))
    }

    pub async fn search_admins(&self, text: &str) -> Result<Vec<Admin>> {
        self.delay(latency::SEARCH).await;
        let admins = self.store.read().await.admins();
        Ok(search_admins(admins, text))
    }

    pub async fn filter_admins_by_status(&self, status: AdminStatusFilter) -> Result<Vec<Admin>> {
        self.delay(latency::FILTER).await;
        let admins = self.store.read().await.admins();
        Ok(filter_by_status(admins, status))
    }

    pub async fn get_admin_stats(&self) -> Result<AdminStatsDto> {
        self.delay(latency::STATS).await;
        Ok(self.store.read().await.stats())
    }

    pub async fn create_admin(&self, form: AdminFormDto) -> Result<Admin> {
        self.delay(latency::CREATE).await;
        let admin = self.store.write().await.create(form, Utc::now());

        tracing::info!(
            "Admin created: id={}, status={}, societies={}",
            admin.id,
            admin.status,
            admin.assigned_societies.len()
        );

        Ok(admin)
    }

    pub async fn update_admin(&self, id: i64, form: AdminFormDto) -> Result<Option<Admin>> {
        self.delay(latency::UPDATE).await;
        let admin = self.store.write().await.update(id, form);

        match &admin {
            Some(admin) => tracing::info!("Admin updated: id={}", admin.id),
            None => tracing::debug!("Update skipped, admin {} not found", id),
        }

        Ok(admin)
    }

    pub async fn update_admin_status(
        &self,
        id: i64,
        status: AdminStatus,
    ) -> Result<Option<Admin>> {
        self.delay(latency::UPDATE_STATUS).await;
        let admin = self.store.write().await.update_status(id, status);

        if admin.is_some() {
            tracing::info!("Admin status changed: id={}, status={}", id, status);
        }

        Ok(admin)
    }

    /// Returns false when the admin does not exist
    pub async fn delete_admin(&self, id: i64) -> Result<bool> {
        self.delay(latency::DELETE).await;
        let deleted = self.store.write().await.delete(id);

        if deleted {
            tracing::info!("Admin deleted: id={}", id);
        }

        Ok(deleted)
    }

    /// Full activity history of an admin; empty when the admin does not exist
    pub async fn get_all_activities(&self, id: i64) -> Result<Vec<Activity>> {
        self.delay(latency::ACTIVITIES).await;
        let Some(admin) = self.store.read().await.get(id) else {
            return Ok(Vec::new());
        };

        let mut rng = self.rng.lock().await;
        Ok(all_activities(&admin, &mut *rng, Utc::now()))
    }
}
