//! In-memory record store for admins and societies.
//!
//! Admins keep their societies as reference ids; readers always get an
//! [`Admin`] with the references resolved against the current society list.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::error::{AppError, Result};
use crate::features::admins::dtos::{AdminFormDto, AdminStatsDto};
use crate::features::admins::models::{
    Admin, AdminRecord, AdminStatus, LastActivity, Society,
};

/// Data set bundled with the binary
const BUNDLED_SEED: &str = include_str!("../../../../data/seed.json");

/// Shape of a seed file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub societies: Vec<Society>,
    #[serde(default)]
    pub admins: Vec<AdminRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct AdminStore {
    societies: Vec<Society>,
    admins: Vec<AdminRecord>,
}

impl AdminStore {
    /// Build a store, rejecting duplicate ids
    pub fn from_seed(seed: SeedData) -> Result<Self> {
        let mut society_ids = HashSet::new();
        for society in &seed.societies {
            if !society_ids.insert(society.id) {
                return Err(AppError::Validation(format!(
                    "Duplicate society id {} in seed data",
                    society.id
                )));
            }
        }

        let mut admin_ids = HashSet::new();
        for admin in &seed.admins {
            if !admin_ids.insert(admin.id) {
                return Err(AppError::Validation(format!(
                    "Duplicate admin id {} in seed data",
                    admin.id
                )));
            }
        }

        Ok(Self {
            societies: seed.societies,
            admins: seed.admins,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(json)?;
        Self::from_seed(seed)
    }

    /// Store seeded with the bundled data set
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_SEED)
    }

    /// Load from a seed file, or the bundled data set when no path is given
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let json = tokio::fs::read_to_string(path).await?;
                let store = Self::from_json(&json)?;
                tracing::info!(
                    "Seed data loaded from {}: {} societies, {} admins",
                    path.display(),
                    store.societies.len(),
                    store.admins.len()
                );
                Ok(store)
            }
            None => Self::bundled(),
        }
    }

    pub fn societies(&self) -> &[Society] {
        &self.societies
    }

    pub fn len(&self) -> usize {
        self.admins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }

    /// All admins, resolved, in store order
    pub fn admins(&self) -> Vec<Admin> {
        self.admins.iter().map(|r| self.resolve(r)).collect()
    }

    pub fn get(&self, id: i64) -> Option<Admin> {
        self.admins
            .iter()
            .find(|r| r.id == id)
            .map(|r| self.resolve(r))
    }

    /// Insert a new admin built from the form. Id is max existing + 1.
    pub fn create(&mut self, form: AdminFormDto, now: DateTime<Utc>) -> Admin {
        let record = AdminRecord {
            id: self.next_id(),
            name: form.name,
            email: form.email,
            phone: form.phone,
            status: form.status.into(),
            assigned_societies: self.known_society_ids(&form.assigned_societies),
            last_activity: LastActivity::At(now),
            created_at: now,
            login_count: 0,
            tickets_resolved: 0,
            avatar: None,
            recent_activities: Vec::new(),
        };

        let admin = self.resolve(&record);
        self.admins.push(record);
        admin
    }

    /// Replace the form-editable fields; counters, history and timestamps stay
    pub fn update(&mut self, id: i64, form: AdminFormDto) -> Option<Admin> {
        let societies = self.known_society_ids(&form.assigned_societies);
        let index = self.admins.iter().position(|r| r.id == id)?;

        let record = &mut self.admins[index];
        record.name = form.name;
        record.email = form.email;
        record.phone = form.phone;
        record.status = form.status.into();
        record.assigned_societies = societies;

        Some(self.resolve(&self.admins[index]))
    }

    pub fn update_status(&mut self, id: i64, status: AdminStatus) -> Option<Admin> {
        let index = self.admins.iter().position(|r| r.id == id)?;
        self.admins[index].status = status;
        Some(self.resolve(&self.admins[index]))
    }

    /// Returns false when no admin has this id
    pub fn delete(&mut self, id: i64) -> bool {
        match self.admins.iter().position(|r| r.id == id) {
            Some(index) => {
                self.admins.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn stats(&self) -> AdminStatsDto {
        let mut stats = AdminStatsDto::default();
        for record in &self.admins {
            match record.status {
                AdminStatus::Active => stats.active_count += 1,
                AdminStatus::Inactive => stats.inactive_count += 1,
                AdminStatus::Pending => stats.pending_count += 1,
            }
            stats.total_assignments += self.resolve_societies(&record.assigned_societies).len();
        }
        stats
    }

    // TODO: ids are reused once the highest one is deleted; keep a store-owned counter instead
    fn next_id(&self) -> i64 {
        self.admins.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
    }

    /// Requested ids that exist, in society list order
    fn known_society_ids(&self, requested: &[i64]) -> Vec<i64> {
        self.societies
            .iter()
            .filter(|s| requested.contains(&s.id))
            .map(|s| s.id)
            .collect()
    }

    fn resolve_societies(&self, ids: &[i64]) -> Vec<Society> {
        self.societies
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect()
    }

    fn resolve(&self, record: &AdminRecord) -> Admin {
        Admin {
            id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            status: record.status,
            assigned_societies: self.resolve_societies(&record.assigned_societies),
            last_activity: record.last_activity,
            created_at: record.created_at,
            login_count: record.login_count,
            tickets_resolved: record.tickets_resolved,
            avatar: record.avatar.clone(),
            recent_activities: record.recent_activities.clone(),
        }
    }
}
