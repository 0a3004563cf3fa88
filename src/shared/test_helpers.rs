//! Fixtures shared by the unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::features::admins::dtos::{AdminFormDto, FormStatus};
use crate::features::admins::models::{
    Activity, ActivityType, AdminRecord, AdminStatus, LastActivity, Society,
};
use crate::features::admins::services::{AdminService, AdminStore, SeedData};

/// Fixed "current time" for deterministic tests
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn society(id: i64, name: &str, unit_count: u32) -> Society {
    Society {
        id,
        name: name.to_string(),
        unit_count,
    }
}

pub fn admin_form(name: &str, email: &str) -> AdminFormDto {
    AdminFormDto {
        name: name.to_string(),
        email: email.to_string(),
        phone: "+91 90000 00000".to_string(),
        status: FormStatus::Active,
        assigned_societies: vec![],
        permissions: vec![],
    }
}

#[allow(clippy::too_many_arguments)]
pub fn admin_record(
    id: i64,
    name: &str,
    email: &str,
    status: AdminStatus,
    societies: Vec<i64>,
    last_activity: LastActivity,
    login_count: u32,
    tickets_resolved: u32,
) -> AdminRecord {
    AdminRecord {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: format!("+91 98450 {:05}", id),
        status,
        assigned_societies: societies,
        last_activity,
        created_at: fixed_now() - Duration::days(365),
        login_count,
        tickets_resolved,
        avatar: None,
        recent_activities: Vec::new(),
    }
}

/// Five admins over three societies, covering every status and a `Never` entry
pub fn sample_seed() -> SeedData {
    let now = fixed_now();

    let mut meera = admin_record(
        3,
        "meera Iyer",
        "meera.iyer@greenvalley.in",
        AdminStatus::Inactive,
        vec![3],
        LastActivity::At(now - Duration::days(40)),
        25,
        20,
    );
    meera.recent_activities = vec![
        Activity {
            id: 31,
            action: "Approved visitor registration".to_string(),
            society: "Lakeview Residency".to_string(),
            timestamp: now - Duration::days(2),
            activity_type: ActivityType::Approval,
        },
        Activity {
            id: 32,
            action: "Created maintenance ticket".to_string(),
            society: "Lakeview Residency".to_string(),
            timestamp: now - Duration::days(45),
            activity_type: ActivityType::Creation,
        },
    ];

    SeedData {
        societies: vec![
            society(1, "Green Valley Apartments", 120),
            society(2, "Sunrise Towers", 80),
            society(3, "Lakeview Residency", 45),
        ],
        admins: vec![
            admin_record(
                1,
                "Ananya Sharma",
                "ananya@societyhub.in",
                AdminStatus::Active,
                vec![2, 1, 99],
                LastActivity::At(now - Duration::hours(3)),
                3,
                0,
            ),
            admin_record(
                2,
                "Vikram Rao",
                "vikram.rao@sunrise.in",
                AdminStatus::Pending,
                vec![],
                LastActivity::Never,
                0,
                2,
            ),
            meera,
            admin_record(
                4,
                "Arjun Kapoor",
                "arjun@societyhub.in",
                AdminStatus::Active,
                vec![1, 2, 3],
                LastActivity::At(now - Duration::days(1)),
                10,
                5,
            ),
            admin_record(
                5,
                "Zoya Khan",
                "zoya.khan@lakeview.in",
                AdminStatus::Active,
                vec![1],
                LastActivity::At(now - Duration::days(7)),
                42,
                12,
            ),
        ],
    }
}

pub fn sample_store() -> AdminStore {
    AdminStore::from_seed(sample_seed()).unwrap()
}

/// Data service over the sample store: no simulated latency, fixed rng seed
pub fn test_admin_service() -> AdminService {
    AdminService::new(sample_store(), false, Some(7))
}
