use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Approval,
    Update,
    Resolution,
    Creation,
}

impl ActivityType {
    pub const ALL: [ActivityType; 4] = [
        ActivityType::Approval,
        ActivityType::Update,
        ActivityType::Resolution,
        ActivityType::Creation,
    ];
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityType::Approval => write!(f, "approval"),
            ActivityType::Update => write!(f, "update"),
            ActivityType::Resolution => write!(f, "resolution"),
            ActivityType::Creation => write!(f, "creation"),
        }
    }
}

/// One entry of an admin's history.
///
/// `society` is a display name, not a reference to a [`Society`](super::Society).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Activity {
    pub id: i64,
    pub action: String,
    pub society: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
}
