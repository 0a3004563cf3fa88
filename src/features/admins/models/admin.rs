use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

use crate::features::admins::models::{Activity, Society};
use crate::shared::constants::NEVER_ACTIVE;

/// Admin account status. Any status may change to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdminStatus {
    Active,
    Inactive,
    Pending,
}

impl std::fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminStatus::Active => write!(f, "active"),
            AdminStatus::Inactive => write!(f, "inactive"),
            AdminStatus::Pending => write!(f, "pending"),
        }
    }
}

/// Last time an admin did anything, or `Never`.
///
/// Serialized as an RFC 3339 timestamp or the literal string `"Never"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastActivity {
    Never,
    At(DateTime<Utc>),
}

impl LastActivity {
    /// Sort key: `Never` is the earliest representable instant
    pub fn sort_key(&self) -> DateTime<Utc> {
        match self {
            LastActivity::Never => DateTime::<Utc>::MIN_UTC,
            LastActivity::At(ts) => *ts,
        }
    }
}

impl Serialize for LastActivity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LastActivity::Never => serializer.serialize_str(NEVER_ACTIVE),
            LastActivity::At(ts) => ts.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for LastActivity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == NEVER_ACTIVE {
            return Ok(LastActivity::Never);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| LastActivity::At(ts.with_timezone(&Utc)))
            .map_err(|e| {
                serde::de::Error::custom(format!("invalid last_activity '{}': {}", raw, e))
            })
    }
}

/// Admin as held by the record store: societies by reference id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: AdminStatus,
    #[serde(default)]
    pub assigned_societies: Vec<i64>,
    pub last_activity: LastActivity,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub login_count: u32,
    #[serde(default)]
    pub tickets_resolved: u32,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub recent_activities: Vec<Activity>,
}

/// Admin with society references resolved, as handed to readers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Admin {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: AdminStatus,
    pub assigned_societies: Vec<Society>,
    #[schema(value_type = String, example = "2024-01-15T10:30:00Z")]
    pub last_activity: LastActivity,
    pub created_at: DateTime<Utc>,
    pub login_count: u32,
    pub tickets_resolved: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub recent_activities: Vec<Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_last_activity_wire_format() {
        let never = serde_json::to_value(LastActivity::Never).unwrap();
        assert_eq!(never, serde_json::json!("Never"));

        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let parsed: LastActivity = serde_json::from_str("\"2024-01-15T10:30:00Z\"").unwrap();
        assert_eq!(parsed, LastActivity::At(ts));

        let parsed: LastActivity = serde_json::from_str("\"Never\"").unwrap();
        assert_eq!(parsed, LastActivity::Never);
    }

    #[test]
    fn test_last_activity_rejects_garbage() {
        let parsed = serde_json::from_str::<LastActivity>("\"yesterday\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_never_sorts_before_any_timestamp() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert!(LastActivity::Never.sort_key() < LastActivity::At(epoch).sort_key());
    }

    #[test]
    fn test_status_wire_format() {
        let status: AdminStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, AdminStatus::Pending);
        assert_eq!(AdminStatus::Inactive.to_string(), "inactive");
    }
}
