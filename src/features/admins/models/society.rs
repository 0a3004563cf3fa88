use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A managed property/complex an admin can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Society {
    pub id: i64,
    pub name: String,
    pub unit_count: u32,
}
