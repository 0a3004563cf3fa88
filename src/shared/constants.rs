// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for the admin table
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// ADMIN RECORDS
// =============================================================================

/// Wire value of `last_activity` for admins that never signed in
pub const NEVER_ACTIVE: &str = "Never";

/// Society label used on synthesized activities of unassigned admins
pub const FALLBACK_SOCIETY_LABEL: &str = "System";

// =============================================================================
// ACTIVITY HISTORY
// =============================================================================

/// Upper bound on session events generated from `login_count`
pub const MAX_SESSION_ACTIVITIES: u32 = 20;

/// Upper bound on ticket events generated from `tickets_resolved`
pub const MAX_TICKET_ACTIVITIES: u32 = 15;

/// Session events are spread over the last N days
pub const SESSION_LOOKBACK_DAYS: i64 = 30;

/// Ticket events are spread over the last N days
pub const TICKET_LOOKBACK_DAYS: i64 = 60;

/// First id handed to synthesized session events
pub const SESSION_ACTIVITY_ID_BASE: i64 = 1000;

/// First id handed to synthesized ticket events
pub const TICKET_ACTIVITY_ID_BASE: i64 = 2000;

// =============================================================================
// VIEW STATE
// =============================================================================

/// Storage key of the persisted filters and preferences
pub const VIEW_STATE_STORAGE_KEY: &str = "admin-dashboard-state";
