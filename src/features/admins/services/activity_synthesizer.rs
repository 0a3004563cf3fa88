//! Builds the full activity history shown on the admin detail view.
//!
//! Seeded activities are merged with session and ticket events generated from
//! the admin's counters. Generated events are not stored; the caller supplies
//! the random source and the clock so a seeded generator gives repeatable output.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::features::admins::models::{Activity, ActivityType, Admin};
use crate::shared::constants::{
    FALLBACK_SOCIETY_LABEL, MAX_SESSION_ACTIVITIES, MAX_TICKET_ACTIVITIES,
    SESSION_ACTIVITY_ID_BASE, SESSION_LOOKBACK_DAYS, TICKET_ACTIVITY_ID_BASE,
    TICKET_LOOKBACK_DAYS,
};

pub const SESSION_ACTIONS: [&str; 5] = [
    "Logged into system",
    "Updated profile settings",
    "Viewed dashboard",
    "Checked notifications",
    "Accessed admin panel",
];

pub const TICKET_ACTIONS: [&str; 8] = [
    "Resolved maintenance complaint",
    "Processed payment request",
    "Approved visitor registration",
    "Updated resident information",
    "Created maintenance ticket",
    "Resolved parking dispute",
    "Approved community event",
    "Updated security settings",
];

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}

fn pick_society<R: Rng + ?Sized>(rng: &mut R, admin: &Admin) -> String {
    pick(rng, &admin.assigned_societies)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| FALLBACK_SOCIETY_LABEL.to_string())
}

fn days_before<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>, max_days: i64) -> DateTime<Utc> {
    now - Duration::days(rng.random_range(1..=max_days))
}

fn session_activities<R: Rng + ?Sized>(
    admin: &Admin,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<Activity> {
    let count = admin.login_count.min(MAX_SESSION_ACTIVITIES);
    (0..count)
        .map(|i| {
            let timestamp = days_before(rng, now, SESSION_LOOKBACK_DAYS);
            let activity_type = pick(rng, &ActivityType::ALL)
                .copied()
                .unwrap_or(ActivityType::Update);
            let action = pick(rng, &SESSION_ACTIONS).copied().unwrap_or_default();
            Activity {
                id: SESSION_ACTIVITY_ID_BASE + i64::from(i),
                action: action.to_string(),
                society: pick_society(rng, admin),
                timestamp,
                activity_type,
            }
        })
        .collect()
}

fn ticket_activities<R: Rng + ?Sized>(
    admin: &Admin,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<Activity> {
    let count = admin.tickets_resolved.min(MAX_TICKET_ACTIVITIES);
    (0..count)
        .map(|i| {
            let timestamp = days_before(rng, now, TICKET_LOOKBACK_DAYS);
            let society = pick_society(rng, admin);
            let action = pick(rng, &TICKET_ACTIONS).copied().unwrap_or_default();
            Activity {
                id: TICKET_ACTIVITY_ID_BASE + i64::from(i),
                action: action.to_string(),
                society,
                timestamp,
                activity_type: ActivityType::Resolution,
            }
        })
        .collect()
}

/// Recent activities plus synthesized history, newest first
pub fn all_activities<R: Rng + ?Sized>(
    admin: &Admin,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<Activity> {
    let mut activities = admin.recent_activities.clone();
    activities.extend(session_activities(admin, rng, now));
    activities.extend(ticket_activities(admin, rng, now));
    activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    activities
}
