pub mod activity;
pub mod admin;
pub mod society;

pub use activity::{Activity, ActivityType};
pub use admin::{Admin, AdminRecord, AdminStatus, LastActivity};
pub use society::Society;
