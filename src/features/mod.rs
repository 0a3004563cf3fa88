pub mod admins;
pub mod dashboard;
pub mod view_state;
