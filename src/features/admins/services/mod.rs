pub mod activity_synthesizer;
pub mod admin_service;
pub mod admin_store;
pub mod query;

pub use admin_service::AdminService;
pub use admin_store::{AdminStore, SeedData};
pub use query::AdminQuery;
