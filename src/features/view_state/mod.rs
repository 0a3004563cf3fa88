//! Shared dashboard view state.
//!
//! Filters, pagination, selection, preferences and the current screen, changed
//! only through named transitions. Filters and preferences are written to a
//! key-value store after every transition and restored on startup.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{
    FileKeyValueStorage, KeyValueStorage, MemoryKeyValueStorage, ViewStateService,
};
