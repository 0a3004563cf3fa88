pub mod storage;
pub mod view_state_service;

pub use storage::{FileKeyValueStorage, KeyValueStorage, MemoryKeyValueStorage};
pub use view_state_service::ViewStateService;
