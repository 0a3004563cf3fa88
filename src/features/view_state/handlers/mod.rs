pub mod view_state_handler;

pub use view_state_handler::*;
