//! Dashboard coordination between admin records and the shared view state.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/dashboard/admins` | Page for the current filters |
//! | POST | `/api/dashboard/admins/{id}/view` | Open an admin's detail view |
//! | DELETE | `/api/dashboard/admins/{id}` | Delete and clean up selection/view |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::DashboardService;
