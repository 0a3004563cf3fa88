//! Admin records and societies.
//!
//! In-memory record store behind a data service that simulates network latency,
//! with the listing query engine and the activity history generator.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/societies` | List societies |
//! | GET | `/api/admins` | Search, filter, sort and paginate admins |
//! | GET | `/api/admins/search` | Quick search on name or email |
//! | GET | `/api/admins/filter` | Admins with one status |
//! | GET | `/api/admins/stats` | Counts by status |
//! | GET | `/api/admins/{id}` | Admin detail |
//! | GET | `/api/admins/{id}/activities` | Full activity history |
//! | POST | `/api/admins` | Create admin |
//! | PUT | `/api/admins/{id}` | Update admin |
//! | PATCH | `/api/admins/{id}/status` | Change status |
//! | DELETE | `/api/admins/{id}` | Delete admin |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AdminService;
