//! User accounts for the directory.
//!
//! Every professional or client profile hangs off a user account; deleting
//! the account cascades to the profile and everything the profile owns.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/users` | Create user account |
//! | GET | `/api/users` | List/search users |
//! | GET | `/api/users/{id}` | Get user |
//! | PUT | `/api/users/{id}` | Update names/email |
//! | DELETE | `/api/users/{id}` | Delete user (cascades profiles) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
