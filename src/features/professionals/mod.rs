//! Professional profiles: bios, availability flags, saved books and
//! per-category specialties.
//!
//! A profile belongs to exactly one user account with the `professional`
//! role. Reviews, licenses, specialties and saved-book rows are owned by the
//! profile and disappear with it.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/professionals` | Create profile |
//! | GET | `/api/professionals` | List/search profiles |
//! | GET | `/api/professionals/{id}` | Get profile |
//! | PUT | `/api/professionals/{id}` | Update profile (refreshes last_active) |
//! | DELETE | `/api/professionals/{id}` | Delete profile |
//! | GET | `/api/professionals/{id}/saved-books` | List saved books |
//! | POST | `/api/professionals/{id}/saved-books/{book_id}` | Save book |
//! | DELETE | `/api/professionals/{id}/saved-books/{book_id}` | Unsave book |
//! | GET | `/api/professionals/{id}/specialties` | List specialties |
//! | POST | `/api/professionals/{id}/specialties` | Add specialty |
//! | DELETE | `/api/professionals/{id}/specialties/{specialty_id}` | Remove specialty |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProfessionalService;
