use std::sync::Arc;

use axum::{routing::get, routing::post, Router};

use crate::features::professionals::handlers;
use crate::features::professionals::services::ProfessionalService;

/// Create routes for the professionals feature
pub fn routes(service: Arc<ProfessionalService>) -> Router {
    Router::new()
        .route(
            "/api/professionals",
            get(handlers::list_professionals).post(handlers::create_professional),
        )
        .route(
            "/api/professionals/{id}",
            get(handlers::get_professional)
                .put(handlers::update_professional)
                .delete(handlers::delete_professional),
        )
        .route(
            "/api/professionals/{id}/saved-books",
            get(handlers::list_saved_books),
        )
        .route(
            "/api/professionals/{id}/saved-books/{book_id}",
            post(handlers::save_book).delete(handlers::unsave_book),
        )
        .route(
            "/api/professionals/{id}/specialties",
            get(handlers::list_specialties).post(handlers::add_specialty),
        )
        .route(
            "/api/professionals/{id}/specialties/{specialty_id}",
            axum::routing::delete(handlers::remove_specialty),
        )
        .with_state(service)
}
