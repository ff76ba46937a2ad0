use std::sync::Arc;

use axum::{routing::get, routing::post, Router};

use crate::features::clients::handlers;
use crate::features::clients::services::ClientService;

/// Create routes for the clients feature
pub fn routes(service: Arc<ClientService>) -> Router {
    Router::new()
        .route(
            "/api/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route(
            "/api/clients/{id}",
            get(handlers::get_client).delete(handlers::delete_client),
        )
        .route(
            "/api/clients/{id}/saved-books",
            get(handlers::list_saved_books),
        )
        .route(
            "/api/clients/{id}/saved-books/{book_id}",
            post(handlers::save_book).delete(handlers::unsave_book),
        )
        .with_state(service)
}
