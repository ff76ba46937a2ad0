use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::books::handlers;
use crate::features::books::services::BookService;

/// Create routes for the books feature
pub fn routes(service: Arc<BookService>) -> Router {
    Router::new()
        .route(
            "/api/books",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/api/books/{id}",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .with_state(service)
}
