use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::reviews::handlers;
use crate::features::reviews::services::ReviewService;

/// Create routes for the reviews feature
pub fn routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route(
            "/api/reviews",
            get(handlers::list_reviews).post(handlers::create_review),
        )
        .route(
            "/api/reviews/{id}",
            get(handlers::get_review)
                .put(handlers::update_review)
                .delete(handlers::delete_review),
        )
        .with_state(service)
}
