use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::licensure::handlers;
use crate::features::licensure::services::{LicenseService, ProfessionalLicenseService};

/// Create routes for the licensure feature
pub fn routes(
    license_service: Arc<LicenseService>,
    professional_license_service: Arc<ProfessionalLicenseService>,
) -> Router {
    let license_routes = Router::new()
        .route(
            "/api/licenses",
            get(handlers::list_licenses).post(handlers::create_license),
        )
        .route(
            "/api/licenses/{id}",
            get(handlers::get_license).delete(handlers::delete_license),
        )
        .with_state(license_service);

    let record_routes = Router::new()
        .route(
            "/api/professional-licenses",
            get(handlers::list_professional_licenses).post(handlers::create_professional_license),
        )
        .route(
            "/api/professional-licenses/{id}",
            get(handlers::get_professional_license)
                .put(handlers::update_professional_license)
                .delete(handlers::delete_professional_license),
        )
        .with_state(professional_license_service);

    license_routes.merge(record_routes)
}
