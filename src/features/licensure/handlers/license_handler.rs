use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::licensure::dtos::{CreateLicenseDto, LicenseResponseDto};
use crate::features::licensure::services::LicenseService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Register a license type
#[utoipa::path(
    post,
    path = "/api/licenses",
    request_body = CreateLicenseDto,
    responses(
        (status = 200, description = "License created", body = ApiResponse<LicenseResponseDto>),
        (status = 400, description = "Unknown license type code")
    ),
    tag = "licensure"
)]
pub async fn create_license(
    State(service): State<Arc<LicenseService>>,
    AppJson(dto): AppJson<CreateLicenseDto>,
) -> Result<Json<ApiResponse<LicenseResponseDto>>> {
    let license = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(license), None, None)))
}

/// List registered license types with their catalog texts
#[utoipa::path(
    get,
    path = "/api/licenses",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of licenses", body = ApiResponse<Vec<LicenseResponseDto>>),
    ),
    tag = "licensure"
)]
pub async fn list_licenses(
    State(service): State<Arc<LicenseService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<LicenseResponseDto>>>> {
    let (licenses, total) = service
        .list(pagination.offset(), pagination.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(licenses),
        None,
        Some(Meta { total }),
    )))
}

/// Get license by ID
#[utoipa::path(
    get,
    path = "/api/licenses/{id}",
    params(
        ("id" = Uuid, Path, description = "License ID")
    ),
    responses(
        (status = 200, description = "License found", body = ApiResponse<LicenseResponseDto>),
        (status = 404, description = "License not found")
    ),
    tag = "licensure"
)]
pub async fn get_license(
    State(service): State<Arc<LicenseService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<LicenseResponseDto>>> {
    let license = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(license), None, None)))
}

/// Delete a license type registration
#[utoipa::path(
    delete,
    path = "/api/licenses/{id}",
    params(
        ("id" = Uuid, Path, description = "License ID")
    ),
    responses(
        (status = 200, description = "License deleted"),
        (status = 404, description = "License not found")
    ),
    tag = "licensure"
)]
pub async fn delete_license(
    State(service): State<Arc<LicenseService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("License deleted".to_string()),
        None,
    )))
}
