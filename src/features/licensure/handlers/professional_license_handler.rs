use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::licensure::dtos::{
    CreateProfessionalLicenseDto, ListProfessionalLicensesQuery, ProfessionalLicenseResponseDto,
    UpdateProfessionalLicenseDto,
};
use crate::features::licensure::services::ProfessionalLicenseService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Register a license for a professional in a state
#[utoipa::path(
    post,
    path = "/api/professional-licenses",
    request_body = CreateProfessionalLicenseDto,
    responses(
        (status = 200, description = "License record created", body = ApiResponse<ProfessionalLicenseResponseDto>),
        (status = 400, description = "Validation error or unknown professional/license"),
        (status = 409, description = "Same license already registered in this state")
    ),
    tag = "licensure"
)]
pub async fn create_professional_license(
    State(service): State<Arc<ProfessionalLicenseService>>,
    AppJson(dto): AppJson<CreateProfessionalLicenseDto>,
) -> Result<Json<ApiResponse<ProfessionalLicenseResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(record), None, None)))
}

/// List professional license records (paginated)
#[utoipa::path(
    get,
    path = "/api/professional-licenses",
    params(ListProfessionalLicensesQuery, PaginationQuery),
    responses(
        (status = 200, description = "List of license records", body = ApiResponse<Vec<ProfessionalLicenseResponseDto>>),
    ),
    tag = "licensure"
)]
pub async fn list_professional_licenses(
    State(service): State<Arc<ProfessionalLicenseService>>,
    Query(filter): Query<ListProfessionalLicensesQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ProfessionalLicenseResponseDto>>>> {
    let (records, total) = service
        .list(&filter, pagination.offset(), pagination.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(records),
        None,
        Some(Meta { total }),
    )))
}

/// Get license record by ID
#[utoipa::path(
    get,
    path = "/api/professional-licenses/{id}",
    params(
        ("id" = Uuid, Path, description = "License record ID")
    ),
    responses(
        (status = 200, description = "License record found", body = ApiResponse<ProfessionalLicenseResponseDto>),
        (status = 404, description = "License record not found")
    ),
    tag = "licensure"
)]
pub async fn get_professional_license(
    State(service): State<Arc<ProfessionalLicenseService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProfessionalLicenseResponseDto>>> {
    let record = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(record), None, None)))
}

/// Update a license record (number, dates, verification)
#[utoipa::path(
    put,
    path = "/api/professional-licenses/{id}",
    params(
        ("id" = Uuid, Path, description = "License record ID")
    ),
    request_body = UpdateProfessionalLicenseDto,
    responses(
        (status = 200, description = "License record updated", body = ApiResponse<ProfessionalLicenseResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "License record not found")
    ),
    tag = "licensure"
)]
pub async fn update_professional_license(
    State(service): State<Arc<ProfessionalLicenseService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateProfessionalLicenseDto>,
) -> Result<Json<ApiResponse<ProfessionalLicenseResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(record), None, None)))
}

/// Delete a license record
#[utoipa::path(
    delete,
    path = "/api/professional-licenses/{id}",
    params(
        ("id" = Uuid, Path, description = "License record ID")
    ),
    responses(
        (status = 200, description = "License record deleted"),
        (status = 404, description = "License record not found")
    ),
    tag = "licensure"
)]
pub async fn delete_professional_license(
    State(service): State<Arc<ProfessionalLicenseService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("License record deleted".to_string()),
        None,
    )))
}
