use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::books::dtos::BookSummaryDto;
use crate::features::professionals::dtos::{
    CreateProfessionalDto, CreateSpecialtyDto, ListProfessionalsQuery, ProfessionalResponseDto,
    SpecialtyResponseDto, UpdateProfessionalDto,
};
use crate::features::professionals::services::ProfessionalService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Create a professional profile
#[utoipa::path(
    post,
    path = "/api/professionals",
    request_body = CreateProfessionalDto,
    responses(
        (status = 200, description = "Professional created", body = ApiResponse<ProfessionalResponseDto>),
        (status = 400, description = "Validation error or unknown user"),
        (status = 409, description = "User already has a professional profile")
    ),
    tag = "professionals"
)]
pub async fn create_professional(
    State(service): State<Arc<ProfessionalService>>,
    AppJson(dto): AppJson<CreateProfessionalDto>,
) -> Result<Json<ApiResponse<ProfessionalResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let professional = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(professional), None, None)))
}

/// List professionals (paginated)
#[utoipa::path(
    get,
    path = "/api/professionals",
    params(ListProfessionalsQuery, PaginationQuery),
    responses(
        (status = 200, description = "List of professionals", body = ApiResponse<Vec<ProfessionalResponseDto>>),
    ),
    tag = "professionals"
)]
pub async fn list_professionals(
    State(service): State<Arc<ProfessionalService>>,
    Query(filter): Query<ListProfessionalsQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ProfessionalResponseDto>>>> {
    let (professionals, total) = service
        .list(&filter, pagination.offset(), pagination.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(professionals),
        None,
        Some(Meta { total }),
    )))
}

/// Get professional by ID
#[utoipa::path(
    get,
    path = "/api/professionals/{id}",
    params(
        ("id" = Uuid, Path, description = "Professional ID")
    ),
    responses(
        (status = 200, description = "Professional found", body = ApiResponse<ProfessionalResponseDto>),
        (status = 404, description = "Professional not found")
    ),
    tag = "professionals"
)]
pub async fn get_professional(
    State(service): State<Arc<ProfessionalService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ProfessionalResponseDto>>> {
    let professional = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(professional), None, None)))
}

/// Update a professional profile
#[utoipa::path(
    put,
    path = "/api/professionals/{id}",
    params(
        ("id" = Uuid, Path, description = "Professional ID")
    ),
    request_body = UpdateProfessionalDto,
    responses(
        (status = 200, description = "Professional updated", body = ApiResponse<ProfessionalResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Professional not found")
    ),
    tag = "professionals"
)]
pub async fn update_professional(
    State(service): State<Arc<ProfessionalService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateProfessionalDto>,
) -> Result<Json<ApiResponse<ProfessionalResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let professional = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(professional), None, None)))
}

/// Delete a professional profile
#[utoipa::path(
    delete,
    path = "/api/professionals/{id}",
    params(
        ("id" = Uuid, Path, description = "Professional ID")
    ),
    responses(
        (status = 200, description = "Professional deleted"),
        (status = 404, description = "Professional not found")
    ),
    tag = "professionals"
)]
pub async fn delete_professional(
    State(service): State<Arc<ProfessionalService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Professional deleted".to_string()),
        None,
    )))
}

/// Save a book to the professional's reading list
#[utoipa::path(
    post,
    path = "/api/professionals/{id}/saved-books/{book_id}",
    params(
        ("id" = Uuid, Path, description = "Professional ID"),
        ("book_id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book saved"),
        (status = 400, description = "Unknown book"),
        (status = 404, description = "Professional not found")
    ),
    tag = "professionals"
)]
pub async fn save_book(
    State(service): State<Arc<ProfessionalService>>,
    Path((id, book_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<()>>> {
    service.save_book(id, book_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Book saved".to_string()),
        None,
    )))
}

/// Remove a book from the professional's reading list
#[utoipa::path(
    delete,
    path = "/api/professionals/{id}/saved-books/{book_id}",
    params(
        ("id" = Uuid, Path, description = "Professional ID"),
        ("book_id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book removed from saved list"),
        (status = 404, description = "Saved book not found")
    ),
    tag = "professionals"
)]
pub async fn unsave_book(
    State(service): State<Arc<ProfessionalService>>,
    Path((id, book_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<()>>> {
    service.unsave_book(id, book_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Book removed from saved list".to_string()),
        None,
    )))
}

/// List the professional's saved books
#[utoipa::path(
    get,
    path = "/api/professionals/{id}/saved-books",
    params(
        ("id" = Uuid, Path, description = "Professional ID")
    ),
    responses(
        (status = 200, description = "Saved books", body = ApiResponse<Vec<BookSummaryDto>>),
        (status = 404, description = "Professional not found")
    ),
    tag = "professionals"
)]
pub async fn list_saved_books(
    State(service): State<Arc<ProfessionalService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<BookSummaryDto>>>> {
    let books = service.list_saved_books(id).await?;
    Ok(Json(ApiResponse::success(Some(books), None, None)))
}

/// Add a specialty to a professional
#[utoipa::path(
    post,
    path = "/api/professionals/{id}/specialties",
    params(
        ("id" = Uuid, Path, description = "Professional ID")
    ),
    request_body = CreateSpecialtyDto,
    responses(
        (status = 200, description = "Specialty added", body = ApiResponse<SpecialtyResponseDto>),
        (status = 400, description = "Validation error or unknown category"),
        (status = 404, description = "Professional not found")
    ),
    tag = "professionals"
)]
pub async fn add_specialty(
    State(service): State<Arc<ProfessionalService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<CreateSpecialtyDto>,
) -> Result<Json<ApiResponse<SpecialtyResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let specialty = service.add_specialty(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(specialty), None, None)))
}

/// List the professional's specialties
#[utoipa::path(
    get,
    path = "/api/professionals/{id}/specialties",
    params(
        ("id" = Uuid, Path, description = "Professional ID")
    ),
    responses(
        (status = 200, description = "Specialties", body = ApiResponse<Vec<SpecialtyResponseDto>>),
        (status = 404, description = "Professional not found")
    ),
    tag = "professionals"
)]
pub async fn list_specialties(
    State(service): State<Arc<ProfessionalService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<SpecialtyResponseDto>>>> {
    let specialties = service.list_specialties(id).await?;
    Ok(Json(ApiResponse::success(Some(specialties), None, None)))
}

/// Remove a specialty from a professional
#[utoipa::path(
    delete,
    path = "/api/professionals/{id}/specialties/{specialty_id}",
    params(
        ("id" = Uuid, Path, description = "Professional ID"),
        ("specialty_id" = Uuid, Path, description = "Specialty ID")
    ),
    responses(
        (status = 200, description = "Specialty removed"),
        (status = 404, description = "Specialty not found")
    ),
    tag = "professionals"
)]
pub async fn remove_specialty(
    State(service): State<Arc<ProfessionalService>>,
    Path((id, specialty_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<()>>> {
    service.remove_specialty(id, specialty_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Specialty removed".to_string()),
        None,
    )))
}
