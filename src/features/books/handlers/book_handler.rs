use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::books::dtos::{
    BookResponseDto, CreateBookDto, ListBooksQuery, UpdateBookDto,
};
use crate::features::books::services::BookService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Create a book
#[utoipa::path(
    post,
    path = "/api/books",
    request_body = CreateBookDto,
    responses(
        (status = 200, description = "Book created", body = ApiResponse<BookResponseDto>),
        (status = 400, description = "Validation error or unknown category")
    ),
    tag = "books"
)]
pub async fn create_book(
    State(service): State<Arc<BookService>>,
    AppJson(dto): AppJson<CreateBookDto>,
) -> Result<Json<ApiResponse<BookResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let book = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(book), None, None)))
}

/// List books (paginated)
#[utoipa::path(
    get,
    path = "/api/books",
    params(ListBooksQuery, PaginationQuery),
    responses(
        (status = 200, description = "List of books", body = ApiResponse<Vec<BookResponseDto>>),
    ),
    tag = "books"
)]
pub async fn list_books(
    State(service): State<Arc<BookService>>,
    Query(filter): Query<ListBooksQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<BookResponseDto>>>> {
    let (books, total) = service
        .list(&filter, pagination.offset(), pagination.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(books),
        None,
        Some(Meta { total }),
    )))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book found", body = ApiResponse<BookResponseDto>),
        (status = 404, description = "Book not found")
    ),
    tag = "books"
)]
pub async fn get_book(
    State(service): State<Arc<BookService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookResponseDto>>> {
    let book = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(book), None, None)))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    request_body = UpdateBookDto,
    responses(
        (status = 200, description = "Book updated", body = ApiResponse<BookResponseDto>),
        (status = 400, description = "Validation error or unknown category"),
        (status = 404, description = "Book not found")
    ),
    tag = "books"
)]
pub async fn update_book(
    State(service): State<Arc<BookService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateBookDto>,
) -> Result<Json<ApiResponse<BookResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let book = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(book), None, None)))
}

/// Delete a book and its reviews
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Book not found")
    ),
    tag = "books"
)]
pub async fn delete_book(
    State(service): State<Arc<BookService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Book deleted".to_string()),
        None,
    )))
}
