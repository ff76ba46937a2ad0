use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::books::dtos::BookSummaryDto;
use crate::features::clients::dtos::{ClientResponseDto, CreateClientDto, ListClientsQuery};
use crate::features::clients::services::ClientService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Create a client profile
#[utoipa::path(
    post,
    path = "/api/clients",
    request_body = CreateClientDto,
    responses(
        (status = 200, description = "Client created", body = ApiResponse<ClientResponseDto>),
        (status = 400, description = "Unknown user or wrong role"),
        (status = 409, description = "User already has a client profile")
    ),
    tag = "clients"
)]
pub async fn create_client(
    State(service): State<Arc<ClientService>>,
    AppJson(dto): AppJson<CreateClientDto>,
) -> Result<Json<ApiResponse<ClientResponseDto>>> {
    let client = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(client), None, None)))
}

/// List clients (paginated)
#[utoipa::path(
    get,
    path = "/api/clients",
    params(ListClientsQuery, PaginationQuery),
    responses(
        (status = 200, description = "List of clients", body = ApiResponse<Vec<ClientResponseDto>>),
    ),
    tag = "clients"
)]
pub async fn list_clients(
    State(service): State<Arc<ClientService>>,
    Query(filter): Query<ListClientsQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ClientResponseDto>>>> {
    let (clients, total) = service
        .list(&filter, pagination.offset(), pagination.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(clients),
        None,
        Some(Meta { total }),
    )))
}

/// Get client by ID
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    params(
        ("id" = Uuid, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client found", body = ApiResponse<ClientResponseDto>),
        (status = 404, description = "Client not found")
    ),
    tag = "clients"
)]
pub async fn get_client(
    State(service): State<Arc<ClientService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ClientResponseDto>>> {
    let client = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(client), None, None)))
}

/// Delete a client profile
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    params(
        ("id" = Uuid, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client deleted"),
        (status = 404, description = "Client not found")
    ),
    tag = "clients"
)]
pub async fn delete_client(
    State(service): State<Arc<ClientService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Client deleted".to_string()),
        None,
    )))
}

/// Save a book to the client's reading list
#[utoipa::path(
    post,
    path = "/api/clients/{id}/saved-books/{book_id}",
    params(
        ("id" = Uuid, Path, description = "Client ID"),
        ("book_id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book saved"),
        (status = 400, description = "Unknown book"),
        (status = 404, description = "Client not found")
    ),
    tag = "clients"
)]
pub async fn save_book(
    State(service): State<Arc<ClientService>>,
    Path((id, book_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<()>>> {
    service.save_book(id, book_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Book saved".to_string()),
        None,
    )))
}

/// Remove a book from the client's reading list
#[utoipa::path(
    delete,
    path = "/api/clients/{id}/saved-books/{book_id}",
    params(
        ("id" = Uuid, Path, description = "Client ID"),
        ("book_id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book removed from saved list"),
        (status = 404, description = "Saved book not found")
    ),
    tag = "clients"
)]
pub async fn unsave_book(
    State(service): State<Arc<ClientService>>,
    Path((id, book_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<()>>> {
    service.unsave_book(id, book_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Book removed from saved list".to_string()),
        None,
    )))
}

/// List the client's saved books
#[utoipa::path(
    get,
    path = "/api/clients/{id}/saved-books",
    params(
        ("id" = Uuid, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Saved books", body = ApiResponse<Vec<BookSummaryDto>>),
        (status = 404, description = "Client not found")
    ),
    tag = "clients"
)]
pub async fn list_saved_books(
    State(service): State<Arc<ClientService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<BookSummaryDto>>>> {
    let books = service.list_saved_books(id).await?;
    Ok(Json(ApiResponse::success(Some(books), None, None)))
}
