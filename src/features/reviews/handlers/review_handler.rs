use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::reviews::dtos::{
    CreateReviewDto, ListReviewsQuery, ReviewResponseDto, UpdateReviewDto,
};
use crate::features::reviews::services::ReviewService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Create a review
#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewDto,
    responses(
        (status = 200, description = "Review created", body = ApiResponse<ReviewResponseDto>),
        (status = 400, description = "Validation error or unknown book/professional"),
        (status = 409, description = "Professional already reviewed this book")
    ),
    tag = "reviews"
)]
pub async fn create_review(
    State(service): State<Arc<ReviewService>>,
    AppJson(dto): AppJson<CreateReviewDto>,
) -> Result<Json<ApiResponse<ReviewResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let review = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(review), None, None)))
}

/// List reviews (paginated)
#[utoipa::path(
    get,
    path = "/api/reviews",
    params(ListReviewsQuery, PaginationQuery),
    responses(
        (status = 200, description = "List of reviews", body = ApiResponse<Vec<ReviewResponseDto>>),
    ),
    tag = "reviews"
)]
pub async fn list_reviews(
    State(service): State<Arc<ReviewService>>,
    Query(filter): Query<ListReviewsQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ReviewResponseDto>>>> {
    let (reviews, total) = service
        .list(&filter, pagination.offset(), pagination.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(reviews),
        None,
        Some(Meta { total }),
    )))
}

/// Get review by ID
#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review found", body = ApiResponse<ReviewResponseDto>),
        (status = 404, description = "Review not found")
    ),
    tag = "reviews"
)]
pub async fn get_review(
    State(service): State<Arc<ReviewService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReviewResponseDto>>> {
    let review = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(review), None, None)))
}

/// Update a review
#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review updated", body = ApiResponse<ReviewResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Review not found")
    ),
    tag = "reviews"
)]
pub async fn update_review(
    State(service): State<Arc<ReviewService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateReviewDto>,
) -> Result<Json<ApiResponse<ReviewResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let review = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(review), None, None)))
}

/// Delete a review
#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 404, description = "Review not found")
    ),
    tag = "reviews"
)]
pub async fn delete_review(
    State(service): State<Arc<ReviewService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Review deleted".to_string()),
        None,
    )))
}
