use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::reviews::models::ReviewWithContext;

/// Request DTO for creating a review
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReviewDto {
    pub book_id: Uuid,

    pub professional_id: Uuid,

    pub rating: i32,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
}

/// Request DTO for updating a review
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateReviewDto {
    pub rating: Option<i32>,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,
}

/// Response DTO for review
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponseDto {
    pub id: Uuid,
    pub book_id: Uuid,
    pub book_title: String,
    pub professional_id: Uuid,
    pub professional_name: String,
    pub rating: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReviewWithContext> for ReviewResponseDto {
    fn from(r: ReviewWithContext) -> Self {
        Self {
            id: r.id,
            book_id: r.book_id,
            book_title: r.book_title,
            professional_id: r.professional_id,
            professional_name: r.professional_name,
            rating: r.rating,
            content: r.content,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Query params for listing reviews
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListReviewsQuery {
    /// Filter by reviewed book
    pub book_id: Option<Uuid>,

    /// Filter by reviewing professional
    pub professional_id: Option<Uuid>,

    /// Filter by exact rating
    pub rating: Option<i32>,
}
