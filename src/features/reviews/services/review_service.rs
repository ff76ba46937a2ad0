use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reviews::dtos::{
    CreateReviewDto, ListReviewsQuery, ReviewResponseDto, UpdateReviewDto,
};
use crate::features::reviews::models::ReviewWithContext;

const JOINED_COLUMNS: &str = "r.id, r.book_id, b.title AS book_title, r.professional_id, \
     TRIM(u.first_name || ' ' || u.last_name) AS professional_name, \
     r.rating, r.content, r.created_at, r.updated_at";

const JOINED_FROM: &str = "FROM reviews r \
     JOIN books b ON b.id = r.book_id \
     JOIN professionals p ON p.id = r.professional_id \
     JOIN users u ON u.id = p.user_id";

/// Service for review operations
pub struct ReviewService {
    pool: PgPool,
}

impl ReviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a review. A professional may review a given book at most once;
    /// the duplicate check, both referential checks and the insert share one
    /// transaction.
    pub async fn create(&self, dto: CreateReviewDto) -> Result<ReviewResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let book_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(dto.book_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check book: {:?}", e);
                    AppError::Database(e)
                })?;

        if !book_exists {
            return Err(AppError::ReferentialIntegrity(format!(
                "Book '{}' does not exist",
                dto.book_id
            )));
        }

        let professional_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM professionals WHERE id = $1)")
                .bind(dto.professional_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check professional: {:?}", e);
                    AppError::Database(e)
                })?;

        if !professional_exists {
            return Err(AppError::ReferentialIntegrity(format!(
                "Professional '{}' does not exist",
                dto.professional_id
            )));
        }

        let duplicate: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM reviews WHERE book_id = $1 AND professional_id = $2)",
        )
        .bind(dto.book_id)
        .bind(dto.professional_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check existing review: {:?}", e);
            AppError::Database(e)
        })?;

        if duplicate {
            return Err(AppError::Conflict(format!(
                "Professional '{}' already reviewed book '{}'",
                dto.professional_id, dto.book_id
            )));
        }

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO reviews (book_id, professional_id, rating, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(dto.book_id)
        .bind(dto.professional_id)
        .bind(dto.rating)
        .bind(&dto.content)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert review: {:?}", e);
            AppError::from_db(e, "A review by this professional for this book")
        })?;

        let review = sqlx::query_as::<_, ReviewWithContext>(&format!(
            "SELECT {} {} WHERE r.id = $1",
            JOINED_COLUMNS, JOINED_FROM
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load created review: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Review created: id={}, book_id={}, professional_id={}",
            review.id,
            review.book_id,
            review.professional_id
        );

        Ok(review.into())
    }

    /// List reviews with optional filters
    pub async fn list(
        &self,
        filter: &ListReviewsQuery,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<ReviewResponseDto>, i64)> {
        let mut count_builder =
            QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) {}", JOINED_FROM));
        Self::push_filters(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count reviews: {:?}", e);
                AppError::Database(e)
            })?;

        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {} {}", JOINED_COLUMNS, JOINED_FROM));
        Self::push_filters(&mut builder, filter);
        builder
            .push(" ORDER BY r.created_at DESC OFFSET ")
            .push_bind(offset)
            .push(" LIMIT ")
            .push_bind(limit);

        let reviews: Vec<ReviewWithContext> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reviews: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((reviews.into_iter().map(|r| r.into()).collect(), total))
    }

    /// Get review by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<ReviewResponseDto> {
        let review = sqlx::query_as::<_, ReviewWithContext>(&format!(
            "SELECT {} {} WHERE r.id = $1",
            JOINED_COLUMNS, JOINED_FROM
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get review: {:?}", e);
            AppError::Database(e)
        })?;

        review
            .map(|r| r.into())
            .ok_or_else(|| AppError::NotFound(format!("Review '{}' not found", id)))
    }

    /// Update a review's rating or content. Every save refreshes `updated_at`.
    pub async fn update(&self, id: Uuid, dto: UpdateReviewDto) -> Result<ReviewResponseDto> {
        let updated = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE reviews
            SET rating = COALESCE($2, rating),
                content = COALESCE($3, content),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(dto.rating)
        .bind(&dto.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update review: {:?}", e);
            AppError::Database(e)
        })?;

        if updated.is_none() {
            return Err(AppError::NotFound(format!("Review '{}' not found", id)));
        }

        self.get_by_id(id).await
    }

    /// Delete a review
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete review: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Review '{}' not found", id)));
        }

        tracing::info!("Review deleted: id={}", id);

        Ok(())
    }

    fn push_filters<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ListReviewsQuery) {
        let mut prefix = " WHERE ";

        if let Some(book_id) = filter.book_id {
            builder.push(prefix).push("r.book_id = ").push_bind(book_id);
            prefix = " AND ";
        }

        if let Some(professional_id) = filter.professional_id {
            builder
                .push(prefix)
                .push("r.professional_id = ")
                .push_bind(professional_id);
            prefix = " AND ";
        }

        if let Some(rating) = filter.rating {
            builder.push(prefix).push("r.rating = ").push_bind(rating);
        }
    }
}
