use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::books::dtos::BookSummaryDto;
use crate::features::books::models::Book;
use crate::features::professionals::dtos::{
    CreateProfessionalDto, CreateSpecialtyDto, ListProfessionalsQuery, ProfessionalResponseDto,
    SpecialtyResponseDto, UpdateProfessionalDto,
};
use crate::features::professionals::models::{ProfessionalWithUser, SpecialtyWithCategory};
use crate::features::users::models::UserType;

const JOINED_COLUMNS: &str = "p.id, p.user_id, p.bio, p.is_active, p.has_openings, \
     p.last_active, p.profile_image, p.contact_email, p.contact_phone, \
     u.username, u.first_name, u.last_name";

const SPECIALTY_COLUMNS: &str =
    "s.id, s.professional_id, s.category_id, c.name AS category_name, s.description";

/// Service for professional profile operations
pub struct ProfessionalService {
    pool: PgPool,
}

impl ProfessionalService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a professional profile for a user.
    /// The user must exist, must carry the `professional` role, and must not
    /// already own a profile. All checks and the insert run in one transaction.
    pub async fn create(&self, dto: CreateProfessionalDto) -> Result<ProfessionalResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let user_type: Option<UserType> =
            sqlx::query_scalar("SELECT user_type FROM users WHERE id = $1")
                .bind(dto.user_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to look up user: {:?}", e);
                    AppError::Database(e)
                })?;

        let user_type = user_type.ok_or_else(|| {
            AppError::ReferentialIntegrity(format!("User '{}' does not exist", dto.user_id))
        })?;

        if user_type != UserType::Professional {
            return Err(AppError::Validation(format!(
                "User '{}' has role '{}'; a professional profile requires role 'professional'",
                dto.user_id, user_type
            )));
        }

        let already_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM professionals WHERE user_id = $1)")
                .bind(dto.user_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check existing profile: {:?}", e);
                    AppError::Database(e)
                })?;

        if already_exists {
            return Err(AppError::Conflict(format!(
                "User '{}' already has a professional profile",
                dto.user_id
            )));
        }

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO professionals (user_id, bio, has_openings, profile_image, contact_email, contact_phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(dto.user_id)
        .bind(&dto.bio)
        .bind(dto.has_openings)
        .bind(&dto.profile_image)
        .bind(&dto.contact_email)
        .bind(&dto.contact_phone)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert professional: {:?}", e);
            AppError::from_db(e, "A professional profile for this user")
        })?;

        let professional = sqlx::query_as::<_, ProfessionalWithUser>(&format!(
            "SELECT {} FROM professionals p JOIN users u ON u.id = p.user_id WHERE p.id = $1",
            JOINED_COLUMNS
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load created professional: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Professional created: id={}, user_id={}",
            professional.id,
            professional.user_id
        );

        Ok(professional.into())
    }

    /// List professionals with optional search and boolean filters
    pub async fn list(
        &self,
        filter: &ListProfessionalsQuery,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<ProfessionalResponseDto>, i64)> {
        let mut count_builder = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) FROM professionals p JOIN users u ON u.id = p.user_id",
        );
        Self::push_filters(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count professionals: {:?}", e);
                AppError::Database(e)
            })?;

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM professionals p JOIN users u ON u.id = p.user_id",
            JOINED_COLUMNS
        ));
        Self::push_filters(&mut builder, filter);
        builder
            .push(" ORDER BY u.last_name, u.first_name OFFSET ")
            .push_bind(offset)
            .push(" LIMIT ")
            .push_bind(limit);

        let professionals: Vec<ProfessionalWithUser> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list professionals: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((
            professionals.into_iter().map(|p| p.into()).collect(),
            total,
        ))
    }

    /// Get professional by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<ProfessionalResponseDto> {
        let professional = sqlx::query_as::<_, ProfessionalWithUser>(&format!(
            "SELECT {} FROM professionals p JOIN users u ON u.id = p.user_id WHERE p.id = $1",
            JOINED_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get professional: {:?}", e);
            AppError::Database(e)
        })?;

        professional
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(format!("Professional '{}' not found", id)))
    }

    /// Update a professional profile. Every save refreshes `last_active`.
    pub async fn update(&self, id: Uuid, dto: UpdateProfessionalDto) -> Result<ProfessionalResponseDto> {
        let updated = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE professionals
            SET bio = COALESCE($2, bio),
                is_active = COALESCE($3, is_active),
                has_openings = COALESCE($4, has_openings),
                profile_image = COALESCE($5, profile_image),
                contact_email = COALESCE($6, contact_email),
                contact_phone = COALESCE($7, contact_phone),
                last_active = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&dto.bio)
        .bind(dto.is_active)
        .bind(dto.has_openings)
        .bind(&dto.profile_image)
        .bind(&dto.contact_email)
        .bind(&dto.contact_phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update professional: {:?}", e);
            AppError::Database(e)
        })?;

        if updated.is_none() {
            return Err(AppError::NotFound(format!(
                "Professional '{}' not found",
                id
            )));
        }

        self.get_by_id(id).await
    }

    /// Delete a professional profile. Reviews, licenses, specialties and
    /// saved-book rows cascade with it.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM professionals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete professional: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Professional '{}' not found",
                id
            )));
        }

        tracing::info!("Professional deleted: id={}", id);

        Ok(())
    }

    // =========================================================================
    // SAVED BOOKS
    // =========================================================================

    /// Save a book to the professional's reading list. Saving the same book
    /// twice is a no-op.
    pub async fn save_book(&self, professional_id: Uuid, book_id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        self.ensure_professional_exists(&mut tx, professional_id)
            .await?;

        let book_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(book_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check book: {:?}", e);
                    AppError::Database(e)
                })?;

        if !book_exists {
            return Err(AppError::ReferentialIntegrity(format!(
                "Book '{}' does not exist",
                book_id
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO professional_saved_books (professional_id, book_id)
            VALUES ($1, $2)
            ON CONFLICT (professional_id, book_id) DO NOTHING
            "#,
        )
        .bind(professional_id)
        .bind(book_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save book: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(AppError::Database)?;

        Ok(())
    }

    /// Remove a book from the professional's reading list
    pub async fn unsave_book(&self, professional_id: Uuid, book_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "DELETE FROM professional_saved_books WHERE professional_id = $1 AND book_id = $2",
        )
        .bind(professional_id)
        .bind(book_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to unsave book: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Book '{}' is not saved by professional '{}'",
                book_id, professional_id
            )));
        }

        Ok(())
    }

    /// List the professional's saved books
    pub async fn list_saved_books(&self, professional_id: Uuid) -> Result<Vec<BookSummaryDto>> {
        self.check_professional_exists(professional_id).await?;

        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.id, b.title, b.author, b.isbn, b.year_published, b.publisher, b.cover_image, b.description
            FROM books b
            JOIN professional_saved_books sb ON sb.book_id = b.id
            WHERE sb.professional_id = $1
            ORDER BY b.title
            "#,
        )
        .bind(professional_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list saved books: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(books.into_iter().map(|b| b.into()).collect())
    }

    // =========================================================================
    // SPECIALTIES
    // =========================================================================

    /// Add a specialty row. Duplicate category rows are allowed.
    pub async fn add_specialty(
        &self,
        professional_id: Uuid,
        dto: CreateSpecialtyDto,
    ) -> Result<SpecialtyResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        self.ensure_professional_exists(&mut tx, professional_id)
            .await?;

        let category_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(dto.category_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check category: {:?}", e);
                    AppError::Database(e)
                })?;

        if !category_exists {
            return Err(AppError::ReferentialIntegrity(format!(
                "Category '{}' does not exist",
                dto.category_id
            )));
        }

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO professional_specialties (professional_id, category_id, description)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(professional_id)
        .bind(dto.category_id)
        .bind(&dto.description)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert specialty: {:?}", e);
            AppError::Database(e)
        })?;

        let specialty = sqlx::query_as::<_, SpecialtyWithCategory>(&format!(
            "SELECT {} FROM professional_specialties s JOIN categories c ON c.id = s.category_id WHERE s.id = $1",
            SPECIALTY_COLUMNS
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load created specialty: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(AppError::Database)?;

        Ok(specialty.into())
    }

    /// List the professional's specialties
    pub async fn list_specialties(
        &self,
        professional_id: Uuid,
    ) -> Result<Vec<SpecialtyResponseDto>> {
        self.check_professional_exists(professional_id).await?;

        let specialties = sqlx::query_as::<_, SpecialtyWithCategory>(&format!(
            r#"
            SELECT {}
            FROM professional_specialties s
            JOIN categories c ON c.id = s.category_id
            WHERE s.professional_id = $1
            ORDER BY c.name
            "#,
            SPECIALTY_COLUMNS
        ))
        .bind(professional_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list specialties: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(specialties.into_iter().map(|s| s.into()).collect())
    }

    /// Remove a specialty row from a professional
    pub async fn remove_specialty(&self, professional_id: Uuid, specialty_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            "DELETE FROM professional_specialties WHERE id = $1 AND professional_id = $2",
        )
        .bind(specialty_id)
        .bind(professional_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to remove specialty: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Specialty '{}' not found for professional '{}'",
                specialty_id, professional_id
            )));
        }

        Ok(())
    }

    async fn ensure_professional_exists(
        &self,
        tx: &mut sqlx::Transaction<'_, Postgres>,
        professional_id: Uuid,
    ) -> Result<()> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM professionals WHERE id = $1)")
                .bind(professional_id)
                .fetch_one(&mut **tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check professional: {:?}", e);
                    AppError::Database(e)
                })?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "Professional '{}' not found",
                professional_id
            )));
        }

        Ok(())
    }

    async fn check_professional_exists(&self, professional_id: Uuid) -> Result<()> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM professionals WHERE id = $1)")
                .bind(professional_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check professional: {:?}", e);
                    AppError::Database(e)
                })?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "Professional '{}' not found",
                professional_id
            )));
        }

        Ok(())
    }

    fn push_filters<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        filter: &'a ListProfessionalsQuery,
    ) {
        let mut prefix = " WHERE ";

        if let Some(q) = filter.q.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", q.trim());
            builder
                .push(prefix)
                .push("(u.username ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR u.first_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR u.last_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR p.bio ILIKE ")
                .push_bind(pattern)
                .push(")");
            prefix = " AND ";
        }

        if let Some(is_active) = filter.is_active {
            builder.push(prefix).push("p.is_active = ").push_bind(is_active);
            prefix = " AND ";
        }

        if let Some(has_openings) = filter.has_openings {
            builder
                .push(prefix)
                .push("p.has_openings = ")
                .push_bind(has_openings);
        }
    }
}
