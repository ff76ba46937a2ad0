use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::books::dtos::BookSummaryDto;
use crate::features::books::models::Book;
use crate::features::clients::dtos::{ClientResponseDto, CreateClientDto, ListClientsQuery};
use crate::features::clients::models::ClientWithUser;
use crate::features::users::models::UserType;

const JOINED_COLUMNS: &str = "c.id, c.user_id, u.username, u.first_name, u.last_name";

/// Service for client profile operations
pub struct ClientService {
    pool: PgPool,
}

impl ClientService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a client profile for a user.
    /// The user must exist, must carry the `client` role, and must not
    /// already own a profile.
    pub async fn create(&self, dto: CreateClientDto) -> Result<ClientResponseDto> {
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

        if user_type != UserType::Client {
            return Err(AppError::Validation(format!(
                "User '{}' has role '{}'; a client profile requires role 'client'",
                dto.user_id, user_type
            )));
        }

        let already_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clients WHERE user_id = $1)")
                .bind(dto.user_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check existing profile: {:?}", e);
                    AppError::Database(e)
                })?;

        if already_exists {
            return Err(AppError::Conflict(format!(
                "User '{}' already has a client profile",
                dto.user_id
            )));
        }

        let id: Uuid = sqlx::query_scalar("INSERT INTO clients (user_id) VALUES ($1) RETURNING id")
            .bind(dto.user_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert client: {:?}", e);
                AppError::from_db(e, "A client profile for this user")
            })?;

        let client = sqlx::query_as::<_, ClientWithUser>(&format!(
            "SELECT {} FROM clients c JOIN users u ON u.id = c.user_id WHERE c.id = $1",
            JOINED_COLUMNS
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load created client: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!("Client created: id={}, user_id={}", client.id, client.user_id);

        Ok(client.into())
    }

    /// List clients with optional search
    pub async fn list(
        &self,
        filter: &ListClientsQuery,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<ClientResponseDto>, i64)> {
        let mut count_builder = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) FROM clients c JOIN users u ON u.id = c.user_id",
        );
        Self::push_filters(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count clients: {:?}", e);
                AppError::Database(e)
            })?;

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM clients c JOIN users u ON u.id = c.user_id",
            JOINED_COLUMNS
        ));
        Self::push_filters(&mut builder, filter);
        builder
            .push(" ORDER BY u.last_name, u.first_name OFFSET ")
            .push_bind(offset)
            .push(" LIMIT ")
            .push_bind(limit);

        let clients: Vec<ClientWithUser> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list clients: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((clients.into_iter().map(|c| c.into()).collect(), total))
    }

    /// Get client by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<ClientResponseDto> {
        let client = sqlx::query_as::<_, ClientWithUser>(&format!(
            "SELECT {} FROM clients c JOIN users u ON u.id = c.user_id WHERE c.id = $1",
            JOINED_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get client: {:?}", e);
            AppError::Database(e)
        })?;

        client
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Client '{}' not found", id)))
    }

    /// Delete a client profile; its saved-book rows cascade with it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete client: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Client '{}' not found", id)));
        }

        tracing::info!("Client deleted: id={}", id);

        Ok(())
    }

    // =========================================================================
    // SAVED BOOKS
    // =========================================================================

    /// Save a book to the client's reading list. Saving the same book twice
    /// is a no-op.
    pub async fn save_book(&self, client_id: Uuid, book_id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let client_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
                .bind(client_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check client: {:?}", e);
                    AppError::Database(e)
                })?;

        if !client_exists {
            return Err(AppError::NotFound(format!("Client '{}' not found", client_id)));
        }

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
            INSERT INTO client_saved_books (client_id, book_id)
            VALUES ($1, $2)
            ON CONFLICT (client_id, book_id) DO NOTHING
            "#,
        )
        .bind(client_id)
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

    /// Remove a book from the client's reading list
    pub async fn unsave_book(&self, client_id: Uuid, book_id: Uuid) -> Result<()> {
        let result =
            sqlx::query("DELETE FROM client_saved_books WHERE client_id = $1 AND book_id = $2")
                .bind(client_id)
                .bind(book_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to unsave book: {:?}", e);
                    AppError::Database(e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Book '{}' is not saved by client '{}'",
                book_id, client_id
            )));
        }

        Ok(())
    }

    /// List the client's saved books
    pub async fn list_saved_books(&self, client_id: Uuid) -> Result<Vec<BookSummaryDto>> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
            .bind(client_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check client: {:?}", e);
                AppError::Database(e)
            })?;

        if !exists {
            return Err(AppError::NotFound(format!("Client '{}' not found", client_id)));
        }

        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.id, b.title, b.author, b.isbn, b.year_published, b.publisher, b.cover_image, b.description
            FROM books b
            JOIN client_saved_books sb ON sb.book_id = b.id
            WHERE sb.client_id = $1
            ORDER BY b.title
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list saved books: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(books.into_iter().map(|b| b.into()).collect())
    }

    fn push_filters<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ListClientsQuery) {
        if let Some(q) = filter.q.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", q.trim());
            builder
                .push(" WHERE (u.username ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR u.first_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR u.last_name ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
    }
}
