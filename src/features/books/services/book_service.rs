use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::books::dtos::{
    BookResponseDto, CreateBookDto, ListBooksQuery, UpdateBookDto,
};
use crate::features::books::models::Book;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::Category;

const BOOK_COLUMNS: &str =
    "id, title, author, isbn, year_published, publisher, cover_image, description";

/// Service for book catalog operations
pub struct BookService {
    pool: PgPool,
}

impl BookService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a book with an optional set of categories
    pub async fn create(&self, dto: CreateBookDto) -> Result<BookResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        Self::ensure_categories_exist(&mut tx, &dto.category_ids).await?;

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO books (title, author, isbn, year_published, publisher, cover_image, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.author)
        .bind(&dto.isbn)
        .bind(dto.year_published)
        .bind(&dto.publisher)
        .bind(&dto.cover_image)
        .bind(&dto.description)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert book: {:?}", e);
            AppError::Database(e)
        })?;

        if !dto.category_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO book_categories (book_id, category_id)
                SELECT $1, unnest($2::uuid[])
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(id)
            .bind(&dto.category_ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to associate categories: {:?}", e);
                AppError::Database(e)
            })?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!("Book created: id={}, title={}", id, dto.title);

        self.get_by_id(id).await
    }

    /// List books with optional search and category filter
    pub async fn list(
        &self,
        filter: &ListBooksQuery,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<BookResponseDto>, i64)> {
        let mut count_builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM books b");
        Self::push_filters(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count books: {:?}", e);
                AppError::Database(e)
            })?;

        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT b.id, b.title, b.author, b.isbn, b.year_published, b.publisher, b.cover_image, b.description FROM books b",
        );
        Self::push_filters(&mut builder, filter);
        builder
            .push(" ORDER BY b.title OFFSET ")
            .push_bind(offset)
            .push(" LIMIT ")
            .push_bind(limit);

        let books: Vec<Book> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list books: {:?}", e);
                AppError::Database(e)
            })?;

        let mut items = Vec::with_capacity(books.len());
        for book in books {
            let categories = self.get_book_categories(book.id).await?;
            items.push(BookResponseDto::from_book(book, categories));
        }

        Ok((items, total))
    }

    /// Get book by ID with its categories
    pub async fn get_by_id(&self, id: Uuid) -> Result<BookResponseDto> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE id = $1",
            BOOK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get book: {:?}", e);
            AppError::Database(e)
        })?;

        let book = book.ok_or_else(|| AppError::NotFound(format!("Book '{}' not found", id)))?;
        let categories = self.get_book_categories(book.id).await?;

        Ok(BookResponseDto::from_book(book, categories))
    }

    /// Update a book. When `category_ids` is present, the whole category
    /// set is replaced inside the same transaction.
    pub async fn update(&self, id: Uuid, dto: UpdateBookDto) -> Result<BookResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let updated = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE books
            SET title = COALESCE($2, title),
                author = COALESCE($3, author),
                isbn = COALESCE($4, isbn),
                year_published = COALESCE($5, year_published),
                publisher = COALESCE($6, publisher),
                cover_image = COALESCE($7, cover_image),
                description = COALESCE($8, description)
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&dto.title)
        .bind(&dto.author)
        .bind(&dto.isbn)
        .bind(dto.year_published)
        .bind(&dto.publisher)
        .bind(&dto.cover_image)
        .bind(&dto.description)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update book: {:?}", e);
            AppError::Database(e)
        })?;

        if updated.is_none() {
            return Err(AppError::NotFound(format!("Book '{}' not found", id)));
        }

        if let Some(category_ids) = &dto.category_ids {
            Self::ensure_categories_exist(&mut tx, category_ids).await?;

            sqlx::query("DELETE FROM book_categories WHERE book_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to clear categories: {:?}", e);
                    AppError::Database(e)
                })?;

            if !category_ids.is_empty() {
                sqlx::query(
                    r#"
                    INSERT INTO book_categories (book_id, category_id)
                    SELECT $1, unnest($2::uuid[])
                    ON CONFLICT DO NOTHING
                    "#,
                )
                .bind(id)
                .bind(category_ids)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to associate categories: {:?}", e);
                    AppError::Database(e)
                })?;
            }
        }

        tx.commit().await.map_err(AppError::Database)?;

        self.get_by_id(id).await
    }

    /// Delete a book. Reviews and category/saved-book associations cascade
    /// with it.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete book: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book '{}' not found", id)));
        }

        tracing::info!("Book deleted: id={}", id);

        Ok(())
    }

    async fn get_book_categories(&self, book_id: Uuid) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT c.id, c.name, c.description
            FROM categories c
            JOIN book_categories bc ON bc.category_id = c.id
            WHERE bc.book_id = $1
            ORDER BY c.name
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load book categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    async fn ensure_categories_exist(
        tx: &mut sqlx::Transaction<'_, Postgres>,
        category_ids: &[Uuid],
    ) -> Result<()> {
        if category_ids.is_empty() {
            return Ok(());
        }

        let known: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE id = ANY($1::uuid[])")
                .bind(category_ids)
                .fetch_one(&mut **tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check categories: {:?}", e);
                    AppError::Database(e)
                })?;

        let distinct: std::collections::HashSet<&Uuid> = category_ids.iter().collect();
        if known != distinct.len() as i64 {
            return Err(AppError::ReferentialIntegrity(
                "One or more categories do not exist".to_string(),
            ));
        }

        Ok(())
    }

    fn push_filters<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ListBooksQuery) {
        let mut prefix = " WHERE ";

        if let Some(q) = filter.q.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", q.trim());
            builder
                .push(prefix)
                .push("(b.title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR b.author ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR b.isbn ILIKE ")
                .push_bind(pattern)
                .push(")");
            prefix = " AND ";
        }

        if let Some(category_id) = filter.category_id {
            builder
                .push(prefix)
                .push("EXISTS (SELECT 1 FROM book_categories bc WHERE bc.book_id = b.id AND bc.category_id = ")
                .push_bind(category_id)
                .push(")");
        }
    }
}
