use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{CreateUserDto, ListUsersQuery, UpdateUserDto, UserResponseDto};
use crate::features::users::models::User;

const USER_COLUMNS: &str = "id, username, first_name, last_name, email, user_type, created_at";

/// Service for user account operations
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a user account
    pub async fn create(&self, dto: CreateUserDto) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (username, first_name, last_name, email, user_type)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(&dto.username)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(dto.user_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert user: {:?}", e);
            AppError::from_db(e, "A user with this username")
        })?;

        tracing::info!("User created: id={}, username={}", user.id, user.username);

        Ok(user.into())
    }

    /// List users with optional search and role filter
    pub async fn list(
        &self,
        filter: &ListUsersQuery,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<UserResponseDto>, i64)> {
        let mut count_builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM users");
        Self::push_filters(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count users: {:?}", e);
                AppError::Database(e)
            })?;

        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {} FROM users", USER_COLUMNS));
        Self::push_filters(&mut builder, filter);
        builder
            .push(" ORDER BY created_at DESC OFFSET ")
            .push_bind(offset)
            .push(" LIMIT ")
            .push_bind(limit);

        let users: Vec<User> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list users: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((users.into_iter().map(|u| u.into()).collect(), total))
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user: {:?}", e);
            AppError::Database(e)
        })?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))
    }

    /// Update mutable user fields. Username and creation time never change.
    pub async fn update(&self, id: Uuid, dto: UpdateUserDto) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email)
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update user: {:?}", e);
            AppError::Database(e)
        })?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))
    }

    /// Delete a user. Foreign keys cascade the delete to the professional or
    /// client profile and transitively to its reviews, licenses, specialties
    /// and saved-book rows in one atomic statement.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete user: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User '{}' not found", id)));
        }

        tracing::info!("User deleted: id={}", id);

        Ok(())
    }

    fn push_filters<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ListUsersQuery) {
        let mut prefix = " WHERE ";

        if let Some(q) = filter.q.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", q.trim());
            builder
                .push(prefix)
                .push("(username ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR first_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR last_name ILIKE ")
                .push_bind(pattern)
                .push(")");
            prefix = " AND ";
        }

        if let Some(user_type) = filter.user_type {
            builder.push(prefix).push("user_type = ").push_bind(user_type);
        }
    }
}
