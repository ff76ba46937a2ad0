use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::licensure::dtos::{CreateLicenseDto, LicenseResponseDto};
use crate::features::licensure::models::License;

/// Service for license type registrations
pub struct LicenseService {
    pool: PgPool,
}

impl LicenseService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a license type
    pub async fn create(&self, dto: CreateLicenseDto) -> Result<LicenseResponseDto> {
        let license = sqlx::query_as::<_, License>(
            "INSERT INTO licenses (license_type) VALUES ($1) RETURNING id, license_type",
        )
        .bind(dto.license_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert license: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "License created: id={}, license_type={}",
            license.id,
            license.license_type
        );

        Ok(license.into())
    }

    /// List registered license types
    pub async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<LicenseResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM licenses")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count licenses: {:?}", e);
                AppError::Database(e)
            })?;

        let licenses = sqlx::query_as::<_, License>(
            "SELECT id, license_type FROM licenses ORDER BY license_type OFFSET $1 LIMIT $2",
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list licenses: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((licenses.into_iter().map(|l| l.into()).collect(), total))
    }

    /// Get license by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<LicenseResponseDto> {
        let license =
            sqlx::query_as::<_, License>("SELECT id, license_type FROM licenses WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to get license: {:?}", e);
                    AppError::Database(e)
                })?;

        license
            .map(|l| l.into())
            .ok_or_else(|| AppError::NotFound(format!("License '{}' not found", id)))
    }

    /// Delete a license type registration. Professional license records
    /// referencing it cascade away.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM licenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete license: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("License '{}' not found", id)));
        }

        tracing::info!("License deleted: id={}", id);

        Ok(())
    }
}
