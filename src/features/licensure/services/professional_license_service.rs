use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::licensure::dtos::{
    CreateProfessionalLicenseDto, ListProfessionalLicensesQuery, ProfessionalLicenseResponseDto,
    UpdateProfessionalLicenseDto,
};
use crate::features::licensure::models::ProfessionalLicenseWithContext;

const JOINED_COLUMNS: &str = "pl.id, pl.professional_id, \
     TRIM(u.first_name || ' ' || u.last_name) AS professional_name, \
     pl.license_id, l.license_type, pl.license_number, pl.expiration_date, \
     pl.issued_state, pl.issued_date, pl.is_verified";

const JOINED_FROM: &str = "FROM professional_licenses pl \
     JOIN licenses l ON l.id = pl.license_id \
     JOIN professionals p ON p.id = pl.professional_id \
     JOIN users u ON u.id = p.user_id";

/// Service for professional license records
pub struct ProfessionalLicenseService {
    pool: PgPool,
}

impl ProfessionalLicenseService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a license for a professional in a state.
    /// The (professional, license, issued_state) triple must be unique; the
    /// duplicate check, both referential checks and the insert share one
    /// transaction.
    pub async fn create(
        &self,
        dto: CreateProfessionalLicenseDto,
    ) -> Result<ProfessionalLicenseResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

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

        let license_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM licenses WHERE id = $1)")
                .bind(dto.license_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check license: {:?}", e);
                    AppError::Database(e)
                })?;

        if !license_exists {
            return Err(AppError::ReferentialIntegrity(format!(
                "License '{}' does not exist",
                dto.license_id
            )));
        }

        let duplicate: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM professional_licenses
                WHERE professional_id = $1 AND license_id = $2 AND issued_state = $3
            )
            "#,
        )
        .bind(dto.professional_id)
        .bind(dto.license_id)
        .bind(dto.issued_state)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check existing license record: {:?}", e);
            AppError::Database(e)
        })?;

        if duplicate {
            return Err(AppError::Conflict(format!(
                "Professional '{}' already registered license '{}' in {}",
                dto.professional_id, dto.license_id, dto.issued_state
            )));
        }

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO professional_licenses
                (professional_id, license_id, license_number, expiration_date, issued_state, issued_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(dto.professional_id)
        .bind(dto.license_id)
        .bind(&dto.license_number)
        .bind(dto.expiration_date)
        .bind(dto.issued_state)
        .bind(dto.issued_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert license record: {:?}", e);
            AppError::from_db(e, "A license record for this professional, license and state")
        })?;

        let record = sqlx::query_as::<_, ProfessionalLicenseWithContext>(&format!(
            "SELECT {} {} WHERE pl.id = $1",
            JOINED_COLUMNS, JOINED_FROM
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load created license record: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Professional license created: id={}, professional_id={}, state={}",
            record.id,
            record.professional_id,
            record.issued_state
        );

        Ok(record.into())
    }

    /// List license records with optional search and filters
    pub async fn list(
        &self,
        filter: &ListProfessionalLicensesQuery,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<ProfessionalLicenseResponseDto>, i64)> {
        let mut count_builder =
            QueryBuilder::<Postgres>::new(format!("SELECT COUNT(*) {}", JOINED_FROM));
        Self::push_filters(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count license records: {:?}", e);
                AppError::Database(e)
            })?;

        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {} {}", JOINED_COLUMNS, JOINED_FROM));
        Self::push_filters(&mut builder, filter);
        builder
            .push(" ORDER BY u.last_name, u.first_name, pl.issued_state OFFSET ")
            .push_bind(offset)
            .push(" LIMIT ")
            .push_bind(limit);

        let records: Vec<ProfessionalLicenseWithContext> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list license records: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((records.into_iter().map(|r| r.into()).collect(), total))
    }

    /// Get license record by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<ProfessionalLicenseResponseDto> {
        let record = sqlx::query_as::<_, ProfessionalLicenseWithContext>(&format!(
            "SELECT {} {} WHERE pl.id = $1",
            JOINED_COLUMNS, JOINED_FROM
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get license record: {:?}", e);
            AppError::Database(e)
        })?;

        record
            .map(|r| r.into())
            .ok_or_else(|| AppError::NotFound(format!("License record '{}' not found", id)))
    }

    /// Update a license record's number, dates or verification flag
    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateProfessionalLicenseDto,
    ) -> Result<ProfessionalLicenseResponseDto> {
        let updated = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE professional_licenses
            SET license_number = COALESCE($2, license_number),
                expiration_date = COALESCE($3, expiration_date),
                issued_date = COALESCE($4, issued_date),
                is_verified = COALESCE($5, is_verified)
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&dto.license_number)
        .bind(dto.expiration_date)
        .bind(dto.issued_date)
        .bind(dto.is_verified)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update license record: {:?}", e);
            AppError::Database(e)
        })?;

        if updated.is_none() {
            return Err(AppError::NotFound(format!(
                "License record '{}' not found",
                id
            )));
        }

        self.get_by_id(id).await
    }

    /// Delete a license record
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM professional_licenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete license record: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "License record '{}' not found",
                id
            )));
        }

        tracing::info!("Professional license deleted: id={}", id);

        Ok(())
    }

    fn push_filters<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        filter: &'a ListProfessionalLicensesQuery,
    ) {
        let mut prefix = " WHERE ";

        if let Some(q) = filter.q.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", q.trim());
            builder
                .push(prefix)
                .push("(pl.license_number ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR u.first_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR u.last_name ILIKE ")
                .push_bind(pattern)
                .push(")");
            prefix = " AND ";
        }

        if let Some(professional_id) = filter.professional_id {
            builder
                .push(prefix)
                .push("pl.professional_id = ")
                .push_bind(professional_id);
            prefix = " AND ";
        }

        if let Some(license_type) = filter.license_type {
            builder
                .push(prefix)
                .push("l.license_type = ")
                .push_bind(license_type);
            prefix = " AND ";
        }

        if let Some(issued_state) = filter.issued_state {
            builder
                .push(prefix)
                .push("pl.issued_state = ")
                .push_bind(issued_state);
            prefix = " AND ";
        }

        if let Some(is_verified) = filter.is_verified {
            builder
                .push(prefix)
                .push("pl.is_verified = ")
                .push_bind(is_verified);
        }
    }
}
