use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::licensure::models::{LicenseType, ProfessionalLicenseWithContext, UsState};

/// Request DTO for registering a professional's license in a state
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProfessionalLicenseDto {
    pub professional_id: Uuid,

    pub license_id: Uuid,

    #[validate(length(min = 1, max = 50, message = "License number must be 1-50 characters"))]
    pub license_number: String,

    pub issued_state: UsState,

    pub expiration_date: Option<NaiveDate>,

    pub issued_date: Option<NaiveDate>,
}

/// Request DTO for updating a professional's license record
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfessionalLicenseDto {
    #[validate(length(min = 1, max = 50, message = "License number must be 1-50 characters"))]
    pub license_number: Option<String>,

    pub expiration_date: Option<NaiveDate>,

    pub issued_date: Option<NaiveDate>,

    pub is_verified: Option<bool>,
}

/// Response DTO for a professional's license record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfessionalLicenseResponseDto {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub professional_name: String,
    pub license_id: Uuid,
    pub license_type: LicenseType,
    pub license_number: String,
    pub issued_state: UsState,
    pub expiration_date: Option<NaiveDate>,
    pub issued_date: Option<NaiveDate>,
    pub is_verified: bool,
}

impl From<ProfessionalLicenseWithContext> for ProfessionalLicenseResponseDto {
    fn from(pl: ProfessionalLicenseWithContext) -> Self {
        Self {
            id: pl.id,
            professional_id: pl.professional_id,
            professional_name: pl.professional_name,
            license_id: pl.license_id,
            license_type: pl.license_type,
            license_number: pl.license_number,
            issued_state: pl.issued_state,
            expiration_date: pl.expiration_date,
            issued_date: pl.issued_date,
            is_verified: pl.is_verified,
        }
    }
}

/// Query params for listing professional license records
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListProfessionalLicensesQuery {
    /// Free-text search across license number and holder name
    pub q: Option<String>,

    /// Filter by professional
    pub professional_id: Option<Uuid>,

    /// Filter by license type
    pub license_type: Option<LicenseType>,

    /// Filter by issuing state
    pub issued_state: Option<UsState>,

    /// Filter by verification flag
    pub is_verified: Option<bool>,
}
