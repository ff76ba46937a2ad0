use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::licensure::models::{LicenseType, UsState};

/// Database model for a professional's per-state license record
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct ProfessionalLicense {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub license_id: Uuid,
    pub license_number: String,
    pub expiration_date: Option<NaiveDate>,
    pub issued_state: UsState,
    pub issued_date: Option<NaiveDate>,
    pub is_verified: bool,
}

/// License record joined with its license type and holder name
#[derive(Debug, Clone, FromRow)]
pub struct ProfessionalLicenseWithContext {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub professional_name: String,
    pub license_id: Uuid,
    pub license_type: LicenseType,
    pub license_number: String,
    pub expiration_date: Option<NaiveDate>,
    pub issued_state: UsState,
    pub issued_date: Option<NaiveDate>,
    pub is_verified: bool,
}
