use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a professional's specialty in a category.
/// A professional may hold several rows for the same category.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct ProfessionalSpecialty {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub category_id: Uuid,
    pub description: String,
}

/// Specialty row joined with its category name
#[derive(Debug, Clone, FromRow)]
pub struct SpecialtyWithCategory {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub description: String,
}
