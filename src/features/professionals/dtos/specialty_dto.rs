use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::professionals::models::SpecialtyWithCategory;

/// Request DTO for adding a specialty to a professional
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSpecialtyDto {
    pub category_id: Uuid,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    #[serde(default)]
    pub description: String,
}

/// Response DTO for a professional's specialty
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SpecialtyResponseDto {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub description: String,
}

impl From<SpecialtyWithCategory> for SpecialtyResponseDto {
    fn from(s: SpecialtyWithCategory) -> Self {
        Self {
            id: s.id,
            professional_id: s.professional_id,
            category_id: s.category_id,
            category_name: s.category_name,
            description: s.description,
        }
    }
}
