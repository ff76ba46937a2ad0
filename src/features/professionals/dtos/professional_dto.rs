use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::professionals::models::ProfessionalWithUser;

/// Request DTO for creating a professional profile
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProfessionalDto {
    /// Owning user account; its role must be `professional`
    pub user_id: Uuid,

    #[validate(length(min = 1, message = "Bio must not be empty"))]
    pub bio: String,

    #[serde(default)]
    pub has_openings: bool,

    /// Opaque storage reference for the profile image
    pub profile_image: Option<String>,

    #[validate(email(message = "Invalid contact email format"))]
    pub contact_email: Option<String>,

    #[validate(length(max = 20, message = "Contact phone must not exceed 20 characters"))]
    pub contact_phone: Option<String>,
}

/// Request DTO for updating a professional profile
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfessionalDto {
    #[validate(length(min = 1, message = "Bio must not be empty"))]
    pub bio: Option<String>,

    pub is_active: Option<bool>,

    pub has_openings: Option<bool>,

    pub profile_image: Option<String>,

    #[validate(email(message = "Invalid contact email format"))]
    pub contact_email: Option<String>,

    #[validate(length(max = 20, message = "Contact phone must not exceed 20 characters"))]
    pub contact_phone: Option<String>,
}

/// Response DTO for professional profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfessionalResponseDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub is_active: bool,
    pub has_openings: bool,
    pub last_active: DateTime<Utc>,
    pub profile_image: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

impl From<ProfessionalWithUser> for ProfessionalResponseDto {
    fn from(p: ProfessionalWithUser) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            username: p.username,
            first_name: p.first_name,
            last_name: p.last_name,
            bio: p.bio,
            is_active: p.is_active,
            has_openings: p.has_openings,
            last_active: p.last_active,
            profile_image: p.profile_image,
            contact_email: p.contact_email,
            contact_phone: p.contact_phone,
        }
    }
}

/// Query params for listing professionals
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListProfessionalsQuery {
    /// Free-text search across username, first name, last name and bio
    pub q: Option<String>,

    /// Filter by active status
    pub is_active: Option<bool>,

    /// Filter by openings availability
    pub has_openings: Option<bool>,
}
