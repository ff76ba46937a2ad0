use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for professional profile
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Professional {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: String,
    pub is_active: bool,
    pub has_openings: bool,
    pub last_active: DateTime<Utc>,
    pub profile_image: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// Professional row joined with the owning user's account fields
#[derive(Debug, Clone, FromRow)]
pub struct ProfessionalWithUser {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: String,
    pub is_active: bool,
    pub has_openings: bool,
    pub last_active: DateTime<Utc>,
    pub profile_image: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}
