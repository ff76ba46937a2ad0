use sqlx::FromRow;
use uuid::Uuid;

/// Database model for client profile
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Client {
    pub id: Uuid,
    pub user_id: Uuid,
}

/// Client row joined with the owning user's account fields
#[derive(Debug, Clone, FromRow)]
pub struct ClientWithUser {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}
