use sqlx::FromRow;
use uuid::Uuid;

/// Database model for book category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}
