use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for book review
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Review {
    pub id: Uuid,
    pub book_id: Uuid,
    pub professional_id: Uuid,
    pub rating: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review row joined with its book title and reviewer name
#[derive(Debug, Clone, FromRow)]
pub struct ReviewWithContext {
    pub id: Uuid,
    pub book_id: Uuid,
    pub book_title: String,
    pub professional_id: Uuid,
    pub professional_name: String,
    pub rating: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
