use sqlx::FromRow;
use uuid::Uuid;

/// Database model for book
#[derive(Debug, Clone, FromRow)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year_published: Option<i32>,
    pub publisher: String,
    pub cover_image: Option<String>,
    pub description: String,
}
