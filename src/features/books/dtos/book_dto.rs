use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::books::models::Book;
use crate::features::categories::dtos::CategoryResponseDto;

/// Request DTO for creating a book
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBookDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Author must be 1-255 characters"))]
    pub author: String,

    #[validate(length(max = 20, message = "ISBN must not exceed 20 characters"))]
    #[serde(default)]
    pub isbn: String,

    pub year_published: Option<i32>,

    #[validate(length(max = 255, message = "Publisher must not exceed 255 characters"))]
    #[serde(default)]
    pub publisher: String,

    /// Opaque storage reference for the cover image
    pub cover_image: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Categories to associate with the book; may be empty
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
}

/// Request DTO for updating a book
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBookDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Author must be 1-255 characters"))]
    pub author: Option<String>,

    #[validate(length(max = 20, message = "ISBN must not exceed 20 characters"))]
    pub isbn: Option<String>,

    pub year_published: Option<i32>,

    #[validate(length(max = 255, message = "Publisher must not exceed 255 characters"))]
    pub publisher: Option<String>,

    pub cover_image: Option<String>,

    pub description: Option<String>,

    /// When present, replaces the book's whole category set
    pub category_ids: Option<Vec<Uuid>>,
}

/// Response DTO for book with its categories
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookResponseDto {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year_published: Option<i32>,
    pub publisher: String,
    pub cover_image: Option<String>,
    pub description: String,
    pub categories: Vec<CategoryResponseDto>,
}

impl BookResponseDto {
    pub fn from_book(book: Book, categories: Vec<CategoryResponseDto>) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            year_published: book.year_published,
            publisher: book.publisher,
            cover_image: book.cover_image,
            description: book.description,
            categories,
        }
    }
}

/// Compact book DTO for embedded lists (saved books)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookSummaryDto {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year_published: Option<i32>,
    pub publisher: String,
    pub cover_image: Option<String>,
    pub description: String,
}

impl From<Book> for BookSummaryDto {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
            isbn: b.isbn,
            year_published: b.year_published,
            publisher: b.publisher,
            cover_image: b.cover_image,
            description: b.description,
        }
    }
}

/// Query params for listing books
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListBooksQuery {
    /// Free-text search across title, author and ISBN
    pub q: Option<String>,

    /// Filter by associated category
    pub category_id: Option<Uuid>,
}
