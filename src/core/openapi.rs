use utoipa::{Modify, OpenApi};

use crate::features::books::{dtos as books_dtos, handlers as books_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::clients::{dtos as clients_dtos, handlers as clients_handlers};
use crate::features::licensure::{
    dtos as licensure_dtos, handlers as licensure_handlers, models as licensure_models,
};
use crate::features::professionals::{
    dtos as professionals_dtos, handlers as professionals_handlers,
};
use crate::features::reviews::{dtos as reviews_dtos, handlers as reviews_handlers};
use crate::features::users::{
    dtos as users_dtos, handlers as users_handlers, models as users_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users_handlers::create_user,
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::update_user,
        users_handlers::delete_user,
        // Professionals
        professionals_handlers::create_professional,
        professionals_handlers::list_professionals,
        professionals_handlers::get_professional,
        professionals_handlers::update_professional,
        professionals_handlers::delete_professional,
        professionals_handlers::list_saved_books,
        professionals_handlers::save_book,
        professionals_handlers::unsave_book,
        professionals_handlers::list_specialties,
        professionals_handlers::add_specialty,
        professionals_handlers::remove_specialty,
        // Clients
        clients_handlers::create_client,
        clients_handlers::list_clients,
        clients_handlers::get_client,
        clients_handlers::delete_client,
        clients_handlers::list_saved_books,
        clients_handlers::save_book,
        clients_handlers::unsave_book,
        // Categories
        categories_handlers::create_category,
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Books
        books_handlers::create_book,
        books_handlers::list_books,
        books_handlers::get_book,
        books_handlers::update_book,
        books_handlers::delete_book,
        // Reviews
        reviews_handlers::create_review,
        reviews_handlers::list_reviews,
        reviews_handlers::get_review,
        reviews_handlers::update_review,
        reviews_handlers::delete_review,
        // Licensure
        licensure_handlers::create_license,
        licensure_handlers::list_licenses,
        licensure_handlers::get_license,
        licensure_handlers::delete_license,
        licensure_handlers::create_professional_license,
        licensure_handlers::list_professional_licenses,
        licensure_handlers::get_professional_license,
        licensure_handlers::update_professional_license,
        licensure_handlers::delete_professional_license,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Users
            users_models::UserType,
            users_dtos::CreateUserDto,
            users_dtos::UpdateUserDto,
            users_dtos::UserResponseDto,
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            // Professionals
            professionals_dtos::CreateProfessionalDto,
            professionals_dtos::UpdateProfessionalDto,
            professionals_dtos::ProfessionalResponseDto,
            professionals_dtos::CreateSpecialtyDto,
            professionals_dtos::SpecialtyResponseDto,
            ApiResponse<professionals_dtos::ProfessionalResponseDto>,
            ApiResponse<Vec<professionals_dtos::ProfessionalResponseDto>>,
            ApiResponse<professionals_dtos::SpecialtyResponseDto>,
            ApiResponse<Vec<professionals_dtos::SpecialtyResponseDto>>,
            // Clients
            clients_dtos::CreateClientDto,
            clients_dtos::ClientResponseDto,
            ApiResponse<clients_dtos::ClientResponseDto>,
            ApiResponse<Vec<clients_dtos::ClientResponseDto>>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // Books
            books_dtos::CreateBookDto,
            books_dtos::UpdateBookDto,
            books_dtos::BookResponseDto,
            books_dtos::BookSummaryDto,
            ApiResponse<books_dtos::BookResponseDto>,
            ApiResponse<Vec<books_dtos::BookResponseDto>>,
            ApiResponse<Vec<books_dtos::BookSummaryDto>>,
            // Reviews
            reviews_dtos::CreateReviewDto,
            reviews_dtos::UpdateReviewDto,
            reviews_dtos::ReviewResponseDto,
            ApiResponse<reviews_dtos::ReviewResponseDto>,
            ApiResponse<Vec<reviews_dtos::ReviewResponseDto>>,
            // Licensure
            licensure_models::LicenseType,
            licensure_models::UsState,
            licensure_dtos::CreateLicenseDto,
            licensure_dtos::LicenseResponseDto,
            licensure_dtos::CreateProfessionalLicenseDto,
            licensure_dtos::UpdateProfessionalLicenseDto,
            licensure_dtos::ProfessionalLicenseResponseDto,
            ApiResponse<licensure_dtos::LicenseResponseDto>,
            ApiResponse<Vec<licensure_dtos::LicenseResponseDto>>,
            ApiResponse<licensure_dtos::ProfessionalLicenseResponseDto>,
            ApiResponse<Vec<licensure_dtos::ProfessionalLicenseResponseDto>>,
        )
    ),
    tags(
        (name = "users", description = "User account management"),
        (name = "professionals", description = "Professional profiles, saved books and specialties"),
        (name = "clients", description = "Client profiles and saved books"),
        (name = "categories", description = "Book categories"),
        (name = "books", description = "Book catalog"),
        (name = "reviews", description = "Professional book reviews"),
        (name = "licensure", description = "License types and per-state license records"),
    ),
    info(
        title = "Wisely API",
        version = "0.1.0",
        description = "API documentation for Wisely",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
