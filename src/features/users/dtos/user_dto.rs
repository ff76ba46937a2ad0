use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::{User, UserType};
use crate::shared::validation::USERNAME_REGEX;

/// Request DTO for creating a user account
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(
        length(min = 1, max = 150, message = "Username must be 1-150 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username must start with a letter or underscore and contain only letters, digits and underscores"
        )
    )]
    pub username: String,

    #[validate(length(max = 150, message = "First name must not exceed 150 characters"))]
    #[serde(default)]
    pub first_name: String,

    #[validate(length(max = 150, message = "Last name must not exceed 150 characters"))]
    #[serde(default)]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub user_type: UserType,
}

/// Request DTO for updating a user account.
/// `username`, `user_type` and `created_at` are immutable after creation.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(max = 150, message = "First name must not exceed 150 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 150, message = "Last name must not exceed 150 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

/// Response DTO for user account
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            user_type: u.user_type,
            created_at: u.created_at,
        }
    }
}

/// Query params for listing users
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListUsersQuery {
    /// Free-text search across username, first name and last name
    pub q: Option<String>,

    /// Filter by account role
    pub user_type: Option<UserType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_dto_valid() {
        let dto = CreateUserDto {
            username: "jdoe".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: Some("jane@example.com".to_string()),
            user_type: UserType::Professional,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_user_dto_rejects_bad_username() {
        let dto = CreateUserDto {
            username: "123 not a username".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: None,
            user_type: UserType::Client,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_user_dto_rejects_bad_email() {
        let dto = CreateUserDto {
            username: "jdoe".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: Some("not-an-email".to_string()),
            user_type: UserType::Client,
        };
        assert!(dto.validate().is_err());
    }
}
