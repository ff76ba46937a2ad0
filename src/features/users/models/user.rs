use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Account role enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "user_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Professional,
    Client,
    BusinessAdmin,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Professional => write!(f, "professional"),
            UserType::Client => write!(f, "client"),
            UserType::BusinessAdmin => write!(f, "business_admin"),
        }
    }
}

/// Database model for user account
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub user_type: UserType,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_display() {
        assert_eq!(UserType::Professional.to_string(), "professional");
        assert_eq!(UserType::Client.to_string(), "client");
        assert_eq!(UserType::BusinessAdmin.to_string(), "business_admin");
    }

    #[test]
    fn test_user_type_serde_round_trip() {
        let json = serde_json::to_string(&UserType::BusinessAdmin).unwrap();
        assert_eq!(json, "\"business_admin\"");
        let back: UserType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UserType::BusinessAdmin);
    }
}
