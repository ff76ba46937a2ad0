use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::clients::models::ClientWithUser;

/// Request DTO for creating a client profile
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateClientDto {
    /// Owning user account; its role must be `client`
    pub user_id: Uuid,
}

/// Response DTO for client profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientResponseDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<ClientWithUser> for ClientResponseDto {
    fn from(c: ClientWithUser) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            username: c.username,
            first_name: c.first_name,
            last_name: c.last_name,
        }
    }
}

/// Query params for listing clients
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListClientsQuery {
    /// Free-text search across username, first name and last name
    pub q: Option<String>,
}
