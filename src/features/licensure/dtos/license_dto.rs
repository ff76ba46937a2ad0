use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::licensure::models::{License, LicenseType};

/// Request DTO for registering a license type
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLicenseDto {
    pub license_type: LicenseType,
}

/// Response DTO for license type with its derived catalog texts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LicenseResponseDto {
    pub id: Uuid,
    pub license_type: LicenseType,
    pub display_name: String,
    pub requirements: String,
    pub description: String,
}

impl From<License> for LicenseResponseDto {
    fn from(l: License) -> Self {
        Self {
            id: l.id,
            license_type: l.license_type,
            display_name: l.license_type.display_name().to_string(),
            requirements: l.license_type.requirements().to_string(),
            description: l.license_type.description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_embeds_catalog_texts() {
        let dto: LicenseResponseDto = License {
            id: Uuid::nil(),
            license_type: LicenseType::Lcsw,
        }
        .into();

        assert_eq!(dto.display_name, "Licensed Clinical Social Worker");
        assert!(dto.requirements.starts_with("A licensed clinical social worker"));
        assert!(!dto.description.is_empty());
    }
}
