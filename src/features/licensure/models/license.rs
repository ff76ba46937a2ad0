use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::licensure::catalog;

/// License type enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "license_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LicenseType {
    Lcsw,
    Lmsw,
    Lmft,
    Lpc,
    Lmhc,
    Psychologist,
    Psychiatrist,
    Lpcc,
    Cadc,
}

impl LicenseType {
    pub const ALL: [LicenseType; 9] = [
        LicenseType::Lcsw,
        LicenseType::Lmsw,
        LicenseType::Lmft,
        LicenseType::Lpc,
        LicenseType::Lmhc,
        LicenseType::Psychologist,
        LicenseType::Psychiatrist,
        LicenseType::Lpcc,
        LicenseType::Cadc,
    ];

    /// Wire code as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseType::Lcsw => "lcsw",
            LicenseType::Lmsw => "lmsw",
            LicenseType::Lmft => "lmft",
            LicenseType::Lpc => "lpc",
            LicenseType::Lmhc => "lmhc",
            LicenseType::Psychologist => "psychologist",
            LicenseType::Psychiatrist => "psychiatrist",
            LicenseType::Lpcc => "lpcc",
            LicenseType::Cadc => "cadc",
        }
    }

    /// Human-readable title of the license type
    pub fn display_name(&self) -> &'static str {
        match self {
            LicenseType::Lcsw => "Licensed Clinical Social Worker",
            LicenseType::Lmsw => "Licensed Master Social Worker",
            LicenseType::Lmft => "Licensed Marriage and Family Therapist",
            LicenseType::Lpc => "Licensed Professional Counselor",
            LicenseType::Lmhc => "Licensed Mental Health Counselor",
            LicenseType::Psychologist => "Licensed Psychologist",
            LicenseType::Psychiatrist => "Psychiatrist (MD)",
            LicenseType::Lpcc => "Licensed Professional Clinical Counselor",
            LicenseType::Cadc => "Certified Alcohol and Drug Counselor",
        }
    }

    /// Requirements text from the static catalog
    pub fn requirements(&self) -> &'static str {
        catalog::requirements_for(self.as_str())
    }

    /// Description text from the static catalog
    pub fn description(&self) -> &'static str {
        catalog::description_for(self.as_str())
    }
}

impl std::fmt::Display for LicenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database model for license type registration
#[derive(Debug, Clone, FromRow)]
pub struct License {
    pub id: Uuid,
    pub license_type: LicenseType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_type_codes() {
        assert_eq!(LicenseType::Lcsw.as_str(), "lcsw");
        assert_eq!(LicenseType::Psychiatrist.as_str(), "psychiatrist");
        assert_eq!(LicenseType::ALL.len(), 9);
    }

    #[test]
    fn test_license_type_serde_matches_wire_code() {
        for license_type in LicenseType::ALL {
            let json = serde_json::to_string(&license_type).unwrap();
            assert_eq!(json, format!("\"{}\"", license_type.as_str()));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            LicenseType::Lmft.display_name(),
            "Licensed Marriage and Family Therapist"
        );
        assert_eq!(LicenseType::Psychiatrist.display_name(), "Psychiatrist (MD)");
    }

    #[test]
    fn test_derived_texts_are_non_empty() {
        for license_type in LicenseType::ALL {
            assert!(!license_type.requirements().is_empty());
            assert!(!license_type.description().is_empty());
        }
    }
}
