//! Static descriptive texts for the known license types.
//!
//! Keyed by the wire code so both enum-typed rows and raw client input can be
//! resolved. An unrecognized code resolves to an empty string, never an error;
//! rendered pages treat the missing text as blank.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref REQUIREMENTS: HashMap<&'static str, &'static str> = HashMap::from([
        (
            "lcsw",
            "A licensed clinical social worker is a professional who has obtained a master's degree in social work and has completed the required clinical training and supervision.",
        ),
        (
            "lmsw",
            "A licensed master social worker is a professional who has obtained a master's degree in social work and has passed the required licensing exam.",
        ),
        (
            "lmft",
            "A licensed marriage and family therapist is a professional who has obtained a master's or doctoral degree in marriage and family therapy and has completed the required clinical training and supervision.",
        ),
        (
            "lpc",
            "A licensed professional counselor is a professional who has obtained a master's degree in counseling and has completed the required clinical training and supervision.",
        ),
        (
            "lmhc",
            "A licensed mental health counselor is a professional who has obtained a master's degree in counseling and has completed the required clinical training and supervision.",
        ),
        (
            "psychologist",
            "A licensed psychologist is a professional who has obtained a doctoral degree in psychology and has completed the required clinical training and supervision.",
        ),
        (
            "psychiatrist",
            "A psychiatrist is a medical doctor (MD) who specializes in the diagnosis and treatment of mental health disorders.",
        ),
        (
            "lpcc",
            "A licensed professional clinical counselor is a professional who has obtained a master's degree in counseling and has completed the required clinical training and supervision.",
        ),
        (
            "cadc",
            "A certified alcohol and drug counselor is a professional who has obtained certification in the treatment of substance use disorders.",
        ),
    ]);

    static ref DESCRIPTIONS: HashMap<&'static str, &'static str> = HashMap::from([
        (
            "lcsw",
            "A licensed mental health professional who is qualified to assess, diagnose, and treat mental health disorders.",
        ),
        (
            "lmsw",
            "A social worker with a master's degree who is licensed to practice social work but may have supervision requirements for clinical practice.",
        ),
        (
            "lmft",
            "A licensed mental health professional who specializes in marriage and family therapy.",
        ),
        (
            "lpc",
            "A licensed mental health professional who provides counseling and psychotherapy services.",
        ),
        (
            "lmhc",
            "A licensed mental health professional who provides counseling and psychotherapy services.",
        ),
        (
            "psychologist",
            "A licensed mental health professional with a doctoral degree in psychology who provides assessment and therapy services.",
        ),
        (
            "psychiatrist",
            "A medical doctor who specializes in the diagnosis and treatment of mental health disorders, including prescribing medication.",
        ),
        (
            "lpcc",
            "A licensed mental health professional who provides counseling and psychotherapy services.",
        ),
        (
            "cadc",
            "A certified professional who specializes in the treatment of substance use disorders.",
        ),
    ]);
}

/// Requirements text for a license-type code; empty string for unknown codes
pub fn requirements_for(code: &str) -> &'static str {
    REQUIREMENTS.get(code).copied().unwrap_or("")
}

/// Description text for a license-type code; empty string for unknown codes
pub fn description_for(code: &str) -> &'static str {
    DESCRIPTIONS.get(code).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::licensure::models::LicenseType;

    #[test]
    fn test_all_known_codes_have_texts() {
        for license_type in LicenseType::ALL {
            let code = license_type.as_str();
            assert!(!requirements_for(code).is_empty(), "no requirements for {}", code);
            assert!(!description_for(code).is_empty(), "no description for {}", code);
        }
    }

    #[test]
    fn test_exact_texts() {
        assert_eq!(
            requirements_for("lmsw"),
            "A licensed master social worker is a professional who has obtained a master's degree in social work and has passed the required licensing exam.",
        );
        assert_eq!(
            description_for("psychiatrist"),
            "A medical doctor who specializes in the diagnosis and treatment of mental health disorders, including prescribing medication.",
        );
    }

    #[test]
    fn test_unknown_code_is_empty_not_error() {
        assert_eq!(requirements_for("md"), "");
        assert_eq!(description_for("md"), "");
        assert_eq!(requirements_for(""), "");
        assert_eq!(description_for(""), "");
        assert_eq!(requirements_for("LCSW"), "");
    }
}
