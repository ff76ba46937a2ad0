use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

/// Issuing state enum matching database enum: 50 US states plus Puerto Rico,
/// stored as USPS codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "us_state", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UsState {
    Al,
    Ak,
    Az,
    Ar,
    Ca,
    Co,
    Ct,
    De,
    Fl,
    Ga,
    Hi,
    Id,
    Il,
    In,
    Ia,
    Ks,
    Ky,
    La,
    Me,
    Md,
    Ma,
    Mi,
    Mn,
    Ms,
    Mo,
    Mt,
    Ne,
    Nv,
    Nh,
    Nj,
    Nm,
    Ny,
    Nc,
    Nd,
    Oh,
    Ok,
    Or,
    Pa,
    Ri,
    Sc,
    Sd,
    Tn,
    Tx,
    Ut,
    Vt,
    Va,
    Wa,
    Wv,
    Wi,
    Wy,
    Pr,
}

impl UsState {
    /// USPS code as stored in the database
    pub fn code(&self) -> &'static str {
        match self {
            UsState::Al => "AL",
            UsState::Ak => "AK",
            UsState::Az => "AZ",
            UsState::Ar => "AR",
            UsState::Ca => "CA",
            UsState::Co => "CO",
            UsState::Ct => "CT",
            UsState::De => "DE",
            UsState::Fl => "FL",
            UsState::Ga => "GA",
            UsState::Hi => "HI",
            UsState::Id => "ID",
            UsState::Il => "IL",
            UsState::In => "IN",
            UsState::Ia => "IA",
            UsState::Ks => "KS",
            UsState::Ky => "KY",
            UsState::La => "LA",
            UsState::Me => "ME",
            UsState::Md => "MD",
            UsState::Ma => "MA",
            UsState::Mi => "MI",
            UsState::Mn => "MN",
            UsState::Ms => "MS",
            UsState::Mo => "MO",
            UsState::Mt => "MT",
            UsState::Ne => "NE",
            UsState::Nv => "NV",
            UsState::Nh => "NH",
            UsState::Nj => "NJ",
            UsState::Nm => "NM",
            UsState::Ny => "NY",
            UsState::Nc => "NC",
            UsState::Nd => "ND",
            UsState::Oh => "OH",
            UsState::Ok => "OK",
            UsState::Or => "OR",
            UsState::Pa => "PA",
            UsState::Ri => "RI",
            UsState::Sc => "SC",
            UsState::Sd => "SD",
            UsState::Tn => "TN",
            UsState::Tx => "TX",
            UsState::Ut => "UT",
            UsState::Vt => "VT",
            UsState::Va => "VA",
            UsState::Wa => "WA",
            UsState::Wv => "WV",
            UsState::Wi => "WI",
            UsState::Wy => "WY",
            UsState::Pr => "PR",
        }
    }

    /// Full state name
    pub fn name(&self) -> &'static str {
        match self {
            UsState::Al => "Alabama",
            UsState::Ak => "Alaska",
            UsState::Az => "Arizona",
            UsState::Ar => "Arkansas",
            UsState::Ca => "California",
            UsState::Co => "Colorado",
            UsState::Ct => "Connecticut",
            UsState::De => "Delaware",
            UsState::Fl => "Florida",
            UsState::Ga => "Georgia",
            UsState::Hi => "Hawaii",
            UsState::Id => "Idaho",
            UsState::Il => "Illinois",
            UsState::In => "Indiana",
            UsState::Ia => "Iowa",
            UsState::Ks => "Kansas",
            UsState::Ky => "Kentucky",
            UsState::La => "Louisiana",
            UsState::Me => "Maine",
            UsState::Md => "Maryland",
            UsState::Ma => "Massachusetts",
            UsState::Mi => "Michigan",
            UsState::Mn => "Minnesota",
            UsState::Ms => "Mississippi",
            UsState::Mo => "Missouri",
            UsState::Mt => "Montana",
            UsState::Ne => "Nebraska",
            UsState::Nv => "Nevada",
            UsState::Nh => "New Hampshire",
            UsState::Nj => "New Jersey",
            UsState::Nm => "New Mexico",
            UsState::Ny => "New York",
            UsState::Nc => "North Carolina",
            UsState::Nd => "North Dakota",
            UsState::Oh => "Ohio",
            UsState::Ok => "Oklahoma",
            UsState::Or => "Oregon",
            UsState::Pa => "Pennsylvania",
            UsState::Ri => "Rhode Island",
            UsState::Sc => "South Carolina",
            UsState::Sd => "South Dakota",
            UsState::Tn => "Tennessee",
            UsState::Tx => "Texas",
            UsState::Ut => "Utah",
            UsState::Vt => "Vermont",
            UsState::Va => "Virginia",
            UsState::Wa => "Washington",
            UsState::Wv => "West Virginia",
            UsState::Wi => "Wisconsin",
            UsState::Wy => "Wyoming",
            UsState::Pr => "Puerto Rico",
        }
    }
}

impl std::fmt::Display for UsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_codes_serialize_uppercase() {
        assert_eq!(serde_json::to_string(&UsState::Ca).unwrap(), "\"CA\"");
        assert_eq!(serde_json::to_string(&UsState::Pr).unwrap(), "\"PR\"");

        let back: UsState = serde_json::from_str("\"NY\"").unwrap();
        assert_eq!(back, UsState::Ny);
    }

    #[test]
    fn test_state_names() {
        assert_eq!(UsState::Ca.name(), "California");
        assert_eq!(UsState::Pr.name(), "Puerto Rico");
        assert_eq!(UsState::Wv.name(), "West Virginia");
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(serde_json::from_str::<UsState>("\"XX\"").is_err());
        assert!(serde_json::from_str::<UsState>("\"ca\"").is_err());
    }
}
