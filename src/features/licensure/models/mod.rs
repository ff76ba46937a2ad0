mod license;
mod professional_license;
mod us_state;

pub use license::{License, LicenseType};
pub use professional_license::{ProfessionalLicense, ProfessionalLicenseWithContext};
pub use us_state::UsState;
